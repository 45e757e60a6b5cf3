//! source::meta
//!
//! Directive-driven selection of a figure source.
//!
//! # Directive Grammar
//!
//! ```text
//! Random <count>    count = -1 means unbounded
//! STDIN <count>     count = -1 means unbounded
//! File <path>
//! ```
//!
//! Factory names are matched case-sensitively. The generic stream source
//! is not selectable on its own; it backs `File` and `STDIN`.
//!
//! # Example
//!
//! ```
//! use figurework::source::{ErrorKind, MetaFactory};
//! use std::io::Cursor;
//!
//! let mut meta = MetaFactory::new(Cursor::new("Random 3\nHexagon 1\n"));
//!
//! let factory = meta.create().unwrap();
//! assert_eq!(factory.type_name(), "RandomFigureFactory");
//!
//! assert_eq!(meta.create().unwrap_err().kind(), ErrorKind::MalformedInput);
//! assert_eq!(meta.create().unwrap_err().kind(), ErrorKind::RuntimeFailure);
//! ```

use std::fmt;
use std::io::BufRead;
use std::path::PathBuf;

use super::stream::read_line;
use super::{
    tokenize, FigureFactory, FileFigureFactory, RandomFigureFactory, SourceError,
    StandardInputFigureFactory,
};

/// Source kinds selectable by directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactoryType {
    Random,
    Stdin,
    File,
}

impl FactoryType {
    /// All selectable kinds, in listing order.
    pub fn all() -> &'static [FactoryType] {
        &[FactoryType::Random, FactoryType::Stdin, FactoryType::File]
    }

    /// Name used in directives.
    pub fn name(&self) -> &'static str {
        match self {
            FactoryType::Random => "Random",
            FactoryType::Stdin => "STDIN",
            FactoryType::File => "File",
        }
    }

    /// Number of arguments the directive takes after the name.
    pub fn arg_count(&self) -> usize {
        match self {
            FactoryType::Random | FactoryType::Stdin | FactoryType::File => 1,
        }
    }

    /// Usage line shown when prompting for a directive.
    pub fn description(&self) -> &'static str {
        match self {
            FactoryType::Random => "Random <count>  - random figures; count -1 for unbounded",
            FactoryType::Stdin => {
                "STDIN <count>   - figures from standard input; count -1 for unbounded"
            }
            FactoryType::File => "File <path>     - read figures from a file",
        }
    }

    /// Parse a factory name. Matching is case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        FactoryType::all().iter().copied().find(|t| t.name() == s)
    }

    pub fn descriptor(&self) -> FactoryDescriptor {
        FactoryDescriptor {
            name: self.name(),
            arg_count: self.arg_count(),
            description: self.description(),
        }
    }
}

impl fmt::Display for FactoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Prompting information for one selectable source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryDescriptor {
    pub name: &'static str,
    pub arg_count: usize,
    pub description: &'static str,
}

/// A parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Random { count: Option<usize> },
    Stdin { count: Option<usize> },
    File { path: PathBuf },
}

impl Directive {
    /// Parse one directive line.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::MalformedInput` for a blank line, an unknown
    /// factory name, a wrong argument count, or an invalid count.
    ///
    /// # Example
    ///
    /// ```
    /// use figurework::source::Directive;
    ///
    /// assert_eq!(
    ///     Directive::parse("Random -1").unwrap(),
    ///     Directive::Random { count: None }
    /// );
    /// assert!(Directive::parse("random 5").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, SourceError> {
        let tokens = tokenize(line);
        let Some((&name, args)) = tokens.split_first() else {
            return Err(SourceError::MalformedInput("empty directive".into()));
        };

        let factory_type = FactoryType::parse(name).ok_or_else(|| {
            SourceError::MalformedInput(format!(
                "unknown factory '{}', expected one of: {}",
                name,
                factory_names()
            ))
        })?;

        if args.len() != factory_type.arg_count() {
            return Err(SourceError::MalformedInput(format!(
                "{} takes {} argument(s), got {}",
                factory_type,
                factory_type.arg_count(),
                args.len()
            )));
        }

        Ok(match factory_type {
            FactoryType::Random => Directive::Random {
                count: parse_count(args[0])?,
            },
            FactoryType::Stdin => Directive::Stdin {
                count: parse_count(args[0])?,
            },
            FactoryType::File => Directive::File {
                path: PathBuf::from(args[0]),
            },
        })
    }

    pub fn factory_type(&self) -> FactoryType {
        match self {
            Directive::Random { .. } => FactoryType::Random,
            Directive::Stdin { .. } => FactoryType::Stdin,
            Directive::File { .. } => FactoryType::File,
        }
    }

    /// Build the source the directive names.
    ///
    /// `seed` is used only by random sources.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::SourceUnavailable` if a file cannot be opened.
    pub fn instantiate(self, seed: Option<u64>) -> Result<FigureFactory, SourceError> {
        let factory: FigureFactory = match self {
            Directive::Random { count } => match seed {
                Some(seed) => RandomFigureFactory::with_seed(count, seed),
                None => RandomFigureFactory::new(count),
            }
            .into(),
            Directive::Stdin { count } => StandardInputFigureFactory::new(count).into(),
            Directive::File { path } => FileFigureFactory::open(path)?.into(),
        };
        Ok(factory)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = |c: &Option<usize>| c.map_or_else(|| "-1".to_string(), |n| n.to_string());
        match self {
            Directive::Random { count: c } => write!(f, "Random {}", count(c)),
            Directive::Stdin { count: c } => write!(f, "STDIN {}", count(c)),
            Directive::File { path } => write!(f, "File {}", path.display()),
        }
    }
}

/// `-1` is unbounded; any other negative count is rejected.
fn parse_count(token: &str) -> Result<Option<usize>, SourceError> {
    let count: i64 = token
        .parse()
        .map_err(|_| SourceError::MalformedInput(format!("'{}' is not a count", token)))?;

    match count {
        -1 => Ok(None),
        n if n >= 0 => usize::try_from(n)
            .map(Some)
            .map_err(|_| SourceError::MalformedInput(format!("count {} is too large", n))),
        n => Err(SourceError::MalformedInput(format!(
            "count must be -1 or non-negative, got {}",
            n
        ))),
    }
}

fn factory_names() -> String {
    FactoryType::all()
        .iter()
        .map(|t| t.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads directives from an input and builds the sources they name.
///
/// Unlike a figure source, the meta-factory has no sentinel: running out of
/// directives is an error.
pub struct MetaFactory<R> {
    input: R,
    line: String,
    lines_read: usize,
    seed: Option<u64>,
}

impl<R: BufRead> MetaFactory<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            line: String::new(),
            lines_read: 0,
            seed: None,
        }
    }

    /// Seed every random source this meta-factory builds.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Descriptors for every selectable source, in fixed order.
    pub fn list_factory_types(&self) -> Vec<FactoryDescriptor> {
        FactoryType::all().iter().map(|t| t.descriptor()).collect()
    }

    /// Read one directive and build the source it names.
    ///
    /// # Errors
    ///
    /// - `SourceError::RuntimeFailure` if the input has no more lines
    /// - `SourceError::MalformedInput` if the directive does not parse or is
    ///   not valid UTF-8
    /// - `SourceError::SourceUnavailable` if a named file cannot be opened
    /// - `SourceError::Io` if the underlying read fails
    pub fn create(&mut self) -> Result<FigureFactory, SourceError> {
        match read_line(&mut self.input, &mut self.line, self.lines_read + 1) {
            Ok(0) => {
                return Err(SourceError::RuntimeFailure(
                    "no more factory directives".into(),
                ))
            }
            Ok(_) => self.lines_read += 1,
            Err(e) => {
                self.lines_read += 1;
                return Err(e);
            }
        }

        Directive::parse(&self.line)?.instantiate(self.seed)
    }
}
