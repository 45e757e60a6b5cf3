//! source
//!
//! Figure sources and the meta-factory that selects one.
//!
//! # Architecture
//!
//! Every source is a variant of the closed [`FigureFactory`] enum. Each
//! `create()` call returns `Ok(Some(figure))`, `Ok(None)` once the source is
//! exhausted, or an error that fails only that call. Sources never catch or
//! retry; the caller decides whether to keep polling after an error.
//!
//! # Modules
//!
//! - `parse`: Shared figure line grammar
//! - `random`: Random generator ([`RandomFigureFactory`])
//! - `stream`: Any buffered reader ([`StreamFigureFactory`])
//! - `file`: Named file ([`FileFigureFactory`])
//! - `stdin`: Standard input ([`StandardInputFigureFactory`])
//! - `meta`: Directive-driven factory selection ([`MetaFactory`])
//!
//! # Example
//!
//! ```
//! use figurework::source::{FigureFactory, StreamFigureFactory};
//! use std::io::Cursor;
//!
//! let mut factory = FigureFactory::from(StreamFigureFactory::new(Cursor::new(
//!     "Circle 1\nRectangle 2 3\n",
//! )));
//!
//! let figures: Vec<_> = factory.by_ref().collect::<Result<_, _>>().unwrap();
//! assert_eq!(figures.len(), 2);
//! assert!(factory.create().unwrap().is_none());
//! ```

mod error;
mod file;
mod meta;
mod parse;
mod random;
mod stdin;
mod stream;

pub use error::{ErrorKind, SourceError};
pub use file::FileFigureFactory;
pub use meta::{Directive, FactoryDescriptor, FactoryType, MetaFactory};
pub use parse::{figure_from_str, tokenize};
pub use random::{RandomFigureFactory, FIELD_RANGE};
pub use stdin::StandardInputFigureFactory;
pub use stream::StreamFigureFactory;

use crate::core::figure::Figure;
use crate::core::registry::Registered;

/// A figure source of any supported kind.
#[derive(Debug)]
pub enum FigureFactory {
    Random(RandomFigureFactory),
    Stream(StreamFigureFactory),
    File(FileFigureFactory),
    StandardInput(StandardInputFigureFactory),
}

impl FigureFactory {
    /// Produce the next figure, or `None` once the source is exhausted.
    pub fn create(&mut self) -> Result<Option<Figure>, SourceError> {
        match self {
            FigureFactory::Random(f) => f.create(),
            FigureFactory::Stream(f) => f.create(),
            FigureFactory::File(f) => f.create(),
            FigureFactory::StandardInput(f) => f.create(),
        }
    }

    /// Registered type name of the concrete source.
    pub fn type_name(&self) -> &'static str {
        match self {
            FigureFactory::Random(_) => RandomFigureFactory::TYPE_NAME,
            FigureFactory::Stream(_) => StreamFigureFactory::TYPE_NAME,
            FigureFactory::File(_) => FileFigureFactory::TYPE_NAME,
            FigureFactory::StandardInput(_) => StandardInputFigureFactory::TYPE_NAME,
        }
    }
}

/// Yields figures until the sentinel. Errors are yielded as items and do
/// not end the iteration.
impl Iterator for FigureFactory {
    type Item = Result<Figure, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.create().transpose()
    }
}

impl From<RandomFigureFactory> for FigureFactory {
    fn from(f: RandomFigureFactory) -> Self {
        FigureFactory::Random(f)
    }
}

impl From<StreamFigureFactory> for FigureFactory {
    fn from(f: StreamFigureFactory) -> Self {
        FigureFactory::Stream(f)
    }
}

impl From<FileFigureFactory> for FigureFactory {
    fn from(f: FileFigureFactory) -> Self {
        FigureFactory::File(f)
    }
}

impl From<StandardInputFigureFactory> for FigureFactory {
    fn from(f: StandardInputFigureFactory) -> Self {
        FigureFactory::StandardInput(f)
    }
}

impl Registered for FigureFactory {
    const TYPE_NAME: &'static str = "FigureFactory";
    const PARENTS: &'static [&'static str] = &[];
}
