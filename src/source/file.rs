//! source::file
//!
//! Figure source over a named file.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use super::{FigureFactory, SourceError, StreamFigureFactory};
use crate::core::figure::Figure;
use crate::core::registry::Registered;

/// Reads figures from a file, one per line.
///
/// The file is opened once, at construction, and closed when the factory
/// is dropped.
#[derive(Debug)]
pub struct FileFigureFactory {
    path: PathBuf,
    stream: StreamFigureFactory,
}

impl FileFigureFactory {
    /// Open `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::SourceUnavailable` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|source| SourceError::SourceUnavailable {
            path: path.clone(),
            source,
        })?;

        Ok(Self {
            path,
            stream: StreamFigureFactory::new(BufReader::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_read(&self) -> usize {
        self.stream.lines_read()
    }

    pub fn create(&mut self) -> Result<Option<Figure>, SourceError> {
        self.stream.create()
    }
}

impl Registered for FileFigureFactory {
    const TYPE_NAME: &'static str = "FileFigureFactory";
    const PARENTS: &'static [&'static str] = &[FigureFactory::TYPE_NAME];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ErrorKind;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn reads_figures_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Triangle 3 4 5\nCircle 1 \n Rectangle 2 3").unwrap();

        let mut factory = FileFigureFactory::open(file.path()).unwrap();
        assert_eq!(factory.create().unwrap().unwrap().to_string(), "Triangle 3 4 5");
        assert_eq!(factory.create().unwrap().unwrap().to_string(), "Circle 1");
        assert_eq!(factory.create().unwrap().unwrap().to_string(), "Rectangle 2 3");
        assert!(factory.create().unwrap().is_none());
        assert_eq!(factory.lines_read(), 3);
        assert_eq!(factory.path(), file.path());
    }

    #[test]
    fn empty_file_is_exhausted() {
        let file = NamedTempFile::new().unwrap();
        let mut factory = FileFigureFactory::open(file.path()).unwrap();
        assert!(factory.create().unwrap().is_none());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileFigureFactory::open(dir.path().join("missing.txt")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnavailable);
        assert!(err.to_string().contains("missing.txt"));
    }
}
