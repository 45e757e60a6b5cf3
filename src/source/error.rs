//! source::error
//!
//! Error taxonomy shared by every figure source.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::figure::FigureError;

/// Coarse classification of a [`SourceError`].
///
/// Callers that only need to know which layer rejected the input match on
/// this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Figure parameters are semantically invalid.
    InvalidArgument,
    /// Figure parameters are valid but the perimeter is unrepresentable.
    Overflow,
    /// Text does not match the expected grammar.
    MalformedInput,
    /// A named resource could not be opened.
    SourceUnavailable,
    /// Input exhausted where a result was required, or a read failed.
    RuntimeFailure,
}

/// Errors from figure sources and the meta-factory.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The line parsed but the figure constructor rejected it.
    #[error(transparent)]
    Figure(#[from] FigureError),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("cannot open '{path}': {source}")]
    SourceUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0}")]
    RuntimeFailure(String),

    #[error("read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl SourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SourceError::Figure(FigureError::InvalidArgument(_)) => ErrorKind::InvalidArgument,
            SourceError::Figure(FigureError::Overflow(_)) => ErrorKind::Overflow,
            SourceError::MalformedInput(_) => ErrorKind::MalformedInput,
            SourceError::SourceUnavailable { .. } => ErrorKind::SourceUnavailable,
            SourceError::RuntimeFailure(_) | SourceError::Io(_) => ErrorKind::RuntimeFailure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figure_errors_keep_their_kind() {
        let err = SourceError::from(FigureError::Overflow("too big".into()));
        assert_eq!(err.kind(), ErrorKind::Overflow);

        let err = SourceError::from(FigureError::InvalidArgument("negative".into()));
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn io_errors_are_runtime_failures() {
        let err = SourceError::from(std::io::Error::other("broken pipe"));
        assert_eq!(err.kind(), ErrorKind::RuntimeFailure);
    }

    #[test]
    fn figure_error_message_is_transparent() {
        let err = SourceError::from(FigureError::InvalidArgument("radius".into()));
        assert_eq!(err.to_string(), "invalid argument: radius");
    }
}
