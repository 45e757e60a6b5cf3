//! source::stream
//!
//! Figure source over any buffered text reader.

use std::fmt;
use std::io::{self, BufRead};

use super::{figure_from_str, FigureFactory, SourceError};
use crate::core::figure::Figure;
use crate::core::registry::Registered;

/// Reads one figure per line from a text stream.
///
/// End of stream and blank lines both yield the sentinel. A line that fails
/// to parse fails only that call; the next call reads the following line.
pub struct StreamFigureFactory {
    reader: Box<dyn BufRead>,
    line: String,
    lines_read: usize,
}

impl StreamFigureFactory {
    pub fn new(reader: impl BufRead + 'static) -> Self {
        Self {
            reader: Box::new(reader),
            line: String::new(),
            lines_read: 0,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Read and parse the next line.
    ///
    /// # Errors
    ///
    /// - `SourceError::MalformedInput` if the line breaks the grammar or is
    ///   not valid UTF-8
    /// - `SourceError::Figure` if the line describes an invalid figure
    /// - `SourceError::Io` if the underlying read fails
    pub fn create(&mut self) -> Result<Option<Figure>, SourceError> {
        match read_line(&mut self.reader, &mut self.line, self.lines_read + 1) {
            Ok(0) => return Ok(None),
            Ok(_) => self.lines_read += 1,
            Err(e) => {
                // The offending bytes were consumed.
                self.lines_read += 1;
                return Err(e);
            }
        }

        figure_from_str(&self.line)
    }
}

/// Replace `buf` with the next line of `reader`.
///
/// Bytes that are not UTF-8 are consumed and reported as malformed input,
/// so the following call reads the next line. `line` is the 1-based number
/// used in that message.
pub(super) fn read_line<R: BufRead + ?Sized>(
    reader: &mut R,
    buf: &mut String,
    line: usize,
) -> Result<usize, SourceError> {
    buf.clear();
    reader.read_line(buf).map_err(|e| {
        if e.kind() == io::ErrorKind::InvalidData {
            SourceError::MalformedInput(format!("line {} is not valid UTF-8", line))
        } else {
            SourceError::Io(e)
        }
    })
}

impl fmt::Debug for StreamFigureFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamFigureFactory")
            .field("lines_read", &self.lines_read)
            .finish_non_exhaustive()
    }
}

impl Registered for StreamFigureFactory {
    const TYPE_NAME: &'static str = "StreamFigureFactory";
    const PARENTS: &'static [&'static str] = &[FigureFactory::TYPE_NAME];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ErrorKind;
    use std::io::Cursor;

    fn stream(text: &str) -> StreamFigureFactory {
        StreamFigureFactory::new(Cursor::new(text.to_string()))
    }

    #[test]
    fn reads_one_figure_per_line() {
        let mut factory = stream("Triangle 3.0 4.00 5e0\nCircle 1\nRectangle 2 3");

        let expected = ["Triangle 3 4 5", "Circle 1", "Rectangle 2 3"];
        for text in expected {
            let figure = factory.create().unwrap().unwrap();
            assert_eq!(figure.to_string(), text);
        }
        assert!(factory.create().unwrap().is_none());
        assert!(factory.create().unwrap().is_none());
        assert_eq!(factory.lines_read(), 3);
    }

    #[test]
    fn empty_stream_is_exhausted() {
        assert!(stream("").create().unwrap().is_none());
    }

    #[test]
    fn blank_line_is_sentinel() {
        let mut factory = stream("Circle 1\n\nCircle 2\n");
        assert!(factory.create().unwrap().is_some());
        assert!(factory.create().unwrap().is_none());
    }

    #[test]
    fn bad_line_fails_only_that_call() {
        let mut factory = stream("Triangle 1 2\nTriangle 1 2 3\nCircle 2\n");

        assert_eq!(factory.create().unwrap_err().kind(), ErrorKind::MalformedInput);
        assert_eq!(factory.create().unwrap_err().kind(), ErrorKind::InvalidArgument);
        assert_eq!(factory.create().unwrap().unwrap().to_string(), "Circle 2");
        assert!(factory.create().unwrap().is_none());
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut input = vec![0xff, 0xfe, b'\n'];
        input.extend_from_slice(b"Circle 1\n");
        let mut factory = StreamFigureFactory::new(Cursor::new(input));

        let err = factory.create().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedInput);
        assert!(err.to_string().contains("line 1"));
        assert_eq!(factory.create().unwrap().unwrap().to_string(), "Circle 1");
        assert_eq!(factory.lines_read(), 2);
    }
}
