//! source::stdin
//!
//! Figure source over standard input.

use std::io::{self, BufRead};

use super::{SourceError, StreamFigureFactory};
use crate::core::figure::Figure;
use crate::core::registry::Registered;

/// Reads figures from standard input, optionally a fixed number of them.
///
/// Once `count` figures have been produced every further call returns the
/// sentinel without touching the input. Failed lines do not count.
///
/// Standard input is locked on the first read, not at construction, so a
/// directive reader holding the lock can be dropped before reading starts.
#[derive(Debug)]
pub struct StandardInputFigureFactory {
    stream: Option<StreamFigureFactory>,
    /// Figures left to produce; `None` means unbounded.
    remaining: Option<usize>,
}

impl StandardInputFigureFactory {
    /// Read from the process's standard input.
    pub fn new(count: Option<usize>) -> Self {
        Self {
            stream: None,
            remaining: count,
        }
    }

    /// Read from `reader` in place of standard input.
    pub fn from_reader(reader: impl BufRead + 'static, count: Option<usize>) -> Self {
        Self {
            stream: Some(StreamFigureFactory::new(reader)),
            remaining: count,
        }
    }

    /// Number of lines consumed so far.
    pub fn lines_read(&self) -> usize {
        self.stream.as_ref().map_or(0, StreamFigureFactory::lines_read)
    }

    /// Figures left before the sentinel; `None` when unbounded.
    pub fn remaining(&self) -> Option<usize> {
        self.remaining
    }

    pub fn create(&mut self) -> Result<Option<Figure>, SourceError> {
        if self.remaining == Some(0) {
            return Ok(None);
        }

        let stream = self
            .stream
            .get_or_insert_with(|| StreamFigureFactory::new(io::stdin().lock()));
        let figure = stream.create()?;
        if figure.is_some() {
            if let Some(remaining) = self.remaining.as_mut() {
                *remaining -= 1;
            }
        }
        Ok(figure)
    }
}

impl Registered for StandardInputFigureFactory {
    const TYPE_NAME: &'static str = "StandardInputFigureFactory";
    const PARENTS: &'static [&'static str] = &[StreamFigureFactory::TYPE_NAME];
}
