//! source::parse
//!
//! Shared line grammar for figure sources.
//!
//! # Grammar
//!
//! ```text
//! Triangle <a> <b> <c>
//! Circle <r>
//! Rectangle <w> <h>
//! ```
//!
//! Tokens are separated by whitespace. Numbers use Rust's `f64` syntax,
//! which covers decimal and exponential forms. A blank line carries no
//! figure and is not an error.
//!
//! # Error Classification
//!
//! Grammar violations (unknown kind, wrong token count, unparseable number)
//! are [`SourceError::MalformedInput`]. A line that parses but describes an
//! invalid figure surfaces the constructor's [`FigureError`] unchanged, so
//! `"Triangle 1 2"` is malformed while `"Triangle 1 2 3"` is an invalid
//! argument.
//!
//! [`FigureError`]: crate::core::figure::FigureError

use super::SourceError;
use crate::core::figure::{Circle, Figure, FigureKind, Rectangle, Triangle};

/// Split a line into whitespace-separated tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse one figure line.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Example
///
/// ```
/// use figurework::source::{figure_from_str, ErrorKind};
///
/// let figure = figure_from_str("Rectangle 2 3.5").unwrap().unwrap();
/// assert_eq!(figure.to_string(), "Rectangle 2 3.5");
///
/// assert!(figure_from_str("   ").unwrap().is_none());
/// assert_eq!(
///     figure_from_str("Triangle 1 2").unwrap_err().kind(),
///     ErrorKind::MalformedInput
/// );
/// ```
pub fn figure_from_str(line: &str) -> Result<Option<Figure>, SourceError> {
    let tokens = tokenize(line);
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let kind = FigureKind::parse(name).ok_or_else(|| {
        SourceError::MalformedInput(format!(
            "unknown figure kind '{}', expected one of: {}",
            name,
            kind_names()
        ))
    })?;

    if args.len() != kind.arity() {
        return Err(SourceError::MalformedInput(format!(
            "{} takes {} parameter(s), got {}",
            kind,
            kind.arity(),
            args.len()
        )));
    }

    let params = args
        .iter()
        .map(|token| parse_number(token))
        .collect::<Result<Vec<_>, _>>()?;

    let figure: Figure = match (kind, params.as_slice()) {
        (FigureKind::Triangle, &[a, b, c]) => Triangle::new(a, b, c)?.into(),
        (FigureKind::Circle, &[r]) => Circle::new(r)?.into(),
        (FigureKind::Rectangle, &[w, h]) => Rectangle::new(w, h)?.into(),
        _ => unreachable!("arity checked above"),
    };

    Ok(Some(figure))
}

fn parse_number(token: &str) -> Result<f64, SourceError> {
    token
        .parse::<f64>()
        .map_err(|_| SourceError::MalformedInput(format!("'{}' is not a number", token)))
}

fn kind_names() -> String {
    FigureKind::all()
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}
