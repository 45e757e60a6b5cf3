//! figurework - Validated geometric figures from heterogeneous sources
//!
//! Figures (triangles, circles, rectangles) are produced lazily from a
//! random generator, a text stream, a file, or standard input, all behind
//! one factory type. A meta-factory picks the source from a one-line
//! directive.
//!
//! # Architecture
//!
//! - [`core`] - Figure model, type registry, configuration
//! - [`source`] - Figure sources, line grammar, meta-factory
//! - [`cli`] - Command-line driver (parses args, delegates to sources)
//! - [`ui`] - Output and diagnostics
//!
//! # Error Classification
//!
//! Every layer keeps three failures apart:
//!
//! 1. Malformed text (wrong token count, bad number, unknown name)
//! 2. Invalid figure parameters (non-finite, non-positive, degenerate)
//! 3. Perimeter overflow
//!
//! See [`source::ErrorKind`] for the full taxonomy.

pub mod cli;
pub mod core;
pub mod source;
pub mod ui;
