//! core
//!
//! Core domain types and configuration for figurework.
//!
//! # Modules
//!
//! - [`figure`] - Validated figures: Triangle, Circle, Rectangle
//! - [`registry`] - Declared type hierarchy and its transitive queries
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - Invalid figures cannot be represented
//! - Figure and factory kinds are closed enums, matched exhaustively
//! - The type registry is built once, explicitly, then only read

pub mod config;
pub mod figure;
pub mod registry;
