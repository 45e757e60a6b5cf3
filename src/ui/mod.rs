//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`output`] - Output formatting and diagnostic logging
//!
//! # Design
//!
//! All user-visible output goes through this module so that quiet and
//! debug modes are honored consistently. The core library never prints.

pub mod output;
