//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: a default directive must
//! parse with the same grammar the meta-factory reads.

use serde::Deserialize;

use super::ConfigError;
use crate::source::Directive;

/// User configuration.
///
/// # Example
///
/// ```toml
/// directive = "Random 20"
/// seed = 42
/// interactive = false
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FigureConfig {
    /// Directive used when none is given on the command line
    pub directive: Option<String>,

    /// Seed for random sources
    pub seed: Option<u64>,

    /// Prompt for a directive on stdin when none is configured
    pub interactive: Option<bool>,
}

impl FigureConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(directive) = &self.directive {
            Directive::parse(directive).map_err(|e| {
                ConfigError::InvalidValue(format!("directive '{}': {}", directive, e))
            })?;
        }
        Ok(())
    }
}
