//! Parsing and validation of `lintok.toml` configuration files.
//!
//! This crate reads the checker configuration and produces a strongly-typed
//! [`CheckerConfig`] controlling which sniffs are suppressed or promoted and
//! how many passes the fixer may take before giving up on convergence.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::{CheckerConfig, FixerConfig, SniffConfig, DEFAULT_MAX_FIX_PASSES};
