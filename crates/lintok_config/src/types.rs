//! Configuration types deserialized from `lintok.toml`.

use serde::Deserialize;

/// The default number of passes the fixer may take before giving up.
pub const DEFAULT_MAX_FIX_PASSES: usize = 50;

/// The top-level checker configuration parsed from `lintok.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct CheckerConfig {
    /// Sniff selection: suppressed and promoted sniffs.
    #[serde(default)]
    pub sniffs: SniffConfig,
    /// Fixer settings.
    #[serde(default)]
    pub fixer: FixerConfig,
}

/// Controls which sniffs run and at what severity.
///
/// Sniffs are referred to by their dotted name, e.g.
/// `"Classes.InstantiateNewClasses"`. An allowed sniff is not run at all; a
/// denied sniff has its warnings promoted to errors.
#[derive(Debug, Default, Deserialize)]
pub struct SniffConfig {
    /// Sniffs to suppress entirely.
    #[serde(default)]
    pub allow: Vec<String>,
    /// Sniffs whose warnings are promoted to errors.
    #[serde(default)]
    pub deny: Vec<String>,
}

/// Fixer settings.
#[derive(Debug, Deserialize)]
pub struct FixerConfig {
    /// The maximum number of fix/re-tokenize passes per file.
    #[serde(default = "default_max_passes")]
    pub max_passes: usize,
}

impl Default for FixerConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_FIX_PASSES,
        }
    }
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_FIX_PASSES
}
