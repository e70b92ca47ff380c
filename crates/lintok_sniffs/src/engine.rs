//! Sniff registration, dispatch, and the check/fix drivers.
//!
//! The `SniffEngine` owns the registered sniffs and the severity-override
//! configuration, dispatches each token of a file to the sniffs subscribed to
//! its kind, and drives the two entry points: a single analysis pass
//! ([`check`](SniffEngine::check)) and the fix-until-convergence loop
//! ([`fix`](SniffEngine::fix)).

use std::collections::{BTreeMap, HashSet};

use lintok_config::CheckerConfig;
use lintok_diagnostics::Violation;
use lintok_source::{FileId, SourceDb};
use lintok_tokens::lex;

use crate::file::SniffFile;
use crate::rules::register_builtin_sniffs;
use crate::{ProcessOutcome, Sniff};

/// The result of a single analysis pass over one file.
pub struct CheckReport {
    /// All violations found, in discovery order.
    pub violations: Vec<Violation>,
    /// Aggregated metric observations.
    pub metrics: BTreeMap<String, BTreeMap<String, usize>>,
}

/// The result of running the fixer to convergence on one file.
pub struct FixReport {
    /// The corrected source text after the final pass.
    pub contents: String,
    /// The number of passes taken, including the final clean pass.
    pub passes: usize,
    /// Whether a pass with zero fixes was reached within the pass limit.
    pub converged: bool,
}

/// The engine that dispatches tokens to registered sniffs.
///
/// Sniffs are registered at construction time. The engine honors the
/// configuration's `allow` list (suppress a sniff entirely) and `deny` list
/// (promote that sniff's warnings to errors).
pub struct SniffEngine {
    sniffs: Vec<Box<dyn Sniff>>,
    allowed: HashSet<String>,
    denied: HashSet<String>,
    max_fix_passes: usize,
}

impl SniffEngine {
    /// Creates an engine configured by the given `CheckerConfig`.
    ///
    /// All builtin sniffs are registered automatically.
    pub fn new(config: &CheckerConfig) -> Self {
        let allowed: HashSet<String> = config.sniffs.allow.iter().cloned().collect();
        let denied: HashSet<String> = config.sniffs.deny.iter().cloned().collect();

        let mut engine = Self {
            sniffs: Vec::new(),
            allowed,
            denied,
            max_fix_passes: config.fixer.max_passes,
        };

        register_builtin_sniffs(&mut engine);
        engine
    }

    /// Creates an engine with default configuration (no overrides).
    pub fn with_defaults() -> Self {
        Self::new(&CheckerConfig::default())
    }

    /// Registers a sniff with the engine.
    pub fn register(&mut self, sniff: Box<dyn Sniff>) {
        self.sniffs.push(sniff);
    }

    /// Returns the number of registered sniffs.
    pub fn sniff_count(&self) -> usize {
        self.sniffs.len()
    }

    /// Returns the names of all registered sniffs.
    pub fn sniff_names(&self) -> Vec<&'static str> {
        self.sniffs.iter().map(|s| s.name()).collect()
    }

    /// Runs every enabled sniff over the file's token stream.
    ///
    /// Each token is offered to the sniffs subscribed to its kind, in
    /// registration order. A sniff that returns
    /// [`ProcessOutcome::SkipRest`] is not invoked again for this file.
    pub fn process_file(&self, file: &mut SniffFile) {
        let mut done = vec![false; self.sniffs.len()];
        let token_count = file.stream().len();

        for index in 0..token_count {
            let Some(kind) = file.stream().kind(index) else {
                break;
            };
            for (slot, sniff) in self.sniffs.iter().enumerate() {
                if done[slot] || self.allowed.contains(sniff.name()) {
                    continue;
                }
                if !sniff.register().contains(&kind) {
                    continue;
                }
                if sniff.process(file, index) == ProcessOutcome::SkipRest {
                    done[slot] = true;
                }
            }
        }
    }

    /// Runs a single analysis pass over the given file.
    pub fn check(&self, source_db: &SourceDb, id: FileId) -> CheckReport {
        let stream = lex(&source_db.get_file(id).content, id);
        let mut file = SniffFile::new(stream).with_denied(self.denied.clone());
        self.process_file(&mut file);
        CheckReport {
            violations: file.take_violations(),
            metrics: file.metrics(),
        }
    }

    /// Runs fix passes until a pass applies zero fixes or the pass limit is
    /// reached.
    ///
    /// Each pass re-tokenizes the current text, so later passes see the
    /// corrected stream and confirm convergence.
    pub fn fix(&self, source_db: &SourceDb, id: FileId) -> FixReport {
        let mut contents = source_db.get_file(id).content.clone();

        for pass in 1..=self.max_fix_passes {
            let stream = lex(&contents, id);
            let mut file = SniffFile::new(stream).with_denied(self.denied.clone());
            file.enable_fixing();
            self.process_file(&mut file);

            if file.fix_count() == 0 {
                return FixReport {
                    contents,
                    passes: pass,
                    converged: true,
                };
            }
            if let Some(fixed) = file.fixed_contents() {
                contents = fixed;
            }
        }

        FixReport {
            contents,
            passes: self.max_fix_passes,
            converged: false,
        }
    }
}
