//! Sniff engine and built-in style rules for lintok.
//!
//! A *sniff* is a detector for one style concern. It declares which token
//! kinds it wants to be invoked for and inspects the neighborhood of each
//! trigger token, reporting violations and, when a fix is possible,
//! rewriting token text through the transactional [`Fixer`]. The
//! [`SniffEngine`] dispatches tokens to registered sniffs and drives the
//! check and fix-until-convergence passes.
//!
//! # Built-in sniffs
//!
//! - [`InstantiateNewClasses`]: `new Widget()` with an empty argument list
//!   does not need the brackets (auto-fixable).
//! - [`FileComment`]: the file doc comment must carry the required `@tags`
//!   in the canonical order with well-formed content.
//! - [`ValidMethodName`]: method names are camelCase, never
//!   underscore-prefixed when visibility is written, and double underscores
//!   are reserved for magic methods.

#![warn(missing_docs)]

pub mod engine;
pub mod file;
pub mod fixer;
pub mod helpers;
pub mod rules;

pub use engine::{CheckReport, FixReport, SniffEngine};
pub use file::SniffFile;
pub use fixer::{Fixer, FixerError};
pub use rules::{register_builtin_sniffs, FileComment, InstantiateNewClasses, ValidMethodName};

use lintok_tokens::TokenKind;

/// What a sniff tells the engine after processing one trigger token.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ProcessOutcome {
    /// Keep invoking this sniff for later trigger tokens in the file.
    Continue,
    /// Do not invoke this sniff again for the remainder of this file.
    SkipRest,
}

/// A single style rule that inspects token neighborhoods and reports violations.
///
/// Each sniff has a dotted name (e.g. `Classes.InstantiateNewClasses`) used
/// as the `sniff` part of its violation codes and as the key configuration
/// refers to it by. The engine calls [`process`](Sniff::process) once for
/// every token whose kind appears in [`register`](Sniff::register).
pub trait Sniff: Send + Sync {
    /// Returns the dotted name of this sniff.
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of what this sniff checks.
    fn description(&self) -> &'static str;

    /// Returns the token kinds this sniff wants to be invoked for.
    fn register(&self) -> &'static [TokenKind];

    /// Processes one trigger token.
    fn process(&self, file: &mut SniffFile, index: usize) -> ProcessOutcome;
}
