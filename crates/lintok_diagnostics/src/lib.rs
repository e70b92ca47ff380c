//! Violation reporting for the lintok style checker.
//!
//! This crate provides the [`Violation`] record sniffs produce, with its
//! [`ViolationCode`] and [`Severity`], the thread-safe [`ViolationSink`] that
//! accumulates violations and metrics during a scan, and a
//! [`ViolationRenderer`] for terminal output. The sink never deduplicates;
//! [`dedupe_by_position_and_code`] is provided for test tooling that wants
//! one finding per (position, code) pair.

#![warn(missing_docs)]

pub mod code;
pub mod renderer;
pub mod severity;
pub mod sink;
pub mod violation;

pub use code::ViolationCode;
pub use renderer::{TerminalRenderer, ViolationRenderer};
pub use severity::Severity;
pub use sink::ViolationSink;
pub use violation::{dedupe_by_position_and_code, Violation};
