//! Source file management and span tracking for the lintok style checker.
//!
//! This crate provides the [`SourceDb`] for loading and managing the files of
//! a checking session, [`FileId`] and [`Span`] types for tracking byte-exact
//! source locations, and [`ResolvedSpan`] for converting byte offsets into
//! human-readable line/column coordinates when violations are rendered.

#![warn(missing_docs)]

pub mod file_id;
pub mod resolved_span;
pub mod source_db;
pub mod source_file;
pub mod span;

pub use file_id::FileId;
pub use resolved_span::ResolvedSpan;
pub use source_db::SourceDb;
pub use source_file::SourceFile;
pub use span::Span;
