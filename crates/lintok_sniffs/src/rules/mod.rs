//! All built-in sniff implementations.
//!
//! This module re-exports the individual sniffs and provides
//! `register_builtin_sniffs` to add all of them to a `SniffEngine`.

mod file_comment;
mod instantiate_new_classes;
mod valid_method_name;

pub use file_comment::FileComment;
pub use instantiate_new_classes::{scan_instantiation, InstantiateNewClasses, InstantiationScan};
pub use valid_method_name::ValidMethodName;

use crate::engine::SniffEngine;

/// Registers all built-in sniffs with the engine.
pub fn register_builtin_sniffs(engine: &mut SniffEngine) {
    engine.register(Box::new(InstantiateNewClasses));
    engine.register(Box::new(FileComment::new()));
    engine.register(Box::new(ValidMethodName));
}
