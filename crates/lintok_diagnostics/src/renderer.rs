//! Rendering backends for human-readable violation output.

use crate::violation::Violation;
use lintok_source::SourceDb;

/// Trait for rendering violations into formatted output strings.
pub trait ViolationRenderer {
    /// Renders a single violation into a formatted string.
    fn render(&self, violation: &Violation, source_db: &SourceDb) -> String;
}

/// Renders violations in a rustc-style terminal format.
///
/// Produces output like:
/// ```text
/// error[Classes.InstantiateNewClasses.NewClass]: Instantiating new class without parameters does not require brackets.
///   --> src/Widget.php:12:8
///    |
/// 12 | $w = new Widget();
///    |      ^^^
/// ```
pub struct TerminalRenderer;

impl ViolationRenderer for TerminalRenderer {
    fn render(&self, violation: &Violation, source_db: &SourceDb) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "{}[{}]: {}\n",
            violation.severity,
            violation.code,
            violation.rendered_message()
        ));

        if !violation.span.is_dummy() {
            let resolved = source_db.resolve_span(violation.span);
            out.push_str(&format!("  --> {resolved}\n"));

            let file = source_db.get_file(violation.span.file);
            let line_content = file.line_text(resolved.line);
            let line_num = format!("{}", resolved.line);
            let padding = " ".repeat(line_num.len());

            let carets = "^".repeat(violation.span.len().max(1) as usize);
            let col_padding = " ".repeat((resolved.col as usize).saturating_sub(1));

            out.push_str(&format!("{padding} |\n"));
            out.push_str(&format!("{line_num} | {line_content}\n"));
            out.push_str(&format!("{padding} | {col_padding}{carets}\n"));
        }

        out
    }
}
