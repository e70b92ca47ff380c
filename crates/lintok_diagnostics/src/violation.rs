//! The violation record produced by sniffs.

use crate::code::ViolationCode;
use crate::severity::Severity;
use lintok_source::Span;
use serde::Serialize;

/// A single style violation found during a scan.
///
/// Violations are created by a sniff, owned by the file-level result set,
/// and never mutated after creation. The `message` is a template whose `%s`
/// placeholders are filled from `args` in order by
/// [`rendered_message`](Self::rendered_message); keeping the pieces separate
/// lets machine consumers group findings by template.
#[derive(Clone, Debug, Serialize)]
pub struct Violation {
    /// The severity of this violation.
    pub severity: Severity,
    /// The machine-readable code identifying the check that fired.
    pub code: ViolationCode,
    /// The message template, with `%s` placeholders.
    pub message: String,
    /// Ordered arguments substituted into the template.
    pub args: Vec<String>,
    /// The index of the token this violation was reported against.
    pub token_index: usize,
    /// The byte span of that token.
    pub span: Span,
    /// The 1-indexed line of that token.
    pub line: u32,
    /// Whether an auto-fix is available for this violation.
    pub fixable: bool,
}

impl Violation {
    /// Creates a new error-severity violation.
    pub fn error(
        code: ViolationCode,
        message: impl Into<String>,
        token_index: usize,
        span: Span,
        line: u32,
    ) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            args: Vec::new(),
            token_index,
            span,
            line,
            fixable: false,
        }
    }

    /// Creates a new warning-severity violation.
    pub fn warning(
        code: ViolationCode,
        message: impl Into<String>,
        token_index: usize,
        span: Span,
        line: u32,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            args: Vec::new(),
            token_index,
            span,
            line,
            fixable: false,
        }
    }

    /// Attaches template arguments to this violation.
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Marks this violation as auto-fixable.
    pub fn as_fixable(mut self) -> Self {
        self.fixable = true;
        self
    }

    /// Renders the message template with its arguments substituted in order.
    ///
    /// Placeholders beyond the supplied arguments are left as `%s`; surplus
    /// arguments are ignored.
    pub fn rendered_message(&self) -> String {
        let mut out = String::with_capacity(self.message.len());
        let mut args = self.args.iter();
        let mut rest = self.message.as_str();
        while let Some(pos) = rest.find("%s") {
            out.push_str(&rest[..pos]);
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str("%s"),
            }
            rest = &rest[pos + 2..];
        }
        out.push_str(rest);
        out
    }
}

/// Keeps the first violation for each (token position, code) pair.
///
/// The engine itself never deduplicates; this is a convenience for test
/// tooling and report post-processing that wants one finding per site.
pub fn dedupe_by_position_and_code(violations: Vec<Violation>) -> Vec<Violation> {
    let mut seen = std::collections::HashSet::new();
    violations
        .into_iter()
        .filter(|v| seen.insert((v.token_index, v.code)))
        .collect()
}
