//! The file-level scan session a sniff reports into.

use crate::fixer::Fixer;
use lintok_diagnostics::{Severity, Violation, ViolationCode, ViolationSink};
use lintok_source::Span;
use lintok_tokens::TokenStream;
use std::collections::BTreeMap;
use std::collections::HashSet;

/// The scan session for one source file.
///
/// Owns the token stream, the violation sink, and (when fix mode is enabled)
/// the transactional fixer. Sniffs receive a `&mut SniffFile` and report
/// through it; reporting methods take `&self` (the sink is internally
/// synchronized) so a sniff can keep reading the stream while it reports.
pub struct SniffFile {
    stream: TokenStream,
    sink: ViolationSink,
    fixer: Option<Fixer>,
    denied: HashSet<String>,
}

impl SniffFile {
    /// Creates a scan session over the given token stream.
    pub fn new(stream: TokenStream) -> Self {
        Self {
            stream,
            sink: ViolationSink::new(),
            fixer: None,
            denied: HashSet::new(),
        }
    }

    /// Sets the sniff names whose warnings are promoted to errors.
    ///
    /// Promotion happens when the violation is created, so violations are
    /// never mutated afterwards.
    pub fn with_denied(mut self, denied: HashSet<String>) -> Self {
        self.denied = denied;
        self
    }

    /// Enables fix mode, creating a fixer over the current token stream.
    pub fn enable_fixing(&mut self) {
        self.fixer = Some(Fixer::new(&self.stream));
    }

    /// Returns the token stream being scanned.
    pub fn stream(&self) -> &TokenStream {
        &self.stream
    }

    /// Returns the fixer when fix mode is enabled.
    pub fn fixer(&mut self) -> Option<&mut Fixer> {
        self.fixer.as_mut()
    }

    /// Reports an error-severity violation at the given token.
    pub fn add_error(
        &self,
        message: impl Into<String>,
        index: usize,
        code: ViolationCode,
        args: Vec<String>,
    ) {
        let (index, span, line) = self.locate(index);
        self.sink
            .emit(Violation::error(code, message, index, span, line).with_args(args));
    }

    /// Reports a warning-severity violation at the given token.
    ///
    /// Denied sniffs have their warnings created as errors instead.
    pub fn add_warning(
        &self,
        message: impl Into<String>,
        index: usize,
        code: ViolationCode,
        args: Vec<String>,
    ) {
        let (index, span, line) = self.locate(index);
        let violation = if self.denied.contains(code.sniff) {
            Violation::error(code, message, index, span, line)
        } else {
            Violation::warning(code, message, index, span, line)
        };
        self.sink.emit(violation.with_args(args));
    }

    /// Reports a fixable error-severity violation at the given token.
    ///
    /// Returns `true` when fix mode is active, telling the sniff to go ahead
    /// and apply its fix through [`fixer`](Self::fixer).
    pub fn add_fixable_error(
        &self,
        message: impl Into<String>,
        index: usize,
        code: ViolationCode,
        args: Vec<String>,
    ) -> bool {
        let (index, span, line) = self.locate(index);
        self.sink.emit(
            Violation::error(code, message, index, span, line)
                .with_args(args)
                .as_fixable(),
        );
        self.fixer.is_some()
    }

    /// Records one observation of a named metric.
    ///
    /// The position is accepted for parity with the reporting methods; metric
    /// aggregation is by name and value only.
    pub fn record_metric(&self, _index: usize, name: impl Into<String>, value: impl Into<String>) {
        self.sink.record_metric(name, value);
    }

    /// Returns `true` if any error-severity violations have been reported.
    pub fn has_errors(&self) -> bool {
        self.sink.has_errors()
    }

    /// Takes all accumulated violations, leaving the session's sink empty.
    pub fn take_violations(&self) -> Vec<Violation> {
        self.sink.take_all()
    }

    /// Returns a snapshot of all accumulated violations.
    pub fn violations(&self) -> Vec<Violation> {
        self.sink.violations()
    }

    /// Returns a snapshot of all recorded metrics.
    pub fn metrics(&self) -> BTreeMap<String, BTreeMap<String, usize>> {
        self.sink.metrics()
    }

    /// Returns the number of fix changesets committed in this session.
    pub fn fix_count(&self) -> usize {
        self.fixer.as_ref().map_or(0, Fixer::fix_count)
    }

    /// Returns the corrected source text when fix mode is enabled.
    pub fn fixed_contents(&self) -> Option<String> {
        self.fixer.as_ref().map(Fixer::contents)
    }

    /// Resolves a token index to (clamped index, span, line).
    ///
    /// An index past the end of the stream is clamped to the last token, the
    /// same way a reporter anchors "missing" findings at end of input.
    fn locate(&self, index: usize) -> (usize, Span, u32) {
        if let Some(tok) = self.stream.get(index) {
            return (index, tok.span, tok.line);
        }
        match self.stream.len().checked_sub(1) {
            Some(last) => {
                let tok = &self.stream.tokens()[last];
                (last, tok.span, tok.line)
            }
            None => (0, Span::DUMMY, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintok_source::FileId;
    use lintok_tokens::lex;

    fn code() -> ViolationCode {
        ViolationCode::new("Commenting.FileComment", "Missing")
    }

    fn session(source: &str) -> SniffFile {
        SniffFile::new(lex(source, FileId::from_raw(0)))
    }

    #[test]
    fn error_carries_token_position() {
        let file = session("<?php\nnew Widget;");
        let new_idx = file
            .stream()
            .find_next(&[lintok_tokens::TokenKind::New], 0, None)
            .unwrap();
        file.add_error("msg", new_idx, code(), Vec::new());
        let violations = file.take_violations();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].token_index, new_idx);
        assert_eq!(violations[0].line, 2);
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn out_of_bounds_position_clamps_to_last_token() {
        let file = session("<?php ;");
        file.add_error("msg", 999, code(), Vec::new());
        let violations = file.take_violations();
        assert_eq!(violations[0].token_index, file.stream().len() - 1);
    }

    #[test]
    fn warning_stays_warning_by_default() {
        let file = session("<?php ;");
        file.add_warning("msg", 0, code(), Vec::new());
        assert_eq!(file.take_violations()[0].severity, Severity::Warning);
    }

    #[test]
    fn denied_sniff_warning_promoted_to_error() {
        let denied: HashSet<String> = ["Commenting.FileComment".to_string()].into();
        let file = session("<?php ;").with_denied(denied);
        file.add_warning("msg", 0, code(), Vec::new());
        let violations = file.take_violations();
        assert_eq!(violations[0].severity, Severity::Error);
    }

    #[test]
    fn fixable_error_reports_fix_mode() {
        let mut file = session("<?php ;");
        assert!(!file.add_fixable_error("msg", 0, code(), Vec::new()));
        file.enable_fixing();
        assert!(file.add_fixable_error("msg", 0, code(), Vec::new()));
        let violations = file.take_violations();
        assert!(violations.iter().all(|v| v.fixable));
    }

    #[test]
    fn metrics_pass_through() {
        let file = session("<?php ;");
        file.record_metric(0, "File has doc comment", "no");
        assert_eq!(file.metrics()["File has doc comment"]["no"], 1);
    }

    #[test]
    fn fixed_contents_requires_fix_mode() {
        let mut file = session("<?php ;");
        assert!(file.fixed_contents().is_none());
        file.enable_fixing();
        assert_eq!(file.fixed_contents().unwrap(), "<?php ;");
        assert_eq!(file.fix_count(), 0);
    }
}
