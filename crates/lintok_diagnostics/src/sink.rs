//! Thread-safe violation accumulator shared with host schedulers.

use crate::severity::Severity;
use crate::violation::Violation;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// A thread-safe accumulator for violations and metrics emitted during a scan.
///
/// A single file is scanned by one sniff at a time, but a host may share one
/// sink across per-file workers, so emission is safe from multiple threads.
/// The error count is tracked atomically for fast `has_errors` checks without
/// locking the violation vector.
pub struct ViolationSink {
    violations: Mutex<Vec<Violation>>,
    metrics: Mutex<BTreeMap<String, BTreeMap<String, usize>>>,
    error_count: AtomicUsize,
}

impl ViolationSink {
    /// Creates a new empty sink.
    pub fn new() -> Self {
        Self {
            violations: Mutex::new(Vec::new()),
            metrics: Mutex::new(BTreeMap::new()),
            error_count: AtomicUsize::new(0),
        }
    }

    /// Emits a violation into the sink.
    ///
    /// If the violation has [`Severity::Error`], the error count is
    /// incremented atomically. The sink never deduplicates.
    pub fn emit(&self, violation: Violation) {
        if violation.severity == Severity::Error {
            self.error_count.fetch_add(1, Ordering::Relaxed);
        }
        let mut violations = self.violations.lock().unwrap();
        violations.push(violation);
    }

    /// Records one observation of a named metric.
    ///
    /// Metrics aggregate counts per observed value, e.g.
    /// `"File has doc comment" -> {"yes": 12, "no": 3}`.
    pub fn record_metric(&self, name: impl Into<String>, value: impl Into<String>) {
        let mut metrics = self.metrics.lock().unwrap();
        *metrics
            .entry(name.into())
            .or_default()
            .entry(value.into())
            .or_insert(0) += 1;
    }

    /// Returns `true` if any error-severity violations have been emitted.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error-severity violations emitted so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Takes all accumulated violations, leaving the sink empty.
    pub fn take_all(&self) -> Vec<Violation> {
        let mut violations = self.violations.lock().unwrap();
        std::mem::take(&mut *violations)
    }

    /// Returns a snapshot of all accumulated violations without draining.
    pub fn violations(&self) -> Vec<Violation> {
        self.violations.lock().unwrap().clone()
    }

    /// Returns a snapshot of all recorded metrics.
    pub fn metrics(&self) -> BTreeMap<String, BTreeMap<String, usize>> {
        self.metrics.lock().unwrap().clone()
    }
}

impl Default for ViolationSink {
    fn default() -> Self {
        Self::new()
    }
}
