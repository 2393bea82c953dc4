//! Diagnostics sink for names dropped during parsing.

use crate::name::InvalidName;

/// Receives one call per image name that failed to parse.
pub trait Diagnostics {
    fn skipped_name(&mut self, name: &str, reason: &InvalidName);
}

/// Forwards skipped names to `tracing` at `warn` level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn skipped_name(&mut self, name: &str, reason: &InvalidName) {
        tracing::warn!("Skipping invalid image name: {} ({})", name, reason);
    }
}

/// A skipped name together with the reason it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedName {
    pub name: String,
    pub reason: InvalidName,
}

/// Keeps every skipped name in memory, in input order.
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    pub skipped: Vec<SkippedName>,
}

impl Diagnostics for CollectingDiagnostics {
    fn skipped_name(&mut self, name: &str, reason: &InvalidName) {
        self.skipped.push(SkippedName {
            name: name.to_string(),
            reason: reason.clone(),
        });
    }
}

/// Counts skipped names and forwards them to an inner sink.
pub(crate) struct CountingDiagnostics<'a> {
    inner: &'a mut dyn Diagnostics,
    pub(crate) count: usize,
}

impl<'a> CountingDiagnostics<'a> {
    pub(crate) fn new(inner: &'a mut dyn Diagnostics) -> Self {
        Self { inner, count: 0 }
    }
}

impl Diagnostics for CountingDiagnostics<'_> {
    fn skipped_name(&mut self, name: &str, reason: &InvalidName) {
        self.count += 1;
        self.inner.skipped_name(name, reason);
    }
}
