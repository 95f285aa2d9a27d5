use shoal_core::Diagnostics;
use tracing::warn;

/// Forwards diagnostics to `tracing` as `WARN` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warning(&mut self, message: &str) {
        warn!("{message}");
    }

    fn label_unrecognized(&mut self, label: &str, source_file: &str) {
        warn!(source_file, label, "unrecognized input label");
    }
}

/// Keeps diagnostics in memory for later inspection or printing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedDiagnostics {
    /// Formatted warning messages, in the order reported.
    pub warnings: Vec<String>,
    /// Labels that matched no field, as written in the input.
    pub unrecognized_labels: Vec<String>,
}

impl RecordedDiagnostics {
    /// Returns `true` if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.unrecognized_labels.is_empty()
    }

    /// Returns the total number of reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.warnings.len() + self.unrecognized_labels.len()
    }
}

impl Diagnostics for RecordedDiagnostics {
    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_owned());
    }

    fn label_unrecognized(&mut self, label: &str, _source_file: &str) {
        self.unrecognized_labels.push(label.to_owned());
    }
}
