//! Diagnostic trace collected during one analysis

use serde::Serialize;

/// Ordered, append-only list of trace lines returned with the analysis result
///
/// Every line is also forwarded to `tracing` so it shows up in process logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DiagnosticLog {
    lines: Vec<String>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an informational line
    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!("{}", message);
        self.lines.push(message);
    }

    /// Append a recoverable problem, prefixed with `Warning:`
    pub fn warn(&mut self, message: impl AsRef<str>) {
        let message = format!("Warning: {}", message.as_ref());
        tracing::warn!("{}", message);
        self.lines.push(message);
    }

    /// Append the failure that ended an analysis, prefixed with `CRITICAL ERROR:`
    pub fn critical(&mut self, message: impl AsRef<str>) {
        let message = format!("CRITICAL ERROR: {}", message.as_ref());
        tracing::error!("{}", message);
        self.lines.push(message);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
