//! # Severity-Tiered Diagnostics
//!
//! Any stage of the analysis surfaces problems in the code under analysis
//! through [`Reporter::report`]. Each event carries a severity, an origin
//! it is attributed to, and a message; the reporter emits the rendered
//! message through an injected [`DiagnosticSink`] and returns a
//! [`ControlDecision`] telling the caller whether the run may continue.
//!
//! ## Escalation rule
//!
//! `Fatal` always halts. Under strict mode, `Error` and `Warning` halt as
//! well. `Info` never halts, strict or not.
//!
//! ## Design
//!
//! The reporter itself never terminates the process. Halting is the
//! driver's job: it observes `Halt` and exits non-zero after the message
//! has been emitted. Strictness is threaded in per call rather than read
//! from ambient state, which keeps the component stateless and reentrant.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::label::Label;

/// Severity of a reported diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Unrecoverable; halts the run regardless of strictness.
    Fatal,
    /// A problem in the analyzed source; halts only under strict mode.
    Error,
    /// A suspicious condition; halts only under strict mode.
    Warning,
    /// Informational; never halts.
    Info,
}

impl Severity {
    /// Canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether the caller may continue after a reported event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a Halt decision must stop the current run"]
pub enum ControlDecision {
    /// The event was logged; the run continues.
    Continue,
    /// The run must stop; the driver exits non-zero.
    Halt,
}

impl ControlDecision {
    /// True when the run must stop.
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt)
    }
}

/// What a diagnostic is attributed to.
///
/// Closed over exactly these three variants, so an unsupported origin is
/// unrepresentable rather than a runtime failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A build target, rendered via the label's canonical form.
    Label(Label),
    /// A free-form origin string.
    Text(String),
    /// A file under analysis, rendered as its path; renders empty when the
    /// path is unknown.
    File(Option<String>),
}

impl Origin {
    /// Render the origin for message prefixing. Empty means "no prefix".
    fn render(&self) -> String {
        match self {
            Self::Label(label) => label.to_string(),
            Self::Text(text) => text.clone(),
            Self::File(Some(path)) => path.clone(),
            Self::File(None) => String::new(),
        }
    }
}

impl From<Label> for Origin {
    fn from(label: Label) -> Self {
        Self::Label(label)
    }
}

impl From<&str> for Origin {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Origin {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Capability for the process-wide diagnostic output.
///
/// Implementations must tolerate concurrent callers; each `emit` call is
/// one atomic line. No cross-thread ordering is promised.
pub trait DiagnosticSink: Send + Sync {
    /// Emit one fully rendered diagnostic line.
    fn emit(&self, severity: Severity, line: &str);
}

/// Sink writing one `severity: line` line per event to standard error.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&self, severity: Severity, line: &str) {
        // Single locked write keeps concurrent lines from interleaving.
        let stderr = std::io::stderr();
        let mut handle = stderr.lock();
        let _ = writeln!(handle, "{severity}: {line}");
    }
}

/// Stateless reporter over an injected sink.
pub struct Reporter<'s> {
    sink: &'s dyn DiagnosticSink,
}

impl<'s> Reporter<'s> {
    /// Create a reporter emitting through `sink`.
    pub fn new(sink: &'s dyn DiagnosticSink) -> Self {
        Self { sink }
    }

    /// Report one event and decide whether the run continues.
    ///
    /// The message is prefixed with `"<origin>: "` when the origin renders
    /// non-empty, emitted exactly once, and then judged: `Fatal` halts
    /// unconditionally, `Error` and `Warning` halt when `strict` is set,
    /// `Info` always continues.
    pub fn report(
        &self,
        severity: Severity,
        origin: &Origin,
        strict: bool,
        message: &str,
    ) -> ControlDecision {
        let prefix = origin.render();
        if prefix.is_empty() {
            self.sink.emit(severity, message);
        } else {
            self.sink.emit(severity, &format!("{prefix}: {message}"));
        }

        if severity == Severity::Fatal || (severity != Severity::Info && strict) {
            ControlDecision::Halt
        } else {
            ControlDecision::Continue
        }
    }
}
