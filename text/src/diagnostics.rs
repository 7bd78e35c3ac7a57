use crate::SourcePosition;

/// Diagnostic severity
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Severity {
    Warning,
    Error,
}

/// A single message produced while processing a shader
#[derive(PartialEq, Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub pos: Option<SourcePosition>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let severity = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        match self.pos {
            Some(pos) if pos.is_known() => write!(f, "{}: {}: {}", pos, severity, self.message),
            _ => write!(f, "{}: {}", severity, self.message),
        }
    }
}

/// Sink for the diagnostics a compilation stage emits
///
/// Recoverable problems are pushed here so a single run surfaces as many
/// messages as possible; fatal problems abort through the stage's error
/// type instead.
#[derive(Default, Debug)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter::default()
    }

    /// Record an error with an optional source position
    pub fn error(&mut self, message: impl Into<String>, pos: Option<SourcePosition>) {
        self.error_count += 1;
        self.diagnostics.push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
            pos,
        });
    }

    /// Record a warning with an optional source position
    pub fn warning(&mut self, message: impl Into<String>, pos: Option<SourcePosition>) {
        self.diagnostics.push(Diagnostic {
            severity: Severity::Warning,
            message: message.into(),
            pos,
        });
    }

    /// Check if any error-severity diagnostic was recorded
    pub fn has_errors(&self) -> bool {
        self.error_count != 0
    }

    /// All diagnostics in the order they were recorded
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
