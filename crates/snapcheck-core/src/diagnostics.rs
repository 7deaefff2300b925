//! User-facing diagnostics raised during a run.

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    Info,
    Warning,
    Error,
}

impl std::fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "Info"),
            Self::Warning => write!(f, "Warning"),
            Self::Error => write!(f, "Error"),
        }
    }
}

/// A message for the presentation layer.
///
/// `key` identifies the kind of problem (e.g. `invalid_geometry`) so callers
/// can group or filter without parsing `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub level: DiagnosticLevel,
    pub key: String,
    pub title: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        level: DiagnosticLevel,
        key: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            key: key.into(),
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn info(key: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Info, key, title, message)
    }

    pub fn warning(
        key: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(DiagnosticLevel::Warning, key, title, message)
    }

    pub fn error(key: impl Into<String>, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(DiagnosticLevel::Error, key, title, message)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.title, self.message)
    }
}
