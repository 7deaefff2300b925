//! Run observers
//!
//! An observer receives progress, diagnostics and the final result while a
//! run executes on the caller's thread.

use snapcheck_core::{
    AnalysisResult, Diagnostic, DiagnosticCallback, ProgressCallback, ResultCallback,
};

/// Receives notifications from an analysis run
///
/// Every method has an empty default so implementors override only what
/// they need.
pub trait AnalysisObserver {
    /// Called with the current percent, never decreasing within a run
    fn on_progress(&mut self, _percent: u8) {}

    /// Called for each warning, info notice or configuration error
    fn on_diagnostic(&mut self, _diagnostic: &Diagnostic) {}

    /// Called once when a run completes
    fn on_result(&mut self, _result: &AnalysisResult) {}
}

/// Ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}

/// Forwards notifications to boxed closures.
#[derive(Default)]
pub struct CallbackObserver {
    progress: Option<ProgressCallback>,
    diagnostics: Option<DiagnosticCallback>,
    result: Option<ResultCallback>,
}

impl CallbackObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progress(mut self, callback: impl FnMut(u8) + 'static) -> Self {
        self.progress = Some(Box::new(callback));
        self
    }

    pub fn with_diagnostics(mut self, callback: impl FnMut(&Diagnostic) + 'static) -> Self {
        self.diagnostics = Some(Box::new(callback));
        self
    }

    pub fn with_result(mut self, callback: impl FnMut(&AnalysisResult) + 'static) -> Self {
        self.result = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for CallbackObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackObserver")
            .field("progress", &self.progress.is_some())
            .field("diagnostics", &self.diagnostics.is_some())
            .field("result", &self.result.is_some())
            .finish()
    }
}

impl AnalysisObserver for CallbackObserver {
    fn on_progress(&mut self, percent: u8) {
        if let Some(cb) = self.progress.as_mut() {
            cb(percent);
        }
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        if let Some(cb) = self.diagnostics.as_mut() {
            cb(diagnostic);
        }
    }

    fn on_result(&mut self, result: &AnalysisResult) {
        if let Some(cb) = self.result.as_mut() {
            cb(result);
        }
    }
}

/// Keeps every notification, mostly for tests and batch callers.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub progress: Vec<u8>,
    pub diagnostics: Vec<Diagnostic>,
    pub results: Vec<AnalysisResult>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Diagnostics with the given key.
    pub fn diagnostics_with_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.key == key)
    }
}

impl AnalysisObserver for RecordingObserver {
    fn on_progress(&mut self, percent: u8) {
        self.progress.push(percent);
    }

    fn on_diagnostic(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }

    fn on_result(&mut self, result: &AnalysisResult) {
        self.results.push(result.clone());
    }
}
