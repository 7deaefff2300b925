//! Type aliases for callback types.
//!
//! Callers that do not want to implement an observer trait can hand the
//! analysis engine plain closures of these shapes.

use crate::diagnostics::Diagnostic;
use crate::result::AnalysisResult;

/// A progress callback receiving an integer percentage in `[0, 100]`.
pub type ProgressCallback = Box<dyn FnMut(u8)>;

/// A callback receiving each diagnostic as it is raised.
pub type DiagnosticCallback = Box<dyn FnMut(&Diagnostic)>;

/// A callback receiving the final result of a completed run.
pub type ResultCallback = Box<dyn FnMut(&AnalysisResult)>;
