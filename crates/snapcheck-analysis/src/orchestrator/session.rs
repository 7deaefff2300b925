use snapcheck_core::{AnalysisResult, FlaggedPoint};

/// Mutable state of one analysis run.
///
/// Owned by the caller and reset at the start of every run, so reusing a
/// session never leaks points from an earlier run.
#[derive(Debug, Clone, Default)]
pub struct AnalysisSession {
    flagged: Vec<FlaggedPoint>,
    progress: u8,
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.flagged.clear();
        self.progress = 0;
    }

    pub fn push(&mut self, point: FlaggedPoint) {
        self.flagged.push(point);
    }

    /// Points collected so far, in run order.
    pub fn flagged(&self) -> &[FlaggedPoint] {
        &self.flagged
    }

    /// Last reported percent.
    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn set_progress(&mut self, percent: u8) {
        self.progress = percent;
    }

    /// Snapshot of the collected points.
    pub fn result(&self) -> AnalysisResult {
        AnalysisResult::new(self.flagged.clone())
    }
}
