/// Integer percent over a fixed number of work units.
///
/// Values never decrease and the last unit reports exactly 100.
#[derive(Debug, Clone)]
pub(crate) struct ProgressTracker {
    total: usize,
    done: usize,
    last: Option<u8>,
}

impl ProgressTracker {
    pub(crate) fn new(total: usize) -> Self {
        Self {
            total,
            done: 0,
            last: None,
        }
    }

    /// Marks one unit done and returns the current percent.
    pub(crate) fn advance(&mut self) -> u8 {
        self.done = (self.done + 1).min(self.total);
        let percent = self.percent();
        self.last = Some(percent);
        percent
    }

    /// Returns 100 unless it was already reported.
    pub(crate) fn finish(&mut self) -> Option<u8> {
        if self.last == Some(100) {
            return None;
        }
        self.done = self.total;
        self.last = Some(100);
        Some(100)
    }

    fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.done * 100) / self.total).min(100) as u8
    }
}
