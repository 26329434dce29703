/// Outcome of matching one file's text against the string tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// At least one known-bad string was found. Holds every bad hit.
    Problem { found: Vec<String> },
    /// No bad strings, at least one known-good string. Holds every good hit.
    Correct { found: Vec<String> },
    /// Neither table matched.
    Neither,
}

/// Counters accumulated over one scanner traversal.
///
/// The walk is flat, so a directory's totals are implicitly the sum of its
/// subdirectories'.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub problems: usize,
    pub correct: usize,
}

impl RunSummary {
    /// Count a file that was read and classified.
    pub fn record(&mut self, classification: &Classification) {
        self.total += 1;
        match classification {
            Classification::Problem { .. } => self.problems += 1,
            Classification::Correct { .. } => self.correct += 1,
            Classification::Neither => {}
        }
    }

    /// Count a file that was attempted but could not be read.
    pub fn record_unreadable(&mut self) {
        self.total += 1;
    }

    pub fn is_clean(&self) -> bool {
        self.problems == 0
    }
}
