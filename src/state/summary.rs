use super::data::ConversionOutcome;

/// Totals for one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
    /// Wall-clock time for the whole batch
    pub elapsed_ms: i64,
}

impl BatchSummary {
    /// Count one finished file
    pub fn record(&mut self, outcome: &ConversionOutcome) {
        if outcome.is_failure() {
            self.failed += 1;
        } else if let ConversionOutcome::Success(_) = outcome {
            self.converted += 1;
        } else {
            self.skipped += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.converted + self.skipped + self.failed
    }

    /// Whether any file failed to convert (skips don't count)
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}
