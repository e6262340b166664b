/// Per-file processing timers.
///
/// The pipeline itself carries no instrumentation; the scan loop records
/// how long each accepted submission took end to end, and the summary
/// reports the overall average plus the average over the most recent
/// files, which shows how matching cost grows with the corpus.
use std::time::Duration;

/// Window for the recent-files average.
pub const RECENT_WINDOW: usize = 100;

#[derive(Default)]
pub struct ScanTimers {
    durations: Vec<Duration>,
}

impl ScanTimers {
    pub fn record(&mut self, elapsed: Duration) {
        self.durations.push(elapsed);
    }

    pub fn files_timed(&self) -> usize {
        self.durations.len()
    }

    pub fn total(&self) -> Duration {
        self.durations.iter().sum()
    }

    /// Average processing time per file in microseconds; 0 if nothing
    /// was timed.
    pub fn average_micros(&self) -> u128 {
        if self.durations.is_empty() {
            return 0;
        }
        self.total().as_micros() / self.durations.len() as u128
    }

    /// Average over the last `RECENT_WINDOW` files.
    pub fn recent_average_micros(&self) -> u128 {
        let start = self.durations.len().saturating_sub(RECENT_WINDOW);
        let recent = &self.durations[start..];
        if recent.is_empty() {
            return 0;
        }
        recent.iter().sum::<Duration>().as_micros() / recent.len() as u128
    }
}

#[cfg(test)]
#[path = "stats_test.rs"]
mod tests;
