//! Reading-time estimation.

/// Assumed reading speed, in words per minute.
const WORDS_PER_MINUTE: f64 = 200.0;

/// Estimated time to read a post body.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ReadingTime {
    /// Estimated minutes, unrounded
    pub minutes: f64,
    /// Number of words counted
    pub words: usize,
}

impl ReadingTime {
    /// Estimate reading time from raw body text.
    ///
    /// Words are split on Unicode whitespace at an assumed 200 words per
    /// minute. An empty or whitespace-only body yields zero minutes.
    pub fn estimate(body: &str) -> Self {
        let words = body.split_whitespace().count();
        let minutes = words as f64 / WORDS_PER_MINUTE;

        Self { minutes, words }
    }

    /// Minutes rounded to the nearest whole number, for display.
    pub fn rounded_minutes(&self) -> u64 {
        self.minutes.round() as u64
    }
}
