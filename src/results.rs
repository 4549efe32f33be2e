//! Best clear per stage
//!
//! Kept for the lifetime of a session only; nothing is written to disk.

use serde::{Deserialize, Serialize};

/// Outcome of one cleared stage attempt
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageResult {
    /// 0-3
    pub stars: u8,
    /// Seconds from stage load to victory
    pub elapsed_secs: f32,
    /// Collectibles picked up during the attempt
    pub collected: u32,
}

impl StageResult {
    /// More stars wins; equal stars fall back to the faster clear
    pub fn beats(&self, other: &StageResult) -> bool {
        self.stars > other.stars
            || (self.stars == other.stars && self.elapsed_secs < other.elapsed_secs)
    }
}

/// Best result for each stage index cleared so far
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageResults {
    best: Vec<Option<StageResult>>,
}

impl StageResults {
    pub fn new() -> Self {
        Self { best: Vec::new() }
    }

    /// Check if a result would replace the stored best for `stage`
    pub fn qualifies(&self, stage: usize, result: &StageResult) -> bool {
        self.best(stage).is_none_or(|best| result.beats(best))
    }

    /// Store `result` if it beats the current best.
    /// Returns true when the record changed.
    pub fn record(&mut self, stage: usize, result: StageResult) -> bool {
        if !self.qualifies(stage, &result) {
            return false;
        }
        if self.best.len() <= stage {
            self.best.resize(stage + 1, None);
        }
        self.best[stage] = Some(result);
        log::info!(
            "New best for stage {}: {} stars in {:.2}s",
            stage + 1,
            result.stars,
            result.elapsed_secs
        );
        true
    }

    pub fn best(&self, stage: usize) -> Option<&StageResult> {
        self.best.get(stage).and_then(Option::as_ref)
    }

    /// Sum of best stars across all cleared stages
    pub fn total_stars(&self) -> u32 {
        self.best.iter().flatten().map(|r| r.stars as u32).sum()
    }

    /// Number of distinct stages cleared
    pub fn cleared(&self) -> usize {
        self.best.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cleared() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(stars: u8, elapsed_secs: f32) -> StageResult {
        StageResult {
            stars,
            elapsed_secs,
            collected: 1,
        }
    }

    #[test]
    fn test_first_clear_always_recorded() {
        let mut results = StageResults::new();
        assert!(results.is_empty());
        assert!(results.record(2, result(1, 90.0)));
        assert_eq!(results.best(2).map(|r| r.stars), Some(1));
        assert_eq!(results.best(0), None);
        assert_eq!(results.cleared(), 1);
    }

    #[test]
    fn test_more_stars_then_faster() {
        let mut results = StageResults::new();
        results.record(0, result(2, 30.0));

        assert!(!results.record(0, result(1, 5.0)));
        assert!(!results.record(0, result(2, 31.0)));
        assert!(results.record(0, result(2, 25.0)));
        assert!(results.record(0, result(3, 19.0)));
        assert_eq!(results.best(0), Some(&result(3, 19.0)));
    }

    #[test]
    fn test_total_stars() {
        let mut results = StageResults::new();
        results.record(0, result(3, 10.0));
        results.record(1, result(0, 10.0));
        results.record(2, result(2, 30.0));
        assert_eq!(results.total_stars(), 5);
        assert_eq!(results.cleared(), 3);
    }
}
