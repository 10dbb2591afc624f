//! Sliding-window accumulators.
//!
//! Each accumulator is fed one week at a time and answers in O(1) the same
//! question a fresh scan over the trailing window would.

use std::collections::VecDeque;

/// Length of the current run of consecutive `true` observations.
#[derive(Debug, Clone, Default)]
pub struct Streak {
    run: usize,
}

impl Streak {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, hit: bool) {
        self.run = if hit { self.run + 1 } else { 0 };
    }

    pub fn len(&self) -> usize {
        self.run
    }

    pub fn is_empty(&self) -> bool {
        self.run == 0
    }

    /// True when the last `n` observations were all hits. Never true before
    /// `n` observations have been seen.
    pub fn holds_for(&self, n: usize) -> bool {
        n > 0 && self.run >= n
    }
}

/// Sum of the last `window` values, or of all values seen while fewer than
/// `window` have arrived.
#[derive(Debug, Clone)]
pub struct RollingSum {
    window: usize,
    values: VecDeque<u64>,
    sum: u64,
}

impl RollingSum {
    pub fn new(window: usize) -> Self {
        let window = window.max(1);
        Self {
            window,
            values: VecDeque::with_capacity(window),
            sum: 0,
        }
    }

    pub fn push(&mut self, value: u64) {
        if self.values.len() == self.window {
            if let Some(evicted) = self.values.pop_front() {
                self.sum -= evicted;
            }
        }
        self.values.push_back(value);
        self.sum += value;
    }

    pub fn sum(&self) -> u64 {
        self.sum
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_resets_on_miss() {
        let mut streak = Streak::new();
        for hit in [true, true, false, true] {
            streak.push(hit);
        }
        assert_eq!(streak.len(), 1);
        assert!(!streak.holds_for(2));
    }

    #[test]
    fn test_streak_needs_n_observations() {
        let mut streak = Streak::new();
        streak.push(true);
        streak.push(true);
        assert!(!streak.holds_for(3));
        streak.push(true);
        assert!(streak.holds_for(3));
    }

    #[test]
    fn test_rolling_sum_partial_window() {
        let mut sum = RollingSum::new(4);
        sum.push(2);
        sum.push(3);
        assert_eq!(sum.sum(), 5);
        assert_eq!(sum.len(), 2);
    }

    #[test]
    fn test_rolling_sum_evicts_oldest() {
        let mut sum = RollingSum::new(3);
        for v in [1, 2, 3, 4, 5] {
            sum.push(v);
        }
        assert_eq!(sum.sum(), 3 + 4 + 5);
        assert_eq!(sum.len(), 3);
    }

    #[test]
    fn test_rolling_sum_matches_naive_tail() {
        let values = [4u64, 0, 7, 1, 1, 9, 2, 0, 0, 3];
        let window = 4;
        let mut sum = RollingSum::new(window);
        for (i, v) in values.iter().enumerate() {
            sum.push(*v);
            let start = (i + 1).saturating_sub(window);
            let naive: u64 = values[start..=i].iter().sum();
            assert_eq!(sum.sum(), naive, "mismatch at week {i}");
        }
    }
}
