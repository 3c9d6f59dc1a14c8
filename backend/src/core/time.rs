//! Time management for the rotation scheduler
//!
//! The scheduler works in continuous minutes inside a fixed daily budget.
//! This module provides the budget-aware clock it advances.

use serde::{Deserialize, Serialize};

/// Continuous clock in fractional minutes, bounded by a daily play budget
///
/// # Example
/// ```
/// use metin_farm_core_rs::Timeline;
///
/// let mut time = Timeline::from_hours(1.0); // 60 minute budget
/// assert_eq!(time.current_minute(), 0.0);
/// assert!(time.fits(60.0));
///
/// time.advance(15.0);
/// assert_eq!(time.remaining_minutes(), 45.0);
/// assert!(!time.fits(50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Minutes elapsed since the start of the play session
    current_minute: f64,
    /// Total minutes available in the day
    budget_minutes: f64,
}

impl Timeline {
    /// Create a timeline with the given budget in minutes
    ///
    /// Negative or non-finite budgets become an empty (zero) budget.
    pub fn new(budget_minutes: f64) -> Self {
        let budget_minutes = if budget_minutes.is_finite() && budget_minutes > 0.0 {
            budget_minutes
        } else {
            0.0
        };
        Self {
            current_minute: 0.0,
            budget_minutes,
        }
    }

    /// Create a timeline from daily play hours
    pub fn from_hours(hours: f64) -> Self {
        Self::new(hours * 60.0)
    }

    /// Advance by a run duration
    pub fn advance(&mut self, minutes: f64) {
        self.current_minute += minutes;
    }

    /// Jump to `target`, moving at least `min_step` forward
    ///
    /// Returns the minute jumped to.
    ///
    /// # Example
    /// ```
    /// use metin_farm_core_rs::Timeline;
    ///
    /// let mut time = Timeline::new(60.0);
    /// assert_eq!(time.jump_to(12.0, 0.1), 12.0);
    /// // Target in the past: still makes forward progress
    /// assert!((time.jump_to(5.0, 0.1) - 12.1).abs() < 1e-9);
    /// ```
    pub fn jump_to(&mut self, target: f64, min_step: f64) -> f64 {
        self.current_minute = (self.current_minute + min_step).max(target);
        self.current_minute
    }

    pub fn current_minute(&self) -> f64 {
        self.current_minute
    }

    pub fn budget_minutes(&self) -> f64 {
        self.budget_minutes
    }

    /// Minutes left in the budget, never negative
    pub fn remaining_minutes(&self) -> f64 {
        (self.budget_minutes - self.current_minute).max(0.0)
    }

    /// True while there is budget left
    pub fn has_time_left(&self) -> bool {
        self.current_minute < self.budget_minutes
    }

    /// Whether a run of `minutes` started now would finish inside the budget
    pub fn fits(&self, minutes: f64) -> bool {
        self.fits_at(self.current_minute, minutes)
    }

    /// Whether a run of `minutes` started at `start_minute` (or now, if that
    /// has already passed) would finish inside the budget
    pub fn fits_at(&self, start_minute: f64, minutes: f64) -> bool {
        start_minute.max(self.current_minute) + minutes <= self.budget_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_budget_is_empty() {
        let time = Timeline::new(-5.0);
        assert_eq!(time.budget_minutes(), 0.0);
        assert!(!time.has_time_left());
    }

    #[test]
    fn test_fits_at_never_starts_in_the_past() {
        let mut time = Timeline::new(60.0);
        time.advance(50.0);

        assert!(time.fits_at(0.0, 10.0));
        assert!(!time.fits_at(0.0, 10.5));
        assert!(!time.fits_at(55.0, 10.0));
    }

    #[test]
    fn test_nan_budget_is_empty() {
        assert_eq!(Timeline::from_hours(f64::NAN).budget_minutes(), 0.0);
    }
}
