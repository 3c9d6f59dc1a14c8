//! Character stats model
//!
//! Average per-hit damage, attack rate and travel time between targets.
//! Supplied by the caller and read-only for the duration of a calculation.

use serde::{Deserialize, Serialize};

/// Character combat stats
///
/// # Example
/// ```
/// use metin_farm_core_rs::CharacterStats;
///
/// let stats = CharacterStats::new(5000.0, 2.5, 10.0);
/// assert_eq!(stats.dps(), 12500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterStats {
    /// Average damage per hit
    pub damage: f64,

    /// Hits per second
    pub hits_per_second: f64,

    /// Average travel time between kill targets (seconds)
    pub find_time: f64,
}

impl CharacterStats {
    pub fn new(damage: f64, hits_per_second: f64, find_time: f64) -> Self {
        Self {
            damage,
            hits_per_second,
            find_time,
        }
    }

    /// Copy of these stats with a different damage value
    pub fn with_damage(&self, damage: f64) -> Self {
        Self { damage, ..*self }
    }

    /// Damage per second, `damage × hits_per_second`
    ///
    /// Negative or non-finite inputs read as 0, so the result is never
    /// negative and never NaN.
    pub fn dps(&self) -> f64 {
        sanitize(self.damage) * sanitize(self.hits_per_second)
    }

    /// Find time in seconds, 0 when negative or non-finite
    pub fn find_time_seconds(&self) -> f64 {
        sanitize(self.find_time)
    }
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            damage: 5000.0,
            hits_per_second: 2.5,
            find_time: 10.0,
        }
    }
}

/// Read a caller-supplied number as a finite, non-negative value
pub(crate) fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}
