//! Drop table entries
//!
//! A drop contributes `count × (chance / 100) × unit_price` to the expected
//! value of one kill.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Where a dropped item's price comes from
///
/// Crafted item prices are merged into the market list before any
/// calculation runs, so both sources resolve the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    #[default]
    Market,
    Crafting,
}

impl std::str::FromStr for SourceType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(SourceType::Market),
            "crafting" => Ok(SourceType::Crafting),
            other => Err(ValidationError::UnknownVariant {
                field: "sourceType",
                value: other.to_string(),
            }),
        }
    }
}

/// One entry of a metin or boss drop table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drop {
    /// Item identifier, resolved against the market list
    pub item_id: String,

    #[serde(default)]
    pub source_type: SourceType,

    /// Items per successful drop
    pub count: f64,

    /// Drop chance in percent, [0, 100]
    pub chance: f64,
}

impl Drop {
    /// Create a validated market drop
    ///
    /// # Errors
    /// Returns `ValidationError` if `count` is not positive or `chance` is
    /// outside [0, 100].
    ///
    /// # Example
    /// ```
    /// use metin_farm_core_rs::models::Drop;
    ///
    /// let drop = Drop::new("item_ruh_tasi", 1.0, 25.0).unwrap();
    /// assert_eq!(drop.probability(), 0.25);
    /// assert!(Drop::new("item_ruh_tasi", 1.0, 120.0).is_err());
    /// ```
    pub fn new(item_id: impl Into<String>, count: f64, chance: f64) -> Result<Self, ValidationError> {
        let drop = Self {
            item_id: item_id.into(),
            source_type: SourceType::Market,
            count,
            chance,
        };
        drop.validate()?;
        Ok(drop)
    }

    /// Mark the drop as a crafted item
    pub fn crafted(mut self) -> Self {
        self.source_type = SourceType::Crafting;
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.item_id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "itemId" });
        }
        if !(self.count.is_finite() && self.count > 0.0) {
            return Err(ValidationError::NonPositiveCount {
                item_id: self.item_id.clone(),
                count: self.count,
            });
        }
        if !(0.0..=100.0).contains(&self.chance) {
            return Err(ValidationError::ChanceOutOfRange {
                item_id: self.item_id.clone(),
                chance: self.chance,
            });
        }
        Ok(())
    }

    /// Drop probability in [0, 1]; out-of-range chances are clamped
    pub fn probability(&self) -> f64 {
        if self.chance.is_nan() {
            return 0.0;
        }
        self.chance.clamp(0.0, 100.0) / 100.0
    }

    /// Expected items per kill, `count × multiplier × probability`
    pub fn expected_count(&self, multiplier: f64) -> f64 {
        super::stats::sanitize(self.count) * super::stats::sanitize(multiplier) * self.probability()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probability_clamped() {
        let drop = Drop {
            item_id: "x".to_string(),
            source_type: SourceType::Market,
            count: 1.0,
            chance: 150.0,
        };
        assert_eq!(drop.probability(), 1.0);
    }

    #[test]
    fn test_rejects_zero_count() {
        assert!(matches!(
            Drop::new("x", 0.0, 50.0),
            Err(ValidationError::NonPositiveCount { .. })
        ));
    }

    #[test]
    fn test_source_type_parse() {
        assert_eq!("crafting".parse::<SourceType>().unwrap(), SourceType::Crafting);
        assert!("shop".parse::<SourceType>().is_err());
    }
}
