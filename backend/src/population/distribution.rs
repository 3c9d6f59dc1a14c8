//! Synthetic player population across a damage range
//!
//! Splits `[min_damage, max_damage]` into 20 equal-width buckets, weights
//! them by a distribution shape and assigns each bucket an average daily
//! play time from a time strategy. Used for what-if modelling of server-wide
//! farming.

use serde::{Deserialize, Serialize};

use crate::models::ValidationError;

/// Number of damage buckets
pub const SEGMENT_COUNT: usize = 20;

/// Shape of the player count over damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistributionType {
    /// Gaussian centered at the midpoint (σ² = 0.1 in normalized space)
    Normal,
    /// Most players at low damage, weight ∝ (1 − x)²
    LeftSkewed,
    /// Most players at high damage, weight ∝ x²
    RightSkewed,
    #[default]
    Uniform,
}

impl DistributionType {
    /// Unnormalized weight at normalized position `x` ∈ [0, 1]
    fn weight(self, x: f64) -> f64 {
        match self {
            DistributionType::Normal => (-(x - 0.5).powi(2) / 0.1).exp(),
            DistributionType::LeftSkewed => (1.0 - x).powi(2),
            DistributionType::RightSkewed => x.powi(2),
            DistributionType::Uniform => 1.0,
        }
    }
}

impl std::str::FromStr for DistributionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(DistributionType::Normal),
            "left-skewed" => Ok(DistributionType::LeftSkewed),
            "right-skewed" => Ok(DistributionType::RightSkewed),
            "uniform" => Ok(DistributionType::Uniform),
            other => Err(ValidationError::UnknownVariant {
                field: "distributionType",
                value: other.to_string(),
            }),
        }
    }
}

/// How average play time varies with damage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeStrategy {
    /// Stronger players play more: 0.5× to 1.5× base hours
    Linear,
    /// Weaker players play more: 1.5× to 0.5× base hours
    LinearInverse,
    /// Quadratic ramp towards high damage: 0.2× to 2.0×
    Exponential,
    /// Quadratic ramp towards low damage: 2.0× to 0.2×
    ExponentialInverse,
    #[default]
    Constant,
}

impl TimeStrategy {
    /// Average play hours at normalized position `x` ∈ [0, 1]
    fn play_time(self, x: f64, base_hours: f64) -> f64 {
        match self {
            TimeStrategy::Linear => base_hours * (0.5 + x),
            TimeStrategy::LinearInverse => base_hours * (1.5 - x),
            TimeStrategy::Exponential => base_hours * (0.2 + 1.8 * x.powi(2)),
            TimeStrategy::ExponentialInverse => base_hours * (0.2 + 1.8 * (1.0 - x).powi(2)),
            TimeStrategy::Constant => base_hours,
        }
    }
}

impl std::str::FromStr for TimeStrategy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(TimeStrategy::Linear),
            "linear-inverse" => Ok(TimeStrategy::LinearInverse),
            "exponential" => Ok(TimeStrategy::Exponential),
            "exponential-inverse" => Ok(TimeStrategy::ExponentialInverse),
            "constant" => Ok(TimeStrategy::Constant),
            other => Err(ValidationError::UnknownVariant {
                field: "timeStrategy",
                value: other.to_string(),
            }),
        }
    }
}

/// One non-empty damage bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub min_damage: f64,
    pub max_damage: f64,
    /// Bucket midpoint
    pub avg_damage: f64,
    pub player_count: u32,
    /// Average daily play time per player (hours)
    pub avg_play_time: f64,
    /// `player_count × avg_play_time`
    pub total_hours: f64,
}

/// Generate a synthetic player histogram over `[min_damage, max_damage]`
///
/// Player counts are rounded per bucket, so their sum can differ from
/// `player_count` by a few players. Empty buckets are omitted.
///
/// # Example
/// ```
/// use metin_farm_core_rs::population::{generate_player_distribution, DistributionType, TimeStrategy};
///
/// let segments = generate_player_distribution(
///     0.0, 20_000.0, 200, DistributionType::Uniform, TimeStrategy::Constant, 4.0,
/// );
/// assert_eq!(segments.len(), 20);
/// assert_eq!(segments[0].player_count, 10);
/// assert_eq!(segments[0].total_hours, 40.0);
/// ```
pub fn generate_player_distribution(
    min_damage: f64,
    max_damage: f64,
    player_count: u32,
    distribution: DistributionType,
    time_strategy: TimeStrategy,
    base_hours: f64,
) -> Vec<Segment> {
    let step = (max_damage - min_damage) / SEGMENT_COUNT as f64;
    let position = |i: usize| i as f64 / (SEGMENT_COUNT - 1) as f64;

    let weights: Vec<f64> = (0..SEGMENT_COUNT)
        .map(|i| distribution.weight(position(i)))
        .collect();
    let total_weight: f64 = weights.iter().sum();
    if total_weight <= 0.0 {
        return Vec::new();
    }

    weights
        .iter()
        .enumerate()
        .filter_map(|(i, weight)| {
            let count = (f64::from(player_count) * (weight / total_weight)).round() as u32;
            if count == 0 {
                return None;
            }

            let avg_play_time = time_strategy.play_time(position(i), base_hours);
            let segment_min = min_damage + step * i as f64;

            Some(Segment {
                min_damage: segment_min,
                max_damage: min_damage + step * (i + 1) as f64,
                avg_damage: segment_min + step / 2.0,
                player_count: count,
                avg_play_time,
                total_hours: f64::from(count) * avg_play_time,
            })
        })
        .collect()
}
