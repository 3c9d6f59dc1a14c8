//! Damage progression zones
//!
//! Sweeps character damage across a range and partitions it into contiguous
//! zones, each dominated by one most-profitable metin. The sweep is a
//! discretization: zone boundaries are only as precise as the step size.
//!
//! ```text
//! limit = clamp(ceil(max_hp / max(hits_per_second, 1) × 1.2 / 500) × 500, 5000, 200000)
//! step  = 100 up to 50000, 500 up to 200000, 1000 beyond
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CharacterStats, MarketItem, Metin};
use crate::profit::{calculate_all_metins, is_softcapped, DropMultipliers};

/// Number of runner-up metins snapshotted per zone
const ZONE_RANKING_SIZE: usize = 3;

const ZONE_COLORS: [&str; 8] = [
    "#ef4444", "#f97316", "#eab308", "#22c55e", "#06b6d4", "#3b82f6", "#a855f7", "#ec4899",
];

/// Bounds of the damage sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SweepConfig {
    /// First sampled damage value
    pub start_damage: f64,
    /// Upper bound when there are no metins
    pub default_limit: f64,
    pub min_limit: f64,
    pub max_limit: f64,
    /// Limits are rounded up to a multiple of this
    pub limit_rounding: f64,
    /// Multiplier over the one-second-kill damage of the toughest metin
    pub limit_headroom: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start_damage: 1000.0,
            default_limit: 30_000.0,
            min_limit: 5_000.0,
            max_limit: 200_000.0,
            limit_rounding: 500.0,
            limit_headroom: 1.2,
        }
    }
}

impl SweepConfig {
    /// Sampling step after `damage`
    pub fn step_after(&self, damage: f64) -> f64 {
        if damage > 200_000.0 {
            1000.0
        } else if damage > 50_000.0 {
            500.0
        } else {
            100.0
        }
    }
}

/// One metin's standing at the start of a zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRanking {
    pub name: String,
    pub profit: f64,
    /// Profit relative to the zone's best metin, in percent
    pub efficiency: f64,
}

/// Contiguous damage interval dominated by one metin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageZone {
    pub min_damage: f64,
    pub max_damage: f64,
    pub best_metin_id: String,
    pub best_metin_name: String,
    pub min_profit: f64,
    pub max_profit: f64,
    pub color: String,
    pub is_softcap: bool,
    pub rankings: Vec<ZoneRanking>,
}

impl DamageZone {
    pub fn avg_profit(&self) -> f64 {
        (self.min_profit + self.max_profit) / 2.0
    }

    pub fn contains(&self, damage: f64) -> bool {
        damage >= self.min_damage && damage <= self.max_damage
    }
}

/// Deterministic palette color for a metin name
///
/// 32-bit rolling hash over UTF-16 code units (`h = c + (h << 5) - h`),
/// so a name keeps its color across runs and hosts.
pub fn zone_color(name: &str) -> &'static str {
    let mut hash: i64 = 0;
    for unit in name.encode_utf16() {
        let shifted = (hash as i32).wrapping_shl(5);
        hash = i64::from(unit) + (i64::from(shifted) - hash);
    }
    ZONE_COLORS[(hash.unsigned_abs() % ZONE_COLORS.len() as u64) as usize]
}

/// Upper damage bound for the sweep
///
/// # Example
/// ```
/// use metin_farm_core_rs::progression::{calculate_smart_limit, SweepConfig};
///
/// let config = SweepConfig::default();
/// assert_eq!(calculate_smart_limit(&[], 2.0, &config), 30_000.0);
/// ```
pub fn calculate_smart_limit(metins: &[Metin], hits_per_second: f64, config: &SweepConfig) -> f64 {
    if metins.is_empty() {
        return config.default_limit;
    }

    let max_hp = metins.iter().map(|m| m.hp).fold(f64::NEG_INFINITY, f64::max);
    let hits = if hits_per_second.is_finite() { hits_per_second.max(1.0) } else { 1.0 };
    let limit = (max_hp / hits) * config.limit_headroom;
    let rounded = (limit / config.limit_rounding).ceil() * config.limit_rounding;

    if rounded.is_nan() {
        return config.min_limit;
    }
    rounded.max(config.min_limit).min(config.max_limit)
}

/// Sweep damage and build best-metin zones
pub fn calculate_damage_zones(
    metins: &[Metin],
    multipliers: DropMultipliers,
    stats: &CharacterStats,
    market_items: &[MarketItem],
) -> Vec<DamageZone> {
    calculate_damage_zones_with(metins, multipliers, stats, market_items, &SweepConfig::default())
}

/// `calculate_damage_zones` with explicit sweep bounds
pub fn calculate_damage_zones_with(
    metins: &[Metin],
    multipliers: DropMultipliers,
    stats: &CharacterStats,
    market_items: &[MarketItem],
    config: &SweepConfig,
) -> Vec<DamageZone> {
    let mut zones: Vec<DamageZone> = Vec::new();
    let limit = calculate_smart_limit(metins, stats.hits_per_second, config);
    let find_time = stats.find_time_seconds();

    let mut damage = config.start_damage;
    while damage <= limit {
        let calculations = calculate_all_metins(metins, multipliers, &stats.with_damage(damage), market_items);
        let step = config.step_after(damage);

        let Some(best) = calculations.first() else {
            damage += step;
            continue;
        };
        let softcap = is_softcapped(best.kill_time, find_time);

        match zones.last_mut() {
            Some(zone) if zone.best_metin_id == best.metin_id => {
                zone.max_damage = damage;
                zone.max_profit = best.hourly_profit;
                zone.is_softcap |= softcap;
            }
            _ => {
                let best_profit = best.hourly_profit;
                zones.push(DamageZone {
                    min_damage: damage,
                    max_damage: damage,
                    best_metin_id: best.metin_id.clone(),
                    best_metin_name: best.metin_name.clone(),
                    min_profit: best_profit,
                    max_profit: best_profit,
                    color: zone_color(&best.metin_name).to_string(),
                    is_softcap: softcap,
                    rankings: calculations
                        .iter()
                        .take(ZONE_RANKING_SIZE)
                        .map(|c| ZoneRanking {
                            name: c.metin_name.clone(),
                            profit: c.hourly_profit,
                            efficiency: if best_profit > 0.0 {
                                c.hourly_profit / best_profit * 100.0
                            } else {
                                0.0
                            },
                        })
                        .collect(),
                });
            }
        }

        damage += step;
    }

    debug!(zones = zones.len(), limit, "damage sweep complete");
    zones
}

/// What reaching the next zone would bring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TierAnalysis {
    /// No more profitable zone lies ahead
    MaxLevel { message: String },

    #[serde(rename_all = "camelCase")]
    NextTier {
        next_metin: String,
        /// Extra damage needed to reach the next zone
        required_damage: f64,
        profit_increase: f64,
        /// Relative gain of average hourly profit, in percent
        percent_gain: f64,
    },
}

impl TierAnalysis {
    pub fn is_max_level(&self) -> bool {
        matches!(self, TierAnalysis::MaxLevel { .. })
    }
}

/// Compare the zone holding `current_damage` with the one after it
///
/// Damage falling between two sampled zones belongs to the zone before the
/// gap. Damage below the first zone has no current zone: the first zone is
/// reported as the next tier, measured against zero profit. Returns `None`
/// when there are no zones.
///
/// # Example
/// ```
/// use metin_farm_core_rs::progression::{analyze_next_tier, DamageZone, TierAnalysis};
///
/// let zone = |min: f64, max: f64, name: &str, profit: f64| DamageZone {
///     min_damage: min,
///     max_damage: max,
///     best_metin_id: name.to_string(),
///     best_metin_name: name.to_string(),
///     min_profit: profit,
///     max_profit: profit,
///     color: String::new(),
///     is_softcap: false,
///     rankings: vec![],
/// };
/// let zones = vec![zone(1000.0, 4900.0, "A", 100.0), zone(5000.0, 9000.0, "B", 150.0)];
///
/// match analyze_next_tier(3000.0, &zones) {
///     Some(TierAnalysis::NextTier { required_damage, percent_gain, .. }) => {
///         assert_eq!(required_damage, 2000.0);
///         assert_eq!(percent_gain, 50.0);
///     }
///     other => panic!("unexpected {:?}", other),
/// }
/// assert!(analyze_next_tier(9500.0, &zones).unwrap().is_max_level());
///
/// // Below the sweep: the first zone is the next tier
/// assert!(matches!(
///     analyze_next_tier(500.0, &zones),
///     Some(TierAnalysis::NextTier { ref next_metin, required_damage, .. })
///         if next_metin == "A" && required_damage == 500.0
/// ));
/// ```
pub fn analyze_next_tier(current_damage: f64, zones: &[DamageZone]) -> Option<TierAnalysis> {
    let last = zones.last()?;

    let Some(current_index) = zones.iter().rposition(|z| z.min_damage <= current_damage) else {
        let first = &zones[0];
        return Some(TierAnalysis::NextTier {
            next_metin: first.best_metin_name.clone(),
            required_damage: first.min_damage - current_damage,
            profit_increase: first.avg_profit(),
            percent_gain: 0.0,
        });
    };

    if current_index == zones.len() - 1 {
        let message = if current_damage > last.max_damage {
            "You are at the top: no more profitable metin exists."
        } else {
            "You are already in the most profitable metin zone."
        };
        return Some(TierAnalysis::MaxLevel {
            message: message.to_string(),
        });
    }

    let current = &zones[current_index];
    let next = &zones[current_index + 1];

    let current_avg = current.avg_profit();
    let profit_increase = next.avg_profit() - current_avg;
    let percent_gain = if current_avg > 0.0 {
        profit_increase / current_avg * 100.0
    } else {
        0.0
    };

    Some(TierAnalysis::NextTier {
        next_metin: next.best_metin_name.clone(),
        required_damage: next.min_damage - current_damage,
        profit_increase,
        percent_gain,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_color_is_stable() {
        assert_eq!(zone_color("Metin of Grief"), zone_color("Metin of Grief"));
        // "a" hashes to 97; 97 % 8 == 1
        assert_eq!(zone_color("a"), ZONE_COLORS[1]);
        assert_eq!(zone_color(""), ZONE_COLORS[0]);
    }

    #[test]
    fn test_step_after_thresholds() {
        let config = SweepConfig::default();
        assert_eq!(config.step_after(50_000.0), 100.0);
        assert_eq!(config.step_after(50_100.0), 500.0);
        assert_eq!(config.step_after(200_500.0), 1000.0);
    }

    #[test]
    fn test_smart_limit_rounds_and_clamps() {
        let metin = |hp: f64| Metin {
            id: "m".to_string(),
            name: "M".to_string(),
            hp,
            drops: vec![],
        };
        let config = SweepConfig::default();
        // 10_000 / 1 × 1.2 = 12_000
        assert_eq!(calculate_smart_limit(&[metin(10_000.0)], 1.0, &config), 12_000.0);
        // 10_100 × 1.2 = 12_120 -> 12_500
        assert_eq!(calculate_smart_limit(&[metin(10_100.0)], 0.5, &config), 12_500.0);
        assert_eq!(calculate_smart_limit(&[metin(100.0)], 1.0, &config), 5_000.0);
        assert_eq!(calculate_smart_limit(&[metin(1e9)], 1.0, &config), 200_000.0);
    }
}
