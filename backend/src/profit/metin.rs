//! Metin profitability
//!
//! For one metin and one set of character stats:
//!
//! ```text
//! dps             = damage × hits_per_second
//! kill_time       = hp / dps          (0 when dps == 0: instant, not infinite)
//! cycle_time      = kill_time + find_time
//! metins_per_hour = 3600 / cycle_time (0 when cycle_time == 0)
//! hourly_profit   = metins_per_hour × drop_value_per_metin
//! ```
//!
//! A zero-DPS metin is treated as an instant kill. Bosses treat the same
//! condition as unkillable (see `profit::boss`). Both conventions are kept.

use serde::{Deserialize, Serialize};

use crate::models::stats::sanitize;
use crate::models::{CharacterStats, MarketItem, Metin};
use crate::pricing::drop_table_value;

/// Number of metins kept per point of a damage/profit curve
const CURVE_TOP_METINS: usize = 5;

/// Global drop multipliers (events, premium items)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropMultipliers {
    /// Multiplies every drop count
    pub drop: f64,
}

impl Default for DropMultipliers {
    fn default() -> Self {
        Self { drop: 1.0 }
    }
}

/// Profit metrics for one metin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetinProfit {
    pub metin_id: String,
    pub metin_name: String,
    /// Seconds to kill one metin
    pub kill_time: f64,
    /// Seconds per kill including travel
    pub cycle_time: f64,
    pub metins_per_hour: f64,
    pub drop_value_per_metin: f64,
    pub hourly_profit: f64,
}

/// Kill time in seconds; 0 when `dps` is 0
fn metin_kill_time(hp: f64, dps: f64) -> f64 {
    if dps > 0.0 {
        sanitize(hp) / dps
    } else {
        0.0
    }
}

/// Metins killed per hour for a given cycle time
fn metins_per_hour(cycle_time: f64) -> f64 {
    if cycle_time > 0.0 {
        3600.0 / cycle_time
    } else {
        0.0
    }
}

/// Calculate profit metrics for a single metin
///
/// # Example
/// ```
/// use metin_farm_core_rs::{calculate_metin_profit, CharacterStats, DropMultipliers, MarketItem};
/// use metin_farm_core_rs::models::{Drop, Metin};
///
/// let metin = Metin::new("m1", "Metin of Grief", 10_000.0, vec![
///     Drop::new("stone", 2.0, 50.0).unwrap(),
/// ]).unwrap();
/// let items = vec![MarketItem::new("stone", "Stone", 1000.0)];
/// let stats = CharacterStats::new(1000.0, 1.0, 10.0);
///
/// let profit = calculate_metin_profit(&metin, DropMultipliers::default(), &stats, &items);
/// assert_eq!(profit.kill_time, 10.0);
/// assert_eq!(profit.metins_per_hour, 180.0);
/// assert_eq!(profit.hourly_profit, 180_000.0);
/// ```
pub fn calculate_metin_profit(
    metin: &Metin,
    multipliers: DropMultipliers,
    stats: &CharacterStats,
    market_items: &[MarketItem],
) -> MetinProfit {
    let drop_value_per_metin = drop_table_value(&metin.drops, multipliers.drop, market_items);

    let kill_time = metin_kill_time(metin.hp, stats.dps());
    let cycle_time = kill_time + stats.find_time_seconds();
    let metins_per_hour = metins_per_hour(cycle_time);

    MetinProfit {
        metin_id: metin.id.clone(),
        metin_name: metin.name.clone(),
        kill_time,
        cycle_time,
        metins_per_hour,
        drop_value_per_metin,
        hourly_profit: metins_per_hour * drop_value_per_metin,
    }
}

/// Calculate every metin and rank by hourly profit, highest first
///
/// Ties keep their input order.
pub fn calculate_all_metins(
    metins: &[Metin],
    multipliers: DropMultipliers,
    stats: &CharacterStats,
    market_items: &[MarketItem],
) -> Vec<MetinProfit> {
    let mut calculations: Vec<MetinProfit> = metins
        .iter()
        .map(|metin| calculate_metin_profit(metin, multipliers, stats, market_items))
        .collect();

    // sort_by is stable
    calculations.sort_by(|a, b| b.hourly_profit.total_cmp(&a.hourly_profit));
    calculations
}

/// Most profitable entry of a ranked list
pub fn get_best_metin(calculations: &[MetinProfit]) -> Option<&MetinProfit> {
    calculations.first()
}

/// Kill speed is so high that travel time dominates the cycle
///
/// Past this point more damage barely changes hourly profit.
pub fn is_softcapped(kill_time: f64, find_time: f64) -> bool {
    kill_time < find_time * 0.1
}

/// Expected drops of one item over a farming session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemYield {
    pub item_id: String,
    /// Expected number of items
    pub count: f64,
    pub chance: f64,
}

/// Expected metins and drops over a farming session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemYields {
    pub metins_count: f64,
    pub yields: Vec<ItemYield>,
}

/// Expected item yields of farming `metin` for `duration_hours`
///
/// Drop multipliers are not applied; the yields are base table rates.
pub fn calculate_item_yields(metin: &Metin, stats: &CharacterStats, duration_hours: f64) -> ItemYields {
    let kill_time = metin_kill_time(metin.hp, stats.dps());
    let cycle_time = kill_time + stats.find_time_seconds();
    let metins_count = metins_per_hour(cycle_time) * sanitize(duration_hours);

    let yields = metin
        .drops
        .iter()
        .map(|drop| ItemYield {
            item_id: drop.item_id.clone(),
            count: metins_count * drop.expected_count(1.0),
            chance: drop.chance,
        })
        .collect();

    ItemYields { metins_count, yields }
}

/// Net hourly profit of one metin at one curve point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveSample {
    pub metin_name: String,
    pub net_hourly_profit: f64,
}

/// Profits of the top metins at one damage value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitCurvePoint {
    pub damage: f64,
    pub samples: Vec<CurveSample>,
}

/// Net hourly profit of today's top metins across a damage range
///
/// Takes the top 5 metins at `stats` and samples damage from 100 up to
/// `max(2 × damage, 10000)` with step `max(100, floor(max / 50))`.
/// `hourly_cost` (consumables, premium) is subtracted from every sample.
/// Returns an empty curve when there is no metin or damage is 0.
pub fn damage_profit_curve(
    metins: &[Metin],
    multipliers: DropMultipliers,
    stats: &CharacterStats,
    market_items: &[MarketItem],
    hourly_cost: f64,
) -> Vec<ProfitCurvePoint> {
    let current_damage = sanitize(stats.damage);
    if current_damage == 0.0 {
        return Vec::new();
    }

    let ranked = calculate_all_metins(metins, multipliers, stats, market_items);
    let targets: Vec<&Metin> = ranked
        .iter()
        .take(CURVE_TOP_METINS)
        .filter_map(|calc| metins.iter().find(|m| m.id == calc.metin_id))
        .collect();
    if targets.is_empty() {
        return Vec::new();
    }

    let max_damage = (current_damage * 2.0).max(10_000.0);
    let step = (max_damage / 50.0).floor().max(100.0);

    let mut points = Vec::new();
    let mut damage = 100.0;
    while damage <= max_damage {
        let modified = stats.with_damage(damage);
        let samples = targets
            .iter()
            .map(|metin| CurveSample {
                metin_name: metin.name.clone(),
                net_hourly_profit: calculate_metin_profit(metin, multipliers, &modified, market_items)
                    .hourly_profit
                    - hourly_cost,
            })
            .collect();
        points.push(ProfitCurvePoint { damage, samples });
        damage += step;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_hp_kills_instantly() {
        assert_eq!(metin_kill_time(0.0, 100.0), 0.0);
    }

    #[test]
    fn test_softcap_threshold_is_strict() {
        assert!(is_softcapped(0.9, 10.0));
        assert!(!is_softcapped(1.0, 10.0));
    }

    #[test]
    fn test_default_multiplier_is_one() {
        let multipliers: DropMultipliers = serde_json::from_str("{}").unwrap();
        assert_eq!(multipliers.drop, 1.0);
    }
}
