//! Market supply simulation
//!
//! Estimates how many items a group of players puts on the market when they
//! split their combined damage across a weighted set of metins.
//!
//! ```text
//! group_dps   = avg_damage × player_count × hits_per_second
//! damage_pool = group_dps × duration_hours × 3600 × efficiency / 100
//! kills       = floor(damage_pool × weight / 100 / hp)     per target
//! ```
//!
//! Travel time is folded into `efficiency` rather than modelled per kill.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::stats::sanitize;
use crate::models::{MarketItem, Metin};
use crate::pricing::find_item;

/// Group and session parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SupplyConfig {
    pub player_count: u32,
    pub min_damage: f64,
    pub max_damage: f64,
    /// Share of the session spent hitting, in percent
    pub efficiency_percent: f64,
    pub duration_hours: f64,
    /// Attack rate assumed for every player
    pub hits_per_second: f64,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            player_count: 10,
            min_damage: 5000.0,
            max_damage: 10_000.0,
            efficiency_percent: 90.0,
            duration_hours: 4.0,
            hits_per_second: 2.5,
        }
    }
}

/// A metin the group farms, with its share of the damage pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyTarget {
    pub metin: Metin,
    /// Share of the damage pool, in percent
    pub weight: f64,
}

/// Items of one kind produced over the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyLine {
    pub item_id: String,
    /// Market name, or the item id when the item is not listed
    pub name: String,
    /// Whole items produced
    pub count: u64,
    pub total_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyStats {
    pub total_metins_killed: u64,
    pub total_revenue: f64,
    pub group_dps: f64,
    pub effective_hours: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplyReport {
    /// Highest total value first
    pub supply: Vec<SupplyLine>,
    /// `None` when there were no targets
    pub stats: Option<SupplyStats>,
}

/// Integer weights summing to 100, remainder on the first target
///
/// # Example
/// ```
/// use metin_farm_core_rs::population::distribute_weights_evenly;
///
/// assert_eq!(distribute_weights_evenly(3), vec![34, 33, 33]);
/// assert!(distribute_weights_evenly(0).is_empty());
/// ```
pub fn distribute_weights_evenly(target_count: usize) -> Vec<u32> {
    if target_count == 0 {
        return Vec::new();
    }

    let count = u32::try_from(target_count).unwrap_or(u32::MAX);
    let avg = 100 / count;
    let remainder = 100 - avg.saturating_mul(count).min(100);

    (0..target_count)
        .map(|i| if i == 0 { avg + remainder } else { avg })
        .collect()
}

/// Simulate the items a group produces over one session
pub fn simulate_market_supply(
    config: &SupplyConfig,
    targets: &[SupplyTarget],
    market_items: &[MarketItem],
) -> SupplyReport {
    if targets.is_empty() {
        return SupplyReport::default();
    }

    let avg_damage = (sanitize(config.min_damage) + sanitize(config.max_damage)) / 2.0;
    let group_dps = avg_damage * f64::from(config.player_count) * sanitize(config.hits_per_second);

    let effective_seconds = sanitize(config.duration_hours) * 3600.0 * sanitize(config.efficiency_percent) / 100.0;
    let damage_pool = group_dps * effective_seconds;

    // Insertion order keeps equal-value lines stable across runs
    let mut order: Vec<String> = Vec::new();
    let mut expected: HashMap<String, f64> = HashMap::new();
    let mut total_metins_killed: u64 = 0;

    for target in targets {
        if !(target.metin.hp.is_finite() && target.metin.hp > 0.0) {
            continue;
        }
        let allocated = damage_pool * sanitize(target.weight) / 100.0;
        let kills = (allocated / target.metin.hp).floor();
        total_metins_killed += kills as u64;

        for drop in &target.metin.drops {
            let produced = kills * drop.expected_count(1.0);
            match expected.get_mut(&drop.item_id) {
                Some(total) => *total += produced,
                None => {
                    order.push(drop.item_id.clone());
                    expected.insert(drop.item_id.clone(), produced);
                }
            }
        }
    }

    let mut supply: Vec<SupplyLine> = order
        .into_iter()
        .map(|item_id| {
            let count = expected.get(&item_id).copied().unwrap_or(0.0).floor();
            let item = find_item(&item_id, market_items);
            SupplyLine {
                name: item.map_or_else(|| item_id.clone(), |i| i.name.clone()),
                total_value: count * item.map_or(0.0, MarketItem::unit_price),
                count: count as u64,
                item_id,
            }
        })
        .collect();
    supply.sort_by(|a, b| b.total_value.total_cmp(&a.total_value));

    let total_revenue = supply.iter().map(|line| line.total_value).sum();

    SupplyReport {
        supply,
        stats: Some(SupplyStats {
            total_metins_killed,
            total_revenue,
            group_dps,
            effective_hours: effective_seconds / 3600.0,
        }),
    }
}
