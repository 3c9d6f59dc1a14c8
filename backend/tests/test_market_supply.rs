//! Tests for market supply simulation
//!
//! One player at 1000 dps for one hour at full efficiency gives a damage
//! pool of 3_600_000.

use metin_farm_core_rs::models::{Drop, MarketItem, Metin};
use metin_farm_core_rs::population::{distribute_weights_evenly, simulate_market_supply, SupplyConfig, SupplyTarget};

fn config() -> SupplyConfig {
    SupplyConfig {
        player_count: 1,
        min_damage: 1000.0,
        max_damage: 1000.0,
        efficiency_percent: 100.0,
        duration_hours: 1.0,
        hits_per_second: 1.0,
    }
}

fn market() -> Vec<MarketItem> {
    vec![
        MarketItem::new("stone", "Soul Stone", 1000.0),
        MarketItem::new("gem", "Gem", 10_000.0),
    ]
}

fn target(id: &str, hp: f64, drops: Vec<Drop>, weight: f64) -> SupplyTarget {
    SupplyTarget {
        metin: Metin::new(id, id, hp, drops).unwrap(),
        weight,
    }
}

#[test]
fn test_even_weights() {
    assert_eq!(distribute_weights_evenly(3), vec![34, 33, 33]);
    assert_eq!(distribute_weights_evenly(1), vec![100]);
    assert!(distribute_weights_evenly(0).is_empty());

    for n in 1..=10 {
        assert_eq!(distribute_weights_evenly(n).iter().sum::<u32>(), 100);
    }
}

#[test]
fn test_single_target_supply() {
    let targets = vec![target("m", 36_000.0, vec![Drop::new("stone", 1.0, 50.0).unwrap()], 100.0)];

    let report = simulate_market_supply(&config(), &targets, &market());
    let stats = report.stats.unwrap();

    assert_eq!(stats.group_dps, 1000.0);
    assert_eq!(stats.effective_hours, 1.0);
    assert_eq!(stats.total_metins_killed, 100);

    assert_eq!(report.supply.len(), 1);
    assert_eq!(report.supply[0].name, "Soul Stone");
    assert_eq!(report.supply[0].count, 50);
    assert_eq!(report.supply[0].total_value, 50_000.0);
    assert_eq!(stats.total_revenue, 50_000.0);
}

#[test]
fn test_weighted_targets_merge_items() {
    let targets = vec![
        target("small", 18_000.0, vec![Drop::new("stone", 1.0, 100.0).unwrap()], 50.0),
        target(
            "big",
            36_000.0,
            vec![Drop::new("stone", 1.0, 100.0).unwrap(), Drop::new("gem", 1.0, 10.0).unwrap()],
            50.0,
        ),
    ];

    let report = simulate_market_supply(&config(), &targets, &market());

    // small: 100 kills, big: 50 kills
    assert_eq!(report.stats.as_ref().unwrap().total_metins_killed, 150);
    assert_eq!(report.supply.len(), 2);
    assert_eq!(report.supply[0].item_id, "stone");
    assert_eq!(report.supply[0].count, 150);
    assert_eq!(report.supply[1].item_id, "gem");
    assert_eq!(report.supply[1].count, 5);
    assert_eq!(report.supply[1].total_value, 50_000.0);
}

#[test]
fn test_unpriced_item_named_by_id() {
    let targets = vec![target("m", 36_000.0, vec![Drop::new("mystery", 1.0, 100.0).unwrap()], 100.0)];

    let report = simulate_market_supply(&config(), &targets, &market());

    assert_eq!(report.supply[0].name, "mystery");
    assert_eq!(report.supply[0].count, 100);
    assert_eq!(report.supply[0].total_value, 0.0);
}

#[test]
fn test_efficiency_scales_pool() {
    let targets = vec![target("m", 36_000.0, vec![Drop::new("stone", 1.0, 100.0).unwrap()], 100.0)];
    let half = SupplyConfig {
        efficiency_percent: 50.0,
        ..config()
    };

    let report = simulate_market_supply(&half, &targets, &market());
    assert_eq!(report.stats.unwrap().total_metins_killed, 50);
}

#[test]
fn test_no_targets_no_report() {
    let report = simulate_market_supply(&config(), &[], &market());

    assert!(report.supply.is_empty());
    assert!(report.stats.is_none());
}
