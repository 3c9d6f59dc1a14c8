//! Calculator Property Tests
//!
//! Properties that must hold for any input: ranking order, budget
//! adherence, daily limits and zone contiguity.

use proptest::prelude::*;

use metin_farm_core_rs::{
    calculate_all_bosses, calculate_all_metins, calculate_damage_zones, Boss, BossConstraints, CharacterStats,
    CooldownType, Drop, DropMultipliers, MarketItem, Metin, RotationResult,
};

const ITEM_COUNT: usize = 4;

fn item_id(index: usize) -> String {
    format!("item_{}", index)
}

prop_compose! {
    fn arb_market()(prices in prop::collection::vec(0.0f64..1_000_000.0, ITEM_COUNT)) -> Vec<MarketItem> {
        prices
            .into_iter()
            .enumerate()
            .map(|(i, price)| MarketItem::new(item_id(i), format!("Item {}", i), price))
            .collect()
    }
}

prop_compose! {
    fn arb_drop()(item in 0..ITEM_COUNT, count in 1.0f64..5.0, chance in 0.0f64..=100.0) -> Drop {
        Drop {
            item_id: item_id(item),
            source_type: Default::default(),
            count,
            chance,
        }
    }
}

prop_compose! {
    fn arb_metin(index: usize)(hp in 100.0f64..500_000.0, drops in prop::collection::vec(arb_drop(), 0..3)) -> Metin {
        Metin {
            id: format!("metin_{}", index),
            name: format!("Metin {}", index),
            hp,
            drops,
        }
    }
}

prop_compose! {
    fn arb_boss(index: usize)(
        hp in 1.0f64..5_000_000.0,
        // Mostly short runs, sometimes runs that outlast the remaining day
        fixed_run_time in prop_oneof![3 => 0.5f64..30.0, 1 => 600.0f64..2_000.0],
        cooldown in 0.0f64..120.0,
        exit in any::<bool>(),
        daily_limit in 0u32..6,
        drops in prop::collection::vec(arb_drop(), 0..3),
    ) -> Boss {
        Boss {
            id: format!("boss_{}", index),
            name: format!("Boss {}", index),
            hp,
            fixed_run_time,
            constraints: BossConstraints {
                cooldown,
                cooldown_type: if exit { CooldownType::Exit } else { CooldownType::Entry },
                daily_limit,
                min_level: 0,
            },
            drops,
        }
    }
}

prop_compose! {
    fn arb_stats()(damage in 0.0f64..20_000.0, hits_per_second in 0.5f64..4.0, find_time in 0.0f64..30.0) -> CharacterStats {
        CharacterStats::new(damage, hits_per_second, find_time)
    }
}

prop_compose! {
    /// Low damage makes kills of tough bosses outlast the whole day
    fn arb_low_dps_stats()(damage in 1.0f64..50.0, hits_per_second in 0.5f64..2.0) -> CharacterStats {
        CharacterStats::new(damage, hits_per_second, 0.0)
    }
}

fn arb_boss_stats() -> impl Strategy<Value = CharacterStats> {
    prop_oneof![3 => arb_stats(), 1 => arb_low_dps_stats()]
}

fn arb_metins() -> impl Strategy<Value = Vec<Metin>> {
    (arb_metin(0), arb_metin(1), arb_metin(2), arb_metin(3)).prop_map(|(a, b, c, d)| vec![a, b, c, d])
}

fn arb_bosses() -> impl Strategy<Value = Vec<Boss>> {
    (arb_boss(0), arb_boss(1), arb_boss(2)).prop_map(|(a, b, c)| vec![a, b, c])
}

fn active_minutes_spent(result: &RotationResult) -> f64 {
    result
        .results
        .iter()
        .filter(|r| r.real_daily_kills > 0)
        .map(|r| f64::from(r.real_daily_kills) * r.active_time_minutes)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn metin_ranking_is_descending(
        metins in arb_metins(),
        stats in arb_stats(),
        market in arb_market(),
        drop in 0.5f64..3.0,
    ) {
        let ranked = calculate_all_metins(&metins, DropMultipliers { drop }, &stats, &market);

        prop_assert_eq!(ranked.len(), metins.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].hourly_profit >= pair[1].hourly_profit,
                "ranking out of order: {} < {}", pair[0].hourly_profit, pair[1].hourly_profit);
        }
        for calc in &ranked {
            prop_assert!(calc.hourly_profit.is_finite() && calc.hourly_profit >= 0.0);
        }
    }

    #[test]
    fn rotation_stays_within_budget(
        bosses in arb_bosses(),
        stats in arb_boss_stats(),
        market in arb_market(),
        hours in 0.0f64..24.0,
    ) {
        let result = calculate_all_bosses(&bosses, &stats, hours, &market);
        let budget = hours * 60.0;

        prop_assert!(result.total_duration_minutes <= budget + 0.1 + 1e-9,
            "duration {} exceeds budget {}", result.total_duration_minutes, budget);
        prop_assert!(active_minutes_spent(&result) <= result.total_duration_minutes + 1e-6);
        prop_assert!(!result.iteration_cap_reached);
    }

    #[test]
    fn rotation_respects_daily_limits(
        bosses in arb_bosses(),
        stats in arb_boss_stats(),
        market in arb_market(),
        hours in 0.0f64..24.0,
    ) {
        let result = calculate_all_bosses(&bosses, &stats, hours, &market);

        for boss in &result.results {
            if boss.daily_limit > 0 {
                prop_assert!(boss.real_daily_kills <= boss.daily_limit);
            }
            if boss.is_unkillable {
                prop_assert_eq!(boss.real_daily_kills, 0);
                prop_assert_eq!(boss.daily_profit, 0.0);
            }
        }
        for pair in result.results.windows(2) {
            prop_assert!(pair[0].daily_profit >= pair[1].daily_profit);
        }
    }

    #[test]
    fn rotation_is_deterministic(
        bosses in arb_bosses(),
        stats in arb_boss_stats(),
        market in arb_market(),
        hours in 0.0f64..24.0,
    ) {
        let first = calculate_all_bosses(&bosses, &stats, hours, &market);
        let second = calculate_all_bosses(&bosses, &stats, hours, &market);
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn damage_zones_are_contiguous(
        metins in arb_metins(),
        stats in arb_stats(),
        market in arb_market(),
    ) {
        let zones = calculate_damage_zones(&metins, DropMultipliers::default(), &stats, &market);

        prop_assert!(!zones.is_empty());
        prop_assert_eq!(zones[0].min_damage, 1000.0);
        for zone in &zones {
            prop_assert!(zone.min_damage <= zone.max_damage);
            prop_assert!(zone.rankings.len() <= 3);
        }
        for pair in zones.windows(2) {
            prop_assert!(pair[0].max_damage < pair[1].min_damage);
            prop_assert!(pair[1].min_damage - pair[0].max_damage <= 1000.0);
            prop_assert!(pair[0].best_metin_id != pair[1].best_metin_id);
        }
    }
}
