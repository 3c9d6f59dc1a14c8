//! Tests for loading and running a full scenario from JSON

use metin_farm_core_rs::{CooldownType, Scenario, ScenarioError, ValidationError};

const SCENARIO: &str = r#"{
    "stats": { "damage": 100, "hitsPerSecond": 1, "findTime": 0 },
    "marketItems": [
        { "id": "item_ruh_tasi", "name": "Soul Stone", "price": 1000 },
        { "id": "boss_chest", "name": "Boss Chest", "price": 5000 }
    ],
    "metins": [
        {
            "id": "metin_sohan", "name": "Metin of Sohan", "hp": 6000,
            "drops": [{ "itemId": "item_ruh_tasi", "count": 1, "chance": 50 }]
        }
    ],
    "bosses": [
        {
            "id": "boss_razador", "name": "Razador", "hp": 6000, "fixedRunTime": 10,
            "constraints": { "cooldown": 30, "cooldownType": "exit", "dailyLimit": 5 },
            "drops": [{ "itemId": "boss_chest", "count": 1, "chance": 100, "sourceType": "crafting" }]
        }
    ],
    "multipliers": { "drop": 2 },
    "scheduler": { "dailyPlayHours": 1 }
}"#;

#[test]
fn test_parse_full_scenario() {
    let scenario = Scenario::from_json_str(SCENARIO).unwrap();

    assert_eq!(scenario.market_items.len(), 2);
    assert_eq!(scenario.metins[0].drops[0].item_id, "item_ruh_tasi");
    assert_eq!(scenario.bosses[0].constraints.cooldown_type, CooldownType::Exit);
    assert_eq!(scenario.bosses[0].constraints.daily_limit, 5);
    assert_eq!(scenario.multipliers.drop, 2.0);
    assert_eq!(scenario.scheduler.daily_play_hours, 1.0);
    assert_eq!(scenario.scheduler.min_fast_forward_minutes, 0.1);
}

#[test]
fn test_empty_object_uses_defaults() {
    let scenario = Scenario::from_json_str("{}").unwrap();

    assert_eq!(scenario, Scenario::default());
    assert_eq!(scenario.stats.damage, 5000.0);
    assert_eq!(scenario.multipliers.drop, 1.0);
    assert!(scenario.rank_metins().is_empty());
}

#[test]
fn test_rank_metins_applies_multiplier() {
    let scenario = Scenario::from_json_str(SCENARIO).unwrap();
    let ranked = scenario.rank_metins();

    // 60 s kill, 60 per hour, 2 × 0.5 × 1000 per metin
    assert_eq!(ranked[0].metins_per_hour, 60.0);
    assert_eq!(ranked[0].drop_value_per_metin, 1000.0);
    assert_eq!(ranked[0].hourly_profit, 60_000.0);
}

#[test]
fn test_damage_zones_from_scenario() {
    let scenario = Scenario::from_json_str(SCENARIO).unwrap();
    let zones = scenario.damage_zones();

    assert_eq!(zones.len(), 1);
    assert_eq!(zones[0].best_metin_name, "Metin of Sohan");
}

#[test]
fn test_schedule_bosses_from_scenario() {
    let scenario = Scenario::from_json_str(SCENARIO).unwrap();
    let rotation = scenario.schedule_bosses();

    // Exit cooldown: runs at 0 and 40 within one hour
    assert_eq!(rotation.results[0].real_daily_kills, 2);
    assert_eq!(rotation.results[0].daily_profit, 10_000.0);
    assert_eq!(rotation.total_duration_minutes, 50.0);
}

#[test]
fn test_malformed_json_is_parse_error() {
    let result = Scenario::from_json_str("{ \"metins\": [");
    assert!(matches!(result, Err(ScenarioError::Parse(_))));
}

#[test]
fn test_unknown_cooldown_type_is_parse_error() {
    let json = r#"{ "bosses": [{ "id": "b", "name": "B", "hp": 1, "fixedRunTime": 1,
        "constraints": { "cooldownType": "sometimes" } }] }"#;
    assert!(matches!(Scenario::from_json_str(json), Err(ScenarioError::Parse(_))));
}

#[test]
fn test_invalid_metin_is_rejected() {
    let json = r#"{ "metins": [{ "id": "m", "name": "M", "hp": -5 }] }"#;

    match Scenario::from_json_str(json) {
        Err(ScenarioError::Invalid(ValidationError::NonPositiveHp { id, .. })) => assert_eq!(id, "m"),
        other => panic!("expected invalid hp, got {:?}", other),
    }
}

#[test]
fn test_invalid_drop_chance_is_rejected() {
    let json = r#"{ "metins": [{ "id": "m", "name": "M", "hp": 10,
        "drops": [{ "itemId": "x", "count": 1, "chance": 150 }] }] }"#;

    assert!(matches!(
        Scenario::from_json_str(json),
        Err(ScenarioError::Invalid(ValidationError::ChanceOutOfRange { .. }))
    ));
}
