//! Damage progression analysis

pub mod zones;

pub use zones::{
    analyze_next_tier, calculate_damage_zones, calculate_damage_zones_with, calculate_smart_limit, zone_color,
    DamageZone, SweepConfig, TierAnalysis, ZoneRanking,
};
