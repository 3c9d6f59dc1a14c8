//! Metin Farm Planner Core - Rust Engine
//!
//! Profitability and time-budget engine for MMORPG farming: ranks metins by
//! hourly profit, maps damage ranges to their best metin, and schedules a
//! daily boss rotation under cooldowns and daily limits.
//!
//! # Architecture
//!
//! - **core**: Budget-aware simulation clock
//! - **models**: Input records (stats, items, drops, metins, bosses) and the schedule log
//! - **pricing**: Item id to unit price resolution
//! - **market**: Catalog + price profile merge and item filters
//! - **profit**: Metin and boss profit calculators
//! - **progression**: Damage sweep and best-metin zones
//! - **scheduler**: Greedy boss rotation simulation
//! - **population**: Player distribution and market supply what-ifs
//! - **format**: Currency and duration formatting
//! - **scenario**: JSON-loadable bundle of every calculator input
//!
//! # Critical Invariants
//!
//! 1. Every calculation is a pure function of its inputs; no state survives a call
//! 2. Malformed numbers degrade to 0 (or ∞ for boss kill time); calculators never fail
//! 3. Unresolvable prices are 0, never an error

// Module declarations
pub mod core;
pub mod format;
pub mod market;
pub mod models;
pub mod population;
pub mod pricing;
pub mod profit;
pub mod progression;
pub mod scenario;
pub mod scheduler;

// Re-exports for convenience
pub use crate::core::time::Timeline;
pub use models::{
    Boss, BossConstraints, CharacterStats, CooldownType, Drop, EventLog, MarketItem, Metin, ScheduleEvent,
    SourceType, ValidationError,
};
pub use pricing::resolve_price;
pub use profit::{
    calculate_all_metins, calculate_boss_metrics, calculate_metin_profit, get_best_metin, BossMetrics,
    DropMultipliers, MetinProfit,
};
pub use progression::{analyze_next_tier, calculate_damage_zones, DamageZone, TierAnalysis};
pub use scenario::{Scenario, ScenarioError};
pub use scheduler::{calculate_all_bosses, BossResult, RotationResult, RotationScheduler, SchedulerConfig};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn metin_farm_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
