//! Boss metrics
//!
//! Per-boss kill time, active run time, full rotation cycle and per-run
//! profit. These feed the rotation scheduler.
//!
//! # Cooldown semantics
//!
//! - `Entry`: the timer starts at run entry and overlaps the run, so
//!   `cycle = max(active, cooldown)`
//! - `Exit`: the timer starts after the run, so `cycle = active + cooldown`
//!
//! A boss with zero DPS is unkillable (`kill_time = ∞`), unlike a metin,
//! which is treated as an instant kill.

use serde::{Deserialize, Serialize};

use crate::models::stats::sanitize;
use crate::models::{Boss, CharacterStats, MarketItem};
use crate::pricing::drop_table_value;

/// Run time used when a boss definition has none (minutes)
pub const DEFAULT_FIXED_RUN_TIME_MINUTES: f64 = 5.0;

/// Metrics of one boss at the given stats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossMetrics {
    pub boss_id: String,
    pub boss_name: String,

    /// Seconds to kill the boss; infinite when unkillable
    pub kill_time: f64,

    /// Minutes one run occupies the player
    pub active_time_minutes: f64,

    /// Minutes from one run start to the earliest next start
    pub cycle_time_minutes: f64,

    /// 0 = unlimited
    pub daily_limit: u32,

    pub total_drop_value: f64,
    pub profit_per_cycle: f64,

    /// Profit per active minute; scheduler priority key
    pub efficiency: f64,

    /// Current stats cannot defeat the boss
    pub is_unkillable: bool,
}

/// Calculate metrics for a single boss
///
/// `find_time` plays no part: a boss run has its own fixed duration.
///
/// # Example
/// ```
/// use metin_farm_core_rs::{calculate_boss_metrics, CharacterStats};
/// use metin_farm_core_rs::models::{Boss, BossConstraints, CooldownType};
///
/// let boss = Boss::new("b1", "Razador", 6000.0, 1.0, BossConstraints {
///     cooldown: 30.0,
///     cooldown_type: CooldownType::Exit,
///     ..Default::default()
/// }, vec![]).unwrap();
///
/// let metrics = calculate_boss_metrics(&boss, &CharacterStats::new(100.0, 1.0, 0.0), &[]);
/// assert_eq!(metrics.kill_time, 60.0);
/// assert_eq!(metrics.active_time_minutes, 1.0);
/// assert_eq!(metrics.cycle_time_minutes, 31.0);
/// ```
pub fn calculate_boss_metrics(boss: &Boss, stats: &CharacterStats, market_items: &[MarketItem]) -> BossMetrics {
    let hp = if boss.hp.is_finite() && boss.hp > 0.0 { boss.hp } else { 1.0 };

    let dps = stats.dps();
    let is_unkillable = dps <= 0.0;
    let kill_time = if is_unkillable { f64::INFINITY } else { hp / dps };

    let fixed_run_time_minutes = if boss.fixed_run_time.is_finite() && boss.fixed_run_time > 0.0 {
        boss.fixed_run_time
    } else {
        DEFAULT_FIXED_RUN_TIME_MINUTES
    };

    // The run cannot end before its fixed duration, however fast the kill
    let active_time_minutes = kill_time.max(fixed_run_time_minutes * 60.0) / 60.0;

    let cooldown_minutes = boss.constraints.cooldown_minutes();
    let cycle_time_minutes = boss
        .constraints
        .cooldown_type
        .cycle_minutes(active_time_minutes, cooldown_minutes);

    let total_drop_value = drop_table_value(&boss.drops, 1.0, market_items);

    let efficiency = if !is_unkillable && active_time_minutes > 0.0 {
        total_drop_value / active_time_minutes
    } else {
        0.0
    };

    BossMetrics {
        boss_id: boss.id.clone(),
        boss_name: boss.name.clone(),
        kill_time,
        active_time_minutes,
        cycle_time_minutes,
        daily_limit: boss.constraints.daily_limit,
        total_drop_value,
        profit_per_cycle: total_drop_value,
        efficiency,
        is_unkillable,
    }
}

/// Active minutes spent on `runs` runs; 0 when there were none
pub(crate) fn time_spent_minutes(metrics: &BossMetrics, runs: u32) -> f64 {
    if runs == 0 {
        0.0
    } else {
        f64::from(runs) * sanitize(metrics.active_time_minutes)
    }
}
