//! Rotation scheduler engine
//!
//! Discrete-event greedy simulation that spends a fixed daily time budget
//! across bosses with individual cooldowns and daily kill limits.
//!
//! # Step
//!
//! ```text
//! 1. Eligible bosses: killable, off cooldown, daily limit left, run fits the budget
//! 2. Pick the eligible boss with the highest efficiency (profit per active minute);
//!    ties go to the earlier boss in the input list
//! 3. Run it: advance time by its active time, book profit, start its cooldown
//! 4. Nothing eligible: fast-forward to the earliest cooldown end among bosses
//!    whose run still fits the budget from that point (at least
//!    `min_fast_forward_minutes`), or stop when no such boss remains
//! ```
//!
//! This is a myopic heuristic, not an exact optimizer.
//!
//! # Example
//!
//! ```rust
//! use metin_farm_core_rs::{calculate_all_bosses, CharacterStats};
//! use metin_farm_core_rs::models::{Boss, BossConstraints};
//!
//! let boss = Boss::new("b1", "Razador", 6000.0, 1.0, BossConstraints::default(), vec![]).unwrap();
//! let stats = CharacterStats::new(100.0, 1.0, 0.0);
//!
//! let result = calculate_all_bosses(&[boss], &stats, 1.0, &[]);
//! assert_eq!(result.results[0].real_daily_kills, 60);
//! assert_eq!(result.total_duration_minutes, 60.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::time::Timeline;
use crate::models::{Boss, CharacterStats, CooldownType, EventLog, MarketItem, ScheduleEvent};
use crate::profit::boss::{calculate_boss_metrics, time_spent_minutes, BossMetrics};

// ============================================================================
// Configuration Types
// ============================================================================

/// Scheduler configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SchedulerConfig {
    /// Length of the play day (hours)
    pub daily_play_hours: f64,

    /// Loop guard. Reaching it means suspect input and is logged.
    pub max_iterations: usize,

    /// Smallest forward jump when no boss is eligible (minutes)
    pub min_fast_forward_minutes: f64,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            daily_play_hours: 4.0,
            max_iterations: 10_000,
            min_fast_forward_minutes: 0.1,
        }
    }
}

impl SchedulerConfig {
    pub fn with_daily_play_hours(daily_play_hours: f64) -> Self {
        Self {
            daily_play_hours,
            ..Self::default()
        }
    }

    /// Fast-forward granularity; non-positive values fall back to 0.1 min
    fn fast_forward_step(&self) -> f64 {
        if self.min_fast_forward_minutes.is_finite() && self.min_fast_forward_minutes > 0.0 {
            self.min_fast_forward_minutes
        } else {
            Self::default().min_fast_forward_minutes
        }
    }
}

// ============================================================================
// Results
// ============================================================================

/// Daily outcome for one boss
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BossResult {
    pub boss_id: String,
    pub boss_name: String,

    /// Full rotation time per run, cooldown included (minutes)
    pub cycle_time_minutes: f64,

    /// Active minutes per run
    pub active_time_minutes: f64,

    pub real_daily_kills: u32,
    pub daily_profit: f64,
    pub profit_per_cycle: f64,

    /// Active time spent on this boss (hours)
    pub time_required_hours: f64,

    /// 0 = unlimited
    pub daily_limit: u32,
    pub is_unkillable: bool,
}

/// Outcome of a full scheduling run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RotationResult {
    /// Per-boss outcome, highest daily profit first
    pub results: Vec<BossResult>,

    /// Simulation clock when the loop stopped (minutes)
    pub total_duration_minutes: f64,

    /// Daily budget the run was given (minutes)
    pub budget_minutes: f64,

    pub iterations: usize,
    pub iteration_cap_reached: bool,

    /// Every run and jump, in order
    pub schedule: EventLog,
}

impl RotationResult {
    pub fn total_daily_profit(&self) -> f64 {
        self.results.iter().map(|r| r.daily_profit).sum()
    }

    pub fn total_daily_kills(&self) -> u32 {
        self.results.iter().map(|r| r.real_daily_kills).sum()
    }
}

/// What a single scheduler step did
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Ran {
        boss_id: String,
        start_minute: f64,
        finish_minute: f64,
    },
    FastForwarded {
        from_minute: f64,
        to_minute: f64,
    },
    Finished,
}

// ============================================================================
// Simulation State
// ============================================================================

/// Per-boss simulation state, private to one scheduling run
#[derive(Debug, Clone)]
struct BossSimState {
    boss_name: String,
    cooldown_minutes: f64,
    cooldown_type: CooldownType,
    metrics: BossMetrics,

    next_available_time: f64,
    /// `None` = unlimited
    remaining_daily_limit: Option<u32>,
    run_count: u32,
    total_profit: f64,
}

impl BossSimState {
    fn new(boss: &Boss, metrics: BossMetrics) -> Self {
        let remaining_daily_limit = match metrics.daily_limit {
            0 => None,
            limit => Some(limit),
        };

        Self {
            boss_name: boss.name.clone(),
            cooldown_minutes: boss.constraints.cooldown_minutes(),
            cooldown_type: boss.constraints.cooldown_type,
            metrics,
            next_available_time: 0.0,
            remaining_daily_limit,
            run_count: 0,
            total_profit: 0.0,
        }
    }

    fn has_capacity(&self) -> bool {
        self.remaining_daily_limit.map_or(true, |remaining| remaining > 0)
    }

    /// Killable bosses that can still run today
    fn is_pending(&self) -> bool {
        !self.metrics.is_unkillable && self.has_capacity()
    }

    /// Pending and able to finish a run inside the budget once off cooldown.
    /// Time only moves forward, so a boss that fails this never runs again today.
    fn can_still_run(&self, time: &Timeline) -> bool {
        self.is_pending() && time.fits_at(self.next_available_time, self.metrics.active_time_minutes)
    }

    fn is_eligible(&self, time: &Timeline) -> bool {
        self.is_pending()
            && self.next_available_time <= time.current_minute()
            && time.fits(self.metrics.active_time_minutes)
    }

    fn record_run(&mut self, start_minute: f64, finish_minute: f64) {
        self.run_count += 1;
        if let Some(remaining) = self.remaining_daily_limit.as_mut() {
            *remaining -= 1;
        }
        self.total_profit += self.metrics.profit_per_cycle;
        self.next_available_time = self
            .cooldown_type
            .next_available(start_minute, finish_minute, self.cooldown_minutes);
    }

    fn into_result(self) -> BossResult {
        BossResult {
            time_required_hours: time_spent_minutes(&self.metrics, self.run_count) / 60.0,
            boss_id: self.metrics.boss_id,
            boss_name: self.boss_name,
            cycle_time_minutes: self.metrics.cycle_time_minutes,
            active_time_minutes: self.metrics.active_time_minutes,
            real_daily_kills: self.run_count,
            daily_profit: self.total_profit,
            profit_per_cycle: self.metrics.profit_per_cycle,
            daily_limit: self.metrics.daily_limit,
            is_unkillable: self.metrics.is_unkillable,
        }
    }
}

// ============================================================================
// Scheduler
// ============================================================================

/// Steppable greedy boss rotation scheduler
///
/// State is built fresh from the inputs and consumed by `run`; nothing
/// outlives a scheduling run.
#[derive(Debug)]
pub struct RotationScheduler {
    states: Vec<BossSimState>,
    time: Timeline,
    config: SchedulerConfig,
    events: EventLog,
    iterations: usize,
    iteration_cap_reached: bool,
    finished: bool,
}

impl RotationScheduler {
    /// Prepare a scheduling run
    pub fn new(bosses: &[Boss], stats: &CharacterStats, market_items: &[MarketItem], config: SchedulerConfig) -> Self {
        let states = bosses
            .iter()
            .map(|boss| BossSimState::new(boss, calculate_boss_metrics(boss, stats, market_items)))
            .collect();

        Self {
            states,
            time: Timeline::from_hours(config.daily_play_hours),
            config,
            events: EventLog::new(),
            iterations: 0,
            iteration_cap_reached: false,
            finished: false,
        }
    }

    pub fn current_minute(&self) -> f64 {
        self.time.current_minute()
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn schedule(&self) -> &EventLog {
        &self.events
    }

    /// Execute one scheduler iteration
    pub fn step(&mut self) -> StepOutcome {
        if self.finished {
            return StepOutcome::Finished;
        }
        if !self.time.has_time_left() {
            return self.finish();
        }
        if self.iterations >= self.config.max_iterations {
            warn!(
                iterations = self.iterations,
                minute = self.time.current_minute(),
                budget = self.time.budget_minutes(),
                "rotation scheduler hit its iteration cap; check boss definitions for zero-duration runs"
            );
            self.events.log(ScheduleEvent::IterationCapReached {
                minute: self.time.current_minute(),
                iterations: self.iterations,
            });
            self.iteration_cap_reached = true;
            return self.finish();
        }
        self.iterations += 1;

        match self.select_boss() {
            Some(index) => self.execute_run(index),
            None => self.fast_forward(),
        }
    }

    /// Run to completion and summarize
    pub fn run(mut self) -> RotationResult {
        while self.step() != StepOutcome::Finished {}

        let mut results: Vec<BossResult> = self.states.into_iter().map(BossSimState::into_result).collect();
        // sort_by is stable
        results.sort_by(|a, b| b.daily_profit.total_cmp(&a.daily_profit));

        RotationResult {
            results,
            total_duration_minutes: self.time.current_minute(),
            budget_minutes: self.time.budget_minutes(),
            iterations: self.iterations,
            iteration_cap_reached: self.iteration_cap_reached,
            schedule: self.events,
        }
    }

    fn finish(&mut self) -> StepOutcome {
        self.finished = true;
        StepOutcome::Finished
    }

    /// Highest-efficiency eligible boss; the first one wins ties
    fn select_boss(&self) -> Option<usize> {
        let mut selected: Option<usize> = None;
        for (index, state) in self.states.iter().enumerate() {
            if !state.is_eligible(&self.time) {
                continue;
            }
            match selected {
                Some(best) if self.states[best].metrics.efficiency >= state.metrics.efficiency => {}
                _ => selected = Some(index),
            }
        }
        selected
    }

    fn execute_run(&mut self, index: usize) -> StepOutcome {
        let state = &mut self.states[index];
        let start_minute = self.time.current_minute();
        let duration = state.metrics.active_time_minutes;
        let finish_minute = start_minute + duration;

        state.record_run(start_minute, finish_minute);
        self.time.advance(duration);

        debug!(
            boss_id = %state.metrics.boss_id,
            start_minute,
            finish_minute,
            next_available = state.next_available_time,
            "boss run scheduled"
        );
        self.events.log(ScheduleEvent::Run {
            boss_id: state.metrics.boss_id.clone(),
            start_minute,
            finish_minute,
            profit: state.metrics.profit_per_cycle,
        });

        StepOutcome::Ran {
            boss_id: state.metrics.boss_id.clone(),
            start_minute,
            finish_minute,
        }
    }

    fn fast_forward(&mut self) -> StepOutcome {
        let next_event = self
            .states
            .iter()
            .filter(|s| s.can_still_run(&self.time))
            .map(|s| s.next_available_time)
            .fold(None, |min: Option<f64>, t| Some(min.map_or(t, |m| m.min(t))));

        let Some(next_event) = next_event else {
            // Nothing left that can still finish a run today
            return self.finish();
        };
        if next_event > self.time.budget_minutes() {
            return self.finish();
        }

        let from_minute = self.time.current_minute();
        let to_minute = self.time.jump_to(next_event, self.config.fast_forward_step());

        debug!(from_minute, to_minute, "no boss eligible, fast-forwarding");
        self.events.log(ScheduleEvent::FastForward { from_minute, to_minute });

        StepOutcome::FastForwarded { from_minute, to_minute }
    }
}

/// Schedule a day of boss runs with default scheduler settings
pub fn calculate_all_bosses(
    bosses: &[Boss],
    stats: &CharacterStats,
    daily_play_hours: f64,
    market_items: &[MarketItem],
) -> RotationResult {
    RotationScheduler::new(
        bosses,
        stats,
        market_items,
        SchedulerConfig::with_daily_play_hours(daily_play_hours),
    )
    .run()
}
