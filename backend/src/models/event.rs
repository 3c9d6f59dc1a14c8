//! Schedule timeline produced by the rotation scheduler.
//!
//! Every decision the scheduler takes is recorded in order, so a caller can
//! render the actual daily plan rather than just the per-boss totals.
//!
//! # Example
//!
//! ```rust
//! use metin_farm_core_rs::models::{EventLog, ScheduleEvent};
//!
//! let mut log = EventLog::new();
//! log.log(ScheduleEvent::Run {
//!     boss_id: "boss_razador".to_string(),
//!     start_minute: 0.0,
//!     finish_minute: 15.0,
//!     profit: 2_500_000.0,
//! });
//! assert_eq!(log.runs_for_boss("boss_razador").count(), 1);
//! ```

use serde::{Deserialize, Serialize};

/// A single scheduler decision, stamped with simulation minutes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScheduleEvent {
    /// A boss run was executed
    Run {
        boss_id: String,
        start_minute: f64,
        finish_minute: f64,
        profit: f64,
    },

    /// No boss was eligible; time jumped forward
    FastForward { from_minute: f64, to_minute: f64 },

    /// The loop stopped on its iteration guard instead of a natural end
    IterationCapReached { minute: f64, iterations: usize },
}

impl ScheduleEvent {
    /// Minute at which the event starts
    pub fn minute(&self) -> f64 {
        match self {
            ScheduleEvent::Run { start_minute, .. } => *start_minute,
            ScheduleEvent::FastForward { from_minute, .. } => *from_minute,
            ScheduleEvent::IterationCapReached { minute, .. } => *minute,
        }
    }

    pub fn event_type(&self) -> &'static str {
        match self {
            ScheduleEvent::Run { .. } => "run",
            ScheduleEvent::FastForward { .. } => "fast_forward",
            ScheduleEvent::IterationCapReached { .. } => "iteration_cap_reached",
        }
    }
}

/// Ordered log of schedule events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<ScheduleEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, event: ScheduleEvent) {
        self.events.push(event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn events_of_type<'a>(&'a self, event_type: &'a str) -> impl Iterator<Item = &'a ScheduleEvent> {
        self.events.iter().filter(move |e| e.event_type() == event_type)
    }

    /// Runs of one boss, in execution order
    pub fn runs_for_boss<'a>(&'a self, boss_id: &'a str) -> impl Iterator<Item = &'a ScheduleEvent> {
        self.events
            .iter()
            .filter(move |e| matches!(e, ScheduleEvent::Run { boss_id: id, .. } if id == boss_id))
    }

    /// Total minutes spent inside boss runs
    pub fn busy_minutes(&self) -> f64 {
        self.events
            .iter()
            .map(|e| match e {
                ScheduleEvent::Run {
                    start_minute,
                    finish_minute,
                    ..
                } => finish_minute - start_minute,
                _ => 0.0,
            })
            .sum()
    }
}
