//! Boss rotation scheduling
//!
//! See `engine.rs` for the simulation loop.

pub mod engine;


pub use engine::{calculate_all_bosses, BossResult, RotationResult, RotationScheduler, SchedulerConfig, StepOutcome};
