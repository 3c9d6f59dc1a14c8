//! Domain models for the farm planner
//!
//! Plain input records (stats, items, drop tables, metins, bosses) plus the
//! schedule timeline emitted by the rotation scheduler.

pub mod boss;
pub mod drop;
pub mod event;
pub mod market;
pub mod metin;
pub mod stats;

use thiserror::Error;

// Re-exports
pub use boss::{Boss, BossConstraints, CooldownType};
pub use drop::{Drop, SourceType};
pub use event::{EventLog, ScheduleEvent};
pub use market::{CatalogItem, MarketItem};
pub use metin::Metin;
pub use stats::CharacterStats;

/// Errors raised when validating caller-supplied records
///
/// Calculators never return these: they degrade malformed numbers to zero.
/// Validation is for callers that want to reject bad input at the boundary.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("Entity {id} has non-positive hp {hp}")]
    NonPositiveHp { id: String, hp: f64 },

    #[error("Boss {id} has non-positive fixed run time {minutes} min")]
    NonPositiveRunTime { id: String, minutes: f64 },

    #[error("Boss {id} has negative cooldown {minutes} min")]
    NegativeCooldown { id: String, minutes: f64 },

    #[error("Drop {item_id} has non-positive count {count}")]
    NonPositiveCount { item_id: String, count: f64 },

    #[error("Drop {item_id} chance {chance} is outside [0, 100]")]
    ChanceOutOfRange { item_id: String, chance: f64 },

    #[error("Item {item_id} has invalid price {price}")]
    InvalidPrice { item_id: String, price: f64 },

    #[error("Unknown {field} '{value}'")]
    UnknownVariant { field: &'static str, value: String },
}
