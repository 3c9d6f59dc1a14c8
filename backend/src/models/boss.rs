//! Boss model
//!
//! Bosses differ from metins in three ways:
//! - A run has a fixed minimum duration (`fixed_run_time`, minutes)
//! - A cooldown separates consecutive runs, started either at entry or at exit
//! - A daily kill limit caps the number of runs per day (0 = unlimited)

use serde::{Deserialize, Serialize};

use super::{Drop, ValidationError};

/// When the boss cooldown timer starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CooldownType {
    /// Timer starts when the run starts, so it overlaps with the run itself
    #[default]
    Entry,

    /// Timer starts only after the run completes
    Exit,
}

impl CooldownType {
    /// Time from one run start to the earliest next start (minutes)
    pub fn cycle_minutes(self, active_minutes: f64, cooldown_minutes: f64) -> f64 {
        match self {
            CooldownType::Entry => active_minutes.max(cooldown_minutes),
            CooldownType::Exit => active_minutes + cooldown_minutes,
        }
    }

    /// Earliest time the boss can be entered again after a run
    pub fn next_available(self, start_minute: f64, finish_minute: f64, cooldown_minutes: f64) -> f64 {
        match self {
            CooldownType::Entry => finish_minute.max(start_minute + cooldown_minutes),
            CooldownType::Exit => finish_minute + cooldown_minutes,
        }
    }
}

impl std::str::FromStr for CooldownType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entry" => Ok(CooldownType::Entry),
            "exit" => Ok(CooldownType::Exit),
            other => Err(ValidationError::UnknownVariant {
                field: "cooldownType",
                value: other.to_string(),
            }),
        }
    }
}

/// Run constraints for a boss
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BossConstraints {
    /// Cooldown between runs (minutes)
    pub cooldown: f64,

    pub cooldown_type: CooldownType,

    /// Maximum runs per day, 0 = unlimited
    pub daily_limit: u32,

    /// Minimum character level to enter. Informational only.
    pub min_level: u32,
}

impl BossConstraints {
    /// Cooldown in minutes, 0 when negative or non-finite
    pub fn cooldown_minutes(&self) -> f64 {
        super::stats::sanitize(self.cooldown)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Boss {
    pub id: String,
    pub name: String,
    pub hp: f64,

    /// Minimum run duration (minutes)
    pub fixed_run_time: f64,

    #[serde(default)]
    pub constraints: BossConstraints,

    #[serde(default)]
    pub drops: Vec<Drop>,
}

impl Boss {
    /// Create a validated boss definition
    ///
    /// # Errors
    /// Returns `ValidationError` on an empty id, non-positive hp or run time,
    /// negative cooldown, or an invalid drop.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hp: f64,
        fixed_run_time: f64,
        constraints: BossConstraints,
        drops: Vec<Drop>,
    ) -> Result<Self, ValidationError> {
        let boss = Self {
            id: id.into(),
            name: name.into(),
            hp,
            fixed_run_time,
            constraints,
            drops,
        };
        boss.validate()?;
        Ok(boss)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "id" });
        }
        if !(self.hp.is_finite() && self.hp > 0.0) {
            return Err(ValidationError::NonPositiveHp {
                id: self.id.clone(),
                hp: self.hp,
            });
        }
        if !(self.fixed_run_time.is_finite() && self.fixed_run_time > 0.0) {
            return Err(ValidationError::NonPositiveRunTime {
                id: self.id.clone(),
                minutes: self.fixed_run_time,
            });
        }
        if !(self.constraints.cooldown.is_finite() && self.constraints.cooldown >= 0.0) {
            return Err(ValidationError::NegativeCooldown {
                id: self.id.clone(),
                minutes: self.constraints.cooldown,
            });
        }
        self.drops.iter().try_for_each(Drop::validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_cooldown_overlaps_run() {
        assert_eq!(CooldownType::Entry.cycle_minutes(10.0, 30.0), 30.0);
        assert_eq!(CooldownType::Entry.cycle_minutes(40.0, 30.0), 40.0);
        assert_eq!(CooldownType::Entry.next_available(0.0, 10.0, 30.0), 30.0);
    }

    #[test]
    fn test_exit_cooldown_follows_run() {
        assert_eq!(CooldownType::Exit.cycle_minutes(10.0, 30.0), 40.0);
        assert_eq!(CooldownType::Exit.next_available(0.0, 10.0, 30.0), 40.0);
    }

    #[test]
    fn test_constraints_default_from_empty_json() {
        let constraints: BossConstraints = serde_json::from_str("{}").unwrap();
        assert_eq!(constraints.cooldown_type, CooldownType::Entry);
        assert_eq!(constraints.daily_limit, 0);
    }

    #[test]
    fn test_rejects_zero_run_time() {
        let result = Boss::new("b", "Boss", 100.0, 0.0, BossConstraints::default(), vec![]);
        assert!(matches!(result, Err(ValidationError::NonPositiveRunTime { .. })));
    }
}
