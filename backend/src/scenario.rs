//! Scenario bundle
//!
//! Every input a dashboard hands to the calculators in one record, loadable
//! from the dashboard's JSON state. The bundle is validated on load; the
//! calculators themselves stay infallible.
//!
//! # Example
//!
//! ```rust
//! use metin_farm_core_rs::Scenario;
//!
//! let scenario = Scenario::from_json_str(r#"{
//!     "stats": { "damage": 5000, "hitsPerSecond": 2.5, "findTime": 10 },
//!     "marketItems": [{ "id": "item_ruh_tasi", "name": "Soul Stone", "price": 150000 }],
//!     "metins": [{
//!         "id": "metin_sohan", "name": "Metin of Sohan", "hp": 150000,
//!         "drops": [{ "itemId": "item_ruh_tasi", "count": 1, "chance": 10 }]
//!     }],
//!     "scheduler": { "dailyPlayHours": 2 }
//! }"#).unwrap();
//!
//! assert_eq!(scenario.scheduler.daily_play_hours, 2.0);
//! assert_eq!(scenario.scheduler.max_iterations, 10_000);
//! assert_eq!(scenario.rank_metins().len(), 1);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Boss, CharacterStats, MarketItem, Metin, ValidationError};
use crate::profit::{calculate_all_metins, DropMultipliers, MetinProfit};
use crate::progression::{calculate_damage_zones, DamageZone};
use crate::scheduler::{RotationResult, RotationScheduler, SchedulerConfig};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid scenario: {0}")]
    Invalid(#[from] ValidationError),
}

/// Complete calculator input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Scenario {
    pub stats: CharacterStats,
    pub market_items: Vec<MarketItem>,
    pub metins: Vec<Metin>,
    pub bosses: Vec<Boss>,
    pub multipliers: DropMultipliers,
    pub scheduler: SchedulerConfig,
}

impl Scenario {
    /// Parse and validate a scenario
    ///
    /// # Errors
    /// `ScenarioError::Parse` on malformed JSON, `ScenarioError::Invalid` on
    /// the first record that fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, ScenarioError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        self.market_items.iter().try_for_each(MarketItem::validate)?;
        self.metins.iter().try_for_each(Metin::validate)?;
        self.bosses.iter().try_for_each(Boss::validate)
    }

    pub fn rank_metins(&self) -> Vec<MetinProfit> {
        calculate_all_metins(&self.metins, self.multipliers, &self.stats, &self.market_items)
    }

    pub fn damage_zones(&self) -> Vec<DamageZone> {
        calculate_damage_zones(&self.metins, self.multipliers, &self.stats, &self.market_items)
    }

    pub fn schedule_bosses(&self) -> RotationResult {
        RotationScheduler::new(&self.bosses, &self.stats, &self.market_items, self.scheduler.clone()).run()
    }
}
