//! Metin model
//!
//! A stateless monster template: hit points plus a probabilistic drop table,
//! killed repeatedly for profit.

use serde::{Deserialize, Serialize};

use super::{Drop, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metin {
    pub id: String,
    pub name: String,
    pub hp: f64,
    #[serde(default)]
    pub drops: Vec<Drop>,
}

impl Metin {
    /// Create a validated metin template
    ///
    /// # Errors
    /// Returns `ValidationError` on an empty id, non-positive hp or an
    /// invalid drop.
    ///
    /// # Example
    /// ```
    /// use metin_farm_core_rs::models::{Drop, Metin};
    ///
    /// let metin = Metin::new(
    ///     "metin_sohan",
    ///     "Metin of Sohan",
    ///     150_000.0,
    ///     vec![Drop::new("item_ruh_tasi", 1.0, 10.0).unwrap()],
    /// )
    /// .unwrap();
    /// assert_eq!(metin.drops.len(), 1);
    /// ```
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hp: f64,
        drops: Vec<Drop>,
    ) -> Result<Self, ValidationError> {
        let metin = Self {
            id: id.into(),
            name: name.into(),
            hp,
            drops,
        };
        metin.validate()?;
        Ok(metin)
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
        self.drops.iter().try_for_each(Drop::validate)
    }
}
