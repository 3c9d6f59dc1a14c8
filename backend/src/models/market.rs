//! Market item model
//!
//! Items come from a global catalog; prices come from the selected price
//! profile. A `MarketItem` is the merged view of both.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Catalog entry without a price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
}

/// Catalog entry with its resolved unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketItem {
    pub id: String,

    /// Alias of `id` kept for crafted-item lookups
    #[serde(default)]
    pub original_id: Option<String>,

    pub name: String,

    #[serde(default)]
    pub category: Option<String>,

    /// Unit price, never negative
    #[serde(default)]
    pub price: f64,
}

impl MarketItem {
    /// Create a priced market item whose `original_id` aliases `id`
    ///
    /// # Example
    /// ```
    /// use metin_farm_core_rs::MarketItem;
    ///
    /// let item = MarketItem::new("item_ruh_tasi", "Soul Stone", 150_000.0);
    /// assert_eq!(item.original_id.as_deref(), Some("item_ruh_tasi"));
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        let id = id.into();
        Self {
            original_id: Some(id.clone()),
            id,
            name: name.into(),
            category: None,
            price,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Price as used by calculations: negative or non-finite reads as 0
    pub fn unit_price(&self) -> f64 {
        super::stats::sanitize(self.price)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "id" });
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "name" });
        }
        if !(self.price.is_finite() && self.price >= 0.0) {
            return Err(ValidationError::InvalidPrice {
                item_id: self.id.clone(),
                price: self.price,
            });
        }
        Ok(())
    }
}
