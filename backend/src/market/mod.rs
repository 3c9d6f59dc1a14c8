//! Market data helpers
//!
//! Merges the global item catalog with a price profile and offers the small
//! filters a dashboard needs on the merged list.

use std::collections::HashMap;

use tracing::{error, warn};

use crate::models::{CatalogItem, MarketItem, ValidationError};

/// Merge catalog entries with a profile's price map
///
/// Items missing from `price_map` are priced at 0. Every merged item's
/// `original_id` aliases its `id`.
///
/// # Example
/// ```
/// use std::collections::HashMap;
/// use metin_farm_core_rs::market::merge_market_data;
/// use metin_farm_core_rs::models::CatalogItem;
///
/// let catalog = vec![
///     CatalogItem { id: "1".into(), name: "Sword".into(), category: None },
///     CatalogItem { id: "2".into(), name: "Shield".into(), category: None },
/// ];
/// let prices = HashMap::from([("1".to_string(), 5000.0)]);
///
/// let merged = merge_market_data(&catalog, &prices);
/// assert_eq!(merged[0].price, 5000.0);
/// assert_eq!(merged[1].price, 0.0);
/// ```
pub fn merge_market_data(catalog: &[CatalogItem], price_map: &HashMap<String, f64>) -> Vec<MarketItem> {
    if catalog.is_empty() {
        warn!("merge_market_data: catalog is empty");
        return Vec::new();
    }

    catalog
        .iter()
        .map(|item| MarketItem {
            id: item.id.clone(),
            original_id: Some(item.id.clone()),
            name: item.name.clone(),
            category: item.category.clone(),
            price: price_map.get(&item.id).copied().unwrap_or(0.0),
        })
        .collect()
}

/// Check every merged item has an id, a name and a non-negative price
///
/// # Errors
/// Returns the first `ValidationError` found. Each invalid item is also
/// logged.
pub fn validate_market_data(market_items: &[MarketItem]) -> Result<(), ValidationError> {
    let mut first_error = None;

    for item in market_items {
        if let Err(e) = item.validate() {
            error!(item_id = %item.id, "validate_market_data: {}", e);
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Items in `category`; `None` returns every item
pub fn items_by_category<'a>(market_items: &'a [MarketItem], category: Option<&str>) -> Vec<&'a MarketItem> {
    match category {
        None => market_items.iter().collect(),
        Some(category) => market_items
            .iter()
            .filter(|item| item.category.as_deref() == Some(category))
            .collect(),
    }
}

/// Items whose name contains `query` (trimmed, case-insensitive)
///
/// A blank query returns every item.
pub fn search_items<'a>(market_items: &'a [MarketItem], query: &str) -> Vec<&'a MarketItem> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return market_items.iter().collect();
    }

    market_items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&query))
        .collect()
}
