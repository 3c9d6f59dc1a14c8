//! Price resolution
//!
//! Resolves an item identifier to a unit market price. Crafted-item prices
//! are pushed into the market list before calculation, so a single flat
//! lookup serves both sources.
//!
//! Lookup order:
//! 1. Exact match on `id` or `original_id`
//! 2. Case-insensitive match on `id`
//!
//! Unresolved items price at 0. Resolution never fails.

use crate::models::{Drop, MarketItem};

/// Find the market entry for `item_id`
pub fn find_item<'a>(item_id: &str, market_items: &'a [MarketItem]) -> Option<&'a MarketItem> {
    if item_id.is_empty() {
        return None;
    }

    market_items
        .iter()
        .find(|item| item.id == item_id || item.original_id.as_deref() == Some(item_id))
        .or_else(|| {
            let search_id = item_id.to_lowercase();
            market_items
                .iter()
                .find(|item| item.id.to_lowercase() == search_id)
        })
}

/// Resolve the unit price of `item_id`
///
/// # Example
/// ```
/// use metin_farm_core_rs::{resolve_price, MarketItem};
///
/// let items = vec![MarketItem::new("Item_Ruh_Tasi", "Soul Stone", 150_000.0)];
/// assert_eq!(resolve_price("Item_Ruh_Tasi", &items), 150_000.0);
/// assert_eq!(resolve_price("item_ruh_tasi", &items), 150_000.0);
/// assert_eq!(resolve_price("UNKNOWN_ID", &[]), 0.0);
/// ```
pub fn resolve_price(item_id: &str, market_items: &[MarketItem]) -> f64 {
    find_item(item_id, market_items).map_or(0.0, MarketItem::unit_price)
}

/// Expected value of one drop entry per kill
///
/// `count × multiplier × (chance / 100) × unit_price`. The drop's source
/// type does not change resolution.
pub fn drop_value(drop: &Drop, multiplier: f64, market_items: &[MarketItem]) -> f64 {
    drop.expected_count(multiplier) * resolve_price(&drop.item_id, market_items)
}

/// Expected value of a whole drop table per kill
pub fn drop_table_value(drops: &[Drop], multiplier: f64, market_items: &[MarketItem]) -> f64 {
    drops
        .iter()
        .map(|drop| drop_value(drop, multiplier, market_items))
        .sum()
}
