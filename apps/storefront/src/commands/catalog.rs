//! # Catalog Commands
//!
//! Read-only views of the menu and reference data.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  [ All ] [ Inasal ] [ Rice Meals ] [ Drinks ]   ◄── get_categories()    │
//! │                                                                         │
//! │  ┌────────────────────┐  ┌────────────────────┐                         │
//! │  │ Chicken Paa   -17% │  │ Pork Belly         │  ◄── get_menu(cat)      │
//! │  │ ₱100.00  (₱120.00) │  │ ₱150.00            │                         │
//! │  │ [ Customize ]  x2  │  │ [ Add to Cart ]    │                         │
//! │  └────────────────────┘  └────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inasal_core::{Category, MenuItem, PaymentMethod, SiteSettings};
use serde::Serialize;
use tracing::debug;

use crate::state::{CartState, CatalogState};

/// One menu card with the figures the UI shows on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuCard {
    pub item: MenuItem,

    /// Price before modifiers, discount applied.
    pub effective_price_cents: i64,

    /// Whole-percent discount badge, when a discount is active.
    pub discount_percent: Option<i64>,

    /// Units of this item across all cart lines.
    pub quantity_in_cart: i64,

    /// Shows "Customize" instead of "Add to Cart".
    pub customizable: bool,
}

impl MenuCard {
    fn new(item: &MenuItem, quantity_in_cart: i64) -> Self {
        MenuCard {
            item: item.clone(),
            effective_price_cents: item.effective_price().cents(),
            discount_percent: item.discount_percent(),
            quantity_in_cart,
            customizable: item.has_customizations(),
        }
    }
}

/// Lists menu cards, optionally filtered by category id.
///
/// ## Arguments
/// * `category` - Category id; `None` or `"all"` lists the whole menu
pub fn get_menu(catalog: &CatalogState, cart: &CartState, category: Option<&str>) -> Vec<MenuCard> {
    debug!(category = ?category, "get_menu command");

    let items = catalog.catalog().items_in_category(category);
    cart.with_cart(|c| {
        items
            .into_iter()
            .map(|item| MenuCard::new(item, c.quantity_for_item(&item.id)))
            .collect()
    })
}

/// Lists popular items for the featured strip.
pub fn get_popular_items(catalog: &CatalogState, cart: &CartState) -> Vec<MenuCard> {
    debug!("get_popular_items command");

    let items = catalog.catalog().popular_items();
    cart.with_cart(|c| {
        items
            .into_iter()
            .map(|item| MenuCard::new(item, c.quantity_for_item(&item.id)))
            .collect()
    })
}

/// Lists active categories in display order.
pub fn get_categories(catalog: &CatalogState) -> Vec<Category> {
    debug!("get_categories command");
    catalog
        .catalog()
        .active_categories()
        .into_iter()
        .cloned()
        .collect()
}

/// Lists active payment methods in display order.
pub fn get_payment_methods(catalog: &CatalogState) -> Vec<PaymentMethod> {
    debug!("get_payment_methods command");
    catalog
        .catalog()
        .active_payment_methods()
        .into_iter()
        .cloned()
        .collect()
}

pub fn get_site_settings(catalog: &CatalogState) -> SiteSettings {
    debug!("get_site_settings command");
    catalog.catalog().settings.clone()
}
