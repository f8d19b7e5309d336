//! # Domain Types
//!
//! Reference data and order-entry types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    MenuItem     │   │   Variation     │   │     AddOn       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │──►│  id, name       │   │  id, name       │       │
//! │  │  base_price     │   │  price (delta)  │   │  category       │       │
//! │  │  discount_price │   └─────────────────┘   │  price (delta)  │       │
//! │  │  variations[]   │──────────────────────────►└─────────────────┘     │
//! │  │  add_ons[]      │                                                    │
//! │  └─────────────────┘                                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Category     │   │ PaymentMethod   │   │  SiteSettings   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All of these arrive from the reference data provider and are treated as
//! immutable snapshots.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

/// Payment method id that is always accepted, listed or not.
pub const CASH_PAYMENT_ID: &str = "cash";

// =============================================================================
// Variation
// =============================================================================

/// A mutually-exclusive size/option choice (e.g. "Regular", "Large").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Variation {
    pub id: String,
    pub name: String,
    /// Price delta in centavos, added on top of the item's effective price.
    pub price_cents: i64,
}

impl Variation {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An independently toggleable extra with its own quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    /// Grouping label in the customization panel (e.g. "extras", "sauce").
    pub category: String,
    /// Unit price delta in centavos. Zero means free.
    pub price_cents: i64,
}

impl AddOn {
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    #[inline]
    pub fn is_free(&self) -> bool {
        self.price_cents == 0
    }
}

// =============================================================================
// Menu Item
// =============================================================================

/// A dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Category id this item is listed under.
    pub category: String,
    #[serde(default)]
    pub image: Option<String>,
    /// Regular price in centavos.
    pub base_price_cents: i64,
    /// Sale price in centavos; only applies while `is_on_discount` is set.
    #[serde(default)]
    pub discount_price_cents: Option<i64>,
    #[serde(default)]
    pub is_on_discount: bool,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default)]
    pub variations: Vec<Variation>,
    #[serde(default)]
    pub add_ons: Vec<AddOn>,
}

fn default_true() -> bool {
    true
}

impl MenuItem {
    /// Returns the regular price as Money.
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }

    /// Returns the active sale price, if any.
    ///
    /// A discount price on its own does nothing; the discount flag must
    /// also be set.
    pub fn active_discount_price(&self) -> Option<Money> {
        if self.is_on_discount {
            self.discount_price_cents.map(Money::from_cents)
        } else {
            None
        }
    }

    /// The price before any modifiers: the sale price when active, else
    /// the base price.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::types::MenuItem;
    ///
    /// let mut item = MenuItem::new("paa", "Paa", "inasal", 10000);
    /// item.discount_price_cents = Some(8000);
    /// assert_eq!(item.effective_price().cents(), 10000); // flag not set
    ///
    /// item.is_on_discount = true;
    /// assert_eq!(item.effective_price().cents(), 8000);
    /// ```
    pub fn effective_price(&self) -> Money {
        self.active_discount_price()
            .unwrap_or_else(|| self.base_price())
    }

    /// Amount saved per unit by the active discount.
    pub fn savings(&self) -> Option<Money> {
        self.active_discount_price().map(|d| self.base_price() - d)
    }

    /// Whole-number discount percentage for the "% OFF" badge.
    ///
    /// `None` unless the sale price is actually below the base price.
    pub fn discount_percent(&self) -> Option<i64> {
        self.savings()
            .filter(|saved| saved.cents() > 0)
            .and_then(|saved| self.base_price().percent_of(saved))
    }

    /// True when the item offers variations or add-ons and therefore needs
    /// the customization panel before it can go into the cart.
    #[inline]
    pub fn has_customizations(&self) -> bool {
        !self.variations.is_empty() || !self.add_ons.is_empty()
    }

    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    pub fn add_on(&self, id: &str) -> Option<&AddOn> {
        self.add_ons.iter().find(|a| a.id == id)
    }

    /// The variation preselected when the customization panel opens.
    pub fn default_variation(&self) -> Option<&Variation> {
        self.variations.first()
    }

    /// Groups add-ons by their category label, preserving the order in
    /// which each category first appears.
    pub fn add_ons_by_category(&self) -> Vec<(&str, Vec<&AddOn>)> {
        let mut groups: Vec<(&str, Vec<&AddOn>)> = Vec::new();
        for add_on in &self.add_ons {
            match groups.iter_mut().find(|(c, _)| *c == add_on.category) {
                Some((_, members)) => members.push(add_on),
                None => groups.push((add_on.category.as_str(), vec![add_on])),
            }
        }
        groups
    }
}

impl MenuItem {
    /// Creates a plain, available item with no modifiers.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        base_price_cents: i64,
    ) -> Self {
        MenuItem {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category: category.into(),
            image: None,
            base_price_cents,
            discount_price_cents: None,
            is_on_discount: false,
            popular: false,
            available: true,
            variations: Vec::new(),
            add_ons: Vec::new(),
        }
    }
}

// =============================================================================
// Category
// =============================================================================

/// A menu section shown in the category nav.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub active: bool,
}

// =============================================================================
// Payment Method
// =============================================================================

/// An e-wallet or bank the customer can pay into before the order is
/// confirmed over chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub account_name: String,
    #[serde(default)]
    pub qr_code_url: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

// =============================================================================
// Service Type
// =============================================================================

/// How the customer receives the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    #[default]
    DineIn,
    Pickup,
    Delivery,
}

impl ServiceType {
    /// Label used in the order message.
    pub fn label(&self) -> &'static str {
        match self {
            ServiceType::DineIn => "Dine-in",
            ServiceType::Pickup => "Pickup",
            ServiceType::Delivery => "Delivery",
        }
    }

    /// Moment a cash payment is collected.
    pub fn cash_collection_point(&self) -> &'static str {
        match self {
            ServiceType::DineIn => "arrival",
            ServiceType::Pickup => "pickup",
            ServiceType::Delivery => "delivery",
        }
    }
}

// =============================================================================
// Site Settings
// =============================================================================

/// Brand settings shown in the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SiteSettings {
    pub site_name: String,
    #[serde(default)]
    pub site_logo: Option<String>,
    #[serde(default)]
    pub site_description: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_currency_code")]
    pub currency_code: String,
}

fn default_currency() -> String {
    "₱".to_string()
}

fn default_currency_code() -> String {
    "PHP".to_string()
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_name: "Kamfood Inasal".to_string(),
            site_logo: None,
            site_description: String::new(),
            currency: default_currency(),
            currency_code: default_currency_code(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn add_on(id: &str, category: &str, price_cents: i64) -> AddOn {
        AddOn {
            id: id.to_string(),
            name: id.to_string(),
            category: category.to_string(),
            price_cents,
        }
    }

    #[test]
    fn test_effective_price_requires_flag_and_price() {
        let mut item = MenuItem::new("paa", "Paa", "inasal", 10000);
        assert_eq!(item.effective_price().cents(), 10000);

        item.is_on_discount = true;
        assert_eq!(item.effective_price().cents(), 10000); // flag without price

        item.discount_price_cents = Some(8000);
        assert_eq!(item.effective_price().cents(), 8000);
        assert_eq!(item.savings(), Some(Money::from_cents(2000)));
        assert_eq!(item.discount_percent(), Some(20));
    }

    #[test]
    fn test_no_negative_discount_badge() {
        let mut item = MenuItem::new("paa", "Paa", "inasal", 10000);
        item.is_on_discount = true;
        item.discount_price_cents = Some(12000);
        assert_eq!(item.discount_percent(), None);

        item.discount_price_cents = Some(10000);
        assert_eq!(item.discount_percent(), None);
    }

    #[test]
    fn test_no_discount_percent_without_flag() {
        let mut item = MenuItem::new("paa", "Paa", "inasal", 10000);
        item.discount_price_cents = Some(8000);
        assert_eq!(item.discount_percent(), None);
        assert_eq!(item.savings(), None);
    }

    #[test]
    fn test_has_customizations() {
        let mut item = MenuItem::new("rice", "Rice", "sides", 2000);
        assert!(!item.has_customizations());

        item.add_ons.push(add_on("gravy", "sauce", 0));
        assert!(item.has_customizations());
    }

    #[test]
    fn test_add_ons_by_category_keeps_first_seen_order() {
        let mut item = MenuItem::new("paa", "Paa", "inasal", 10000);
        item.add_ons = vec![
            add_on("java-rice", "rice", 2500),
            add_on("atchara", "sides", 1000),
            add_on("extra-rice", "rice", 1500),
        ];

        let groups = item.add_ons_by_category();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "rice");
        assert_eq!(groups[0].1.len(), 2);
        assert_eq!(groups[0].1[1].id, "extra-rice");
        assert_eq!(groups[1].0, "sides");
    }

    #[test]
    fn test_menu_item_deserialize_defaults() {
        let json = r#"{
            "id": "halo-halo",
            "name": "Halo-Halo",
            "category": "desserts",
            "base_price_cents": 9500
        }"#;
        let item: MenuItem = serde_json::from_str(json).unwrap();
        assert!(item.available);
        assert!(!item.is_on_discount);
        assert!(item.variations.is_empty());
        assert_eq!(item.default_variation(), None);
    }

    #[test]
    fn test_service_type_serde() {
        let json = serde_json::to_string(&ServiceType::DineIn).unwrap();
        assert_eq!(json, "\"dine-in\"");
        assert_eq!(ServiceType::Delivery.cash_collection_point(), "delivery");
    }
}
