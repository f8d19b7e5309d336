//! # Catalog
//!
//! Read-only snapshot of everything the reference data provider supplies:
//! menu items (with variations and add-ons embedded), categories, payment
//! methods and site settings.
//!
//! The snapshot is never mutated after it is built. A `MenuItem` borrowed
//! from it is therefore stable for the whole customization interaction.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Category, MenuItem, PaymentMethod, SiteSettings, CASH_PAYMENT_ID};
use crate::validation::validate_price;

/// Category filter value meaning "show everything".
pub const ALL_CATEGORIES: &str = "all";

/// Reference data snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalog {
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub payment_methods: Vec<PaymentMethod>,
    #[serde(default)]
    pub settings: SiteSettings,
}

impl Catalog {
    /// Parses a catalog from its JSON form.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::catalog::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"{ "items": [] }"#).unwrap();
    /// assert!(catalog.items.is_empty());
    /// assert_eq!(catalog.settings.site_name, "Kamfood Inasal");
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Checks every listed price.
    ///
    /// ## Rules
    /// - Base, discount, variation and add-on prices lie in
    ///   `0..=MAX_PRICE_CENTS`
    /// - A discount price is not above the item's base price
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::catalog::Catalog;
    ///
    /// let json = r#"{ "items": [ { "id": "paa", "name": "Paa", "category": "inasal",
    ///     "base_price_cents": 10000, "discount_price_cents": 12000, "is_on_discount": true } ] }"#;
    /// assert!(Catalog::from_json(json).unwrap().validate_prices().is_err());
    /// ```
    pub fn validate_prices(&self) -> CoreResult<()> {
        for item in &self.items {
            validate_price(&format!("base price of '{}'", item.id), item.base_price_cents)?;

            if let Some(discount) = item.discount_price_cents {
                if !(0..=item.base_price_cents).contains(&discount) {
                    return Err(ValidationError::OutOfRange {
                        field: format!("discount price of '{}'", item.id),
                        min: 0,
                        max: item.base_price_cents,
                    }
                    .into());
                }
            }

            for variation in &item.variations {
                validate_price(
                    &format!("price of variation '{}' on '{}'", variation.id, item.id),
                    variation.price_cents,
                )?;
            }

            for add_on in &item.add_ons {
                validate_price(
                    &format!("price of add-on '{}' on '{}'", add_on.id, item.id),
                    add_on.price_cents,
                )?;
            }
        }

        Ok(())
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Looks up a menu item, failing with `NotFound` when absent.
    pub fn require_item(&self, id: &str) -> CoreResult<&MenuItem> {
        self.item(id)
            .ok_or_else(|| CoreError::not_found("Menu item", id))
    }

    /// Items listed under a category. `None` or `"all"` returns the whole
    /// menu in catalog order.
    pub fn items_in_category<'a>(&'a self, category: Option<&'a str>) -> Vec<&'a MenuItem> {
        match category {
            None | Some(ALL_CATEGORIES) => self.items.iter().collect(),
            Some(id) => self.items.iter().filter(|i| i.category == id).collect(),
        }
    }

    /// Items flagged as popular, for the featured strip.
    pub fn popular_items(&self) -> Vec<&MenuItem> {
        self.items.iter().filter(|i| i.popular).collect()
    }

    /// Active categories in display order.
    pub fn active_categories(&self) -> Vec<&Category> {
        let mut categories: Vec<&Category> = self.categories.iter().filter(|c| c.active).collect();
        categories.sort_by_key(|c| c.sort_order);
        categories
    }

    /// Active payment methods in display order.
    pub fn active_payment_methods(&self) -> Vec<&PaymentMethod> {
        let mut methods: Vec<&PaymentMethod> =
            self.payment_methods.iter().filter(|m| m.active).collect();
        methods.sort_by_key(|m| m.sort_order);
        methods
    }

    pub fn payment_method(&self, id: &str) -> Option<&PaymentMethod> {
        self.payment_methods.iter().find(|m| m.id == id)
    }

    /// The payment method preselected at checkout: the first active one,
    /// falling back to cash.
    pub fn default_payment_method_id(&self) -> &str {
        self.active_payment_methods()
            .first()
            .map(|m| m.id.as_str())
            .unwrap_or(CASH_PAYMENT_ID)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
