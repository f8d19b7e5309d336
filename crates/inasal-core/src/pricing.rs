//! # Pricing
//!
//! Resolves a customer's choices against a menu item and computes the unit
//! price of one configured item.
//!
//! ## Formula
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  unit price = effective price                                           │
//! │             + variation delta                    (if one is chosen)     │
//! │             + Σ (add-on delta × add-on quantity)                        │
//! │                                                                         │
//! │  effective price = discount price   if on discount and price present    │
//! │                  = base price       otherwise                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The same quantity-weighted formula is used whether an item goes straight
//! into the cart or through the customization panel first.
//!
//! ## Example
//! ```rust
//! use inasal_core::pricing::{unit_price, AddOnSelection};
//! use inasal_core::types::{AddOn, MenuItem, Variation};
//!
//! let mut item = MenuItem::new("paa", "Paa", "inasal", 10000);
//! item.variations.push(Variation { id: "large".into(), name: "Large".into(), price_cents: 2000 });
//! item.add_ons.push(AddOn {
//!     id: "extra-rice".into(),
//!     name: "Extra Rice".into(),
//!     category: "rice".into(),
//!     price_cents: 1500,
//! });
//!
//! let price = unit_price(&item, Some("large"), &[AddOnSelection::new("extra-rice", 2)]).unwrap();
//! assert_eq!(price.cents(), 15000); // 100 + 20 + 15 × 2
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{AddOn, MenuItem, Variation};
use crate::validation::{validate_add_on_quantity, validate_price};

// =============================================================================
// Selections
// =============================================================================

/// An add-on choice as entered by the caller.
///
/// The same add-on may appear more than once; quantities are summed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AddOnSelection {
    pub add_on_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
}

fn default_quantity() -> i64 {
    1
}

impl AddOnSelection {
    pub fn new(add_on_id: impl Into<String>, quantity: i64) -> Self {
        AddOnSelection {
            add_on_id: add_on_id.into(),
            quantity,
        }
    }
}

/// An add-on resolved against the item, with its merged quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectedAddOn {
    pub add_on: AddOn,
    pub quantity: i64,
}

impl SelectedAddOn {
    /// Delta × quantity.
    pub fn subtotal(&self) -> Money {
        self.add_on.price().multiply_quantity(self.quantity)
    }
}

/// A validated, canonical selection for one menu item.
///
/// ## Canonical Form
/// - add-ons with the same id are merged
/// - add-ons with quantity 0 are dropped
/// - add-ons are sorted by id, so selection order never matters
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub variation: Option<Variation>,
    pub add_ons: Vec<SelectedAddOn>,
}

impl Selection {
    /// `(add_on_id, quantity)` pairs in canonical order.
    pub fn add_on_counts(&self) -> Vec<(String, i64)> {
        self.add_ons
            .iter()
            .map(|a| (a.add_on.id.clone(), a.quantity))
            .collect()
    }

    /// Sum of the modifiers on top of the effective price.
    pub fn modifiers_total(&self) -> Money {
        let variation = self
            .variation
            .as_ref()
            .map(Variation::price)
            .unwrap_or_default();
        variation + self.add_ons.iter().map(SelectedAddOn::subtotal).sum::<Money>()
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Validates the selection against the item's configured options and puts
/// it in canonical form.
///
/// ## Errors
/// `InvalidSelection` when the variation or any add-on is not offered by
/// this item, or when an add-on quantity (after merging repeats) is
/// outside `0..=MAX_ADD_ON_QUANTITY`.
pub fn resolve_selection(
    item: &MenuItem,
    variation_id: Option<&str>,
    add_ons: &[AddOnSelection],
) -> CoreResult<Selection> {
    let variation = match variation_id {
        Some(id) => Some(item.variation(id).cloned().ok_or_else(|| {
            CoreError::invalid_selection(&item.id, format!("unknown variation '{}'", id))
        })?),
        None => None,
    };

    let mut merged: Vec<SelectedAddOn> = Vec::with_capacity(add_ons.len());
    for selection in add_ons {
        validate_add_on_quantity(selection.quantity).map_err(|e| {
            CoreError::invalid_selection(
                &item.id,
                format!("add-on '{}': {}", selection.add_on_id, e),
            )
        })?;

        let add_on = item.add_on(&selection.add_on_id).ok_or_else(|| {
            CoreError::invalid_selection(
                &item.id,
                format!("unknown add-on '{}'", selection.add_on_id),
            )
        })?;

        match merged.iter_mut().find(|m| m.add_on.id == add_on.id) {
            Some(existing) => {
                // both sides are already bounded, so the sum cannot overflow
                let quantity = existing.quantity + selection.quantity;
                validate_add_on_quantity(quantity).map_err(|e| {
                    CoreError::invalid_selection(
                        &item.id,
                        format!("add-on '{}': {}", add_on.id, e),
                    )
                })?;
                existing.quantity = quantity;
            }
            None => merged.push(SelectedAddOn {
                add_on: add_on.clone(),
                quantity: selection.quantity,
            }),
        }
    }

    merged.retain(|m| m.quantity > 0);
    merged.sort_by(|a, b| a.add_on.id.cmp(&b.add_on.id));

    Ok(Selection {
        variation,
        add_ons: merged,
    })
}

/// Unit price of an already-resolved selection.
///
/// ## Errors
/// `InvalidSelection` when a price involved is negative or too large, or
/// when the total does not fit in centavos.
pub fn price_selection(item: &MenuItem, selection: &Selection) -> CoreResult<Money> {
    let out_of_range = |reason: String| CoreError::invalid_selection(&item.id, reason);
    let overflow = || CoreError::invalid_selection(&item.id, "unit price is out of range");

    let mut total = item.effective_price();
    validate_price("item price", total.cents()).map_err(|e| out_of_range(e.to_string()))?;

    if let Some(variation) = &selection.variation {
        validate_price("variation price", variation.price_cents)
            .map_err(|e| out_of_range(e.to_string()))?;
        total = total.checked_add(variation.price()).ok_or_else(overflow)?;
    }

    for selected in &selection.add_ons {
        validate_price("add-on price", selected.add_on.price_cents)
            .map_err(|e| out_of_range(e.to_string()))?;
        let subtotal = selected
            .add_on
            .price()
            .checked_multiply_quantity(selected.quantity)
            .ok_or_else(overflow)?;
        total = total.checked_add(subtotal).ok_or_else(overflow)?;
    }

    Ok(total)
}

/// Resolves the selection and returns the unit price of one item.
pub fn unit_price(
    item: &MenuItem,
    variation_id: Option<&str>,
    add_ons: &[AddOnSelection],
) -> CoreResult<Money> {
    let selection = resolve_selection(item, variation_id, add_ons)?;
    price_selection(item, &selection)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn paa() -> MenuItem {
        let mut item = MenuItem::new("paa", "Chicken Paa", "inasal", 10000);
        item.variations = vec![
            Variation {
                id: "regular".to_string(),
                name: "Regular".to_string(),
                price_cents: 0,
            },
            Variation {
                id: "large".to_string(),
                name: "Large".to_string(),
                price_cents: 2000,
            },
        ];
        item.add_ons = vec![
            AddOn {
                id: "extra-rice".to_string(),
                name: "Extra Rice".to_string(),
                category: "rice".to_string(),
                price_cents: 1500,
            },
            AddOn {
                id: "atchara".to_string(),
                name: "Atchara".to_string(),
                category: "sides".to_string(),
                price_cents: 1000,
            },
        ];
        item
    }

    #[test]
    fn test_worked_example() {
        let price = unit_price(
            &paa(),
            Some("large"),
            &[AddOnSelection::new("extra-rice", 2)],
        )
        .unwrap();
        assert_eq!(price, Money::from_pesos(150));
    }

    #[test]
    fn test_discount_substitutes_base_price() {
        let mut item = MenuItem::new("pecho", "Pecho", "inasal", 10000);
        item.discount_price_cents = Some(8000);
        item.is_on_discount = true;

        assert_eq!(unit_price(&item, None, &[]).unwrap(), Money::from_pesos(80));
    }

    #[test]
    fn test_variation_applies_on_top_of_discount() {
        let mut item = paa();
        item.discount_price_cents = Some(8000);
        item.is_on_discount = true;

        let price = unit_price(&item, Some("large"), &[]).unwrap();
        assert_eq!(price, Money::from_pesos(100));
    }

    #[test]
    fn test_repeated_add_ons_merge() {
        let item = paa();
        let repeated = resolve_selection(
            &item,
            None,
            &[
                AddOnSelection::new("extra-rice", 1),
                AddOnSelection::new("extra-rice", 1),
            ],
        )
        .unwrap();
        let explicit =
            resolve_selection(&item, None, &[AddOnSelection::new("extra-rice", 2)]).unwrap();

        assert_eq!(repeated, explicit);
        assert_eq!(price_selection(&item, &repeated).unwrap(), Money::from_pesos(130));
    }

    #[test]
    fn test_add_on_order_independent() {
        let item = paa();
        let ab = resolve_selection(
            &item,
            None,
            &[
                AddOnSelection::new("extra-rice", 1),
                AddOnSelection::new("atchara", 1),
            ],
        )
        .unwrap();
        let ba = resolve_selection(
            &item,
            None,
            &[
                AddOnSelection::new("atchara", 1),
                AddOnSelection::new("extra-rice", 1),
            ],
        )
        .unwrap();

        assert_eq!(ab.add_on_counts(), ba.add_on_counts());
        assert_eq!(ab.add_ons[0].add_on.id, "atchara");
    }

    #[test]
    fn test_zero_quantity_add_on_dropped() {
        let selection =
            resolve_selection(&paa(), None, &[AddOnSelection::new("atchara", 0)]).unwrap();
        assert!(selection.add_ons.is_empty());
    }

    #[test]
    fn test_unknown_variation_rejected() {
        let err = unit_price(&paa(), Some("family"), &[]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_unknown_add_on_rejected() {
        let err = unit_price(&paa(), None, &[AddOnSelection::new("cheese", 1)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_negative_add_on_quantity_rejected() {
        let err = unit_price(&paa(), None, &[AddOnSelection::new("atchara", -1)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_add_on_quantity_above_max_rejected() {
        let err = unit_price(&paa(), None, &[AddOnSelection::new("atchara", i64::MAX)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_merged_add_on_quantity_bounded() {
        let item = paa();
        let at_max = [
            AddOnSelection::new("extra-rice", crate::MAX_ADD_ON_QUANTITY - 1),
            AddOnSelection::new("extra-rice", 1),
        ];
        let selection = resolve_selection(&item, None, &at_max).unwrap();
        assert_eq!(selection.add_ons[0].quantity, crate::MAX_ADD_ON_QUANTITY);

        let over = [
            AddOnSelection::new("extra-rice", crate::MAX_ADD_ON_QUANTITY),
            AddOnSelection::new("extra-rice", crate::MAX_ADD_ON_QUANTITY),
        ];
        let err = resolve_selection(&item, None, &over).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_negative_variation_price_rejected() {
        let mut item = paa();
        item.variations.push(Variation {
            id: "promo".to_string(),
            name: "Promo".to_string(),
            price_cents: -20000,
        });

        let err = unit_price(&item, Some("promo"), &[]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_oversized_add_on_price_rejected() {
        let mut item = paa();
        item.add_ons[0].price_cents = i64::MAX / 2;

        let err = unit_price(&item, None, &[AddOnSelection::new("extra-rice", 3)]).unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { .. }));
    }

    #[test]
    fn test_selection_deserialize_default_quantity() {
        let selection: AddOnSelection =
            serde_json::from_str(r#"{ "add_on_id": "atchara" }"#).unwrap();
        assert_eq!(selection.quantity, 1);
    }
}
