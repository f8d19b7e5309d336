//! # Customization Commands
//!
//! Drive the customization panel for items with variations or add-ons.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start_customization("paa")                                             │
//! │        │                                                                │
//! │        ├── no modifiers ──► added to cart (qty 1), panel stays closed   │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  ┌───────────────────────────────┐                                      │
//! │  │ Chicken Paa                   │  select_variation("large")           │
//! │  │ (•) Regular  ( ) Large +₱20   │  increment_add_on("extra-rice")      │
//! │  │ RICE                          │  decrement_add_on("extra-rice")      │
//! │  │   Extra Rice  ₱15   [−] 2 [+] │  set_add_on_quantity(id, n)          │
//! │  │                               │                                      │
//! │  │ [ Add to Cart - ₱130.00 ]     │  confirm_customization() ──► cart    │
//! │  └───────────────────────────────┘  cancel_customization()  ──► closed  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command that touches both the panel and the cart goes through
//! [`CustomizerState::with_both_mut`], which locks the panel first.

use inasal_core::{AddOnSelection, CartTotals, CustomizationState, Customizer, StartOutcome};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, CustomizerState};

/// Snapshot of the panel the UI renders after every customization command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomizationView {
    pub open: bool,
    pub item_id: Option<String>,
    pub variation_id: Option<String>,
    pub add_ons: Vec<AddOnSelection>,

    /// Unit price of the current choices; `None` while closed.
    pub price_cents: Option<i64>,

    /// Line that received the item when a command added to the cart.
    pub added_line_id: Option<String>,

    pub cart: CartTotals,
}

impl CustomizationView {
    fn build(
        customizer: &Customizer,
        cart: &CartState,
        added_line_id: Option<String>,
    ) -> Result<Self, ApiError> {
        let totals = cart.with_cart(|c| CartTotals::from(c));

        Ok(match customizer.state() {
            CustomizationState::Closed => CustomizationView {
                open: false,
                item_id: None,
                variation_id: None,
                add_ons: Vec::new(),
                price_cents: None,
                added_line_id,
                cart: totals,
            },
            CustomizationState::Open(pending) => CustomizationView {
                open: true,
                item_id: Some(pending.item().id.clone()),
                variation_id: pending.variation_id().map(String::from),
                add_ons: pending.add_ons().to_vec(),
                price_cents: Some(pending.price()?.cents()),
                added_line_id,
                cart: totals,
            },
        })
    }
}

/// Current panel state.
pub fn get_customization(
    customizer: &CustomizerState,
    cart: &CartState,
) -> Result<CustomizationView, ApiError> {
    debug!("get_customization command");
    customizer.with_customizer(|cz| CustomizationView::build(cz, cart, None))
}

/// Opens the panel for an item, or adds it straight to the cart when it
/// has nothing to customize.
pub fn start_customization(
    catalog: &CatalogState,
    customizer: &CustomizerState,
    cart: &CartState,
    item_id: &str,
) -> Result<CustomizationView, ApiError> {
    debug!(item_id = %item_id, "start_customization command");

    let item = catalog.catalog().require_item(item_id)?;

    let outcome = customizer.with_both_mut(cart, |cz, c| cz.start(item, c))?;
    let added = match outcome {
        StartOutcome::Added(line_id) => {
            info!(item_id = %item_id, line_id = %line_id, "Added without customization");
            Some(line_id)
        }
        StartOutcome::Opened => None,
    };

    customizer.with_customizer(|cz| CustomizationView::build(cz, cart, added))
}

/// Picks a variation in the open panel.
pub fn select_variation(
    customizer: &CustomizerState,
    cart: &CartState,
    variation_id: &str,
) -> Result<CustomizationView, ApiError> {
    debug!(variation_id = %variation_id, "select_variation command");

    customizer.with_customizer_mut(|cz| {
        cz.select_variation(variation_id)?;
        CustomizationView::build(cz, cart, None)
    })
}

/// Sets an add-on count; values ≤ 0 remove the add-on.
pub fn set_add_on_quantity(
    customizer: &CustomizerState,
    cart: &CartState,
    add_on_id: &str,
    quantity: i64,
) -> Result<CustomizationView, ApiError> {
    debug!(add_on_id = %add_on_id, quantity = %quantity, "set_add_on_quantity command");

    customizer.with_customizer_mut(|cz| {
        cz.set_add_on_quantity(add_on_id, quantity)?;
        CustomizationView::build(cz, cart, None)
    })
}

pub fn increment_add_on(
    customizer: &CustomizerState,
    cart: &CartState,
    add_on_id: &str,
) -> Result<CustomizationView, ApiError> {
    debug!(add_on_id = %add_on_id, "increment_add_on command");

    customizer.with_customizer_mut(|cz| {
        cz.increment_add_on(add_on_id)?;
        CustomizationView::build(cz, cart, None)
    })
}

pub fn decrement_add_on(
    customizer: &CustomizerState,
    cart: &CartState,
    add_on_id: &str,
) -> Result<CustomizationView, ApiError> {
    debug!(add_on_id = %add_on_id, "decrement_add_on command");

    customizer.with_customizer_mut(|cz| {
        cz.decrement_add_on(add_on_id)?;
        CustomizationView::build(cz, cart, None)
    })
}

/// Adds the configured item to the cart and closes the panel.
///
/// On error the panel stays open with the choices intact.
pub fn confirm_customization(
    customizer: &CustomizerState,
    cart: &CartState,
) -> Result<CustomizationView, ApiError> {
    debug!("confirm_customization command");

    let line_id = customizer.with_both_mut(cart, |cz, c| cz.confirm(c))?;
    info!(line_id = %line_id, "Customized item added to cart");

    customizer.with_customizer(|cz| CustomizationView::build(cz, cart, Some(line_id)))
}

/// Closes the panel and discards its choices.
pub fn cancel_customization(
    customizer: &CustomizerState,
    cart: &CartState,
) -> Result<CustomizationView, ApiError> {
    debug!("cancel_customization command");

    customizer.with_customizer_mut(|cz| {
        cz.cancel();
        CustomizationView::build(cz, cart, None)
    })
}
