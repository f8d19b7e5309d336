//! # Cart
//!
//! The in-memory shopping cart: an ordered list of line items, one per
//! distinct configuration of a menu item.
//!
//! ## Line Item Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LineItemKey = ( item id , variation id? , [(add-on id, qty)] sorted )  │
//! │                                                                         │
//! │  Paa, Large, [extra-rice×2]            ──┐                              │
//! │  Paa, Large, [extra-rice×1, extra-rice×1] ─┴──► same key → qty += n     │
//! │  Paa, Large, [extra-rice×1]            ────────► different key → new   │
//! │  Paa, Regular, []                      ────────► different key → new   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The key is a structural value compared field by field, so ids containing
//! separators can never collide.
//!
//! ## Operations
//! ```text
//! add_to_cart(item, qty, variation?, add_ons)  ─► find key ─► qty += n
//!                                                     └────► push new line
//! update_quantity(line, n)   n ≤ 0 ─► remove_from_cart(line)
//!                            n > 0 ─► set in place (price, position kept)
//!                            n > MAX_ITEM_QUANTITY ─► InvalidSelection
//! remove_from_cart(line)     absent ─► no-op
//! clear_cart()
//! ```
//!
//! Every effective mutation bumps [`Cart::revision`] exactly once. A rejected
//! mutation leaves the cart and its revision untouched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{self, AddOnSelection, SelectedAddOn, Selection};
use crate::types::{MenuItem, Variation};
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Line Item Key
// =============================================================================

/// Structural identity of a cart line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LineItemKey {
    pub item_id: String,
    pub variation_id: Option<String>,
    /// `(add_on_id, quantity)` sorted by add-on id; empty when none.
    pub add_ons: Vec<(String, i64)>,
}

impl LineItemKey {
    /// Builds the key of a canonical selection.
    pub fn new(item_id: &str, selection: &Selection) -> Self {
        LineItemKey {
            item_id: item_id.to_string(),
            variation_id: selection.variation.as_ref().map(|v| v.id.clone()),
            add_ons: selection.add_on_counts(),
        }
    }
}

// =============================================================================
// Cart Line Item
// =============================================================================

/// One distinct configuration of a menu item in the cart.
///
/// ## Design Notes
/// - `id`: opaque handle the UI passes back to update/remove
/// - `unit_price_cents`: frozen when the line is created; later quantity
///   changes never reprice the line
/// - `name`, `variation`, `add_ons`: denormalized copies for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLineItem {
    pub id: String,

    #[ts(skip)]
    pub key: LineItemKey,

    /// Menu item id.
    pub item_id: String,

    /// Menu item name at time of adding.
    pub name: String,

    pub variation: Option<Variation>,

    pub add_ons: Vec<SelectedAddOn>,

    /// Price of one configured item, in centavos.
    pub unit_price_cents: i64,

    /// Always ≥ 1 while the line exists.
    pub quantity: i64,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLineItem {
    fn new(item: &MenuItem, selection: Selection, quantity: i64) -> CoreResult<Self> {
        let unit_price = pricing::price_selection(item, &selection)?;
        checked_line_total(&item.id, unit_price, quantity)?;
        Ok(CartLineItem {
            id: Uuid::new_v4().to_string(),
            key: LineItemKey::new(&item.id, &selection),
            item_id: item.id.clone(),
            name: item.name.clone(),
            variation: selection.variation,
            add_ons: selection.add_ons,
            unit_price_cents: unit_price.cents(),
            quantity,
            added_at: Utc::now(),
        })
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

fn checked_line_total(item_id: &str, unit_price: Money, quantity: i64) -> CoreResult<Money> {
    unit_price
        .checked_multiply_quantity(quantity)
        .ok_or_else(|| CoreError::invalid_selection(item_id, "line total is out of range"))
}

fn quantity_error(item_id: &str) -> CoreError {
    CoreError::invalid_selection(
        item_id,
        format!("quantity cannot exceed {}", MAX_ITEM_QUANTITY),
    )
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per distinct [`LineItemKey`]
/// - Every line has quantity ≥ 1
/// - Lines keep their insertion order
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cart {
    lines: Vec<CartLineItem>,

    #[ts(as = "String")]
    created_at: DateTime<Utc>,

    /// Incremented on every effective mutation.
    revision: u64,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
            revision: 0,
        }
    }

    /// Adds `quantity` of a configured item.
    ///
    /// ## Behavior
    /// - Same configuration already in cart: its quantity increases, its
    ///   unit price stays as recorded
    /// - New configuration: appended with a freshly computed unit price
    ///
    /// ## Returns
    /// The id of the line that now holds the configuration.
    ///
    /// ## Errors
    /// - `ItemUnavailable` when the item is sold out
    /// - `InvalidSelection` for a quantity outside `1..=MAX_ITEM_QUANTITY`
    ///   (including the merged quantity of an existing line), or options
    ///   the item does not offer
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::cart::Cart;
    /// use inasal_core::types::MenuItem;
    ///
    /// let item = MenuItem::new("rice", "Plain Rice", "sides", 2000);
    /// let mut cart = Cart::new();
    /// let first = cart.add_to_cart(&item, 1, None, &[]).unwrap();
    /// let second = cart.add_to_cart(&item, 2, None, &[]).unwrap();
    ///
    /// assert_eq!(first, second);
    /// assert_eq!(cart.total_items(), 3);
    /// assert_eq!(cart.total_price().cents(), 6000);
    /// ```
    pub fn add_to_cart(
        &mut self,
        item: &MenuItem,
        quantity: i64,
        variation_id: Option<&str>,
        add_ons: &[AddOnSelection],
    ) -> CoreResult<String> {
        if !item.available {
            return Err(CoreError::ItemUnavailable(item.id.clone()));
        }
        validate_quantity(quantity)
            .map_err(|e| CoreError::invalid_selection(&item.id, e.to_string()))?;

        let selection = pricing::resolve_selection(item, variation_id, add_ons)?;
        let key = LineItemKey::new(&item.id, &selection);

        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            let merged = line.quantity + quantity;
            if merged > MAX_ITEM_QUANTITY {
                return Err(quantity_error(&item.id));
            }
            checked_line_total(&item.id, line.unit_price(), merged)?;

            line.quantity = merged;
            self.revision += 1;
            return Ok(line.id.clone());
        }

        let line = CartLineItem::new(item, selection, quantity)?;
        let id = line.id.clone();
        self.lines.push(line);
        self.revision += 1;
        Ok(id)
    }

    /// Sets the quantity of a line.
    ///
    /// ## Behavior
    /// - `quantity ≤ 0`: removes the line
    /// - otherwise: sets quantity in place; unit price and position kept
    /// - unknown line id: no-op
    ///
    /// ## Returns
    /// `true` if the cart changed.
    ///
    /// ## Errors
    /// `InvalidSelection` when `quantity` exceeds `MAX_ITEM_QUANTITY`; the
    /// line keeps its previous quantity.
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) -> CoreResult<bool> {
        if quantity <= 0 {
            return Ok(self.remove_from_cart(line_id));
        }

        let Some(line) = self.lines.iter_mut().find(|l| l.id == line_id) else {
            return Ok(false);
        };

        if quantity > MAX_ITEM_QUANTITY {
            return Err(quantity_error(&line.item_id));
        }
        checked_line_total(&line.item_id, line.unit_price(), quantity)?;

        line.quantity = quantity;
        self.revision += 1;
        Ok(true)
    }

    /// Removes a line. Removing an absent line is a no-op.
    ///
    /// ## Returns
    /// `true` if a line was removed.
    pub fn remove_from_cart(&mut self, line_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != line_id);

        if self.lines.len() == initial_len {
            false
        } else {
            self.revision += 1;
            true
        }
    }

    /// Clears all lines from the cart.
    pub fn clear_cart(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
        self.revision += 1;
    }

    /// Σ(unit price × quantity) over all lines.
    pub fn total_price(&self) -> Money {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Σ(quantity) over all lines, for badge counts.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Quantity of one menu item across all of its configurations.
    pub fn quantity_for_item(&self, item_id: &str) -> i64 {
        self.lines
            .iter()
            .filter(|l| l.item_id == item_id)
            .map(|l| l.quantity)
            .sum()
    }

    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLineItem> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    /// Looks up a line, failing with `NotFound` when absent.
    pub fn require_line(&self, line_id: &str) -> CoreResult<&CartLineItem> {
        self.line(line_id)
            .ok_or_else(|| CoreError::not_found("Cart line", line_id))
    }

    /// Number of distinct configurations.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Cart totals summary for UI responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_items: i64,
    pub total_cents: i64,
    pub revision: u64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            total_items: cart.total_items(),
            total_cents: cart.total_price().cents(),
            revision: cart.revision(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
