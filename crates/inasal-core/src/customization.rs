//! # Customization
//!
//! Transient selection state for one "Customize" interaction.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            start(item)                                                  │
//! │   ┌────────┐  has variations/add-ons   ┌──────────────────────┐        │
//! │   │ Closed │ ─────────────────────────►│ Open                 │        │
//! │   │        │◄───────── cancel() ───────│  item snapshot       │        │
//! │   │        │◄───────── confirm() ──────│  variation (1st)     │        │
//! │   └────────┘      (adds qty 1)         │  add-ons {id → qty}  │        │
//! │       │                                └──────────────────────┘        │
//! │       │ start(item) with no modifiers                                   │
//! │       └──────────► closes any open panel, add_to_cart(item, 1)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Add-on quantities inside `Open` clamp to `0..=MAX_ADD_ON_QUANTITY`, and an
//! add-on at 0 leaves the pending set entirely. That is different from the cart, where quantity 0
//! removes a whole line.

use crate::cart::Cart;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::pricing::{self, AddOnSelection};
use crate::types::MenuItem;
use crate::MAX_ADD_ON_QUANTITY;

// =============================================================================
// Pending Selection
// =============================================================================

/// Choices made so far in an open customization panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingCustomization {
    item: MenuItem,
    variation_id: Option<String>,
    /// In the order the customer first picked them.
    add_ons: Vec<AddOnSelection>,
}

impl PendingCustomization {
    fn new(item: &MenuItem) -> Self {
        PendingCustomization {
            item: item.clone(),
            variation_id: item.default_variation().map(|v| v.id.clone()),
            add_ons: Vec::new(),
        }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    pub fn variation_id(&self) -> Option<&str> {
        self.variation_id.as_deref()
    }

    pub fn add_ons(&self) -> &[AddOnSelection] {
        &self.add_ons
    }

    pub fn add_on_quantity(&self, add_on_id: &str) -> i64 {
        self.add_ons
            .iter()
            .find(|a| a.add_on_id == add_on_id)
            .map(|a| a.quantity)
            .unwrap_or(0)
    }

    /// Unit price of the current choices.
    pub fn price(&self) -> CoreResult<Money> {
        pricing::unit_price(&self.item, self.variation_id(), &self.add_ons)
    }
}

// =============================================================================
// State
// =============================================================================

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CustomizationState {
    #[default]
    Closed,
    Open(PendingCustomization),
}

/// What `start` did with the item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// No modifiers to choose; added straight to the cart as this line.
    Added(String),
    /// The customization panel is now open.
    Opened,
}

/// Drives one customization interaction at a time.
#[derive(Debug, Clone, Default)]
pub struct Customizer {
    state: CustomizationState,
}

impl Customizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &CustomizationState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, CustomizationState::Open(_))
    }

    /// The open panel's choices.
    pub fn pending(&self) -> CoreResult<&PendingCustomization> {
        match &self.state {
            CustomizationState::Open(p) => Ok(p),
            CustomizationState::Closed => Err(CoreError::NoActiveCustomization),
        }
    }

    fn pending_mut(&mut self) -> CoreResult<&mut PendingCustomization> {
        match &mut self.state {
            CustomizationState::Open(p) => Ok(p),
            CustomizationState::Closed => Err(CoreError::NoActiveCustomization),
        }
    }

    /// Begins customizing `item`.
    ///
    /// ## Behavior
    /// - Sold-out item: `ItemUnavailable`, state untouched
    /// - No variations or add-ons: closes any open panel, then adds to
    ///   `cart` with quantity 1
    /// - Otherwise: opens with the first variation preselected and no
    ///   add-ons, replacing any panel already open
    ///
    /// ## Example
    /// ```rust
    /// use inasal_core::cart::Cart;
    /// use inasal_core::customization::{Customizer, StartOutcome};
    /// use inasal_core::types::MenuItem;
    ///
    /// let mut cart = Cart::new();
    /// let mut customizer = Customizer::new();
    /// let rice = MenuItem::new("rice", "Plain Rice", "sides", 2000);
    ///
    /// let outcome = customizer.start(&rice, &mut cart).unwrap();
    /// assert!(matches!(outcome, StartOutcome::Added(_)));
    /// assert!(!customizer.is_open());
    /// assert_eq!(cart.total_items(), 1);
    /// ```
    pub fn start(&mut self, item: &MenuItem, cart: &mut Cart) -> CoreResult<StartOutcome> {
        if !item.available {
            return Err(CoreError::ItemUnavailable(item.id.clone()));
        }

        if !item.has_customizations() {
            self.state = CustomizationState::Closed;
            let line_id = cart.add_to_cart(item, 1, None, &[])?;
            return Ok(StartOutcome::Added(line_id));
        }

        self.state = CustomizationState::Open(PendingCustomization::new(item));
        Ok(StartOutcome::Opened)
    }

    /// Picks one of the item's variations.
    pub fn select_variation(&mut self, variation_id: &str) -> CoreResult<()> {
        let pending = self.pending_mut()?;
        if pending.item.variation(variation_id).is_none() {
            return Err(CoreError::invalid_selection(
                &pending.item.id,
                format!("unknown variation '{}'", variation_id),
            ));
        }
        pending.variation_id = Some(variation_id.to_string());
        Ok(())
    }

    /// Sets an add-on's pending quantity.
    ///
    /// Values clamp to `0..=MAX_ADD_ON_QUANTITY`, and zero drops the add-on
    /// from the pending set.
    ///
    /// ## Returns
    /// The quantity actually stored.
    pub fn set_add_on_quantity(&mut self, add_on_id: &str, quantity: i64) -> CoreResult<i64> {
        let pending = self.pending_mut()?;
        if pending.item.add_on(add_on_id).is_none() {
            return Err(CoreError::invalid_selection(
                &pending.item.id,
                format!("unknown add-on '{}'", add_on_id),
            ));
        }

        let quantity = quantity.clamp(0, MAX_ADD_ON_QUANTITY);
        if quantity == 0 {
            pending.add_ons.retain(|a| a.add_on_id != add_on_id);
            return Ok(0);
        }

        match pending.add_ons.iter_mut().find(|a| a.add_on_id == add_on_id) {
            Some(existing) => existing.quantity = quantity,
            None => pending
                .add_ons
                .push(AddOnSelection::new(add_on_id, quantity)),
        }
        Ok(quantity)
    }

    /// "+" on an add-on.
    pub fn increment_add_on(&mut self, add_on_id: &str) -> CoreResult<i64> {
        let current = self.pending()?.add_on_quantity(add_on_id);
        self.set_add_on_quantity(add_on_id, current + 1)
    }

    /// "−" on an add-on.
    pub fn decrement_add_on(&mut self, add_on_id: &str) -> CoreResult<i64> {
        let current = self.pending()?.add_on_quantity(add_on_id);
        self.set_add_on_quantity(add_on_id, current - 1)
    }

    /// Unit price shown on the "Add to Cart" button.
    pub fn preview_price(&self) -> CoreResult<Money> {
        self.pending()?.price()
    }

    /// Commits the pending choices to `cart` as one item and closes.
    ///
    /// If the cart rejects the selection the panel stays open with the
    /// choices intact.
    pub fn confirm(&mut self, cart: &mut Cart) -> CoreResult<String> {
        let pending = self.pending()?;
        let line_id = cart.add_to_cart(&pending.item, 1, pending.variation_id(), &pending.add_ons)?;
        self.state = CustomizationState::Closed;
        Ok(line_id)
    }

    /// Discards the pending choices and closes.
    pub fn cancel(&mut self) {
        self.state = CustomizationState::Closed;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
