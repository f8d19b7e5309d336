//! # Cart State
//!
//! Holds the session's shopping cart and customization panel.
//!
//! ## Thread Safety
//! Both are wrapped in `Arc<Mutex<T>>` because:
//! 1. Several commands read and modify them
//! 2. Only one command should modify them at a time
//! 3. A UI host may dispatch commands from more than one thread
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  UI Action                Command                 State Change          │
//! │  ─────────                ───────                 ────────────          │
//! │                                                                         │
//! │  Tap "Add" ──────────────► add_to_cart() ───────► line push / qty += n │
//! │                                                                         │
//! │  Tap "Customize" ────────► start_customization()► panel open           │
//! │  Tap "Add to Cart" ──────► confirm_customization()► panel → cart        │
//! │                                                                         │
//! │  +/− in cart ────────────► update_cart_item() ──► qty = n / remove     │
//! │                                                                         │
//! │  Trash icon ─────────────► remove_from_cart() ──► line removed         │
//! │                                                                         │
//! │  "Clear All" ────────────► clear_cart() ────────► lines cleared        │
//! │                                                                         │
//! │  NOTE: Lock order is always customizer, then cart.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard};

use inasal_core::{Cart, Customizer};
use tracing::warn;

/// Session-managed cart state.
///
/// ## Why Not RwLock?
/// Cart operations are quick and most of them modify state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        Self::default()
    }

    // Core cart mutations are single-step; a poisoned cart is still consistent.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(|poisoned| {
            warn!("Cart lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Executes a function with read access to the cart.
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }
}

/// Session-managed customization panel.
#[derive(Debug, Clone, Default)]
pub struct CustomizerState {
    customizer: Arc<Mutex<Customizer>>,
}

impl CustomizerState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Customizer> {
        self.customizer.lock().unwrap_or_else(|poisoned| {
            warn!("Customizer lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Executes a function with read access to the customizer.
    pub fn with_customizer<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Customizer) -> R,
    {
        let customizer = self.lock();
        f(&customizer)
    }

    /// Executes a function with write access to the customizer.
    pub fn with_customizer_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Customizer) -> R,
    {
        let mut customizer = self.lock();
        f(&mut customizer)
    }

    /// Executes a function with write access to both the customizer and
    /// the cart, locking in the fixed order.
    pub fn with_both_mut<F, R>(&self, cart: &CartState, f: F) -> R
    where
        F: FnOnce(&mut Customizer, &mut Cart) -> R,
    {
        let mut customizer = self.lock();
        cart.with_cart_mut(|c| f(&mut customizer, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inasal_core::MenuItem;

    #[test]
    fn test_shared_cart_between_clones() {
        let state = CartState::new();
        let other = state.clone();
        let rice = MenuItem::new("rice", "Plain Rice", "sides", 2000);

        state
            .with_cart_mut(|c| c.add_to_cart(&rice, 2, None, &[]))
            .unwrap();

        assert_eq!(other.with_cart(|c| c.total_items()), 2);
    }

    #[test]
    fn test_with_both_mut() {
        let cart = CartState::new();
        let customizer = CustomizerState::new();
        let rice = MenuItem::new("rice", "Plain Rice", "sides", 2000);

        customizer
            .with_both_mut(&cart, |cz, c| cz.start(&rice, c))
            .unwrap();

        assert!(!customizer.with_customizer(|cz| cz.is_open()));
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);
    }
}
