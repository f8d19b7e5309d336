//! # inasal-core: Pure Ordering Logic for the Inasal Storefront
//!
//! This crate is the **heart** of the storefront. It contains the menu
//! model, pricing, cart and checkout rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inasal Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Storefront UI                                │   │
//! │  │    Menu ──► Customize ──► Cart ──► Checkout ──► Messenger       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 Storefront Commands (apps/storefront)           │   │
//! │  │    add_to_cart, start_customization, place_order, etc.          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inasal-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌───────────┐ ┌────────┐ │   │
//! │  │  │ catalog │ │ pricing │ │  cart   │ │ customize │ │ order  │ │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └───────────┘ └────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Reference data (MenuItem, Variation, AddOn, PaymentMethod, ...)
//! - [`catalog`] - Read-only reference data snapshot
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`pricing`] - Selection resolution and unit price
//! - [`cart`] - Cart store with structural line identity
//! - [`customization`] - Open/closed customization state machine
//! - [`order`] - Checkout details and order summary
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use inasal_core::{AddOnSelection, Cart, MenuItem, Money};
//! use inasal_core::types::{AddOn, Variation};
//!
//! let mut item = MenuItem::new("paa", "Chicken Paa", "inasal", 10000);
//! item.variations.push(Variation { id: "large".into(), name: "Large".into(), price_cents: 2000 });
//! item.add_ons.push(AddOn {
//!     id: "extra-rice".into(),
//!     name: "Extra Rice".into(),
//!     category: "rice".into(),
//!     price_cents: 1500,
//! });
//!
//! let mut cart = Cart::new();
//! let extras = [AddOnSelection::new("extra-rice", 2)];
//! cart.add_to_cart(&item, 1, Some("large"), &extras).unwrap();
//! cart.add_to_cart(&item, 1, Some("large"), &extras).unwrap();
//!
//! assert_eq!(cart.line_count(), 1);
//! assert_eq!(cart.total_price(), Money::from_pesos(300));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod customization;
pub mod error;
pub mod money;
pub mod order;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLineItem, CartTotals, LineItemKey};
pub use catalog::Catalog;
pub use customization::{CustomizationState, Customizer, StartOutcome};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use order::{OrderDetails, OrderLine, OrderSummary, PickupTime, ServiceDetails};
pub use pricing::{AddOnSelection, SelectedAddOn, Selection};
pub use types::*;

// =============================================================================
// Constants
// =============================================================================

/// Maximum quantity of one cart line.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 1000 instead of 10) and
/// keeps every line total far inside the `i64` centavo range.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Maximum count of one add-on on a single configured item.
pub const MAX_ADD_ON_QUANTITY: i64 = 99;

/// Largest price a catalog may list for an item, variation or add-on
/// (₱1,000,000).
pub const MAX_PRICE_CENTS: i64 = 100_000_000;
