//! # Commands Module
//!
//! The UI-facing surface of the storefront. A UI host (web view, chat bot,
//! the headless binary) calls these functions and renders what they return.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs        ◄─── You are here (exports)
//! ├── catalog.rs    ◄─── Menu, categories, payment methods, site settings
//! ├── cart.rs       ◄─── Cart manipulation
//! ├── customize.rs  ◄─── Customization panel (variation + add-ons)
//! ├── checkout.rs   ◄─── Order summary and Messenger hand-off
//! └── config.rs     ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI                                                                     │
//! │  ──                                                                     │
//! │  add_to_cart(&catalog, &cart, "paa", Some(2), Some("large"), &[])       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Backend                                                           │
//! │  ────────────                                                           │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── Read-only reference data             │
//! │      cart: &CartState,        ◄── Locked for the mutation              │
//! │      item_id: &str,           ◄── From the UI                          │
//! │      quantity: Option<i64>,   ◄── Optional param (default 1)           │
//! │      ...                                                                │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  UI receives: { items: [...], totals: {...} }                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command takes only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn get_cart(cart: &CartState)
//!
//! // Needs the catalog to resolve the item
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, ...)
//!
//! // Customization locks the panel, then the cart
//! fn confirm_customization(customizer: &CustomizerState, cart: &CartState)
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod customize;

pub use cart::*;
pub use catalog::*;
pub use checkout::*;
pub use config::*;
pub use customize::*;
