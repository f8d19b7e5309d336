//! # State Module
//!
//! Session state for the storefront.
//!
//! Separate state types rather than one `AppState`: each command declares
//! exactly which pieces it touches, and independent pieces never block
//! each other.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Session                                    │   │
//! │  │  CatalogState::load(path).await                                 │   │
//! │  │  CartState::new() / CustomizerState::new()                      │   │
//! │  │  ConfigState::from_env()                                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┴────────┬──────────────────┐              │
//! │     ▼              ▼                  ▼                  ▼              │
//! │  ┌──────────┐ ┌──────────────┐ ┌──────────────────┐ ┌──────────────┐   │
//! │  │ Catalog  │ │  CartState   │ │ CustomizerState  │ │ ConfigState  │   │
//! │  │  State   │ │              │ │                  │ │              │   │
//! │  │ Arc<..>  │ │  Arc<Mutex<  │ │  Arc<Mutex<      │ │  brand_name  │   │
//! │  │ read-only│ │    Cart>>    │ │    Customizer>>  │ │  page id     │   │
//! │  └──────────┘ └──────────────┘ └──────────────────┘ └──────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;

pub use cart::{CartState, CustomizerState};
pub use catalog::{CatalogState, StateError};
pub use config::{ConfigError, ConfigState};

