//! # Inasal Storefront Library
//!
//! Session layer of the storefront: configuration, shared state, the
//! command functions a UI calls, and the Messenger order hand-off.
//!
//! ## Module Organization
//! ```text
//! inasal_storefront/
//! ├── lib.rs           ◄─── You are here (tracing setup & headless run)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── catalog.rs   ◄─── Read-only catalog snapshot
//! │   ├── cart.rs      ◄─── Cart and customization panel
//! │   └── config.rs    ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── catalog.rs   ◄─── Menu and reference data
//! │   ├── cart.rs      ◄─── Cart manipulation
//! │   ├── customize.rs ◄─── Customization panel
//! │   ├── checkout.rs  ◄─── Order placement
//! │   └── config.rs    ◄─── Configuration retrieval
//! ├── handoff.rs       ◄─── Order message + Messenger link
//! ├── request.rs       ◄─── JSON order requests
//! └── error.rs         ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod handoff;
pub mod request;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use request::OrderRequest;
use state::{CartState, CatalogState, ConfigState};

/// Runs one headless checkout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Headless Checkout                                    │
/// │                                                                         │
/// │  1. Initialize Tracing                                                  │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, DEBUG for inasal crates; RUST_LOG overrides        │
/// │                                                                         │
/// │  2. Load Configuration ─────────────────────► ConfigState::from_env()   │
/// │                                                                         │
/// │  3. Load Catalog ───────────────────────────► INASAL_CATALOG_PATH       │
/// │                                                                         │
/// │  4. Load Order Request ─────────────────────► INASAL_ORDER_PATH         │
/// │                                                                         │
/// │  5. Fill Cart, Place Order                                              │
/// │                                                                         │
/// │  6. Print message and Messenger link to stdout                          │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting Inasal storefront checkout");

    let config = ConfigState::from_env()?;
    info!(
        brand = %config.brand_name,
        page = %config.messenger_page_id,
        "Configuration loaded"
    );

    let catalog = CatalogState::load(&config.catalog_path).await?;
    let request = OrderRequest::load(&config.order_path).await?;

    let cart = CartState::new();
    request.apply(&catalog, &cart)?;

    let handoff = commands::place_order(&catalog, &cart, &config, &request.details)?;

    println!("{}", handoff.message);
    println!();
    println!("{}", handoff.messenger_url);

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=inasal_core=trace` - Trace one crate
/// - Default: `info,inasal=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,inasal=debug"));

    // Logs go to stderr so stdout carries only the hand-off
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
