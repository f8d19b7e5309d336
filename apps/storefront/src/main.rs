//! # Inasal Storefront Entry Point
//!
//! Headless checkout: prices the order in `INASAL_ORDER_PATH` against the
//! catalog in `INASAL_CATALOG_PATH` and prints the Messenger hand-off.
//!
//! ```text
//! $ INASAL_ORDER_PATH=demos/order.json inasal-storefront
//! 🛒 Kamfood Inasal ORDER
//! ...
//!
//! https://m.me/100092989982548?text=%F0%9F%9B%92%20Kamfood...
//! ```
//!
//! The actual setup is in lib.rs for better testability.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match inasal_storefront::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = ?e.code, message = %e.message, "Checkout failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
