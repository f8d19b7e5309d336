//! # Config Commands
//!
//! Retrieval of the storefront configuration.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the current storefront configuration.
///
/// ## When Used
/// - UI startup (brand name, currency symbol)
/// - Checkout (Messenger page the order goes to)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}
