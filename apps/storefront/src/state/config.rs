//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`INASAL_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigState {
    /// Brand shown in the order message header and sign-off
    pub brand_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Facebook page id the order message is sent to
    pub messenger_page_id: String,

    /// Reference data file loaded at startup
    pub catalog_path: PathBuf,

    /// Order request file used by the headless checkout binary
    pub order_path: PathBuf,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            brand_name: "Kamfood Inasal".to_string(),
            currency_symbol: "₱".to_string(),
            currency_decimals: 2,
            messenger_page_id: "100092989982548".to_string(),
            catalog_path: PathBuf::from("demos/catalog.json"),
            order_path: PathBuf::from("demos/order.json"),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `INASAL_BRAND_NAME`: Override brand name
    /// - `INASAL_CURRENCY_SYMBOL`: Override currency symbol
    /// - `INASAL_MESSENGER_PAGE_ID`: Override Messenger page id (digits or page username)
    /// - `INASAL_CATALOG_PATH`: Override catalog file path
    /// - `INASAL_ORDER_PATH`: Override order request file path
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(brand_name) = lookup("INASAL_BRAND_NAME") {
            config.brand_name = non_blank("INASAL_BRAND_NAME", brand_name)?;
        }

        if let Some(symbol) = lookup("INASAL_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(page_id) = lookup("INASAL_MESSENGER_PAGE_ID") {
            let page_id = non_blank("INASAL_MESSENGER_PAGE_ID", page_id)?;
            if !page_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.')
            {
                return Err(ConfigError::InvalidValue(
                    "INASAL_MESSENGER_PAGE_ID".to_string(),
                ));
            }
            config.messenger_page_id = page_id;
        }

        if let Some(path) = lookup("INASAL_CATALOG_PATH") {
            config.catalog_path = PathBuf::from(non_blank("INASAL_CATALOG_PATH", path)?);
        }

        if let Some(path) = lookup("INASAL_ORDER_PATH") {
            config.order_path = PathBuf::from(non_blank("INASAL_ORDER_PATH", path)?);
        }

        Ok(config)
    }

    /// Formats a centavo amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use inasal_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(15000), "₱150.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        // Amounts are stored in centavos, so two decimals is the native scale
        let scaled = match self.currency_decimals {
            0 => cents / 100,
            1 => cents / 10,
            _ => cents,
        };
        let decimals = self.currency_decimals.min(2) as u32;
        let divisor = 10_i64.pow(decimals);
        let whole = scaled / divisor;
        let frac = (scaled % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if decimals > 0 {
                format!("{}.{:0width$}", whole.abs(), frac, width = decimals as usize)
            } else {
                whole.abs().to_string()
            }
        )
    }

    /// Messenger base link for the configured page.
    pub fn messenger_base_url(&self) -> String {
        format!("https://m.me/{}", self.messenger_page_id)
    }
}

fn non_blank(key: &str, value: String) -> Result<String, ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidValue(key.to_string()));
    }
    Ok(trimmed.to_string())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
