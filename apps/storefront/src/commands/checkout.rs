//! # Checkout Commands
//!
//! Turns the cart into an order and hands it off to Messenger.
//!
//! ## Checkout Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Checkout Workflow                                    │
//! │                                                                         │
//! │  1. Details form        get_checkout_defaults() (payment preselect)    │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  2. place_order(details)                                                │
//! │     ┌───────────────────────────────────────────────────────────────┐  │
//! │     │  OrderSummary::build  ── empty cart / bad details ──► error   │  │
//! │     │         │                                                     │  │
//! │     │         ▼                                                     │  │
//! │     │  format_order_message ──► messenger_url                       │  │
//! │     └───────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  3. UI opens https://m.me/<page>?text=...                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is left as it is after an order is placed: the customer may
//! come back from Messenger and adjust it.

use inasal_core::{OrderDetails, OrderSummary};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::handoff;
use crate::state::{CartState, CatalogState, ConfigState};

/// Everything the UI needs to hand the order off.
#[derive(Debug, Clone, Serialize)]
pub struct OrderHandoff {
    pub summary: OrderSummary,

    /// Plain-text order message.
    pub message: String,

    /// Messenger link with the message pre-filled.
    pub messenger_url: String,
}

/// Defaults the checkout form starts from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutDefaults {
    pub payment_method_id: String,
    pub total_cents: i64,
    pub total_items: i64,
}

pub fn get_checkout_defaults(catalog: &CatalogState, cart: &CartState) -> CheckoutDefaults {
    debug!("get_checkout_defaults command");

    let (total_cents, total_items) =
        cart.with_cart(|c| (c.total_price().cents(), c.total_items()));

    CheckoutDefaults {
        payment_method_id: catalog.catalog().default_payment_method_id().to_string(),
        total_cents,
        total_items,
    }
}

/// Builds the order summary and its Messenger hand-off.
///
/// ## Errors
/// - `CART_ERROR` when the cart is empty
/// - `VALIDATION_ERROR` when a required detail is missing or malformed
/// - `NOT_FOUND` when the payment method is unknown
pub fn place_order(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    details: &OrderDetails,
) -> Result<OrderHandoff, ApiError> {
    debug!(
        service = ?details.service.service_type(),
        payment_method_id = %details.payment_method_id,
        "place_order command"
    );

    let summary = cart.with_cart(|c| {
        OrderSummary::build(c, details, &catalog.catalog().payment_methods)
    })?;

    let message = handoff::format_order_message(&summary, config);
    let messenger_url = handoff::messenger_url(config, &message);

    info!(
        lines = summary.lines.len(),
        total_items = summary.total_items,
        total = %summary.total(),
        service = ?summary.service_type(),
        "Order placed"
    );

    Ok(OrderHandoff {
        summary,
        message,
        messenger_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inasal_core::{Catalog, ServiceDetails};

    fn catalog() -> CatalogState {
        let json = r#"{
            "items": [
                { "id": "paa", "name": "Chicken Paa", "category": "inasal", "base_price_cents": 12000 }
            ],
            "payment_methods": [
                { "id": "gcash", "name": "GCash", "sort_order": 1 }
            ]
        }"#;
        CatalogState::new(Catalog::from_json(json).unwrap())
    }

    fn details(payment: &str) -> OrderDetails {
        OrderDetails {
            customer_name: "  Maria Santos ".into(),
            contact_number: "0918-555-0101".into(),
            service: ServiceDetails::DineIn { party_size: 3 },
            payment_method_id: payment.into(),
            notes: None,
        }
    }

    #[test]
    fn test_place_order() {
        let catalog = catalog();
        let cart = CartState::new();
        let paa = catalog.catalog().item("paa").unwrap().clone();
        cart.with_cart_mut(|c| c.add_to_cart(&paa, 2, None, &[])).unwrap();

        let handoff = place_order(&catalog, &cart, &ConfigState::default(), &details("gcash")).unwrap();

        assert_eq!(handoff.summary.total_cents, 24000);
        assert_eq!(handoff.summary.details.customer_name, "Maria Santos");
        assert_eq!(handoff.summary.payment_method_name, "GCash");
        assert!(handoff.message.contains("• Chicken Paa x2 - ₱240.00"));
        assert!(handoff
            .messenger_url
            .starts_with("https://m.me/100092989982548?text="));

        // Cart is kept after hand-off
        assert_eq!(cart.with_cart(|c| c.total_items()), 2);
    }

    #[test]
    fn test_place_order_errors() {
        let catalog = catalog();
        let cart = CartState::new();
        let config = ConfigState::default();

        let err = place_order(&catalog, &cart, &config, &details("cash")).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);

        let paa = catalog.catalog().item("paa").unwrap().clone();
        cart.with_cart_mut(|c| c.add_to_cart(&paa, 1, None, &[])).unwrap();

        let err = place_order(&catalog, &cart, &config, &details("paypal")).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let mut missing_name = details("cash");
        missing_name.customer_name = "   ".into();
        let err = place_order(&catalog, &cart, &config, &missing_name).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_checkout_defaults() {
        let catalog = catalog();
        let cart = CartState::new();

        let defaults = get_checkout_defaults(&catalog, &cart);
        assert_eq!(defaults.payment_method_id, "gcash");
        assert_eq!(defaults.total_items, 0);
    }
}
