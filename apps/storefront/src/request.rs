//! # Order Requests
//!
//! A whole order described as JSON, for hosts that collect the basket
//! somewhere else (a chat bot, a kiosk form, the headless binary) and only
//! need the storefront to price it and produce the hand-off.
//!
//! ```json
//! {
//!   "items": [
//!     { "item_id": "paa", "quantity": 2, "variation_id": "large",
//!       "add_ons": [ { "add_on_id": "extra-rice", "quantity": 1 } ] }
//!   ],
//!   "details": {
//!     "customer_name": "Juan Dela Cruz",
//!     "contact_number": "0917 123 4567",
//!     "service": { "type": "pickup", "pickup_time": { "kind": "preset", "value": "15-20" } },
//!     "payment_method_id": "cash"
//!   }
//! }
//! ```

use std::path::Path;

use inasal_core::{AddOnSelection, OrderDetails};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands;
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, StateError};

/// One requested cart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestedItem {
    pub item_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: i64,
    #[serde(default)]
    pub variation_id: Option<String>,
    #[serde(default)]
    pub add_ons: Vec<AddOnSelection>,
}

fn default_quantity() -> i64 {
    1
}

/// A basket plus the checkout details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub items: Vec<RequestedItem>,
    pub details: OrderDetails,
}

impl OrderRequest {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reads an order request file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StateError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StateError::Io {
                path: display.clone(),
                source,
            })?;

        Self::from_json(&json).map_err(|source| StateError::Parse {
            path: display,
            source,
        })
    }

    /// Adds every requested item to `cart` through the cart commands.
    ///
    /// Stops at the first item the catalog or cart rejects; items added
    /// before it stay in the cart.
    ///
    /// ## Returns
    /// The line id each item landed on, in request order.
    pub fn apply(&self, catalog: &CatalogState, cart: &CartState) -> Result<Vec<String>, ApiError> {
        debug!(items = self.items.len(), "Applying order request");

        self.items
            .iter()
            .map(|item| {
                commands::add_to_cart(
                    catalog,
                    cart,
                    &item.item_id,
                    Some(item.quantity),
                    item.variation_id.as_deref(),
                    &item.add_ons,
                )
                .map(|response| response.line_id)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inasal_core::{Catalog, PickupTime, ServiceDetails};

    const REQUEST: &str = r#"{
        "items": [
            { "item_id": "paa", "quantity": 2,
              "add_ons": [ { "add_on_id": "extra-rice" } ] },
            { "item_id": "rice" },
            { "item_id": "paa", "add_ons": [ { "add_on_id": "extra-rice", "quantity": 1 } ] }
        ],
        "details": {
            "customer_name": "Juan Dela Cruz",
            "contact_number": "0917 123 4567",
            "service": { "type": "pickup", "pickup_time": { "kind": "preset", "value": "15-20" } },
            "payment_method_id": "cash"
        }
    }"#;

    fn catalog() -> CatalogState {
        let json = r#"{
            "items": [
                { "id": "paa", "name": "Chicken Paa", "category": "inasal", "base_price_cents": 10000,
                  "add_ons": [ { "id": "extra-rice", "name": "Extra Rice", "category": "rice", "price_cents": 1500 } ] },
                { "id": "rice", "name": "Plain Rice", "category": "sides", "base_price_cents": 2000 }
            ]
        }"#;
        CatalogState::new(Catalog::from_json(json).unwrap())
    }

    #[test]
    fn test_parse_request() {
        let request = OrderRequest::from_json(REQUEST).unwrap();

        assert_eq!(request.items.len(), 3);
        assert_eq!(request.items[1].quantity, 1);
        assert_eq!(request.items[0].add_ons[0].quantity, 1);
        assert_eq!(
            request.details.service,
            ServiceDetails::Pickup {
                pickup_time: PickupTime::Preset("15-20".into())
            }
        );
    }

    #[test]
    fn test_apply_merges_identical_items() {
        let request = OrderRequest::from_json(REQUEST).unwrap();
        let catalog = catalog();
        let cart = CartState::new();

        let line_ids = request.apply(&catalog, &cart).unwrap();

        assert_eq!(line_ids.len(), 3);
        assert_eq!(line_ids[0], line_ids[2]);
        cart.with_cart(|c| {
            assert_eq!(c.line_count(), 2);
            assert_eq!(c.total_items(), 4);
            assert_eq!(c.total_price().cents(), 3 * 11500 + 2000);
        });
    }

    #[test]
    fn test_apply_stops_at_unknown_item() {
        let mut request = OrderRequest::from_json(REQUEST).unwrap();
        request.items.insert(
            1,
            RequestedItem {
                item_id: "sisig".into(),
                quantity: 1,
                variation_id: None,
                add_ons: Vec::new(),
            },
        );
        let catalog = catalog();
        let cart = CartState::new();

        let err = request.apply(&catalog, &cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(cart.with_cart(|c| c.line_count()), 1);
    }

    #[test]
    fn test_demo_order_against_demo_catalog() {
        let catalog = CatalogState::new(
            Catalog::from_json(include_str!("../../../demos/catalog.json")).unwrap(),
        );
        let request = OrderRequest::from_json(include_str!("../../../demos/order.json")).unwrap();
        let cart = CartState::new();

        request.apply(&catalog, &cart).unwrap();
        let handoff = commands::place_order(
            &catalog,
            &cart,
            &crate::state::ConfigState::default(),
            &request.details,
        )
        .unwrap();

        // 2 × (100 + 20 + 2×15) + 110 + (45 + 90)
        assert_eq!(handoff.summary.total_cents, 54500);
        assert_eq!(handoff.summary.payment_method_name, "GCash");
        assert!(handoff.message.contains("🗺️ Landmark: Across the public plaza"));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let path = std::env::temp_dir().join(format!("inasal-{}-no-order.json", std::process::id()));
        assert!(matches!(
            OrderRequest::load(&path).await,
            Err(StateError::Io { .. })
        ));
    }
}
