//! # Cart Commands
//!
//! Cart manipulation for the storefront.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│Messenger │       │
//! │  │  Cart    │     │          │     │  Form    │     │ Hand-off │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │                        │                 │                              │
//! │                   add_to_cart       place_order                         │
//! │                   update_item       (checkout.rs)                       │
//! │                   remove_item                                           │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────────────────►                   │
//! │                                                      (back to empty)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use inasal_core::{AddOnSelection, Cart, CartLineItem, CartTotals};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartResponse {
    pub items: Vec<CartLineItem>,
    pub totals: CartTotals,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            items: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with lines and calculated totals
pub fn get_cart(cart: &CartState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds a configured menu item to the cart.
///
/// ## Behavior
/// - Same item with the same variation and add-on counts: quantity increases
/// - Otherwise: a new line with the unit price frozen at this moment
///
/// ## Arguments
/// * `item_id` - Menu item id
/// * `quantity` - Quantity to add (default: 1)
/// * `variation_id` - Chosen variation, if any
/// * `add_ons` - Chosen add-ons with their counts
///
/// ## Returns
/// The line that received the units, and the updated cart
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    item_id: &str,
    quantity: Option<i64>,
    variation_id: Option<&str>,
    add_ons: &[AddOnSelection],
) -> Result<AddToCartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(
        item_id = %item_id,
        quantity = %quantity,
        variation_id = ?variation_id,
        add_ons = add_ons.len(),
        "add_to_cart command"
    );

    let item = catalog.catalog().require_item(item_id)?;

    cart.with_cart_mut(|c| {
        let line_id = c.add_to_cart(item, quantity, variation_id, add_ons)?;
        Ok::<_, ApiError>(AddToCartResponse {
            line_id,
            cart: CartResponse::from(&*c),
        })
    })
}

/// Result of [`add_to_cart`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddToCartResponse {
    pub line_id: String,
    pub cart: CartResponse,
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity ≤ 0: removes the line
/// - Quantity above the per-line maximum: `InvalidSelection`, cart unchanged
/// - Unknown line: cart unchanged
pub fn update_cart_item(
    cart: &CartState,
    line_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(line_id = %line_id, quantity = %quantity, "update_cart_item command");

    cart.with_cart_mut(|c| {
        if !c.update_quantity(line_id, quantity)? {
            debug!(line_id = %line_id, "update_cart_item: no such line");
        }
        Ok::<_, ApiError>(CartResponse::from(&*c))
    })
}

/// Removes a line from the cart. Unknown lines leave the cart unchanged.
pub fn remove_from_cart(cart: &CartState, line_id: &str) -> CartResponse {
    debug!(line_id = %line_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        if !c.remove_from_cart(line_id) {
            debug!(line_id = %line_id, "remove_from_cart: no such line");
        }
        CartResponse::from(&*c)
    })
}

/// Clears all lines from the cart.
pub fn clear_cart(cart: &CartState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear_cart();
        CartResponse::from(&*c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inasal_core::Catalog;

    fn catalog() -> CatalogState {
        let json = r#"{
            "items": [
                { "id": "paa", "name": "Chicken Paa", "category": "inasal",
                  "base_price_cents": 10000,
                  "variations": [ { "id": "large", "name": "Large", "price_cents": 2000 } ],
                  "add_ons": [ { "id": "extra-rice", "name": "Extra Rice", "category": "rice", "price_cents": 1500 } ] },
                { "id": "halo", "name": "Halo-halo", "category": "dessert",
                  "base_price_cents": 9000, "available": false }
            ]
        }"#;
        CatalogState::new(Catalog::from_json(json).unwrap())
    }

    #[test]
    fn test_add_merges_identical_configuration() {
        let catalog = catalog();
        let cart = CartState::new();
        let extras = [AddOnSelection::new("extra-rice", 2)];

        let first = add_to_cart(&catalog, &cart, "paa", None, Some("large"), &extras).unwrap();
        let second = add_to_cart(&catalog, &cart, "paa", Some(2), Some("large"), &extras).unwrap();

        assert_eq!(first.line_id, second.line_id);
        assert_eq!(second.cart.items.len(), 1);
        assert_eq!(second.cart.totals.total_items, 3);
        assert_eq!(second.cart.totals.total_cents, 45000);
    }

    #[test]
    fn test_add_errors() {
        let catalog = catalog();
        let cart = CartState::new();

        let err = add_to_cart(&catalog, &cart, "sisig", None, None, &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add_to_cart(&catalog, &cart, "halo", None, None, &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unavailable);

        let err = add_to_cart(&catalog, &cart, "paa", None, Some("family"), &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);

        assert!(get_cart(&cart).items.is_empty());
        assert_eq!(get_cart(&cart).totals.revision, 0);
    }

    #[test]
    fn test_add_beyond_line_maximum() {
        let catalog = catalog();
        let cart = CartState::new();

        add_to_cart(&catalog, &cart, "paa", Some(inasal_core::MAX_ITEM_QUANTITY), None, &[]).unwrap();
        let err = add_to_cart(&catalog, &cart, "paa", Some(i64::MAX), None, &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);

        let err = add_to_cart(&catalog, &cart, "paa", None, None, &[]).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);
        assert_eq!(
            get_cart(&cart).totals.total_items,
            inasal_core::MAX_ITEM_QUANTITY
        );
    }

    #[test]
    fn test_update_remove_clear() {
        let catalog = catalog();
        let cart = CartState::new();
        let line_id = add_to_cart(&catalog, &cart, "paa", None, None, &[])
            .unwrap()
            .line_id;

        let response = update_cart_item(&cart, &line_id, 4).unwrap();
        assert_eq!(response.totals.total_items, 4);

        let err = update_cart_item(&cart, &line_id, 1_000_000).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidSelection);
        assert_eq!(get_cart(&cart).totals.total_items, 4);

        let response = update_cart_item(&cart, &line_id, 0).unwrap();
        assert!(response.items.is_empty());

        let line_id = add_to_cart(&catalog, &cart, "paa", None, None, &[])
            .unwrap()
            .line_id;
        let response = remove_from_cart(&cart, "no-such-line");
        assert_eq!(response.items.len(), 1);

        let response = remove_from_cart(&cart, &line_id);
        assert!(response.items.is_empty());

        add_to_cart(&catalog, &cart, "paa", Some(2), None, &[]).unwrap();
        let response = clear_cart(&cart);
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total_cents, 0);
    }
}
