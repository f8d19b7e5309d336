//! # Order Summary
//!
//! Customer-entered order details and the read-only summary handed to the
//! messaging channel.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart ──► OrderDetails (name, contact, service, payment, notes)         │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  OrderSummary::build ← THIS MODULE                                      │
//! │    • cart must not be empty                                             │
//! │    • details validated per service type                                 │
//! │    • payment method resolved to a display name                          │
//! │                 │                                                       │
//! │                 ▼                                                       │
//! │  fully resolved, read-only summary ──► message formatting (app layer)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{Cart, CartLineItem};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{PaymentMethod, ServiceType, CASH_PAYMENT_ID};
use crate::validation::{
    validate_address, validate_contact_number, validate_customer_name, validate_notes,
    validate_optional_text, validate_party_size, validate_required,
};

// =============================================================================
// Order Details
// =============================================================================

/// When a pickup order will be collected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum PickupTime {
    /// A preset window in minutes, e.g. `"5-10"`.
    Preset(String),
    /// Free text typed by the customer, e.g. `"around 6pm"`.
    Custom(String),
}

impl PickupTime {
    /// `"5-10 minutes"` for presets, the text itself for custom times.
    pub fn describe(&self) -> String {
        match self {
            PickupTime::Preset(window) => format!("{} minutes", window),
            PickupTime::Custom(text) => text.clone(),
        }
    }
}

/// Service-specific details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ServiceDetails {
    DineIn {
        party_size: u32,
    },
    Pickup {
        pickup_time: PickupTime,
    },
    Delivery {
        address: String,
        #[serde(default)]
        landmark: Option<String>,
    },
}

impl ServiceDetails {
    pub fn service_type(&self) -> ServiceType {
        match self {
            ServiceDetails::DineIn { .. } => ServiceType::DineIn,
            ServiceDetails::Pickup { .. } => ServiceType::Pickup,
            ServiceDetails::Delivery { .. } => ServiceType::Delivery,
        }
    }

    /// Validates and trims the fields that matter for this service type.
    fn validated(&self) -> CoreResult<ServiceDetails> {
        Ok(match self {
            ServiceDetails::DineIn { party_size } => {
                validate_party_size(*party_size)?;
                ServiceDetails::DineIn {
                    party_size: *party_size,
                }
            }
            ServiceDetails::Pickup { pickup_time } => ServiceDetails::Pickup {
                pickup_time: match pickup_time {
                    PickupTime::Preset(w) => {
                        PickupTime::Preset(validate_required("pickup time", w, 20)?)
                    }
                    PickupTime::Custom(t) => {
                        PickupTime::Custom(validate_required("pickup time", t, 100)?)
                    }
                },
            },
            ServiceDetails::Delivery { address, landmark } => ServiceDetails::Delivery {
                address: validate_address(address)?,
                landmark: validate_optional_text("landmark", landmark.as_deref(), 200)?,
            },
        })
    }
}

/// Everything the customer fills in at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderDetails {
    pub customer_name: String,
    pub contact_number: String,
    pub service: ServiceDetails,
    pub payment_method_id: String,
    #[serde(default)]
    pub notes: Option<String>,
}

impl OrderDetails {
    /// Returns a trimmed copy, or the first rule the details break.
    ///
    /// ## Rules
    /// - name and contact number are required
    /// - delivery needs an address
    /// - pickup needs a non-empty time
    /// - dine-in party size is at least 1
    pub fn validated(&self) -> CoreResult<OrderDetails> {
        Ok(OrderDetails {
            customer_name: validate_customer_name(&self.customer_name)?,
            contact_number: validate_contact_number(&self.contact_number)?,
            service: self.service.validated()?,
            payment_method_id: validate_required("payment method", &self.payment_method_id, 64)?,
            notes: validate_notes(self.notes.as_deref())?,
        })
    }

    pub fn is_cash(&self) -> bool {
        self.payment_method_id == CASH_PAYMENT_ID
    }
}

// =============================================================================
// Order Summary
// =============================================================================

/// One resolved line of the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderLine {
    pub name: String,
    pub variation_name: Option<String>,
    /// `(add-on name, quantity)` pairs.
    pub add_ons: Vec<(String, i64)>,
    pub quantity: i64,
    pub unit_price_cents: i64,
    pub line_total_cents: i64,
}

impl From<&CartLineItem> for OrderLine {
    fn from(line: &CartLineItem) -> Self {
        OrderLine {
            name: line.name.clone(),
            variation_name: line.variation.as_ref().map(|v| v.name.clone()),
            add_ons: line
                .add_ons
                .iter()
                .map(|a| (a.add_on.name.clone(), a.quantity))
                .collect(),
            quantity: line.quantity,
            unit_price_cents: line.unit_price_cents,
            line_total_cents: line.line_total().cents(),
        }
    }
}

impl OrderLine {
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.line_total_cents)
    }
}

/// Read-only, fully resolved order ready for hand-off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OrderSummary {
    pub lines: Vec<OrderLine>,
    pub total_cents: i64,
    pub total_items: i64,
    pub details: OrderDetails,
    pub payment_method_name: String,
    #[ts(as = "String")]
    pub placed_at: DateTime<Utc>,
}

impl OrderSummary {
    /// Builds the summary of `cart` for the given details.
    ///
    /// ## Errors
    /// - `EmptyCart` when there is nothing to order
    /// - `Validation` when the details break a rule
    /// - `NotFound` when the payment method is neither listed nor cash
    pub fn build(
        cart: &Cart,
        details: &OrderDetails,
        payment_methods: &[PaymentMethod],
    ) -> CoreResult<OrderSummary> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart);
        }

        let details = details.validated()?;
        let payment_method_name = resolve_payment_method_name(&details.payment_method_id, payment_methods)?;

        Ok(OrderSummary {
            lines: cart.lines().iter().map(OrderLine::from).collect(),
            total_cents: cart.total_price().cents(),
            total_items: cart.total_items(),
            details,
            payment_method_name,
            placed_at: Utc::now(),
        })
    }

    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    pub fn service_type(&self) -> ServiceType {
        self.details.service.service_type()
    }
}

// Cash always renders as "Cash", whatever the catalog calls it.
fn resolve_payment_method_name(id: &str, methods: &[PaymentMethod]) -> CoreResult<String> {
    if id == CASH_PAYMENT_ID {
        return Ok("Cash".to_string());
    }
    methods
        .iter()
        .find(|m| m.id == id && m.active)
        .map(|m| m.name.clone())
        .ok_or_else(|| CoreError::not_found("Payment method", id))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::AddOnSelection;
    use crate::types::{AddOn, MenuItem, Variation};

    fn paa() -> MenuItem {
        let mut item = MenuItem::new("paa", "Chicken Paa", "inasal", 10000);
        item.variations = vec![Variation {
            id: "large".to_string(),
            name: "Large".to_string(),
            price_cents: 2000,
        }];
        item.add_ons = vec![AddOn {
            id: "extra-rice".to_string(),
            name: "Extra Rice".to_string(),
            category: "rice".to_string(),
            price_cents: 1500,
        }];
        item
    }

    fn gcash() -> PaymentMethod {
        PaymentMethod {
            id: "gcash".to_string(),
            name: "GCash".to_string(),
            account_number: "0917 000 0000".to_string(),
            account_name: "Kamfood".to_string(),
            qr_code_url: None,
            active: true,
            sort_order: 1,
        }
    }

    fn details(service: ServiceDetails) -> OrderDetails {
        OrderDetails {
            customer_name: " Maria ".to_string(),
            contact_number: "09171234567".to_string(),
            service,
            payment_method_id: "gcash".to_string(),
            notes: Some("  ".to_string()),
        }
    }

    fn filled_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add_to_cart(
            &paa(),
            2,
            Some("large"),
            &[AddOnSelection::new("extra-rice", 2)],
        )
        .unwrap();
        cart
    }

    #[test]
    fn test_build_summary() {
        let summary = OrderSummary::build(
            &filled_cart(),
            &details(ServiceDetails::DineIn { party_size: 3 }),
            &[gcash()],
        )
        .unwrap();

        assert_eq!(summary.lines.len(), 1);
        let line = &summary.lines[0];
        assert_eq!(line.variation_name.as_deref(), Some("Large"));
        assert_eq!(line.add_ons, vec![("Extra Rice".to_string(), 2)]);
        assert_eq!(line.line_total(), Money::from_pesos(300));
        assert_eq!(summary.total(), Money::from_pesos(300));
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.payment_method_name, "GCash");
        assert_eq!(summary.details.customer_name, "Maria");
        assert_eq!(summary.details.notes, None);
        assert_eq!(summary.service_type(), ServiceType::DineIn);
    }

    #[test]
    fn test_empty_cart_rejected() {
        let err = OrderSummary::build(
            &Cart::new(),
            &details(ServiceDetails::DineIn { party_size: 1 }),
            &[gcash()],
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::EmptyCart));
    }

    #[test]
    fn test_service_specific_rules() {
        let cart = filled_cart();

        let no_address = details(ServiceDetails::Delivery {
            address: " ".to_string(),
            landmark: None,
        });
        assert!(matches!(
            OrderSummary::build(&cart, &no_address, &[gcash()]),
            Err(CoreError::Validation(_))
        ));

        let no_time = details(ServiceDetails::Pickup {
            pickup_time: PickupTime::Custom(String::new()),
        });
        assert!(matches!(
            OrderSummary::build(&cart, &no_time, &[gcash()]),
            Err(CoreError::Validation(_))
        ));

        let nobody = details(ServiceDetails::DineIn { party_size: 0 });
        assert!(matches!(
            OrderSummary::build(&cart, &nobody, &[gcash()]),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_payment_method_resolution() {
        let cart = filled_cart();
        let mut cash = details(ServiceDetails::Pickup {
            pickup_time: PickupTime::Preset("5-10".to_string()),
        });
        cash.payment_method_id = "cash".to_string();
        let summary = OrderSummary::build(&cart, &cash, &[]).unwrap();
        assert_eq!(summary.payment_method_name, "Cash");
        assert!(summary.details.is_cash());

        let listed_cash = PaymentMethod {
            id: "cash".to_string(),
            name: "Cash on Delivery".to_string(),
            ..gcash()
        };
        let summary = OrderSummary::build(&cart, &cash, &[listed_cash, gcash()]).unwrap();
        assert_eq!(summary.payment_method_name, "Cash");

        let mut unknown = cash.clone();
        unknown.payment_method_id = "bitcoin".to_string();
        assert!(matches!(
            OrderSummary::build(&cart, &unknown, &[gcash()]),
            Err(CoreError::NotFound { .. })
        ));
    }

    #[test]
    fn test_pickup_time_describe() {
        assert_eq!(PickupTime::Preset("15-20".to_string()).describe(), "15-20 minutes");
        assert_eq!(PickupTime::Custom("6:30 PM".to_string()).describe(), "6:30 PM");
    }

    #[test]
    fn test_details_deserialize() {
        let json = r#"{
            "customer_name": "Jose",
            "contact_number": "0918 765 4321",
            "service": { "type": "delivery", "address": "123 Lacson St", "landmark": "near the church" },
            "payment_method_id": "cash"
        }"#;
        let details: OrderDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.service.service_type(), ServiceType::Delivery);
        assert_eq!(details.notes, None);
    }
}
