//! # Order Hand-off
//!
//! Turns a placed [`OrderSummary`] into the chat message the customer sends
//! to the restaurant, and the Messenger link that pre-fills it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  🛒 Kamfood Inasal ORDER                                                │
//! │                                                                         │
//! │  👤 Customer: Juan Dela Cruz                                            │
//! │  📞 Contact: 0917 123 4567                                              │
//! │  📍 Service: Delivery                                                   │
//! │  🏠 Address: 12 Lacson St                                               │
//! │                                                                         │
//! │  ORDER DETAILS:                                                         │
//! │  • Chicken Paa (Large) + Extra Rice x2 x1 - ₱150.00                    │
//! │                                                                         │
//! │  💰 TOTAL: ₱150.00                                                      │
//! │  🛵 DELIVERY FEE:                                                       │
//! │                                                                         │
//! │  Payment: GCash                                                         │
//! │  📸 Payment Screenshot: ...                                             │
//! │                                                                         │
//! │  Please confirm this order to proceed. Thank you for choosing ...       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Lines that would be empty for the chosen service (no landmark, no notes)
//! are left out rather than rendered blank.

use inasal_core::{OrderLine, OrderSummary, ServiceDetails};

use crate::state::ConfigState;

/// Renders the order message.
pub fn format_order_message(summary: &OrderSummary, config: &ConfigState) -> String {
    let details = &summary.details;
    let service_type = summary.service_type();
    let mut out: Vec<String> = Vec::new();

    out.push(format!("🛒 {} ORDER", config.brand_name));
    out.push(String::new());

    out.push(format!("👤 Customer: {}", details.customer_name));
    out.push(format!("📞 Contact: {}", details.contact_number));
    out.push(format!("📍 Service: {}", service_type.label()));

    match &details.service {
        ServiceDetails::Delivery { address, landmark } => {
            out.push(format!("🏠 Address: {}", address));
            if let Some(landmark) = landmark {
                out.push(format!("🗺️ Landmark: {}", landmark));
            }
        }
        ServiceDetails::Pickup { pickup_time } => {
            out.push(format!("⏰ Pickup Time: {}", pickup_time.describe()));
        }
        ServiceDetails::DineIn { party_size } => {
            out.push(format!(
                "👥 Party Size: {} person{}",
                party_size,
                if *party_size == 1 { "" } else { "s" }
            ));
        }
    }

    out.push(String::new());
    out.push("ORDER DETAILS:".to_string());
    out.extend(summary.lines.iter().map(|line| format_line(line, config)));

    out.push(String::new());
    out.push(format!("💰 TOTAL: {}", config.format_currency(summary.total_cents)));
    if matches!(details.service, ServiceDetails::Delivery { .. }) {
        // Fee is quoted by the restaurant in the chat
        out.push("🛵 DELIVERY FEE:".to_string());
    }

    out.push(String::new());
    out.push(format!("Payment: {}", summary.payment_method_name));
    if details.is_cash() {
        out.push(format!(
            "💵 Cash payment upon {}",
            service_type.cash_collection_point()
        ));
    } else {
        out.push(
            "📸 Payment Screenshot: Please attach your payment receipt screenshot".to_string(),
        );
    }

    if let Some(notes) = &details.notes {
        out.push(String::new());
        out.push(format!("📝 Notes: {}", notes));
    }

    out.push(String::new());
    out.push(format!(
        "Please confirm this order to proceed. Thank you for choosing {}! 🥟",
        config.brand_name
    ));

    out.join("\n")
}

/// Builds the Messenger link that opens a chat with `message` pre-filled.
pub fn messenger_url(config: &ConfigState, message: &str) -> String {
    format!(
        "{}?text={}",
        config.messenger_base_url(),
        urlencoding::encode(message)
    )
}

/// `• Name (Variation) + AddOn x2, Other - ₱total` with the line quantity
/// before the price.
fn format_line(line: &OrderLine, config: &ConfigState) -> String {
    let mut text = format!("• {}", line.name);

    if let Some(variation) = &line.variation_name {
        text.push_str(&format!(" ({})", variation));
    }

    if !line.add_ons.is_empty() {
        let add_ons: Vec<String> = line
            .add_ons
            .iter()
            .map(|(name, qty)| {
                if *qty > 1 {
                    format!("{} x{}", name, qty)
                } else {
                    name.clone()
                }
            })
            .collect();
        text.push_str(&format!(" + {}", add_ons.join(", ")));
    }

    text.push_str(&format!(
        " x{} - {}",
        line.quantity,
        config.format_currency(line.line_total_cents)
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use inasal_core::types::{AddOn, PaymentMethod, Variation};
    use inasal_core::{AddOnSelection, Cart, MenuItem, OrderDetails, PickupTime};

    fn summary(service: ServiceDetails, payment: &str, notes: Option<&str>) -> OrderSummary {
        let mut paa = MenuItem::new("paa", "Chicken Paa", "inasal", 10000);
        paa.variations.push(Variation {
            id: "large".into(),
            name: "Large".into(),
            price_cents: 2000,
        });
        paa.add_ons.push(AddOn {
            id: "extra-rice".into(),
            name: "Extra Rice".into(),
            category: "rice".into(),
            price_cents: 1500,
        });
        paa.add_ons.push(AddOn {
            id: "atchara".into(),
            name: "Atchara".into(),
            category: "sides".into(),
            price_cents: 0,
        });

        let mut cart = Cart::new();
        cart.add_to_cart(
            &paa,
            1,
            Some("large"),
            &[
                AddOnSelection::new("extra-rice", 2),
                AddOnSelection::new("atchara", 1),
            ],
        )
        .unwrap();

        let methods = vec![PaymentMethod {
            id: "gcash".into(),
            name: "GCash".into(),
            account_number: "09171234567".into(),
            account_name: "Kamfood Inasal".into(),
            qr_code_url: None,
            active: true,
            sort_order: 1,
        }];

        let details = OrderDetails {
            customer_name: "Juan Dela Cruz".into(),
            contact_number: "0917 123 4567".into(),
            service,
            payment_method_id: payment.into(),
            notes: notes.map(String::from),
        };

        OrderSummary::build(&cart, &details, &methods).unwrap()
    }

    #[test]
    fn test_delivery_message() {
        let summary = summary(
            ServiceDetails::Delivery {
                address: "12 Lacson St".into(),
                landmark: Some("near the plaza".into()),
            },
            "gcash",
            Some("extra sauce"),
        );
        let message = format_order_message(&summary, &ConfigState::default());

        let expected = "\
🛒 Kamfood Inasal ORDER

👤 Customer: Juan Dela Cruz
📞 Contact: 0917 123 4567
📍 Service: Delivery
🏠 Address: 12 Lacson St
🗺️ Landmark: near the plaza

ORDER DETAILS:
• Chicken Paa (Large) + Atchara, Extra Rice x2 x1 - ₱150.00

💰 TOTAL: ₱150.00
🛵 DELIVERY FEE:

Payment: GCash
📸 Payment Screenshot: Please attach your payment receipt screenshot

📝 Notes: extra sauce

Please confirm this order to proceed. Thank you for choosing Kamfood Inasal! 🥟";

        assert_eq!(message, expected);
    }

    #[test]
    fn test_cash_pickup_message() {
        let summary = summary(
            ServiceDetails::Pickup {
                pickup_time: PickupTime::Preset("15-20".into()),
            },
            "cash",
            None,
        );
        let message = format_order_message(&summary, &ConfigState::default());

        assert!(message.contains("📍 Service: Pickup\n⏰ Pickup Time: 15-20 minutes"));
        assert!(message.contains("Payment: Cash\n💵 Cash payment upon pickup"));
        assert!(!message.contains("DELIVERY FEE"));
        assert!(!message.contains("Notes"));
    }

    #[test]
    fn test_dine_in_party_size() {
        let one = summary(ServiceDetails::DineIn { party_size: 1 }, "cash", None);
        let four = summary(ServiceDetails::DineIn { party_size: 4 }, "cash", None);
        let config = ConfigState::default();

        assert!(format_order_message(&one, &config).contains("👥 Party Size: 1 person\n"));
        assert!(format_order_message(&four, &config).contains("👥 Party Size: 4 persons\n"));
        assert!(format_order_message(&four, &config).contains("💵 Cash payment upon arrival"));
    }

    #[test]
    fn test_brand_from_config() {
        let summary = summary(ServiceDetails::DineIn { party_size: 2 }, "cash", None);
        let config = ConfigState {
            brand_name: "Bacolod Grill".into(),
            ..ConfigState::default()
        };
        let message = format_order_message(&summary, &config);

        assert!(message.starts_with("🛒 Bacolod Grill ORDER"));
        assert!(message.ends_with("Thank you for choosing Bacolod Grill! 🥟"));
    }

    #[test]
    fn test_messenger_url_encodes_message() {
        let config = ConfigState::default();
        let url = messenger_url(&config, "🛒 ORDER\nTotal: ₱150.00 & more");

        assert!(url.starts_with("https://m.me/100092989982548?text="));
        let encoded = url.split("?text=").nth(1).unwrap();
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('&'));
        assert_eq!(
            urlencoding::decode(encoded).unwrap(),
            "🛒 ORDER\nTotal: ₱150.00 & more"
        );
    }
}
