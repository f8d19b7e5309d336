//! # Validation Module
//!
//! Input validation for quantities and checkout details.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Storefront UI                                                │
//! │  ├── Disables "Place Order" until required fields are filled           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands (Rust)                                   │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field and quantity rules                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart / pricing                                               │
//! │  └── Selection must belong to the menu item                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use inasal_core::validation::{validate_contact_number, validate_quantity};
//!
//! assert!(validate_quantity(2).is_ok());
//! assert!(validate_contact_number("0917 123 4567").is_ok());
//! ```

use crate::error::ValidationError;
use crate::{MAX_ADD_ON_QUANTITY, MAX_ITEM_QUANTITY, MAX_PRICE_CENTS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 100;
const MAX_CONTACT_LEN: usize = 20;
const MAX_ADDRESS_LEN: usize = 300;
const MAX_NOTES_LEN: usize = 500;

// =============================================================================
// String Validators
// =============================================================================

/// Checks that a field is non-blank and within `max` characters.
///
/// ## Returns
/// The trimmed value.
pub fn validate_required(field: &str, value: &str, max: usize) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(value.to_string())
}

/// Validates the customer's name.
pub fn validate_customer_name(name: &str) -> ValidationResult<String> {
    validate_required("customer name", name, MAX_NAME_LEN)
}

/// Validates a contact number.
///
/// ## Rules
/// - Must not be empty
/// - Digits plus the usual separators: space, `+`, `-`, `(`, `)`
///
/// ## Example
/// ```rust
/// use inasal_core::validation::validate_contact_number;
///
/// assert!(validate_contact_number("+63 917-123-4567").is_ok());
/// assert!(validate_contact_number("0917.123.4567 ext. 2").is_ok());
/// assert!(validate_contact_number("  ").is_err());
/// ```
pub fn validate_contact_number(number: &str) -> ValidationResult<String> {
    validate_required("contact number", number, MAX_CONTACT_LEN)
}

/// Validates a delivery address.
pub fn validate_address(address: &str) -> ValidationResult<String> {
    validate_required("address", address, MAX_ADDRESS_LEN)
}

/// Normalizes an optional free-text field: blank becomes `None`.
pub fn validate_optional_text(
    field: &str,
    value: Option<&str>,
    max: usize,
) -> ValidationResult<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.chars().count() > max => Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        }),
        Some(v) => Ok(Some(v.to_string())),
    }
}

/// Validates order notes (optional, at most 500 characters).
pub fn validate_notes(notes: Option<&str>) -> ValidationResult<Option<String>> {
    validate_optional_text("notes", notes, MAX_NOTES_LEN)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity added to the cart.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
///
/// ## Example
/// ```rust
/// use inasal_core::validation::validate_quantity;
///
/// assert!(validate_quantity(999).is_ok());
/// assert!(validate_quantity(1000).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY,
        });
    }

    Ok(())
}

/// Validates how many of one add-on go on a single item.
///
/// Zero is allowed and means "not selected".
pub fn validate_add_on_quantity(qty: i64) -> ValidationResult<()> {
    if !(0..=MAX_ADD_ON_QUANTITY).contains(&qty) {
        return Err(ValidationError::OutOfRange {
            field: "add-on quantity".to_string(),
            min: 0,
            max: MAX_ADD_ON_QUANTITY,
        });
    }

    Ok(())
}

/// Validates a catalog price in centavos.
///
/// ## Rules
/// - Must not be negative
/// - Must not exceed MAX_PRICE_CENTS (₱1,000,000)
pub fn validate_price(field: &str, cents: i64) -> ValidationResult<()> {
    if !(0..=MAX_PRICE_CENTS).contains(&cents) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: MAX_PRICE_CENTS,
        });
    }

    Ok(())
}

/// Validates a dine-in party size.
pub fn validate_party_size(size: u32) -> ValidationResult<()> {
    if size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "party size".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
