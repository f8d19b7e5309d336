//! # Error Types
//!
//! Domain-specific error types for inasal-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  inasal-core errors (this file)                                        │
//! │  ├── CoreError        - Selection, lookup and ordering failures        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── ApiError         - What the UI sees (serialized)                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → UI                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Not Errors
//! Removing or updating a cart line that no longer exists is a no-op, not
//! an error. A double-tap on "remove" must not surface a failure.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core ordering errors.
///
/// Every variant is a local precondition violation reported immediately.
/// There is nothing transient here, so nothing is worth retrying.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A variation or add-on that the menu item does not offer, or a
    /// negative quantity.
    ///
    /// ## When This Occurs
    /// ```text
    /// Menu item "Paa Large" offers variations [regular, large]
    ///      │
    ///      ▼
    /// select_variation("family")
    ///      │
    ///      ▼
    /// InvalidSelection { item_id: "paa", reason: "unknown variation 'family'" }
    /// ```
    #[error("Invalid selection for item {item_id}: {reason}")]
    InvalidSelection { item_id: String, reason: String },

    /// A catalog entry or cart line could not be found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// The menu item is marked sold out.
    #[error("Menu item is not available: {0}")]
    ItemUnavailable(String),

    /// A customization operation was attempted while no item is being customized.
    #[error("No item is being customized")]
    NoActiveCustomization,

    /// An order was placed with nothing in the cart.
    #[error("Cannot place an order with an empty cart")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Shorthand for an [`CoreError::InvalidSelection`].
    pub fn invalid_selection(item_id: impl Into<String>, reason: impl Into<String>) -> Self {
        CoreError::InvalidSelection {
            item_id: item_id.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a [`CoreError::NotFound`].
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These come from customer-entered checkout details, raw quantities and
/// catalog prices, checked before any ordering logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
