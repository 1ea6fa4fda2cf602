//! # Error Types
//!
//! Domain-specific error types for shopcart-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shopcart-core errors (this file)                                      │
//! │  ├── CoreError        - Cart transition and catalog failures           │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app)                                               │
//! │  └── ApiError         - What a view sees (code + message)              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant signals a wiring mistake between the views and the store,
//! never a condition the store recovers from.

use thiserror::Error;

use crate::action::ActionKind;

// =============================================================================
// Core Error
// =============================================================================

/// Cart and catalog errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An action arrived without the data it needs.
    ///
    /// ## When This Occurs
    /// - `ADD` without a payload, or without a name or price
    /// - `REMOVE` without a payload
    /// - `QUANTITY` without a payload or without a quantity
    #[error("Payload is missing in {action} action: {field}")]
    MissingPayload { action: ActionKind, field: String },

    /// `SetQuantity` named a sku that is not in the cart.
    #[error("Item with sku {0} does not exist to update the quantity")]
    UnknownSku(String),

    /// A wire action carried a `type` tag outside the four known kinds.
    #[error("Unhandled action type: {0}")]
    UnknownActionKind(String),

    /// Item quantity exceeds maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u64, max: u32 },

    /// The cart total would not fit in a `Money` value.
    #[error("Cart total is too large")]
    TotalTooLarge,

    /// Product cannot be found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
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

    /// Invalid format.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., duplicate SKU in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
