//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  View / Shell                Commands                  shopcart-core    │
//! │  ────────────                ────────                  ─────────────    │
//! │                                                                         │
//! │  add item0009 ──────────►  add_to_cart() ──────────► catalog.require() │
//! │                                  │                         │            │
//! │                                  │ ◄── ProductNotFound ────┘            │
//! │                                  ▼                                      │
//! │  "[NOT_FOUND] Product     ApiError { code, message }                    │
//! │   not found: item0009" ◄──                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ApiError is `Serialize` so a web view can receive it as
//! `{ "code": "NOT_FOUND", "message": "..." }`.

use serde::Serialize;
use shopcart_core::CoreError;

/// Error returned from storefront commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Product or cart line not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// An action arrived without the data it needs
    MissingPayload,

    /// An action carried an unrecognised type tag
    UnknownAction,

    /// Cart limit reached (quantity or total)
    CartError,

    /// Action JSON could not be parsed
    MalformedAction,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        tracing::debug!(error = %err, "cart command rejected");

        match err {
            CoreError::ProductNotFound(sku) => ApiError::not_found("Product", &sku),
            CoreError::UnknownSku(sku) => ApiError::not_found("Cart item", &sku),
            e @ CoreError::MissingPayload { .. } => {
                ApiError::new(ErrorCode::MissingPayload, e.to_string())
            }
            e @ CoreError::UnknownActionKind(_) => {
                ApiError::new(ErrorCode::UnknownAction, e.to_string())
            }
            e @ (CoreError::QuantityTooLarge { .. } | CoreError::TotalTooLarge) => {
                ApiError::new(ErrorCode::CartError, e.to_string())
            }
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::debug!(error = %err, "malformed action");
        ApiError::new(ErrorCode::MalformedAction, format!("Malformed action: {}", err))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let code = serde_json::to_value(self.code)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_else(|| format!("{:?}", self.code));
        write!(f, "[{}] {}", code, self.message)
    }
}

impl std::error::Error for ApiError {}
