//! # Cart Actions
//!
//! The closed set of requests that can change a cart.
//!
//! ## Two Forms
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Wire form (JSON from a web view)        Typed form (Rust callers)      │
//! │  ────────────────────────────────        ─────────────────────────      │
//! │  { "type": "ADD",                        Action::Add(CartItem)          │
//! │    "payload": { "sku": ..., ... } }      Action::Remove(sku)            │
//! │             │                            Action::SetQuantity(sku, n)    │
//! │             │   Action::try_from(raw)    Action::Submit                 │
//! │             └──────────────────────────────────►                        │
//! │                 MissingPayload / UnknownActionKind                      │
//! │                 are raised here and nowhere else                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rust code builds `Action` values directly; the transition function matches
//! them exhaustively, so an unknown kind cannot reach it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;
use crate::types::CartItem;

// =============================================================================
// Action
// =============================================================================

/// A request to move the cart to its next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Add one unit of the item, inserting the line if needed.
    Add(CartItem),
    /// Drop the line with this sku. Absent sku is a no-op.
    Remove(String),
    /// Replace the quantity of an existing line.
    SetQuantity(String, u32),
    /// Order placed: empty the cart.
    Submit,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Add(_) => ActionKind::Add,
            Action::Remove(_) => ActionKind::Remove,
            Action::SetQuantity(..) => ActionKind::Quantity,
            Action::Submit => ActionKind::Submit,
        }
    }

    /// The sku this action targets, if any.
    pub fn sku(&self) -> Option<&str> {
        match self {
            Action::Add(item) => Some(&item.sku),
            Action::Remove(sku) | Action::SetQuantity(sku, _) => Some(sku),
            Action::Submit => None,
        }
    }
}

// =============================================================================
// Action Kind
// =============================================================================

/// The `type` tag of a wire action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    Add,
    Remove,
    Quantity,
    Submit,
}

impl ActionKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Add => "ADD",
            ActionKind::Remove => "REMOVE",
            ActionKind::Quantity => "QUANTITY",
            ActionKind::Submit => "SUBMIT",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADD" => Ok(ActionKind::Add),
            "REMOVE" => Ok(ActionKind::Remove),
            "QUANTITY" => Ok(ActionKind::Quantity),
            "SUBMIT" => Ok(ActionKind::Submit),
            other => Err(CoreError::UnknownActionKind(other.to_string())),
        }
    }
}

// =============================================================================
// Wire Form
// =============================================================================

/// An action as a web view sends it.
///
/// ```json
/// { "type": "QUANTITY", "payload": { "sku": "item0002", "quantity": 4 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RawAction {
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<ActionPayload>,
}

/// Line data carried by a wire action. Which fields are required depends on
/// the action kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ActionPayload {
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price_cents: Option<i64>,
    #[serde(default)]
    pub quantity: Option<u32>,
}

impl RawAction {
    /// Parses the JSON wire form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn require<T>(value: Option<T>, action: ActionKind, field: &str) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::MissingPayload {
        action,
        field: field.to_string(),
    })
}

impl TryFrom<RawAction> for Action {
    type Error = CoreError;

    fn try_from(raw: RawAction) -> Result<Self, Self::Error> {
        let kind: ActionKind = raw.kind.parse()?;

        if kind == ActionKind::Submit {
            return Ok(Action::Submit);
        }

        let payload = require(raw.payload, kind, "payload")?;
        let sku = require(payload.sku, kind, "sku")?;

        match kind {
            ActionKind::Add => {
                let name = require(payload.name, kind, "name")?;
                let price = require(payload.price_cents, kind, "price_cents")?;
                Ok(Action::Add(CartItem::new(sku, name, Money::from_cents(price))))
            }
            ActionKind::Remove => Ok(Action::Remove(sku)),
            ActionKind::Quantity => {
                let quantity = require(payload.quantity, kind, "quantity")?;
                Ok(Action::SetQuantity(sku, quantity))
            }
            ActionKind::Submit => Ok(Action::Submit),
        }
    }
}

impl From<Action> for RawAction {
    fn from(action: Action) -> Self {
        let kind = action.kind().as_str().to_string();
        let payload = match action {
            Action::Add(item) => Some(ActionPayload {
                sku: Some(item.sku),
                name: Some(item.name),
                price_cents: Some(item.unit_price_cents),
                quantity: Some(item.quantity),
            }),
            Action::Remove(sku) => Some(ActionPayload {
                sku: Some(sku),
                ..ActionPayload::default()
            }),
            Action::SetQuantity(sku, quantity) => Some(ActionPayload {
                sku: Some(sku),
                quantity: Some(quantity),
                ..ActionPayload::default()
            }),
            Action::Submit => None,
        };

        RawAction { kind, payload }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
