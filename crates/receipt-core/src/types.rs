//! # Domain Types
//!
//! Core domain types shared by the Validator, the Scorer, the store and the
//! HTTP layer.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────────┐                 │
//! │  │      Receipt        │ 1    n │        Item         │                 │
//! │  │  ─────────────────  │───────►│  ─────────────────  │                 │
//! │  │  retailer           │        │  shortDescription   │                 │
//! │  │  purchaseDate       │        │  price  ("6.49")    │                 │
//! │  │  purchaseTime       │        └─────────────────────┘                 │
//! │  │  total  ("35.35")   │                                                │
//! │  └─────────────────────┘                                                │
//! │                                                                         │
//! │  ┌─────────────────────┐   ┌───────────────────┐  ┌─────────────────┐  │
//! │  │     ReceiptId       │   │ ProcessReceipt-   │  │ PointsResponse  │  │
//! │  │  UUID v4 (opaque)   │   │ Response { id }   │  │ { points }      │  │
//! │  └─────────────────────┘   └───────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Field names are camelCase on the wire. Amounts stay strings exactly as
//! submitted; the Validator decides whether they are well-formed and the
//! Scorer reads their text (e.g. the last two characters of `total`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

// =============================================================================
// Receipt
// =============================================================================

/// A single purchased line on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Item {
    /// Free-text product description, e.g. "Mountain Dew 12PK".
    pub short_description: String,

    /// Price as a decimal string with two fractional digits.
    pub price: String,
}

/// A submitted purchase record.
///
/// All fields are required: a JSON body missing any of them (or carrying
/// `null`) fails deserialization and never reaches the Validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Receipt {
    /// Retailer or store name.
    pub retailer: String,

    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: String,

    /// 24-hour wall-clock time, `HH:MM`.
    pub purchase_time: String,

    /// Purchased items, in receipt order.
    pub items: Vec<Item>,

    /// Total paid as a decimal string with two fractional digits.
    pub total: String,
}

// =============================================================================
// Receipt Identifier
// =============================================================================

/// Opaque identifier assigned to an accepted receipt.
///
/// ## Why UUID v4?
/// 122 random bits: ids can be handed out from any request without
/// coordination and are not guessable from one another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(Uuid);

impl ReceiptId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        ReceiptId(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ReceiptId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ReceiptId {
    fn from(uuid: Uuid) -> Self {
        ReceiptId(uuid)
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for ReceiptId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(ReceiptId)
    }
}

// =============================================================================
// Response DTOs
// =============================================================================

/// Body returned by `POST /receipts/process`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProcessReceiptResponse {
    #[ts(type = "string")]
    pub id: ReceiptId,
}

/// Body returned by `GET /receipts/{id}/points`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointsResponse {
    pub points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================
