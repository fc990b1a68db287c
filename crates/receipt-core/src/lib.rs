//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate contains the two pieces of the service with real logic: the
//! receipt Validator and the points Scorer. Both are pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                receipt-api (Axum HTTP layer)                    │   │
//! │  │   POST /receipts/process        GET /receipts/{id}/points       │   │
//! │  └──────────────┬──────────────────────────────┬───────────────────┘   │
//! │                 │                              │                        │
//! │  ┌──────────────▼──────────────────────────────▼───────────────────┐   │
//! │  │             ★ receipt-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │validation │  │  points   │  │   │
//! │  │   │  Receipt  │  │  Amount   │  │ Validator │  │  Scorer   │  │   │
//! │  │   │   Item    │  │  (cents)  │  │  report   │  │ 6 rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO SHARED STATE • PURE FUNCTIONS                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               receipt-store (in-memory maps)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Receipt, Item, ReceiptId and response bodies
//! - [`money`] - Decimal amounts held as integer cents
//! - [`validation`] - The ordered validation rules
//! - [`points`] - The six scoring rules
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{calculate_points, validate_receipt, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-02".to_string(),
//!     purchase_time: "13:13".to_string(),
//!     items: vec![Item {
//!         short_description: "Pepsi - 12-oz".to_string(),
//!         price: "1.25".to_string(),
//!     }],
//!     total: "1.25".to_string(),
//! };
//!
//! validate_receipt(&receipt).expect("receipt is valid");
//! // 6 (Target) + 25 (quarter multiple)
//! assert_eq!(calculate_points(&receipt), 31);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod money;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use money::{Amount, AmountError};
pub use points::{calculate_points, PointsBreakdown};
pub use types::*;
pub use validation::{
    validate_receipt, FieldError, ValidationCode, ValidationReport, ValidationResult,
};
