//! # Validation Module
//!
//! The receipt Validator: decides whether a deserialized [`Receipt`] may be
//! accepted, and if not, which fields are wrong.
//!
//! ## Rule Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Validation Rules                           │
//! │                                                                         │
//! │  1. retailer format ─────────┐                                          │
//! │  2. purchaseDate format ─────┼── always all three run                   │
//! │  3. purchaseTime format ─────┘                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  4. total format ─────────────── fail? → HALT                           │
//! │  5. total number ─────────────── fail? → HALT                           │
//! │  6. items non-empty ──────────── fail? → HALT                           │
//! │  7. each item, in order:                                                │
//! │       price format → description format → price number                  │
//! │       first failing item ─────── HALT (later items unchecked)           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  8. sum(item prices) == total ── mismatch → totalmatchsumprice          │
//! │                                                                         │
//! │  Errors accumulate into one ValidationReport.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Required-field presence is not checked here: serde already refused any
//! body with a missing field.
//!
//! ## Pattern Dialect
//! Character classes are ASCII, the way RE2 reads them:
//! `\w` = `[0-9A-Za-z_]`, `\s` = `[\t\n\f\r ]`, `\d` = `[0-9]`.
//!
//! ## Usage
//! ```rust
//! use receipt_core::{validate_receipt, Item, Receipt, ValidationCode};
//!
//! let mut receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item {
//!         short_description: "Mountain Dew 12PK".to_string(),
//!         price: "6.49".to_string(),
//!     }],
//!     total: "6.49".to_string(),
//! };
//! assert!(validate_receipt(&receipt).is_ok());
//!
//! receipt.items.clear();
//! let report = validate_receipt(&receipt).unwrap_err();
//! assert_eq!(report.codes(), vec![ValidationCode::EmptyItems]);
//! ```

use std::fmt;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use num_bigint::BigUint;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Amount;
use crate::types::Receipt;

/// `^[\w\s\-&]+$`
static RETAILER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z_\t\n\x0C\r &-]+$").expect("retailer pattern is valid")
});

/// `^[\w\s\-]+$`
static DESCRIPTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9A-Za-z_\t\n\x0C\r -]+$").expect("description pattern is valid")
});

static DATE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid")
});

/// One or two hour digits, exactly two minute digits.
static TIME_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,2}:[0-9]{2}$").expect("time pattern is valid"));

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationReport>;

// =============================================================================
// Error Codes
// =============================================================================

/// Machine-readable code for a failed rule.
///
/// Rendered in lowercase without separators (`totalmatchsumprice`), which
/// is the form used in logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationCode {
    /// Retailer contains characters outside `[\w\s\-&]`.
    RetailerFormat,
    /// purchaseDate is not a real `YYYY-MM-DD` date.
    PurchaseDateFormat,
    /// purchaseTime is not a 24-hour `HH:MM` time.
    PurchaseTimeFormat,
    /// total is not `<digits>.<two digits>`.
    TotalFormat,
    /// total is well-formed but not a finite number.
    TotalNumber,
    /// items is an empty list.
    EmptyItems,
    /// An item price is not `<digits>.<two digits>`.
    ItemPriceFormat,
    /// An item description contains characters outside `[\w\s\-]`.
    ItemDescFormat,
    /// An item price is well-formed but not a finite number.
    ItemPriceNumber,
    /// Item prices do not add up to total.
    TotalMatchSumPrice,
}

impl ValidationCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValidationCode::RetailerFormat => "retailerformat",
            ValidationCode::PurchaseDateFormat => "purchasedateformat",
            ValidationCode::PurchaseTimeFormat => "purchasetimeformat",
            ValidationCode::TotalFormat => "totalformat",
            ValidationCode::TotalNumber => "totalnumber",
            ValidationCode::EmptyItems => "emptyitems",
            ValidationCode::ItemPriceFormat => "itempriceformat",
            ValidationCode::ItemDescFormat => "itemdescformat",
            ValidationCode::ItemPriceNumber => "itempricenumber",
            ValidationCode::TotalMatchSumPrice => "totalmatchsumprice",
        }
    }
}

impl fmt::Display for ValidationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Validation Report
// =============================================================================

/// One rule violation, tied to the JSON path of the offending field
/// (`retailer`, `items[2].price`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub code: ValidationCode,
}

impl FieldError {
    pub fn new(field: impl Into<String>, code: ValidationCode) -> Self {
        FieldError {
            field: field.into(),
            code,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.code)
    }
}

/// Every violation found in one receipt, in the order the rules ran.
///
/// Only ever produced with at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("receipt failed validation: {}", summarize(.errors))]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationReport {
    pub fn new(errors: Vec<FieldError>) -> Self {
        ValidationReport { errors }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The codes alone, in report order.
    pub fn codes(&self) -> Vec<ValidationCode> {
        self.errors.iter().map(|e| e.code).collect()
    }

    pub fn contains(&self, code: ValidationCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

// =============================================================================
// Field Predicates
// =============================================================================

/// Retailer names: word characters, whitespace, `-` and `&`.
pub fn is_valid_retailer(retailer: &str) -> bool {
    RETAILER_RE.is_match(retailer)
}

/// Item descriptions: word characters, whitespace and `-`.
pub fn is_valid_description(description: &str) -> bool {
    DESCRIPTION_RE.is_match(description)
}

/// `YYYY-MM-DD`, zero-padded, naming a date that exists.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_valid_purchase_date;
///
/// assert!(is_valid_purchase_date("2024-02-29"));
/// assert!(!is_valid_purchase_date("2023-02-29"));
/// assert!(!is_valid_purchase_date("2022-3-20"));
/// ```
pub fn is_valid_purchase_date(date: &str) -> bool {
    DATE_SHAPE_RE.is_match(date) && NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok()
}

/// `H:MM` or `HH:MM` on a 24-hour clock.
///
/// ## Example
/// ```rust
/// use receipt_core::validation::is_valid_purchase_time;
///
/// assert!(is_valid_purchase_time("09:30"));
/// assert!(is_valid_purchase_time("9:30"));
/// assert!(!is_valid_purchase_time("9:3"));
/// ```
pub fn is_valid_purchase_time(time: &str) -> bool {
    TIME_SHAPE_RE.is_match(time) && NaiveTime::parse_from_str(time, "%H:%M").is_ok()
}

// =============================================================================
// Rule Pipeline
// =============================================================================

/// What the pipeline does after a rule has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleOutcome {
    Continue,
    Halt,
}

/// State threaded through the rules: collected errors plus the values
/// later rules need (parsed total, running item sum).
struct Checker<'a> {
    receipt: &'a Receipt,
    errors: Vec<FieldError>,
    total: Option<Amount>,
    item_sum: BigUint,
}

impl<'a> Checker<'a> {
    fn new(receipt: &'a Receipt) -> Self {
        Checker {
            receipt,
            errors: Vec::new(),
            total: None,
            item_sum: BigUint::default(),
        }
    }

    fn report(&mut self, field: impl Into<String>, code: ValidationCode) {
        self.errors.push(FieldError::new(field, code));
    }

    fn finish(self) -> ValidationResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport::new(self.errors))
        }
    }
}

type Rule = fn(&mut Checker<'_>) -> RuleOutcome;

/// Rules in execution order.
const RULES: &[Rule] = &[
    check_retailer,
    check_purchase_date,
    check_purchase_time,
    check_total_format,
    check_total_number,
    check_items_present,
    check_items,
    check_total_matches_items,
];

/// Validates a receipt, returning every violation found.
///
/// ## Example
/// ```rust
/// use receipt_core::{validate_receipt, Receipt, ValidationCode};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:01".to_string(),
///     items: vec![],
///     total: "10.005".to_string(),
/// };
/// let report = validate_receipt(&receipt).unwrap_err();
/// // Bad total format stops the pipeline before the empty-items check.
/// assert_eq!(report.codes(), vec![ValidationCode::TotalFormat]);
/// ```
pub fn validate_receipt(receipt: &Receipt) -> ValidationResult<()> {
    let mut checker = Checker::new(receipt);
    for rule in RULES {
        if rule(&mut checker) == RuleOutcome::Halt {
            break;
        }
    }
    checker.finish()
}

fn check_retailer(c: &mut Checker<'_>) -> RuleOutcome {
    if !is_valid_retailer(&c.receipt.retailer) {
        c.report("retailer", ValidationCode::RetailerFormat);
    }
    RuleOutcome::Continue
}

fn check_purchase_date(c: &mut Checker<'_>) -> RuleOutcome {
    if !is_valid_purchase_date(&c.receipt.purchase_date) {
        c.report("purchaseDate", ValidationCode::PurchaseDateFormat);
    }
    RuleOutcome::Continue
}

fn check_purchase_time(c: &mut Checker<'_>) -> RuleOutcome {
    if !is_valid_purchase_time(&c.receipt.purchase_time) {
        c.report("purchaseTime", ValidationCode::PurchaseTimeFormat);
    }
    RuleOutcome::Continue
}

fn check_total_format(c: &mut Checker<'_>) -> RuleOutcome {
    if Amount::is_well_formed(&c.receipt.total) {
        RuleOutcome::Continue
    } else {
        c.report("total", ValidationCode::TotalFormat);
        RuleOutcome::Halt
    }
}

fn check_total_number(c: &mut Checker<'_>) -> RuleOutcome {
    match Amount::parse(&c.receipt.total) {
        Ok(total) => {
            c.total = Some(total);
            RuleOutcome::Continue
        }
        Err(_) => {
            c.report("total", ValidationCode::TotalNumber);
            RuleOutcome::Halt
        }
    }
}

fn check_items_present(c: &mut Checker<'_>) -> RuleOutcome {
    if c.receipt.items.is_empty() {
        c.report("items", ValidationCode::EmptyItems);
        RuleOutcome::Halt
    } else {
        RuleOutcome::Continue
    }
}

fn check_items(c: &mut Checker<'_>) -> RuleOutcome {
    let receipt = c.receipt;
    for (index, item) in receipt.items.iter().enumerate() {
        if !Amount::is_well_formed(&item.price) {
            c.report(format!("items[{}].price", index), ValidationCode::ItemPriceFormat);
            return RuleOutcome::Halt;
        }

        if !is_valid_description(&item.short_description) {
            c.report(
                format!("items[{}].shortDescription", index),
                ValidationCode::ItemDescFormat,
            );
            return RuleOutcome::Halt;
        }

        match Amount::parse(&item.price) {
            Ok(price) => c.item_sum += price.cents(),
            Err(_) => {
                c.report(format!("items[{}].price", index), ValidationCode::ItemPriceNumber);
                return RuleOutcome::Halt;
            }
        }
    }
    RuleOutcome::Continue
}

/// Cents are exact, so "within ±0.01" means equal.
fn check_total_matches_items(c: &mut Checker<'_>) -> RuleOutcome {
    let mismatch = c
        .total
        .as_ref()
        .is_some_and(|total| c.item_sum != *total.cents());
    if mismatch {
        c.report("total", ValidationCode::TotalMatchSumPrice);
    }
    RuleOutcome::Continue
}

// =============================================================================
// Unit Tests
// =============================================================================
