//! # Money Module
//!
//! Provides the `Amount` type for the decimal strings carried by receipts
//! (`price` and `total`).
//!
//! ## Why Integer Cents?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Summing item prices as floats needs a ±0.01 slack to compare against  │
//! │  the receipt total, and even then 1-cent differences can slip through. │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "2.25" + "2.25" = 225 + 225 = 450 cents, compared exactly           │
//! │                                                                         │
//! │  The cents are unbounded (BigUint): any amount that is a finite        │
//! │  double-precision number is accepted, up to about 1.8e308.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use num_bigint::BigUint;
//! use receipt_core::money::Amount;
//!
//! assert!(Amount::is_well_formed("6.49"));
//! assert!(!Amount::is_well_formed("6.5"));
//!
//! let price = Amount::parse("6.49").unwrap();
//! assert_eq!(price.cents(), &BigUint::from(649u32));
//! ```

use std::sync::LazyLock;

use num_bigint::BigUint;
use regex::Regex;
use thiserror::Error;

/// `^\d+\.\d{2}$` with ASCII digits only.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]{2}$").expect("amount pattern is valid"));

// =============================================================================
// Amount Error
// =============================================================================

/// Why a decimal string could not be turned into an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// The string is not `<digits>.<two digits>`.
    #[error("'{0}' is not a decimal amount with two fractional digits")]
    Malformed(String),

    /// The value is beyond the largest finite double.
    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

// =============================================================================
// Amount Type
// =============================================================================

/// A non-negative monetary amount in cents.
///
/// Receipts only ever carry non-negative amounts (the wire format has no
/// sign), so the cents are unsigned.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(BigUint);

impl Amount {
    /// Returns the value in cents.
    #[inline]
    pub fn cents(&self) -> &BigUint {
        &self.0
    }

    /// Checks the textual shape only: one or more digits, a dot, exactly two
    /// digits.
    pub fn is_well_formed(s: &str) -> bool {
        AMOUNT_RE.is_match(s)
    }

    /// Parses a well-formed decimal string into cents.
    ///
    /// ## Example
    /// ```rust
    /// use num_bigint::BigUint;
    /// use receipt_core::money::{Amount, AmountError};
    ///
    /// assert_eq!(Amount::parse("35.35").unwrap().cents(), &BigUint::from(3535u32));
    /// assert!(Amount::parse("99999999999999999999.00").is_ok());
    /// assert!(matches!(Amount::parse("10.005"), Err(AmountError::Malformed(_))));
    ///
    /// let huge = format!("1{}.00", "0".repeat(309));
    /// assert!(matches!(Amount::parse(&huge), Err(AmountError::NotFinite(_))));
    /// ```
    pub fn parse(s: &str) -> Result<Self, AmountError> {
        if !Self::is_well_formed(s) {
            return Err(AmountError::Malformed(s.to_string()));
        }

        // Out-of-range values parse to infinity rather than failing.
        let finite = s.parse::<f64>().is_ok_and(f64::is_finite);
        if !finite {
            return Err(AmountError::NotFinite(s.to_string()));
        }

        let digits: String = s.chars().filter(|c| *c != '.').collect();
        BigUint::parse_bytes(digits.as_bytes(), 10)
            .map(Amount)
            .ok_or_else(|| AmountError::Malformed(s.to_string()))
    }

    /// Points for an item price: `price × 0.2`, rounded up.
    ///
    /// Computed as `ceil(cents / 500)` so there is no float rounding at all.
    /// Saturates at `u64::MAX`.
    ///
    /// ## Example
    /// ```rust
    /// use receipt_core::money::Amount;
    ///
    /// assert_eq!(Amount::parse("12.25").unwrap().fifth_rounded_up(), 3); // 2.45 → 3
    /// assert_eq!(Amount::parse("10.00").unwrap().fifth_rounded_up(), 2); // 2.00 → 2
    /// ```
    pub fn fifth_rounded_up(&self) -> u64 {
        let points = (self.0.clone() + 499u32) / 500u32;
        u64::try_from(points).unwrap_or(u64::MAX)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
