//! # Points Module
//!
//! The loyalty-points Scorer. Six independent rules, each adding to the
//! total; no rule can subtract and none stops the others.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rule                         Reads              Points                 │
//! │  ───────────────────────────  ─────────────────  ─────────────────────  │
//! │  1. Alphanumeric retailer     retailer           +1 per [A-Za-z0-9]     │
//! │  2a. Round dollar             total ("…00")      +50                    │
//! │  2b. Quarter multiple         total (00/25/…)    +25                    │
//! │  3. Item pairs                items.len()        +5 per pair            │
//! │  4. Description length % 3    each item          ceil(price × 0.2)      │
//! │  5. Odd day                   purchaseDate last  +6                     │
//! │  6. Afternoon                 14:00 < t < 16:00  +10                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules 2, 5 and 6 are textual: they look at the characters of the
//! submitted strings, not at parsed values.
//!
//! The Scorer is meant to run on receipts that passed validation, but it
//! never panics on anything else: fields it cannot read contribute zero.

use serde::{Deserialize, Serialize};

use crate::money::Amount;
use crate::types::Receipt;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;

/// Exclusive bounds of the afternoon window.
const AFTERNOON_START: &str = "14:00";
const AFTERNOON_END: &str = "16:00";

/// Points earned by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub retailer: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Runs every rule against the receipt.
    pub fn for_receipt(receipt: &Receipt) -> Self {
        let cents = cents_suffix(&receipt.total);
        PointsBreakdown {
            retailer: retailer_points(&receipt.retailer),
            round_dollar: match cents {
                Some(b"00") => ROUND_DOLLAR_POINTS,
                _ => 0,
            },
            quarter_multiple: match cents {
                Some(b"00" | b"25" | b"50" | b"75") => QUARTER_MULTIPLE_POINTS,
                _ => 0,
            },
            item_pairs: ITEM_PAIR_POINTS * (receipt.items.len() / 2) as u64,
            descriptions: receipt
                .items
                .iter()
                .map(|item| description_points(&item.short_description, &item.price))
                .fold(0, u64::saturating_add),
            odd_day: odd_day_points(&receipt.purchase_date),
            afternoon: afternoon_points(&receipt.purchase_time),
        }
    }

    /// Sum of all rules, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        [
            self.retailer,
            self.round_dollar,
            self.quarter_multiple,
            self.item_pairs,
            self.descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0, u64::saturating_add)
    }
}

/// Computes the points for a receipt.
///
/// ## Example
/// ```rust
/// use receipt_core::{calculate_points, Item, Receipt};
///
/// let receipt = Receipt {
///     retailer: "M&M Corner Market".to_string(),
///     purchase_date: "2022-03-20".to_string(),
///     purchase_time: "14:33".to_string(),
///     items: vec![
///         Item { short_description: "Gatorade".to_string(), price: "2.25".to_string() };
///         4
///     ],
///     total: "9.00".to_string(),
/// };
/// assert_eq!(calculate_points(&receipt), 109);
/// ```
pub fn calculate_points(receipt: &Receipt) -> u64 {
    PointsBreakdown::for_receipt(receipt).total()
}

/// Rule 1: one point per ASCII letter or digit.
fn retailer_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

/// The last two bytes of the total, i.e. its cents as written.
fn cents_suffix(total: &str) -> Option<&[u8]> {
    let bytes = total.as_bytes();
    bytes.len().checked_sub(2).map(|start| &bytes[start..])
}

/// Rule 4: trimmed description length divisible by three earns
/// `ceil(price × 0.2)`.
fn description_points(description: &str, price: &str) -> u64 {
    if description.trim().len() % 3 != 0 {
        return 0;
    }
    Amount::parse(price)
        .map(|amount| amount.fifth_rounded_up())
        .unwrap_or(0)
}

/// Rule 5: the last character of the date string is an odd digit.
fn odd_day_points(purchase_date: &str) -> u64 {
    match purchase_date.as_bytes().last() {
        Some(b'1' | b'3' | b'5' | b'7' | b'9') => ODD_DAY_POINTS,
        _ => 0,
    }
}

/// Rule 6: strictly between 14:00 and 16:00, compared as strings.
fn afternoon_points(purchase_time: &str) -> u64 {
    if purchase_time > AFTERNOON_START && purchase_time < AFTERNOON_END {
        AFTERNOON_POINTS
    } else {
        0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Item;

    fn item(description: &str, price: &str) -> Item {
        Item {
            short_description: description.to_string(),
            price: price.to_string(),
        }
    }

    fn target_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2022-01-01".to_string(),
            purchase_time: "13:01".to_string(),
            items: vec![
                item("Mountain Dew 12PK", "6.49"),
                item("Emils Cheese Pizza", "12.25"),
                item("Knorr Creamy Chicken", "1.26"),
                item("Doritos Nacho Cheese", "3.35"),
                item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
            total: "35.35".to_string(),
        }
    }

    fn corner_market_receipt() -> Receipt {
        Receipt {
            retailer: "M&M Corner Market".to_string(),
            purchase_date: "2022-03-20".to_string(),
            purchase_time: "14:33".to_string(),
            items: vec![item("Gatorade", "2.25"); 4],
            total: "9.00".to_string(),
        }
    }

    #[test]
    fn test_target_receipt() {
        let breakdown = PointsBreakdown::for_receipt(&target_receipt());
        assert_eq!(breakdown.retailer, 6);
        assert_eq!(breakdown.round_dollar, 0);
        assert_eq!(breakdown.quarter_multiple, 0);
        assert_eq!(breakdown.item_pairs, 10);
        // "Emils Cheese Pizza" (18) → ceil(2.45) = 3
        // "Klarbrunn 12-PK 12 FL OZ" (24) → ceil(2.4) = 3
        assert_eq!(breakdown.descriptions, 6);
        assert_eq!(breakdown.odd_day, 6);
        assert_eq!(breakdown.afternoon, 0);
        assert_eq!(breakdown.total(), 28);
    }

    #[test]
    fn test_corner_market_receipt() {
        let breakdown = PointsBreakdown::for_receipt(&corner_market_receipt());
        // "M&M Corner Market" has 14 letters; the '&' and spaces do not count
        assert_eq!(breakdown.retailer, 14);
        assert_eq!(breakdown.round_dollar, 50);
        assert_eq!(breakdown.quarter_multiple, 25);
        assert_eq!(breakdown.item_pairs, 10);
        assert_eq!(breakdown.descriptions, 0);
        assert_eq!(breakdown.odd_day, 0);
        assert_eq!(breakdown.afternoon, 10);
        assert_eq!(calculate_points(&corner_market_receipt()), 109);
    }

    #[test]
    fn test_points_are_deterministic() {
        let receipt = target_receipt();
        let first = calculate_points(&receipt);
        for _ in 0..10 {
            assert_eq!(calculate_points(&receipt), first);
        }
    }

    #[test]
    fn test_total_cents_bonuses() {
        let mut receipt = corner_market_receipt();
        let cases = [
            ("9.00", 75),
            ("9.25", 25),
            ("9.50", 25),
            ("9.75", 25),
            ("9.10", 0),
            ("9.01", 0),
            ("9.99", 0),
        ];
        for (total, expected) in cases {
            receipt.total = total.to_string();
            let b = PointsBreakdown::for_receipt(&receipt);
            assert_eq!(b.round_dollar + b.quarter_multiple, expected, "total {}", total);
        }
    }

    #[test]
    fn test_item_pairs() {
        let mut receipt = corner_market_receipt();
        for (count, expected) in [(1, 0), (2, 5), (3, 5), (4, 10), (7, 15)] {
            receipt.items = vec![item("Gatorade", "1.00"); count];
            assert_eq!(PointsBreakdown::for_receipt(&receipt).item_pairs, expected);
        }
    }

    #[test]
    fn test_description_points() {
        assert_eq!(description_points("abc", "10.00"), 2);
        assert_eq!(description_points("abc", "10.01"), 3);
        assert_eq!(description_points("  abc  ", "1.00"), 1);
        assert_eq!(description_points("abcd", "10.00"), 0);
        assert_eq!(description_points("abc", "0.00"), 0);
        assert_eq!(description_points("abc", "garbage"), 0);
    }

    #[test]
    fn test_odd_day_is_textual() {
        assert_eq!(odd_day_points("2022-01-01"), 6);
        assert_eq!(odd_day_points("2022-01-21"), 6);
        assert_eq!(odd_day_points("2022-01-19"), 6);
        assert_eq!(odd_day_points("2022-01-10"), 0);
        assert_eq!(odd_day_points("2022-01-22"), 0);
        assert_eq!(odd_day_points(""), 0);
    }

    #[test]
    fn test_afternoon_window_is_exclusive() {
        assert_eq!(afternoon_points("14:00"), 0);
        assert_eq!(afternoon_points("14:01"), 10);
        assert_eq!(afternoon_points("15:00"), 10);
        assert_eq!(afternoon_points("15:59"), 10);
        assert_eq!(afternoon_points("16:00"), 0);
        assert_eq!(afternoon_points("13:59"), 0);
        assert_eq!(afternoon_points("23:00"), 0);
    }

    #[test]
    fn test_single_digit_hour_is_not_afternoon() {
        // "9:30" sorts after "14:00" but not before "16:00"
        assert_eq!(afternoon_points("9:30"), 0);
        assert_eq!(afternoon_points("2:30"), 0);

        let mut receipt = corner_market_receipt();
        receipt.purchase_time = "9:30".to_string();
        assert_eq!(PointsBreakdown::for_receipt(&receipt).afternoon, 0);
        assert_eq!(calculate_points(&receipt), 99);
    }

    #[test]
    fn test_huge_prices_saturate() {
        let huge = format!("1{}.00", "0".repeat(100));
        let mut receipt = corner_market_receipt();
        receipt.items = vec![item("abc", &huge); 2];

        let breakdown = PointsBreakdown::for_receipt(&receipt);
        assert_eq!(breakdown.descriptions, u64::MAX);
        assert_eq!(breakdown.total(), u64::MAX);
    }

    #[test]
    fn test_price_beyond_u64_cents() {
        // ceil(99999999999999999999.00 × 0.2) = 2e19, past u64::MAX
        assert_eq!(
            description_points("abc", "99999999999999999999.00"),
            u64::MAX
        );
        assert_eq!(
            description_points("abc", "50000000000000000.00"),
            10_000_000_000_000_000
        );
    }

    #[test]
    fn test_unvalidated_input_does_not_panic() {
        let receipt = Receipt {
            retailer: String::new(),
            purchase_date: "é".to_string(),
            purchase_time: String::new(),
            items: vec![item("", "")],
            total: "0".to_string(),
        };
        // Only the empty description (length 0) qualifies, and its price
        // does not parse, so nothing is earned.
        assert_eq!(calculate_points(&receipt), 0);
    }
}
