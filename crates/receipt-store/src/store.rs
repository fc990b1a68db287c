//! # Store Abstraction
//!
//! The boundary layer talks to storage only through [`ReceiptStore`], so
//! the HTTP handlers can be driven against any implementation.
//!
//! ## Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  put(receipt)        → fresh ReceiptId, receipt stored forever          │
//! │  get_receipt(id)     → Some(receipt) | None                             │
//! │  get_score(id)       → Some(points)  | None (not computed yet)          │
//! │  put_score(id, pts)  → the score now cached for id                      │
//! │                        (first writer wins; later writes are ignored)    │
//! │                                                                         │
//! │  No update, no delete, no expiry.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Implementations must never hold a lock while the caller validates or
//! scores; every method acquires, touches the map, and releases.

use receipt_core::{Receipt, ReceiptId};

use crate::error::StoreResult;

/// Append-only storage for accepted receipts and their cached scores.
pub trait ReceiptStore: Send + Sync {
    /// Stores a receipt under a newly generated identifier.
    fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId>;

    /// Looks up a stored receipt.
    fn get_receipt(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>>;

    /// Looks up a cached score.
    fn get_score(&self, id: &ReceiptId) -> StoreResult<Option<u64>>;

    /// Caches a score and returns the score that is cached afterwards.
    ///
    /// Scores are immutable once written. If two requests race to score
    /// the same receipt, the loser's value is discarded and both callers
    /// get the winner's.
    fn put_score(&self, id: &ReceiptId, points: u64) -> StoreResult<u64>;

    /// Number of stored receipts.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
