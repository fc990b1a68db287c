//! # Store Error Types
//!
//! Errors raised by [`ReceiptStore`](crate::ReceiptStore) implementations.
//!
//! The in-memory store cannot fail for ordinary reasons: a missing receipt
//! is `Ok(None)`, not an error. What remains is the store being left in a
//! broken state, or a caller breaking the store's contract.

use receipt_core::ReceiptId;
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A thread panicked while holding one of the map locks.
    #[error("{0} map lock poisoned")]
    LockPoisoned(&'static str),

    /// A score was written for an id that was never stored.
    #[error("No receipt stored under {0}")]
    UnknownReceipt(ReceiptId),
}
