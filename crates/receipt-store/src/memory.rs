//! # In-Memory Store
//!
//! Process-lifetime [`ReceiptStore`] backed by two mutex-guarded maps.
//!
//! ## Thread Safety
//! Each map sits behind its own `Mutex` because:
//! 1. Handlers run concurrently on the multi-threaded runtime
//! 2. Receipt writes and score writes never need to be atomic together
//! 3. A points lookup only takes one lock at a time
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    InMemoryReceiptStore                                 │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │ receipts: Mutex<HashMap<     │   │ scores: Mutex<HashMap<       │   │
//! │  │   ReceiptId, Receipt>>       │   │   ReceiptId, u64>>           │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  NOTE: Locks are held for a single map operation and never across      │
//! │        validation or scoring.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use receipt_core::{Receipt, ReceiptId};
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};
use crate::store::ReceiptStore;

#[derive(Debug, Default)]
pub struct InMemoryReceiptStore {
    receipts: Mutex<HashMap<ReceiptId, Receipt>>,
    scores: Mutex<HashMap<ReceiptId, u64>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn receipts(&self) -> StoreResult<MutexGuard<'_, HashMap<ReceiptId, Receipt>>> {
        self.receipts
            .lock()
            .map_err(|_| StoreError::LockPoisoned("receipts"))
    }

    fn scores(&self) -> StoreResult<MutexGuard<'_, HashMap<ReceiptId, u64>>> {
        self.scores
            .lock()
            .map_err(|_| StoreError::LockPoisoned("scores"))
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt) -> StoreResult<ReceiptId> {
        let mut receipts = self.receipts()?;
        // A v4 collision is not going to happen, but ids must never be
        // reused, so draw again rather than overwrite.
        loop {
            let id = ReceiptId::new();
            match receipts.entry(id) {
                Entry::Vacant(slot) => {
                    slot.insert(receipt);
                    return Ok(id);
                }
                Entry::Occupied(_) => warn!(%id, "Receipt id collision, regenerating"),
            }
        }
    }

    fn get_receipt(&self, id: &ReceiptId) -> StoreResult<Option<Receipt>> {
        Ok(self.receipts()?.get(id).cloned())
    }

    fn get_score(&self, id: &ReceiptId) -> StoreResult<Option<u64>> {
        Ok(self.scores()?.get(id).copied())
    }

    fn put_score(&self, id: &ReceiptId, points: u64) -> StoreResult<u64> {
        if !self.receipts()?.contains_key(id) {
            return Err(StoreError::UnknownReceipt(*id));
        }

        let mut scores = self.scores()?;
        let cached = *scores.entry(*id).or_insert(points);
        if cached != points {
            debug!(%id, cached, discarded = points, "Score already cached");
        }
        Ok(cached)
    }

    fn len(&self) -> StoreResult<usize> {
        Ok(self.receipts()?.len())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
