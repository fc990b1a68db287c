//! # receipt-store: Storage Layer for Receipt Points
//!
//! Holds accepted receipts and their cached scores for the life of the
//! process. Nothing survives a restart.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Points Data Flow                           │
//! │                                                                         │
//! │  receipt-api handler                                                   │
//! │       │                                                                 │
//! │       │  store.put(receipt) / store.get_score(&id) / ...               │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────────┐        ┌──────────────────────────┐    │   │
//! │  │   │  ReceiptStore     │◄───────│  InMemoryReceiptStore    │    │   │
//! │  │   │  (trait)          │        │  Mutex<HashMap<..>> × 2  │    │   │
//! │  │   └───────────────────┘        └──────────────────────────┘    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use receipt_core::{Item, Receipt};
//! use receipt_store::{InMemoryReceiptStore, ReceiptStore};
//!
//! let store = InMemoryReceiptStore::new();
//! let id = store
//!     .put(Receipt {
//!         retailer: "Target".to_string(),
//!         purchase_date: "2022-01-01".to_string(),
//!         purchase_time: "13:01".to_string(),
//!         items: vec![Item {
//!             short_description: "Pepsi".to_string(),
//!             price: "1.25".to_string(),
//!         }],
//!         total: "1.25".to_string(),
//!     })
//!     .unwrap();
//!
//! assert!(store.get_receipt(&id).unwrap().is_some());
//! assert_eq!(store.put_score(&id, 31).unwrap(), 31);
//! ```

pub mod error;
pub mod memory;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryReceiptStore;
pub use store::ReceiptStore;
