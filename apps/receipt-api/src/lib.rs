//! # Receipt API
//!
//! HTTP boundary for the receipt points service.
//!
//! ## Module Organization
//! ```text
//! receipt_api/
//! ├── lib.rs          ◄─── You are here (shared state)
//! ├── config.rs       ◄─── Listener settings (TOML file or defaults)
//! ├── error.rs        ◄─── ApiError → bare HTTP status
//! ├── routes.rs       ◄─── Router and handlers
//! └── server.rs       ◄─── Bind, serve, graceful shutdown
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST /receipts/process                                                │
//! │     Json<Receipt> ──► validate_receipt ──► store.put ──► {"id"}        │
//! │                                                                         │
//! │  GET /receipts/{id}/points                                             │
//! │     ReceiptId ──► store.get_score ──► (miss) calculate ──► {"points"}  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod server;

use std::sync::Arc;

use receipt_store::{InMemoryReceiptStore, ReceiptStore};

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, ServerError};
pub use routes::router;
pub use server::ApiServer;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ReceiptStore>,
}

impl AppState {
    pub fn new(store: impl ReceiptStore + 'static) -> Self {
        AppState {
            store: Arc::new(store),
        }
    }

    pub fn from_store(store: Arc<dyn ReceiptStore>) -> Self {
        AppState { store }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryReceiptStore::new())
    }
}
