//! # HTTP Routes
//!
//! ```text
//! POST /receipts/process        validate → store → {"id": ...}
//! GET  /receipts/{id}/points    cached score, or score once and cache
//! GET  /health                  liveness probe
//! ```
//!
//! ## Points Lookup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  parse id ──── malformed ──────────────────────────────────► 404        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  get_score ─── hit ────────────────────────────────────────► 200        │
//! │     │ miss                                                              │
//! │     ▼                                                                   │
//! │  get_receipt ─ unknown ────────────────────────────────────► 404        │
//! │     │                                                                   │
//! │     ▼                                                                   │
//! │  calculate (no lock held) ──► put_score ──► cached value ──► 200        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use receipt_core::{
    validate_receipt, PointsBreakdown, PointsResponse, ProcessReceiptResponse, Receipt, ReceiptId,
};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/receipts/process", post(process_receipt))
        .route("/receipts/{id}/points", get(get_points))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// Accepts a receipt if it passes validation.
async fn process_receipt(
    State(state): State<AppState>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessReceiptResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!(reason = %rejection.body_text(), "Rejected unreadable receipt body");
        ApiError::BadRequest
    })?;

    if let Err(report) = validate_receipt(&receipt) {
        warn!(
            retailer = %receipt.retailer,
            codes = ?report.codes(),
            "Receipt failed validation"
        );
        return Err(report.into());
    }

    let id = state.store.put(receipt)?;
    info!(%id, "Receipt accepted");

    Ok(Json(ProcessReceiptResponse { id }))
}

/// Returns the points for a stored receipt.
async fn get_points(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<PointsResponse>> {
    let Path(raw_id) = path.map_err(|_| ApiError::NotFound)?;
    let id: ReceiptId = raw_id.parse().map_err(|_| {
        debug!(id = %raw_id, "Malformed receipt id");
        ApiError::NotFound
    })?;

    if let Some(points) = state.store.get_score(&id)? {
        return Ok(Json(PointsResponse { points }));
    }

    let receipt = state.store.get_receipt(&id)?.ok_or(ApiError::NotFound)?;

    let breakdown = PointsBreakdown::for_receipt(&receipt);
    debug!(%id, ?breakdown, "Scored receipt");

    let points = state.store.put_score(&id, breakdown.total())?;
    Ok(Json(PointsResponse { points }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{header, Request, Response, StatusCode};
    use receipt_core::Item;
    use receipt_store::{InMemoryReceiptStore, ReceiptStore};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    use super::*;

    const TARGET_RECEIPT: &str = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [
            { "shortDescription": "Mountain Dew 12PK", "price": "6.49" },
            { "shortDescription": "Emils Cheese Pizza", "price": "12.25" },
            { "shortDescription": "Knorr Creamy Chicken", "price": "1.26" },
            { "shortDescription": "Doritos Nacho Cheese", "price": "3.35" },
            { "shortDescription": "   Klarbrunn 12-PK 12 FL OZ  ", "price": "12.00" }
        ],
        "total": "35.35"
    }"#;

    const CORNER_MARKET_RECEIPT: &str = r#"{
        "retailer": "M&M Corner Market",
        "purchaseDate": "2022-03-20",
        "purchaseTime": "14:33",
        "items": [
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" },
            { "shortDescription": "Gatorade", "price": "2.25" }
        ],
        "total": "9.00"
    }"#;

    fn app() -> (Router, Arc<InMemoryReceiptStore>) {
        let store = Arc::new(InMemoryReceiptStore::new());
        let state = AppState::from_store(store.clone());
        (router(state), store)
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn body_bytes(response: Response<Body>) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_json(response: Response<Body>) -> Value {
        serde_json::from_slice(&body_bytes(response).await).unwrap()
    }

    async fn submit(app: &Router, body: &str) -> String {
        let response = app.clone().oneshot(post_json(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await["id"]
            .as_str()
            .unwrap()
            .to_string()
    }

    async fn points(app: &Router, id: &str) -> Response<Body> {
        app.clone()
            .oneshot(get_request(&format!("/receipts/{}/points", id)))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_process_then_points() {
        let (app, store) = app();

        let id = submit(&app, TARGET_RECEIPT).await;
        assert!(id.parse::<ReceiptId>().is_ok());
        assert_eq!(store.len().unwrap(), 1);

        let response = points(&app, &id).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "points": 28 }));
    }

    #[tokio::test]
    async fn test_corner_market_points() {
        let (app, _) = app();

        let id = submit(&app, CORNER_MARKET_RECEIPT).await;
        let response = points(&app, &id).await;
        assert_eq!(body_json(response).await, json!({ "points": 109 }));
    }

    #[tokio::test]
    async fn test_points_are_cached() {
        let (app, store) = app();

        let id = submit(&app, TARGET_RECEIPT).await;
        let first = body_json(points(&app, &id).await).await;
        let second = body_json(points(&app, &id).await).await;
        assert_eq!(first, second);

        let receipt_id: ReceiptId = id.parse().unwrap();
        assert_eq!(store.get_score(&receipt_id).unwrap(), Some(28));
    }

    #[tokio::test]
    async fn test_cached_score_is_served() {
        let (app, store) = app();

        let id = store
            .put(Receipt {
                retailer: "Target".to_string(),
                purchase_date: "2022-01-01".to_string(),
                purchase_time: "13:01".to_string(),
                items: vec![Item {
                    short_description: "Pepsi".to_string(),
                    price: "1.25".to_string(),
                }],
                total: "1.25".to_string(),
            })
            .unwrap();
        store.put_score(&id, 7).unwrap();

        let response = points(&app, &id.to_string()).await;
        assert_eq!(body_json(response).await, json!({ "points": 7 }));
    }

    #[tokio::test]
    async fn test_large_amounts_are_accepted() {
        let (app, _) = app();

        let body = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-02",
            "purchaseTime": "9:30",
            "items": [{ "shortDescription": "Yacht", "price": "99999999999999999999.00" }],
            "total": "99999999999999999999.00"
        }"#;
        let id = submit(&app, body).await;

        // 6 (Target) + 50 (round dollar) + 25 (quarter multiple)
        let response = points(&app, &id).await;
        assert_eq!(body_json(response).await, json!({ "points": 81 }));
    }

    #[tokio::test]
    async fn test_invalid_receipt_is_bad_request() {
        let (app, store) = app();

        let empty_items = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01", "items": [], "total": "0.00"
        }"#;
        let bad_total = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Pepsi", "price": "10.00" }],
            "total": "10.005"
        }"#;
        let mismatch = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [{ "shortDescription": "Pepsi", "price": "1.00" }],
            "total": "2.00"
        }"#;

        for body in [empty_items, bad_total, mismatch] {
            let response = app.clone().oneshot(post_json(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert!(body_bytes(response).await.is_empty());
        }
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_unreadable_body_is_bad_request() {
        let (app, _) = app();

        let missing_field = r#"{ "retailer": "Target", "items": [], "total": "1.00" }"#;
        let wrong_type = r#"{
            "retailer": "Target", "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01", "items": "none", "total": "1.00"
        }"#;
        for body in ["not json", "{", missing_field, wrong_type] {
            let response = app.clone().oneshot(post_json(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
            assert!(body_bytes(response).await.is_empty());
        }

        // No content type at all
        let request = Request::builder()
            .method("POST")
            .uri("/receipts/process")
            .body(Body::from(TARGET_RECEIPT))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_id_is_not_found() {
        let (app, _) = app();
        submit(&app, TARGET_RECEIPT).await;

        let unknown = ReceiptId::new().to_string();
        for id in [unknown.as_str(), "not-a-uuid", "12345"] {
            let response = points(&app, id).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "id {}", id);
            assert!(body_bytes(response).await.is_empty());
        }
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app();

        let response = app.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"OK");
    }
}
