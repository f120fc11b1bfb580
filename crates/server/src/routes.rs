use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;
use store::{StoreError, Storer};

use crate::errors::ApiError;

/// The deployed instantiation: string keys, string values, any backend.
pub type SharedStore = Arc<dyn Storer<String, String>>;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn put_entry(
    State(store): State<SharedStore>,
    Path((key, value)): Path<(String, String)>,
) -> Json<serde_json::Value> {
    store.put(key, value).await;
    Json(serde_json::json!({"msg": "ok"}))
}

async fn get_entry(
    State(store): State<SharedStore>,
    Path(key): Path<String>,
) -> Json<serde_json::Value> {
    // Reads report an absent key as a 200 informational result, not a failure.
    match store.get(&key).await {
        Ok(value) => Json(serde_json::json!({"value": value})),
        Err(StoreError::NotFound(_)) => Json(serde_json::json!({"value": "key not found"})),
    }
}

async fn update_entry(
    State(store): State<SharedStore>,
    Path((key, value)): Path<(String, String)>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.update(key, value).await?;
    Ok(Json(serde_json::json!({"msg": "updated"})))
}

async fn delete_entry(
    State(store): State<SharedStore>,
    Path(key): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    store.delete(&key).await?;
    Ok(Json(serde_json::json!({"msg": "deleted"})))
}

/// Build the full application router.
/// All four CRUD routes use GET; deployed clients address the store through
/// path segments only, so the path shapes are kept verbatim.
pub fn build_router(store: SharedStore, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/put/:key/:value", get(put_entry))
        .route("/get/:key", get(get_entry))
        .route("/update/:key/:value", get(update_entry))
        .route("/delete/:key", get(delete_entry))
        .with_state(store)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
