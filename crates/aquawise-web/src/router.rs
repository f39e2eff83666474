//! Web router using Axum

use aquawise_core::{
    Entropy, PredictionRequest, PredictionResult, SavingsSummary, UsageRecord,
    generate_water_data, leak_alerts, plumbing_tips, predict_usage, water_savings,
};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// State shared by all handlers
///
/// Read-only. Each request builds its own RNG from `entropy`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppState {
    pub entropy: Entropy,
}

impl AppState {
    pub fn new(entropy: Entropy) -> Self {
        Self { entropy }
    }
}

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/api/water-usage", get(water_usage_handler))
        .route("/api/predict-usage", post(predict_usage_handler))
        .route("/api/leak-alerts", get(leak_alerts_handler))
        .route("/api/plumbing-tips", get(plumbing_tips_handler))
        .route("/api/water-savings", get(water_savings_handler))
        .route("/api/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Server-local calendar day the synthesized series ends on
fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn water_usage_handler(State(state): State<AppState>) -> Json<Vec<UsageRecord>> {
    let mut rng = state.entropy.rng();
    Json(generate_water_data(&mut rng, today()))
}

async fn predict_usage_handler(
    State(state): State<AppState>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Result<Json<PredictionResult>, ApiError> {
    let Json(request) = payload?;
    let mut rng = state.entropy.rng();
    let result = predict_usage(&mut rng, &request)?;
    Ok(Json(result))
}

async fn leak_alerts_handler(State(state): State<AppState>) -> Json<Vec<UsageRecord>> {
    let mut rng = state.entropy.rng();
    let data = generate_water_data(&mut rng, today());
    Json(leak_alerts(&data))
}

async fn plumbing_tips_handler() -> Json<&'static [&'static str]> {
    Json(plumbing_tips())
}

async fn water_savings_handler(State(state): State<AppState>) -> Json<SavingsSummary> {
    let mut rng = state.entropy.rng();
    let data = generate_water_data(&mut rng, today());
    Json(water_savings(&data))
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
