//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use pigment_mix::Lut;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::error::ApiError;
use crate::models::AppConfig;
use crate::services::MixService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub mix_service: Arc<MixService>,
}

/// Create application state from configuration, loading the configured LUT.
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let mix_service = MixService::from_config(config)
        .map_err(|e| anyhow::anyhow!("Failed to create mix service: {e}"))?;

    Ok(AppState {
        mix_service: Arc::new(mix_service),
    })
}

/// Create application state around an already loaded LUT.
pub fn create_app_state_with_lut(config: &AppConfig, lut: Lut) -> AppState {
    let mix_service = MixService::new(lut, config.gradient.clone());

    AppState {
        mix_service: Arc::new(mix_service),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Mixing endpoints
        .route("/api/mix", get(handle_mix))
        .route("/api/latent", get(handle_latent))
        .route("/api/decode", post(handle_decode))
        .route("/api/gradient", get(handle_gradient))
        .route("/api/gradient.png", get(handle_gradient_png))
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Add state and tracing
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

// Wrapper handlers to extract state components for the underlying API handlers

async fn handle_mix(
    State(state): State<AppState>,
    query: Query<api::mix::MixQuery>,
) -> Result<Json<api::MixResponse>, ApiError> {
    api::handle_mix(State(state.mix_service), query).await
}

async fn handle_latent(
    State(state): State<AppState>,
    query: Query<api::latent::LatentQuery>,
) -> Result<Json<api::LatentResponse>, ApiError> {
    api::handle_latent(State(state.mix_service), query).await
}

async fn handle_decode(
    State(state): State<AppState>,
    body: Json<api::DecodeRequest>,
) -> Result<Json<api::DecodeResponse>, ApiError> {
    api::handle_decode(State(state.mix_service), body).await
}

async fn handle_gradient(
    State(state): State<AppState>,
    query: Query<api::GradientQuery>,
) -> Result<Json<api::GradientResponse>, ApiError> {
    api::handle_gradient(State(state.mix_service), query).await
}

async fn handle_gradient_png(
    State(state): State<AppState>,
    query: Query<api::GradientQuery>,
) -> Result<axum::response::Response, ApiError> {
    api::handle_gradient_png(State(state.mix_service), query).await
}
