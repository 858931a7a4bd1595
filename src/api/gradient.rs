use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::MixService;

/// Query parameters for the gradient endpoints
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GradientQuery {
    /// Start color as hex
    pub a: String,
    /// End color as hex
    pub b: String,
    /// Number of colors, endpoints included (default from config)
    #[serde(default)]
    pub steps: Option<usize>,
}

/// Evenly spaced pigment mixes between two colors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GradientResponse {
    /// Start color, normalized
    pub a: String,
    /// End color, normalized
    pub b: String,
    /// Gradient colors as hex, from `a` to `b`
    pub colors: Vec<String>,
}

/// Compute a pigment gradient
#[utoipa::path(
    get,
    path = "/api/gradient",
    params(GradientQuery),
    responses(
        (status = 200, description = "Gradient colors", body = GradientResponse),
        (status = 400, description = "Invalid color or step count"),
        (status = 500, description = "Mixing failed"),
    ),
    tag = "Mixing"
)]
pub async fn handle_gradient(
    State(service): State<Arc<MixService>>,
    Query(query): Query<GradientQuery>,
) -> Result<Json<GradientResponse>, ApiError> {
    let a = ApiError::parse_color(&query.a)?;
    let b = ApiError::parse_color(&query.b)?;
    let steps = service.resolve_steps(query.steps)?;

    let colors = service.gradient(a, b, steps)?;

    Ok(Json(GradientResponse {
        a: a.to_string(),
        b: b.to_string(),
        colors: colors.iter().map(ToString::to_string).collect(),
    }))
}

/// Render a pigment gradient as a PNG swatch strip
#[utoipa::path(
    get,
    path = "/api/gradient.png",
    params(GradientQuery),
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 400, description = "Invalid color or step count"),
        (status = 500, description = "Rendering error"),
    ),
    tag = "Mixing"
)]
pub async fn handle_gradient_png(
    State(service): State<Arc<MixService>>,
    Query(query): Query<GradientQuery>,
) -> Result<Response, ApiError> {
    let a = ApiError::parse_color(&query.a)?;
    let b = ApiError::parse_color(&query.b)?;
    let steps = service.resolve_steps(query.steps)?;

    let png_bytes = service.gradient_png(a, b, steps).await?;

    tracing::info!(%a, %b, steps, size_bytes = png_bytes.len(), "Gradient PNG rendered");

    Ok(([(header::CONTENT_TYPE, "image/png")], png_bytes).into_response())
}
