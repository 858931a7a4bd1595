use axum::{
    extract::{Query, State},
    response::Json,
    Json as JsonExtractor,
};
use pigment_mix::{Latent, LATENT_SIZE};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::MixService;

/// Query parameters for the latent endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LatentQuery {
    /// Color as hex
    pub color: String,
}

/// Latent representation of a color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LatentResponse {
    /// Input color, normalized
    pub color: String,
    /// Four pigment concentrations followed by the RGB residual
    pub latent: Vec<f64>,
}

/// Request body for decoding a latent vector
#[derive(Debug, Deserialize, ToSchema)]
pub struct DecodeRequest {
    /// Seven latent components
    pub latent: Vec<f64>,
}

/// Decoded color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DecodeResponse {
    /// Decoded color as hex
    pub color: String,
    /// Decoded color as `[r, g, b]`
    pub rgb: Vec<u8>,
}

/// Encode a color into latent space
#[utoipa::path(
    get,
    path = "/api/latent",
    params(LatentQuery),
    responses(
        (status = 200, description = "Latent vector", body = LatentResponse),
        (status = 400, description = "Invalid color"),
        (status = 500, description = "Encoding failed"),
    ),
    tag = "Latent"
)]
pub async fn handle_latent(
    State(service): State<Arc<MixService>>,
    Query(query): Query<LatentQuery>,
) -> Result<Json<LatentResponse>, ApiError> {
    let color = ApiError::parse_color(&query.color)?;
    let latent = service.latent(color)?;

    Ok(Json(LatentResponse {
        color: color.to_string(),
        latent: latent.components().to_vec(),
    }))
}

/// Decode a latent vector back to a color
///
/// Decoding needs no LUT. Any seven finite components are accepted and the
/// result is clamped into the sRGB gamut.
#[utoipa::path(
    post,
    path = "/api/decode",
    request_body = DecodeRequest,
    responses(
        (status = 200, description = "Decoded color", body = DecodeResponse),
        (status = 400, description = "Latent vector has the wrong length"),
    ),
    tag = "Latent"
)]
pub async fn handle_decode(
    State(service): State<Arc<MixService>>,
    JsonExtractor(request): JsonExtractor<DecodeRequest>,
) -> Result<Json<DecodeResponse>, ApiError> {
    let latent = Latent::from_slice(&request.latent).ok_or_else(|| {
        ApiError::InvalidParameter(format!(
            "latent must have {LATENT_SIZE} components, got {}",
            request.latent.len()
        ))
    })?;

    let color = service.decode(&latent);

    Ok(Json(DecodeResponse {
        color: color.to_string(),
        rgb: color.to_array().to_vec(),
    }))
}
