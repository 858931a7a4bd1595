use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::MixService;

/// Query parameters for the mix endpoint
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MixQuery {
    /// First color as hex (e.g. `#0021a5`)
    pub a: String,
    /// Second color as hex
    pub b: String,
    /// Mixing ratio, 0.0 gives `a` and 1.0 gives `b` (default: 0.5)
    #[serde(default)]
    pub t: Option<f64>,
}

/// Result of mixing two colors
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MixResponse {
    /// First input color, normalized
    pub a: String,
    /// Second input color, normalized
    pub b: String,
    /// Mixing ratio used
    pub t: f64,
    /// Pigment mix as hex
    pub color: String,
    /// Pigment mix as `[r, g, b]`
    pub rgb: Vec<u8>,
    /// Plain RGB interpolation at the same ratio, for comparison
    pub naive: String,
}

/// Mix two colors as pigments
///
/// Encodes both colors into latent space, interpolates and decodes the
/// result. Blue and yellow give green rather than grey.
#[utoipa::path(
    get,
    path = "/api/mix",
    params(MixQuery),
    responses(
        (status = 200, description = "Mixed color", body = MixResponse),
        (status = 400, description = "Invalid color or ratio"),
        (status = 500, description = "Mixing failed"),
    ),
    tag = "Mixing"
)]
pub async fn handle_mix(
    State(service): State<Arc<MixService>>,
    Query(query): Query<MixQuery>,
) -> Result<Json<MixResponse>, ApiError> {
    let a = ApiError::parse_color(&query.a)?;
    let b = ApiError::parse_color(&query.b)?;
    let t = query.t.unwrap_or(0.5);
    if !t.is_finite() {
        return Err(ApiError::InvalidParameter(format!(
            "t must be a finite number, got {t}"
        )));
    }

    let mixed = service.mix(a, b, t)?;

    Ok(Json(MixResponse {
        a: a.to_string(),
        b: b.to_string(),
        t,
        color: mixed.to_string(),
        rgb: mixed.to_array().to_vec(),
        naive: service.naive_mix(a, b, t).to_string(),
    }))
}
