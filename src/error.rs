use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pigment_mix::{MixError, ParseColorError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid color {input:?}: {source}")]
    InvalidColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Mix error: {0}")]
    Mix(#[from] MixError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

impl ApiError {
    /// Parse a hex color, naming the offending input on failure.
    pub fn parse_color(input: &str) -> Result<pigment_mix::Rgb, ApiError> {
        input.parse().map_err(|source| ApiError::InvalidColor {
            input: input.to_string(),
            source,
        })
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No swatches to render")]
    EmptySwatches,

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidColor { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Mix(MixError::InvalidSteps { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Mix(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
