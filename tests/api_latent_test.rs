//! Integration tests for /api/latent and /api/decode.

mod common;

use axum::http::StatusCode;
use common::fixtures::{colors, q};
use common::{assert_json_error, assert_ok, TestApp};
use pigmix::api::{DecodeResponse, LatentResponse};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn test_latent_shape() {
    let app = TestApp::new();

    let response = app.get(&format!("/api/latent?color={}", q(colors::BLUE))).await;
    assert_ok(&response);

    let latent: LatentResponse = response.json();
    assert_eq!(latent.color, colors::BLUE);
    assert_eq!(latent.latent.len(), 7);

    // Concentrations sum to one
    let sum: f64 = latent.latent[..4].iter().sum();
    assert!((sum - 1.0).abs() < 1e-12, "concentrations sum to {sum}");
}

#[tokio::test]
async fn test_latent_decode_round_trip() {
    let app = TestApp::new();

    for color in [colors::BLUE, colors::YELLOW, "#000000", "#ffffff"] {
        let response = app.get(&format!("/api/latent?color={}", q(color))).await;
        assert_ok(&response);
        let latent: LatentResponse = response.json();

        let body = serde_json::json!({ "latent": latent.latent }).to_string();
        let response = app.post_json("/api/decode", &body).await;
        assert_ok(&response);

        let decoded: DecodeResponse = response.json();
        assert_eq!(decoded.color, color);
    }
}

#[tokio::test]
async fn test_decode_clamps_out_of_gamut() {
    let app = TestApp::new();

    // Pure fourth pigment plus a large positive residual saturates to white
    let body = r#"{"latent": [0.0, 0.0, 0.0, 1.0, 5.0, 5.0, 5.0]}"#;
    let response = app.post_json("/api/decode", body).await;
    assert_ok(&response);

    let decoded: DecodeResponse = response.json();
    assert_eq!(decoded.color, "#ffffff");
    assert_eq!(decoded.rgb, vec![255, 255, 255]);
}

#[tokio::test]
async fn test_decode_wrong_length() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/decode", r#"{"latent": [0.1, 0.2, 0.3]}"#)
        .await;
    let error = assert_json_error(&response, StatusCode::BAD_REQUEST);
    assert_eq!(
        error,
        "Invalid parameter: latent must have 7 components, got 3"
    );
}

#[tokio::test]
async fn test_latent_invalid_color() {
    let app = TestApp::new();

    let response = app.get("/api/latent?color=zzzzzz").await;
    let error = assert_json_error(&response, StatusCode::BAD_REQUEST);
    assert_eq!(error, "Invalid color \"zzzzzz\": invalid hex digit: 'z'");
}
