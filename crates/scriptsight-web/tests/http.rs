//! End-to-end tests over the router: status codes must match request
//! validity, and a valid upload must come back as a digit.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use base64::Engine;
use http_body_util::BodyExt;
use scriptsight_ai::model::ModelConfig;
use scriptsight_web::{router::build_router, state::AppState};
use std::io::Cursor;
use tower::ServiceExt;

const BOUNDARY: &str = "scriptsight-test-boundary";

/// Router over an untrained model; status semantics don't depend on weights.
fn test_app() -> Router {
    let device = Default::default();
    let model = ModelConfig::new().init(&device);
    build_router(AppState::with_model(model))
}

fn digit_png() -> Vec<u8> {
    let mut img = image::GrayImage::new(28, 28);
    // A rough vertical stroke, white on black.
    for y in 4..24 {
        for x in 13..16 {
            img.put_pixel(x, y, image::Luma([255u8]));
        }
    }

    let mut bytes = Cursor::new(Vec::new());
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .unwrap();
    bytes.into_inner()
}

fn multipart_request(field: &str, bytes: &[u8]) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; \
             filename=\"digit.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn valid_upload_returns_a_digit() {
    let response = test_app()
        .oneshot(multipart_request("uploadFile", &digit_png()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let digit: u8 = body.parse().expect("body should be a bare digit");
    assert!(digit < 10);
}

#[tokio::test]
async fn upload_with_wrong_field_name_is_rejected() {
    let response = test_app()
        .oneshot(multipart_request("somethingElse", &digit_png()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn undecodable_upload_is_rejected() {
    let response = test_app()
        .oneshot(multipart_request("uploadFile", b"not an image at all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_upload_is_rejected() {
    let response = test_app()
        .oneshot(multipart_request("uploadFile", b""))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_on_predict_is_method_not_allowed() {
    let request = Request::builder()
        .method("GET")
        .uri("/predict")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn sketch_data_url_returns_a_digit() {
    let encoded = base64::engine::general_purpose::STANDARD.encode(digit_png());
    let body = serde_json::json!({ "imgUrl": format!("data:image/png;base64,{encoded}") });

    let request = Request::builder()
        .method("POST")
        .uri("/api/sketch")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    let digit: u8 = body.parse().expect("body should be a bare digit");
    assert!(digit < 10);
}

#[tokio::test]
async fn sketch_without_base64_marker_is_rejected() {
    let body = serde_json::json!({ "imgUrl": "just some text" });

    let request = Request::builder()
        .method("POST")
        .uri("/api/sketch")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn sketch_with_bad_base64_is_rejected() {
    let body = serde_json::json!({ "imgUrl": "data:image/png;base64,@@@not-base64@@@" });

    let request = Request::builder()
        .method("POST")
        .uri("/api/sketch")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn home_page_serves_the_sketchpad() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .unwrap();

    let response = test_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("<canvas"));
}
