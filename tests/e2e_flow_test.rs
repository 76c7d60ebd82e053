//! End-to-end flow tests covering complete user scenarios.

mod common;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use common::fixtures::{png_upload_body, BOUNDARY};
use common::{assert_jpeg_attachment, assert_ok, assert_valid_upload_response, TestApp};

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::new();
    let response = app.get("/health").await;
    assert_ok(&response);
    assert_eq!(response.text(), "OK");
}

/// Upload an image, pick one rendition out of the response, then download it
/// and check the bytes round-trip through the data URL unchanged.
#[tokio::test]
async fn upload_then_download_round_trip() {
    let app = TestApp::new();

    let response = app
        .post_multipart("/upload", BOUNDARY, png_upload_body(12, 16))
        .await;
    let json = assert_valid_upload_response(&response);

    let data_url = json["filters"]["sepia"]
        .as_str()
        .expect("sepia rendition present")
        .to_string();
    let expected = BASE64
        .decode(data_url.split_once(',').unwrap().1)
        .expect("response data URL should carry valid base64");

    let body = serde_json::json!({ "image_data": data_url }).to_string();
    let download = app.post_json("/download/sepia", &body).await;
    let bytes = assert_jpeg_attachment(&download);
    assert_eq!(bytes, expected);

    // The attachment decodes as a JPEG with the upload's dimensions.
    let decoded = image::load_from_memory(&bytes).expect("downloaded bytes decode");
    assert_eq!(decoded.width(), 12);
    assert_eq!(decoded.height(), 16);
}

/// Every rendition in the response decodes as a JPEG with the source size.
#[tokio::test]
async fn all_renditions_decode_with_source_dimensions() {
    let app = TestApp::new();

    let response = app
        .post_multipart("/upload", BOUNDARY, png_upload_body(10, 8))
        .await;
    let json = assert_valid_upload_response(&response);

    for (name, value) in json["filters"].as_object().unwrap() {
        let encoded = value.as_str().unwrap().split_once(',').unwrap().1;
        let bytes = BASE64.decode(encoded).expect("valid base64");
        let decoded = image::load_from_memory(&bytes)
            .unwrap_or_else(|e| panic!("{name} failed to decode: {e}"));
        assert_eq!(decoded.width(), 10, "{name} width changed");
        assert_eq!(decoded.height(), 8, "{name} height changed");
    }
}
