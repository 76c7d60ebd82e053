//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is Bad Request (400) with a JSON error body
pub fn assert_bad_request(response: &TestResponse) {
    assert_status(response, StatusCode::BAD_REQUEST);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(400));
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert response is a JPEG attachment and return its bytes
pub fn assert_jpeg_attachment(response: &TestResponse) -> Vec<u8> {
    assert_ok(response);
    assert!(
        response.is_jpeg(),
        "Expected JPEG bytes, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..4.min(response.body.len())]
    );

    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(content_type, Some("image/jpeg"));

    let disposition = response
        .headers
        .get("content-disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(
        disposition.starts_with("attachment; filename=\"filtered_image_"),
        "Unexpected Content-Disposition: {disposition}"
    );

    response.body.clone()
}

/// Assert an upload response carries the full thirteen-entry result set,
/// in presentation order, and return the parsed body.
pub fn assert_valid_upload_response(response: &TestResponse) -> serde_json::Value {
    assert_ok(response);
    let json: serde_json::Value = response.json();

    assert_eq!(json["success"], true);

    let filters = json["filters"]
        .as_object()
        .expect("filters should be an object");
    let expected = [
        "original",
        "xray",
        "sharpen",
        "emboss",
        "saturation",
        "edges",
        "hue",
        "levels",
        "sketch",
        "sepia",
        "vibrance",
        "vignette",
        "noise_reduction",
    ];
    let keys: Vec<&str> = filters.keys().map(String::as_str).collect();
    assert_eq!(keys, expected, "Result set keys out of order or missing");

    for (name, value) in filters {
        let data_url = value.as_str().expect("each result should be a string");
        assert!(
            data_url.starts_with("data:image/jpeg;base64,"),
            "{name} is not a JPEG data URL"
        );
    }

    json
}
