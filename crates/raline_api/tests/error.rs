use reqwest::StatusCode;
use serde_json::json;

use raline_api::error::{check_instance, status_error};
use raline_api::RalineApiError;

#[test]
fn status_error_renders_status_title_and_detail() {
    let error = status_error(StatusCode::NOT_FOUND, r#"{"title":"Not Found","detail":"x"}"#);
    let message = error.to_string();
    assert!(message.contains("404"));
    assert!(message.contains("Not Found"));
    assert!(message.contains("x"));
    assert_eq!(message, "404 - Not Found: x");
}

#[test]
fn status_error_falls_back_to_reason_and_raw_body() {
    let error = status_error(StatusCode::INTERNAL_SERVER_ERROR, "raw failure text");
    assert_eq!(error.to_string(), "500 - Internal Server Error: raw failure text");
    assert_eq!(error.status(), Some(500));
}

#[test]
fn unauthorized_statuses_are_flagged() {
    assert!(status_error(StatusCode::UNAUTHORIZED, "").is_unauthorized());
    assert!(status_error(StatusCode::FORBIDDEN, "").is_unauthorized());
    assert!(!status_error(StatusCode::BAD_REQUEST, "").is_unauthorized());
}

#[test]
fn instance_in_success_payload_is_a_business_error() {
    let body = json!({"instance": "user", "title": "Forbidden", "detail": "no access"});
    let error = check_instance("Update user", &body).expect_err("instance must fail");
    assert!(matches!(error, RalineApiError::Business { .. }));
    assert_eq!(
        error.to_string(),
        "Update user user failed with Forbidden: no access"
    );
}

#[test]
fn payload_without_instance_passes() {
    assert!(check_instance("Login", &json!({"data": {"token": "t"}})).is_ok());
    assert!(check_instance("Login", &json!({"instance": ""})).is_ok());
    assert!(check_instance("Login", &json!([1, 2])).is_ok());
}
