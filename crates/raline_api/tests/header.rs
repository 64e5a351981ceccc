use raline_api::headers::{
    build_headers, default_user_agent, CONTENT_TYPE_JSON, HEADER_ACCEPT, HEADER_AUTHORIZATION,
    HEADER_CONTENT_TYPE, HEADER_USER_AGENT,
};
use raline_api::ApiConfig;

#[test]
fn header_map_for_json_request_with_token() {
    let config = ApiConfig::new("example.com").insert_header("X-Extra", " value ");

    let headers = build_headers(&config, Some("secret"), true);
    assert_eq!(
        headers.get(HEADER_AUTHORIZATION).expect("authorization"),
        "Bearer secret"
    );
    assert_eq!(
        headers.get(HEADER_CONTENT_TYPE).expect("content-type"),
        CONTENT_TYPE_JSON
    );
    assert_eq!(headers.get(HEADER_ACCEPT).expect("accept"), CONTENT_TYPE_JSON);
    assert_eq!(headers.get("x-extra").expect("custom"), "value");
}

#[test]
fn header_map_omits_content_type_without_json_body() {
    let config = ApiConfig::new("example.com");
    let headers = build_headers(&config, None, false);
    assert!(!headers.contains_key(HEADER_CONTENT_TYPE));
    assert!(!headers.contains_key(HEADER_AUTHORIZATION));
}

#[test]
fn blank_token_is_not_sent() {
    let config = ApiConfig::new("example.com");
    let headers = build_headers(&config, Some("   "), false);
    assert!(!headers.contains_key(HEADER_AUTHORIZATION));
}

#[test]
fn header_map_prefers_configured_user_agent() {
    let default = build_headers(&ApiConfig::new("example.com"), None, false);
    assert_eq!(
        default.get(HEADER_USER_AGENT).expect("user-agent"),
        &default_user_agent()
    );

    let config = ApiConfig::new("example.com").with_user_agent("test-agent");
    let headers = build_headers(&config, None, false);
    assert_eq!(
        headers.get(HEADER_USER_AGENT).expect("user-agent"),
        "test-agent"
    );
}
