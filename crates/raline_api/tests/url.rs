use raline_api::url::{build_endpoint, resolve_api_base};
use raline_api::{infer_base_url, normalize_server_url, ApiConfig, RalineApiError};

#[test]
fn url_normalization_prefixes_https_and_strips_trailing_slash() {
    assert_eq!(normalize_server_url("example.com/"), "https://example.com");
}

#[test]
fn url_normalization_keeps_http_scheme() {
    assert_eq!(
        normalize_server_url("http://localhost:8360"),
        "http://localhost:8360"
    );
}

#[test]
fn url_normalization_upgrades_protocol_relative_links() {
    assert_eq!(
        normalize_server_url("//comments.example.com/"),
        "https://comments.example.com"
    );
}

#[test]
fn admin_page_url_infers_server_root() {
    assert_eq!(
        infer_base_url("https://example.com/blog/ui/login?redirect=/ui").expect("infer"),
        "https://example.com/blog/"
    );
    assert_eq!(
        infer_base_url("https://example.com/elsewhere").expect("infer"),
        "https://example.com/"
    );
}

#[test]
fn api_base_prefers_server_url_over_page_url() {
    let config = ApiConfig::new("example.com/")
        .with_page_url("https://admin.example.com/ui/");
    assert_eq!(
        resolve_api_base(&config).expect("base").as_str(),
        "https://example.com/api/"
    );

    let inferred = ApiConfig::default().with_page_url("https://admin.example.com/ui/user");
    assert_eq!(
        resolve_api_base(&inferred).expect("base").as_str(),
        "https://admin.example.com/api/"
    );
}

#[test]
fn api_base_requires_some_url() {
    assert!(matches!(
        resolve_api_base(&ApiConfig::default()),
        Err(RalineApiError::MissingServerUrl)
    ));
}

#[test]
fn endpoint_appends_query_then_lang() {
    let base = resolve_api_base(&ApiConfig::new("example.com")).expect("base");
    let url = build_endpoint(
        &base,
        "comment",
        &[("type".to_owned(), "count".to_owned()), ("url".to_owned(), "/a,/b".to_owned())],
        "zh-CN",
    )
    .expect("endpoint");
    assert_eq!(
        url.as_str(),
        "https://example.com/api/comment?type=count&url=%2Fa%2C%2Fb&lang=zh-CN"
    );
}
