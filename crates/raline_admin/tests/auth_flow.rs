use std::sync::{Arc, Mutex};

use raline_admin::auth::AuthService;
use raline_admin::forms::LoginForm;
use raline_admin::AdminError;
use raline_api::{ApiConfig, RalineApiClient};
use session_store::{FileStore, KeyValueStore, MemoryStore, Persistence, TokenStore, TOKEN_KEY};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn allow_local_integration() -> bool {
    std::env::var("RALINE_API_ALLOW_LOCAL_INTEGRATION")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false)
}

/// Serves `responses` in order, one per connection, recording request heads.
async fn scripted_server(responses: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<String>>>) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("local TCP listener should bind");
    let addr = listener.local_addr().expect("listener address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    tokio::spawn({
        let requests = Arc::clone(&requests);
        async move {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = vec![0_u8; 8192];
                let read = stream.read(&mut buf).await.unwrap_or(0);
                requests
                    .lock()
                    .expect("requests lock")
                    .push(String::from_utf8_lossy(&buf[..read]).into_owned());
                let response = format!(
                    "HTTP/1.1 {status} X\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
            }
        }
    });
    (format!("http://{addr}"), requests)
}

#[tokio::test]
async fn login_then_failed_user_info_clears_the_session() {
    if !allow_local_integration() {
        eprintln!("skipping local integration test: set RALINE_API_ALLOW_LOCAL_INTEGRATION=1");
        return;
    }

    let (server_url, requests) = scripted_server(vec![
        (
            200,
            r#"{"errno":0,"data":{"objectId":1,"display_name":"ferris","email":"ferris@example.com","type":"admin","token":"tok-1"}}"#,
        ),
        (
            401,
            r#"{"title":"Unauthorized","detail":"token expired"}"#,
        ),
    ])
    .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let persistent = FileStore::shared(dir.path().join("local.json"));
    let tokens = Arc::new(TokenStore::new(MemoryStore::shared(), persistent.clone()));
    let client = Arc::new(
        RalineApiClient::new(ApiConfig::new(server_url))
            .expect("client")
            .with_token_store(tokens.clone()),
    );
    let auth = AuthService::new(client, tokens.clone(), persistent.clone());

    let user = auth
        .login(
            &LoginForm {
                email: "ferris@example.com".to_owned(),
                password: "pw".to_owned(),
                code: None,
            },
            Persistence::Persistent,
        )
        .await
        .expect("login");
    assert_eq!(user.display_name, "ferris");
    assert_eq!(
        persistent.get(TOKEN_KEY).expect("read token").as_deref(),
        Some("tok-1")
    );

    let error = auth.get_user_info().await.expect_err("expired token");
    let AdminError::Api(api_error) = error else {
        panic!("expected an api error");
    };
    assert!(api_error.to_string().contains("401"));
    assert_eq!(tokens.resolve().expect("resolve"), None);
    assert_eq!(persistent.get(TOKEN_KEY).expect("read token"), None);
    assert_eq!(auth.cached_user().expect("profile"), None);

    let requests = requests.lock().expect("requests lock");
    assert!(requests[0].starts_with("POST /api/token?lang=en-US "));
    assert!(requests[1].starts_with("GET /api/token?lang=en-US "));
    assert!(requests[1]
        .to_ascii_lowercase()
        .contains("authorization: bearer tok-1"));
}
