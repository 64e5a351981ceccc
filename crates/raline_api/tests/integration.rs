use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

use raline_api::{
    abort_signal, ApiConfig, CommentQuery, LoginRequest, RalineApiClient, RalineApiError, SortBy,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio::time::{sleep, timeout, Duration};

fn allow_local_integration() -> bool {
    std::env::var("RALINE_API_ALLOW_LOCAL_INTEGRATION")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false)
}

#[derive(Clone)]
struct ScriptedResponse {
    status: u16,
    delay_ms: u64,
    headers: Vec<(&'static str, &'static str)>,
    body: &'static str,
}

fn response_json(status: u16, body: &'static str) -> ScriptedResponse {
    ScriptedResponse {
        status,
        delay_ms: 0,
        headers: Vec::new(),
        body,
    }
}

struct ScriptedServer {
    base_url: String,
    request_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl ScriptedServer {
    async fn new(scripts: Vec<ScriptedResponse>) -> Self {
        let scripts = Arc::new(scripts);
        let request_count = Arc::new(AtomicUsize::new(0));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("local TCP listener should bind");
        let addr = listener
            .local_addr()
            .expect("resolved local listener address");
        let base_url = format!("http://{addr}");

        let handle = tokio::spawn({
            let scripts = Arc::clone(&scripts);
            let request_count = Arc::clone(&request_count);
            let requests = Arc::clone(&requests);

            async move {
                loop {
                    let (socket, _) = match listener.accept().await {
                        Ok(pair) => pair,
                        Err(_) => break,
                    };
                    let scripts = Arc::clone(&scripts);
                    let request_count = Arc::clone(&request_count);
                    let requests = Arc::clone(&requests);
                    tokio::spawn(async move {
                        serve_one(socket, scripts, request_count, requests).await;
                    });
                }
            }
        });

        Self {
            base_url,
            request_count,
            requests,
            handle,
        }
    }

    fn request_count(&self) -> usize {
        self.request_count.load(Ordering::Acquire)
    }

    fn request_head(&self, index: usize) -> String {
        self.requests
            .lock()
            .expect("request log")
            .get(index)
            .cloned()
            .unwrap_or_default()
    }

    fn client(&self) -> RalineApiClient {
        RalineApiClient::new(ApiConfig::new(&self.base_url)).expect("client")
    }

    fn shutdown(&self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn login_returns_profile_with_token() {
    if !allow_local_integration() {
        return;
    }

    let server = ScriptedServer::new(vec![response_json(
        200,
        r##"{"errno":0,"data":{"objectId":1,"display_name":"admin","email":"a@b.c","type":"admin","token":"tok"}}"##,
    )])
    .await;

    let user = server
        .client()
        .login(&LoginRequest::new("a@b.c", "pw"), None)
        .await
        .expect("login should succeed");

    assert_eq!(user.token.as_deref(), Some("tok"));
    assert!(user.role.is_admin());
    let head = server.request_head(0);
    assert!(head.starts_with("POST /api/token?lang=en-US HTTP/1.1"));

    server.shutdown();
}

#[tokio::test]
async fn login_without_token_is_rejected() {
    if !allow_local_integration() {
        return;
    }

    let server =
        ScriptedServer::new(vec![response_json(200, r##"{"data":{"email":"a@b.c"}}"##)]).await;

    let error = server
        .client()
        .login(&LoginRequest::new("a@b.c", "pw"), None)
        .await
        .expect_err("missing token must fail");
    assert!(matches!(error, RalineApiError::MissingField("token")));

    server.shutdown();
}

#[tokio::test]
async fn non_success_status_maps_to_status_error() {
    if !allow_local_integration() {
        return;
    }

    let server = ScriptedServer::new(vec![response_json(
        401,
        r##"{"title":"Unauthorized","detail":"bad credentials"}"##,
    )])
    .await;

    let error = server
        .client()
        .get_user_info(None)
        .await
        .expect_err("401 must fail");
    assert_eq!(error.to_string(), "401 - Unauthorized: bad credentials");
    assert!(error.is_unauthorized());
    assert_eq!(server.request_count(), 1);

    server.shutdown();
}

#[tokio::test]
async fn success_status_with_instance_is_business_error() {
    if !allow_local_integration() {
        return;
    }

    let server = ScriptedServer::new(vec![response_json(
        200,
        r##"{"instance":"comment","title":"Forbidden","detail":"not yours"}"##,
    )])
    .await;

    let error = server
        .client()
        .delete_comment(7, Some("tok"), None)
        .await
        .expect_err("instance must fail");
    assert_eq!(
        error.to_string(),
        "Delete comment comment failed with Forbidden: not yours"
    );
    let head = server.request_head(0);
    assert!(head.starts_with("DELETE /api/comment/7?lang=en-US HTTP/1.1"));
    assert!(head.to_ascii_lowercase().contains("authorization: bearer tok"));

    server.shutdown();
}

#[tokio::test]
async fn version_header_is_merged_into_flat_result() {
    if !allow_local_integration() {
        return;
    }

    let server = ScriptedServer::new(vec![ScriptedResponse {
        headers: vec![("X-Raline-Version", "1.6.0")],
        ..response_json(200, r##"{"data":{"email":"a@b.c"}}"##)
    }])
    .await;

    let response = server
        .client()
        .update_profile(&Default::default(), None)
        .await
        .expect("update should succeed");
    assert_eq!(response.version.as_deref(), Some("1.6.0"));
    assert_eq!(
        response.into_flat(),
        serde_json::json!({"email": "a@b.c", "__version": "1.6.0"})
    );

    server.shutdown();
}

#[tokio::test]
async fn comment_list_and_count_queries() {
    if !allow_local_integration() {
        return;
    }

    let server = ScriptedServer::new(vec![
        response_json(
            200,
            r##"{"count":1,"page":1,"pageSize":10,"totalPages":1,"data":[{"objectId":3,"comment":"<p>hi</p>","sticky":1,"like":2}]}"##,
        ),
        response_json(200, r##"{"data":[4,0]}"##),
    ])
    .await;
    let client = server.client();

    let page = client
        .get_comment(
            &CommentQuery {
                path: "/post".to_owned(),
                offset: 0,
                limit: 10,
                sort_by: SortBy::LikeDesc,
            },
            None,
            None,
        )
        .await
        .expect("list");
    assert_eq!(page.count, 1);
    assert!(page.data[0].sticky);
    assert!(server
        .request_head(0)
        .starts_with("GET /api/comment?type=list&path=%2Fpost&limit=10&offset=0&sortBy=like_desc&lang=en-US"));

    let counts = client
        .fetch_comment_count(&["/a".to_owned(), "/b".to_owned()], None)
        .await
        .expect("count");
    assert_eq!(counts, vec![4, 0]);

    server.shutdown();
}

#[tokio::test]
async fn abort_signal_cancels_in_flight_request() {
    if !allow_local_integration() {
        return;
    }

    let server = ScriptedServer::new(vec![ScriptedResponse {
        delay_ms: 2_000,
        ..response_json(200, r##"{"data":[]}"##)
    }])
    .await;
    let client = server.client();
    let abort = abort_signal();

    let canceller = {
        let abort = Arc::clone(&abort);
        tokio::spawn(async move {
            sleep(Duration::from_millis(100)).await;
            abort.store(true, Ordering::Release);
        })
    };

    let error = timeout(
        Duration::from_secs(5),
        client.get_recent_comment(5, None, Some(&abort)),
    )
    .await
    .expect("cancellation should resolve promptly")
    .expect_err("aborted call must fail");
    assert!(matches!(error, RalineApiError::Cancelled));
    canceller.await.expect("canceller task");

    server.shutdown();
}

fn status_reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    }
}

async fn serve_one(
    mut socket: TcpStream,
    scripts: Arc<Vec<ScriptedResponse>>,
    request_count: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<String>>>,
) {
    let head = match read_request_head(&mut socket).await {
        Ok(head) => head,
        Err(_) => return,
    };

    let index = request_count.fetch_add(1, Ordering::AcqRel);
    if let Ok(mut log) = requests.lock() {
        log.push(head);
    }
    let response = scripts
        .get(index)
        .cloned()
        .unwrap_or_else(|| response_json(500, r##"{"title":"unexpected request"}"##));

    if response.delay_ms > 0 {
        sleep(Duration::from_millis(response.delay_ms)).await;
    }

    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
        response.status,
        status_reason(response.status),
        response.body.len(),
    );
    for (name, value) in &response.headers {
        head.push_str(&format!("{name}: {value}\r\n"));
    }
    head.push_str("\r\n");

    if socket.write_all(head.as_bytes()).await.is_err() {
        return;
    }
    let _ = socket.write_all(response.body.as_bytes()).await;
    let _ = socket.shutdown().await;
}

async fn read_request_head(socket: &mut TcpStream) -> std::io::Result<String> {
    let mut request = Vec::new();
    let mut buffer = [0_u8; 2048];

    loop {
        let n = socket.read(&mut buffer).await?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buffer[..n]);
        if let Some(end) = request.windows(4).position(|window| window == b"\r\n\r\n") {
            request.truncate(end);
            break;
        }
    }

    Ok(String::from_utf8_lossy(&request).into_owned())
}
