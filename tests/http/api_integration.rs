//! Integration tests for the gateway HTTP surface
//!
//! Each test builds the complete router around a fake bookmark tool and
//! checks status, headers and body of the responses.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;
use tower::ServiceExt as TowerServiceExt;

use crate::common::{body_json, body_string, create_test_app, FakeTool, StaticDir};

const TWO_RECORDS: &str = r#"[{"id":"1","url":"http://a","title":"A","category":"C","tags":["x","y"]},{"id":"2","url":"http://b","title":"B","category":"D","tags":[]}]"#;

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, content_type: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn assert_cors(headers: &axum::http::HeaderMap) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "POST, GET, OPTIONS, PUT, DELETE"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Content-Type, Authorization, X-Requested-With"
    );
}

#[tokio::test]
async fn test_health_endpoint() {
    let tool = FakeTool::suggesting("[]");
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await;
    assert_eq!(health["status"], "ok");
    assert!(!health["version"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_search_text_format() {
    let tool = FakeTool::suggesting(r#"[{"url":"http://a","title":"A"}]"#);
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(get("/search?q=foo&format=text"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(body_string(response).await, "http://a");
}

#[tokio::test]
async fn test_search_text_one_url_per_line() {
    let tool = FakeTool::suggesting(TWO_RECORDS);
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/search?q=&format=text")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "http://a\nhttp://b");
}

#[tokio::test]
async fn test_search_json_reserializes_tool_output() {
    let tool = FakeTool::suggesting(TWO_RECORDS);
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(get("/search?q=a&format=json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
    assert_cors(response.headers());

    let expected: serde_json::Value = serde_json::from_str(TWO_RECORDS).unwrap();
    assert_eq!(body_json(response).await, expected);
}

#[tokio::test]
async fn test_search_json_is_verbatim() {
    let tool_output = r#"[{"url":"http://a","id":7,"title":null,"tags":["x",2,{"k":"v"}],"meta":{"visits":[1,2],"starred":true}},{"title":"no url"}]"#;
    let tool = FakeTool::suggesting(tool_output);
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .clone()
        .oneshot(get("/search?q=a&format=json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, tool_output);

    // The same records still render as text and html
    let response = app
        .clone()
        .oneshot(get("/search?q=a&format=text"))
        .await
        .unwrap();
    assert_eq!(body_string(response).await, "http://a\n");

    let response = app.oneshot(get("/search?q=a")).await.unwrap();
    let html = body_string(response).await;
    assert!(html.contains(
        r#"<ul><li><a href="">http://a</a></li><li><a href="no url"></a></li></ul>"#
    ));
}

#[tokio::test]
async fn test_search_defaults_to_html() {
    let tool = FakeTool::suggesting(TWO_RECORDS);
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/search?q=a")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let html = body_string(response).await;
    assert!(html.contains("<!DOCTYPE html>"));
    assert!(html.contains(
        r#"<ul><li><a href="A">http://a</a></li><li><a href="B">http://b</a></li></ul>"#
    ));
}

#[tokio::test]
async fn test_search_missing_query_is_bad_request() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/search?format=json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert!(body["error"].as_str().unwrap().contains('q'));

    // The tool was never run
    assert!(tool.recorded_args().is_empty());
}

#[tokio::test]
async fn test_search_unknown_format_is_bad_request() {
    let tool = FakeTool::suggesting("[]");
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(get("/search?q=a&format=yaml"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_search_decodes_query() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(get("/search?q=rust%20%26%20web%3Dfast&format=json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(tool.recorded_args(), vec!["suggest", "rust & web=fast"]);
}

#[tokio::test]
async fn test_search_empty_query_forwarded() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/search?q=&format=json")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
    // printf '%s\n' "" records an empty line
    assert_eq!(tool.recorded_args(), vec!["suggest", ""]);
}

#[tokio::test]
async fn test_search_tool_failure() {
    let tool = FakeTool::script("echo 'index corrupt' >&2; exit 2\n");
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(get("/search?q=foo&format=json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_cors(response.headers());
    assert_eq!(
        body_json(response).await,
        json!({"error": "Error searching for foo"})
    );
}

#[tokio::test]
async fn test_search_invalid_tool_output() {
    let tool = FakeTool::script("echo '<html>not json</html>'\n");
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(get("/search?q=foo&format=html"))
        .await
        .unwrap();

    // Errors are JSON whatever format was requested
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );
}

#[tokio::test]
async fn test_search_tool_timeout() {
    let tool = FakeTool::script("sleep 10\n");
    let assets = StaticDir::empty();
    let services = crate::common::create_test_services(&tool.script, assets.dir.path(), 1);
    let app = bookmarks_gateway::http::build_router(std::sync::Arc::new(services));

    let start = std::time::Instant::now();
    let response = app.oneshot(get("/search?q=slow")).await.unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    assert!(start.elapsed() < std::time::Duration::from_secs(5));
}

#[tokio::test]
async fn test_add_json_body() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(post(
            "/add",
            "application/json",
            r#"{"url":"http://a","title":"A","category":"C"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(response.headers());
    assert_eq!(body_json(response).await, json!({"success": "Url added"}));
    assert_eq!(
        tool.recorded_args(),
        vec!["add", "--uri", "http://a", "--title", "A", "--category", "C"]
    );
}

#[tokio::test]
async fn test_add_form_body() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(post(
            "/add",
            "application/x-www-form-urlencoded",
            "url=http%3A%2F%2Fa%2F%3Fx%3D1%26y%3D2&title=Two+words&category=C",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        tool.recorded_args(),
        vec![
            "add",
            "--uri",
            "http://a/?x=1&y=2",
            "--title",
            "Two words",
            "--category",
            "C"
        ]
    );
}

#[tokio::test]
async fn test_add_failure_returns_stderr_lines() {
    let tool = FakeTool::script("printf 'bad url\\n\\n' >&2\nexit 1\n");
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(post(
            "/add",
            "application/json",
            r#"{"url":"http://a","title":"A","category":"C"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_cors(response.headers());
    assert_eq!(
        body_json(response).await,
        json!({"error": "Error adding url", "message": ["bad url"]})
    );
}

#[tokio::test]
async fn test_add_failure_with_silent_tool() {
    let tool = FakeTool::script("exit 1\n");
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(post("/add", "application/json", r#"{"url":"http://a"}"#))
        .await
        .unwrap();

    assert_eq!(
        body_json(response).await,
        json!({"error": "Error adding url", "message": []})
    );
}

#[tokio::test]
async fn test_add_malformed_json() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(post("/add", "application/json", "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(tool.recorded_args().is_empty());
}

#[tokio::test]
async fn test_add_without_url() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(post(
            "/add",
            "application/x-www-form-urlencoded",
            "title=A&category=C",
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(tool.recorded_args().is_empty());
}

#[tokio::test]
async fn test_add_preflight() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/add")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_cors(response.headers());
}

#[tokio::test]
async fn test_index_and_form_pages() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.clone().oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_string(response).await.contains("Bash bookmarks"));

    let response = app.oneshot(get("/form")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains(r#"<form action="/add" method="post">"#));
}

#[tokio::test]
async fn test_static_assets() {
    let tool = FakeTool::recording();
    let assets = StaticDir::with_files(&[
        ("app.js", "console.log('hi');"),
        ("css/site.css", "body { margin: 0 }"),
    ]);
    assets.write("favicon.png", [0x89u8, b'P', b'N', b'G', 0x00, 0xff]);
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.clone().oneshot(get("/app.js")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/javascript"
    );
    assert_eq!(body_string(response).await, "console.log('hi');");

    let response = app.clone().oneshot(get("/css/site.css")).await.unwrap();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

    let response = app.oneshot(get("/favicon.png")).await.unwrap();
    assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
    let bytes = axum::body::to_bytes(response.into_body(), 10_000)
        .await
        .unwrap();
    assert_eq!(&bytes[..], &[0x89, b'P', b'N', b'G', 0x00, 0xff]);
}

#[tokio::test]
async fn test_static_unsupported_extension() {
    let tool = FakeTool::recording();
    let assets = StaticDir::with_files(&[("notes.txt", "hello")]);
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/notes.txt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_json(response).await,
        json!({"error": "Invalid extension .txt"})
    );
}

#[tokio::test]
async fn test_static_missing_file() {
    let tool = FakeTool::recording();
    let assets = StaticDir::empty();
    let app = create_test_app(&tool.script, assets.dir.path());

    let response = app.oneshot(get("/missing.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_json(response).await["error"].is_string());
}

#[tokio::test]
async fn test_static_traversal_blocked() {
    let tool = FakeTool::recording();
    let outer = StaticDir::with_files(&[("secret.json", "{}"), ("static/app.js", "")]);
    let app = create_test_app(&tool.script, &outer.dir.path().join("static"));

    let response = app
        .oneshot(get("/static/../secret.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = create_test_app(&tool.script, &outer.dir.path().join("static"))
        .oneshot(get("/%2E%2E/secret.json"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
