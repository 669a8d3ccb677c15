use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

fn site() -> (tempfile::TempDir, ServerConfig) {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html><body>photoblog</body></html>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
    let cfg = ServerConfig {
        addr: "127.0.0.1:0".parse().unwrap(),
        site_root: dir.path().to_path_buf(),
    };
    (dir, cfg)
}

async fn status_of(cfg: &ServerConfig, path: &str) -> StatusCode {
    let req = Request::get(path).body(Body::empty()).unwrap();
    app(cfg).oneshot(req).await.unwrap().status()
}

#[test]
fn fallback_status_ok_for_client_routes() {
    assert_eq!(fallback_status("/"), StatusCode::OK);
    assert_eq!(fallback_status("/photos"), StatusCode::OK);
    assert_eq!(fallback_status("/photos/7"), StatusCode::OK);
}

#[test]
fn fallback_status_not_found_for_other_paths() {
    assert_eq!(fallback_status("/nope"), StatusCode::NOT_FOUND);
    assert_eq!(fallback_status("/photos/sunset"), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn detail_route_serves_index() {
    let (_dir, cfg) = site();
    assert_eq!(status_of(&cfg, "/photos/7").await, StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index() {
    let (_dir, cfg) = site();
    assert_eq!(status_of(&cfg, "/").await, StatusCode::OK);
}

#[tokio::test]
async fn static_asset_is_served() {
    let (_dir, cfg) = site();
    assert_eq!(status_of(&cfg, "/app.js").await, StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let (_dir, cfg) = site();
    assert_eq!(status_of(&cfg, "/nope").await, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_is_ok() {
    let (_dir, cfg) = site();
    assert_eq!(status_of(&cfg, "/healthz").await, StatusCode::OK);
}
