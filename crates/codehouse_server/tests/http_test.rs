//! End-to-end tests against a live server bound to an ephemeral port.

use codehouse_core::DisplayContext;
use codehouse_server::{DisplaySource, LiveServer, ServerConfig};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use std::path::Path;
use tempfile::TempDir;

struct Harness {
    base_url: String,
    _root: TempDir,
}

async fn start(setup: impl FnOnce(&Path, &Path)) -> Harness {
    let root = tempfile::tempdir().expect("temp dir");
    let local = root.path().join("local");
    let shared = root.path().join("shared");
    std::fs::create_dir_all(&local).expect("local dir");
    std::fs::create_dir_all(&shared).expect("shared dir");
    setup(&local, &shared);

    let config = ServerConfig::builder()
        .bind_addr("127.0.0.1:0")
        .asset_dir(local)
        .shared_asset_dir(shared)
        .display(DisplaySource::Fixed(DisplayContext::new("octo", "house", None)))
        .build()
        .expect("Valid ServerConfig");

    let server = LiveServer::bind(&config).await.expect("bind");
    let base_url = format!("http://{}", server.local_addr());
    tokio::spawn(server.run_until(std::future::pending()));

    Harness {
        base_url,
        _root: root,
    }
}

#[tokio::test]
async fn test_index_route() {
    let harness = start(|_, _| {}).await;
    let response = reqwest::get(format!("{}/", harness.base_url))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[CONTENT_TYPE]
        .to_str()
        .expect("ascii header")
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = response.text().await.expect("body");
    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("The House that Code Built"));
    assert!(body.contains("data-svg-base=\"/svg/\""));
    assert!(body.contains("https://github.com/octo/house"));
}

#[tokio::test]
async fn test_missing_svg_returns_placeholder() {
    let harness = start(|_, _| {}).await;
    let response = reqwest::get(format!(
        "{}/svg/definitely-missing-layer.svg",
        harness.base_url
    ))
    .await
    .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/svg+xml");
    let body = response.text().await.expect("body");
    assert!(body.contains("definitely-missing-layer.svg"));
    assert!(body.contains("(not found)"));
}

#[tokio::test]
async fn test_local_asset_served() {
    let harness = start(|local, _| {
        std::fs::write(local.join("roof.svg"), "<svg id=\"local-roof\"/>").expect("write");
    })
    .await;
    let response = reqwest::get(format!("{}/svg/roof.svg", harness.base_url))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[CONTENT_TYPE], "image/svg+xml");
    assert_eq!(response.text().await.expect("body"), "<svg id=\"local-roof\"/>");
}

#[tokio::test]
async fn test_shared_asset_fallback() {
    let harness = start(|_, shared| {
        std::fs::write(shared.join("roof.svg"), "<svg id=\"shared-roof\"/>").expect("write");
    })
    .await;
    let body = reqwest::get(format!("{}/svg/roof.svg", harness.base_url))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert_eq!(body, "<svg id=\"shared-roof\"/>");
}

#[tokio::test]
async fn test_local_asset_wins_over_shared() {
    let harness = start(|local, shared| {
        std::fs::write(local.join("roof.svg"), "<svg id=\"local-roof\"/>").expect("write");
        std::fs::write(shared.join("roof.svg"), "<svg id=\"shared-roof\"/>").expect("write");
    })
    .await;
    let body = reqwest::get(format!("{}/svg/roof.svg", harness.base_url))
        .await
        .expect("request")
        .text()
        .await
        .expect("body");

    assert_eq!(body, "<svg id=\"local-roof\"/>");
}

#[tokio::test]
async fn test_traversal_never_reads_outside_roots() {
    let harness = start(|local, _| {
        let parent = local.parent().expect("local has parent");
        std::fs::write(parent.join("secret.svg"), "top secret").expect("write");
    })
    .await;
    let response = reqwest::get(format!("{}/svg/..%2Fsecret.svg", harness.base_url))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.expect("body");
    assert!(!body.contains("top secret"));
    assert!(body.contains("(not found)"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let harness = start(|_, _| {}).await;
    let response = reqwest::get(format!("{}/non-existent-route", harness.base_url))
        .await
        .expect("request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
