mod common;

use axum_test::TestServer;
use common::Upstreams;

#[tokio::test]
async fn test_tarot_page_renders() {
    let upstreams = Upstreams::start().await;
    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/").await;

    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Tarot Oracle"));
    assert!(html.contains(r#"id="card-0""#));
    assert!(html.contains(r#"id="card-2""#));
    assert!(html.contains("Past"));
    assert!(html.contains("Present"));
    assert!(html.contains("Future"));
    assert!(html.contains("/static/tarot.js"));
}

#[tokio::test]
async fn test_yesno_page_renders() {
    let upstreams = Upstreams::start().await;
    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/yesno").await;

    response.assert_status_ok();
    assert!(response.text().contains("/static/yesno.js"));
}

#[tokio::test]
async fn test_static_assets_served() {
    let upstreams = Upstreams::start().await;
    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    server.get("/static/style.css").await.assert_status_ok();
    server.get("/static/tarot.js").await.assert_status_ok();
}
