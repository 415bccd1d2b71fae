mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::{PIXABAY_KEY, READING, Upstreams};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};
use std::collections::HashSet;

fn assert_failure_shape(json: &Value) {
    assert_eq!(json["error"], "Failed to draw tarot cards");
    assert!(json.get("images").is_none());
    assert!(json.get("fortune").is_none());
}

#[tokio::test]
async fn test_tarot_success() {
    let upstreams = Upstreams::start().await;
    let images = upstreams.mock_images(5).await;
    let text = upstreams.mock_text(READING).await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status_ok();
    images.assert_async().await;
    text.assert_async().await;

    let json = response.json::<Value>();
    let cards = json["images"].as_array().unwrap();
    assert_eq!(cards.len(), 3);

    let ids: HashSet<u64> = cards.iter().map(|c| c["id"].as_u64().unwrap()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.iter().all(|id| *id < 5));

    for card in cards {
        let id = card["id"].as_u64().unwrap();
        assert_eq!(
            card["webformatURL"],
            format!("https://pixabay.com/get/{id}_640.jpg")
        );
        assert_eq!(card["tags"], format!("tag{id}, night"));
        assert!(card.get("pageURL").is_none());
    }

    assert_eq!(
        json["fortune"],
        json!({ "card1": "a", "card2": "b", "card3": "c", "summary": "d" })
    );
}

#[tokio::test]
async fn test_tarot_too_few_images() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images(2).await;
    let text = upstreams.mock_text(READING).await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    text.assert_hits_async(0).await;

    let json = response.json::<Value>();
    assert_failure_shape(&json);
    assert_eq!(json["detail"], "Not enough images: got 2, need 3");
}

#[tokio::test]
async fn test_tarot_missing_hits_list() {
    let upstreams = Upstreams::start().await;
    upstreams
        .images
        .mock_async(|when, then| {
            when.path("/api/");
            then.status(200).json_body(json!({ "total": 0 }));
        })
        .await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_failure_shape(&response.json::<Value>());
}

#[tokio::test]
async fn test_tarot_image_search_unavailable() {
    let upstreams = Upstreams::start().await;
    let images = upstreams.mock_images_status(503).await;
    let text = upstreams.mock_text(READING).await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    images.assert_async().await;
    text.assert_hits_async(0).await;

    let json = response.json::<Value>();
    assert_failure_shape(&json);
    assert_eq!(
        json["detail"],
        "image search unavailable: status 503 Service Unavailable"
    );
}

#[tokio::test]
async fn test_tarot_unreachable_image_search_keeps_key_private() {
    let upstreams = Upstreams::start().await;
    let text = upstreams.mock_text(READING).await;

    let mut config = upstreams.config();
    config.pixabay_base_url = "http://127.0.0.1:1".to_string();

    let server = TestServer::new(common::create_test_app(&config)).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    text.assert_hits_async(0).await;

    let json = response.json::<Value>();
    assert_failure_shape(&json);

    let detail = json["detail"].as_str().unwrap();
    assert!(detail.starts_with("image search unavailable: "));
    assert!(!detail.contains(PIXABAY_KEY));
    assert!(!detail.contains("key="));
}

#[tokio::test]
async fn test_tarot_reply_without_json() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images(5).await;
    upstreams.mock_text("The cards are silent today.").await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_failure_shape(&response.json::<Value>());
}

#[tokio::test]
async fn test_tarot_reply_missing_field() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images(5).await;
    upstreams
        .mock_text(r#"{"card1":"a","card2":"b","card3":"c"}"#)
        .await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_failure_shape(&json);
    assert!(json["detail"].as_str().unwrap().contains("summary"));
}

#[tokio::test]
async fn test_tarot_empty_generation() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images(5).await;
    upstreams
        .mock_text_body(json!({ "id": "msg_test", "content": [] }))
        .await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<Value>();
    assert_failure_shape(&json);
    assert_eq!(json["detail"], "Text generation returned no text");
}

#[tokio::test]
async fn test_tarot_text_generation_rejected() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images(5).await;
    let text = upstreams.mock_text_status(401).await;

    let server = TestServer::new(common::create_test_app(&upstreams.config())).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    text.assert_async().await;

    let json = response.json::<Value>();
    assert_failure_shape(&json);
    assert_eq!(
        json["detail"],
        "text generation unavailable: status 401 Unauthorized"
    );
}

#[tokio::test]
async fn test_tarot_detail_hidden_when_disabled() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images_status(503).await;

    let mut config = upstreams.config();
    config.expose_error_detail = false;

    let server = TestServer::new(common::create_test_app(&config)).unwrap();

    let response = server.get("/api/tarot").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Failed to draw tarot cards" })
    );
}

#[tokio::test]
async fn test_tarot_same_seed_same_images() {
    let upstreams = Upstreams::start().await;
    upstreams.mock_images(5).await;
    upstreams.mock_text(READING).await;

    let state = common::create_test_state(&upstreams.config());

    let first = state
        .tarot_service
        .draw_with_rng(&mut StdRng::seed_from_u64(2024))
        .await
        .unwrap();
    let second = state
        .tarot_service
        .draw_with_rng(&mut StdRng::seed_from_u64(2024))
        .await
        .unwrap();

    assert_eq!(first.images, second.images);
}
