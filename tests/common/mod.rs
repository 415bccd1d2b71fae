#![allow(dead_code)]

use axum::Router;
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{Value, json};
use tarot_oracle::config::Config;
use tarot_oracle::routes::build_router;
use tarot_oracle::state::AppState;

pub const PIXABAY_KEY: &str = "pixabay-test-key";
pub const ANTHROPIC_KEY: &str = "anthropic-test-key";
pub const MODEL: &str = "claude-test-model";

pub const READING: &str =
    r#"Here is your reading: {"card1":"a","card2":"b","card3":"c","summary":"d"} enjoy"#;

/// Stand-ins for the three external APIs.
pub struct Upstreams {
    pub images: MockServer,
    pub text: MockServer,
    pub oracle: MockServer,
}

impl Upstreams {
    pub async fn start() -> Self {
        Self {
            images: MockServer::start_async().await,
            text: MockServer::start_async().await,
            oracle: MockServer::start_async().await,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            pixabay_api_key: PIXABAY_KEY.to_string(),
            pixabay_base_url: self.images.base_url(),
            image_page_size: 5,
            anthropic_api_key: ANTHROPIC_KEY.to_string(),
            anthropic_base_url: self.text.base_url(),
            anthropic_model: MODEL.to_string(),
            anthropic_max_tokens: 800,
            fortune_language: "English".to_string(),
            yesno_base_url: self.oracle.base_url(),
            upstream_timeout_seconds: 5,
            expose_error_detail: true,
            static_dir: "static".to_string(),
        }
    }

    /// Image search answering with `count` hits whose ids are `0..count`.
    pub async fn mock_images(&self, count: u64) -> Mock<'_> {
        self.images
            .mock_async(|when, then| {
                when.method(GET).path("/api/");
                then.status(200).json_body(pixabay_body(count));
            })
            .await
    }

    pub async fn mock_images_status(&self, status: u16) -> Mock<'_> {
        self.images
            .mock_async(|when, then| {
                when.method(GET).path("/api/");
                then.status(status).body("upstream down");
            })
            .await
    }

    /// Text generation answering with one text block holding `text`.
    pub async fn mock_text(&self, text: &str) -> Mock<'_> {
        let body = anthropic_body(text);
        self.text
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(body);
            })
            .await
    }

    pub async fn mock_text_body(&self, body: Value) -> Mock<'_> {
        self.text
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(200).json_body(body);
            })
            .await
    }

    pub async fn mock_text_status(&self, status: u16) -> Mock<'_> {
        self.text
            .mock_async(|when, then| {
                when.method(POST).path("/v1/messages");
                then.status(status)
                    .json_body(json!({ "type": "error", "error": { "type": "authentication_error" } }));
            })
            .await
    }
}

pub fn pixabay_hit(id: u64) -> Value {
    json!({
        "id": id,
        "pageURL": format!("https://pixabay.com/photos/{id}/"),
        "type": "photo",
        "tags": format!("tag{id}, night"),
        "webformatURL": format!("https://pixabay.com/get/{id}_640.jpg"),
        "likes": 10
    })
}

pub fn pixabay_body(count: u64) -> Value {
    let hits: Vec<Value> = (0..count).map(pixabay_hit).collect();
    json!({ "total": count, "totalHits": count, "hits": hits })
}

pub fn anthropic_body(text: &str) -> Value {
    json!({
        "id": "msg_test",
        "type": "message",
        "role": "assistant",
        "model": MODEL,
        "content": [{ "type": "text", "text": text }],
        "stop_reason": "end_turn"
    })
}

pub fn create_test_state(config: &Config) -> AppState {
    AppState::from_config(config).unwrap()
}

pub fn create_test_app(config: &Config) -> Router {
    build_router(create_test_state(config), &config.static_dir)
}
