//! Mock server helpers for integration tests
//!
//! Wraps a mockito server and mounts the shop endpoints with canned bodies.
//! Mounted mocks live as long as the backend value.

use std::io::Write;
use std::time::Duration;

use mockito::{Mock, ServerGuard};
use serde::Serialize;
use shopagent::egui_app::{ApiClient, Config};
use shopagent::shared::AppConfig;

use super::fixtures;

pub struct MockBackend {
    pub server: ServerGuard,
    mocks: Vec<Mock>,
}

impl MockBackend {
    pub async fn start() -> Self {
        Self {
            server: mockito::Server::new_async().await,
            mocks: Vec::new(),
        }
    }

    /// API client pointed at this server
    pub fn api(&self) -> ApiClient {
        let builder = AppConfig::builder()
            .server_url(self.server.url())
            .request_timeout_secs(5);
        let config = Config::with_builder(builder).expect("valid test config");
        ApiClient::new(config).expect("client builds")
    }

    pub async fn mount_json<T: Serialize>(&mut self, verb: &str, route: &str, status: usize, body: &T) {
        let body = serde_json::to_string(body).expect("fixture serializes");
        let mock = self
            .server
            .mock(verb, route)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    /// JSON answer whose body is only written after `delay`
    pub async fn mount_slow<T: Serialize>(&mut self, route: &str, body: &T, delay: Duration) {
        let body = serde_json::to_vec(body).expect("fixture serializes");
        let mock = self
            .server
            .mock("GET", route)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(move |w| {
                std::thread::sleep(delay);
                w.write_all(&body)
            })
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    /// Catalog and demo identities
    pub async fn mount_static_data(&mut self) {
        self.mount_json("GET", "/api/users", 200, &fixtures::demo_users()).await;
        self.mount_json("GET", "/api/products", 200, &fixtures::catalog()).await;
    }

    /// `/api/me` accepting only `token`
    pub async fn mount_me(&mut self, token: &str) {
        let body = serde_json::to_string(&fixtures::profile()).expect("fixture serializes");
        let mock = self
            .server
            .mock("GET", "/api/me")
            .match_header("authorization", format!("Bearer {}", token).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;
        self.mocks.push(mock);
    }

    pub async fn mount_detail(&mut self, verb: &str, route: &str, status: usize, detail: &str) {
        self.mount_json(verb, route, status, &serde_json::json!({ "detail": detail }))
            .await;
    }

    /// A mock that must never be hit; check it with `assert_async`
    pub async fn never(&mut self, verb: &str, route: &str) -> Mock {
        self.server
            .mock(verb, route)
            .with_status(500)
            .expect(0)
            .create_async()
            .await
    }
}
