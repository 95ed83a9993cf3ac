//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use shop_admin::config::BackendConfig;
use shop_admin::rest::{ShopApi, ShopClient};
use shop_admin::router::{RouteTable, Router};
use shop_admin::ui::app::App;
use shop_admin::ui::events::AppEvent;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};
use tempfile::TempDir;

pub use mock_backend::{CapturedRequest, MockBackend, MockResponse};

pub fn backend_config(base_url: &str) -> BackendConfig {
    BackendConfig {
        base_url: base_url.to_string(),
        accept_invalid_certs: false,
        connect_timeout_seconds: 2,
    }
}

pub fn client_for(mock: &MockBackend) -> ShopClient {
    ShopClient::new(&backend_config(&mock.base_url())).expect("client for mock backend")
}

pub fn api_for(mock: &MockBackend) -> ShopApi {
    ShopApi::from_client(client_for(mock))
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

pub fn make_app(start: &str) -> App {
    App::new(Router::new(RouteTable::shop(), start))
}

/// Poll for the next API event without blocking the runtime thread.
pub async fn next_api_event(events: &Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Ok(event @ AppEvent::Api { .. }) = events.try_recv() {
            return Some(event);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    None
}
