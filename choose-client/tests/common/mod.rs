// choose-client/tests/common/mod.rs
// In-process backend for integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{Json, Router};
use choose_client::{ClientConfig, MemoryTokenStore, ShopClient};
use serde_json::Value;
use shared::ApiResponse;
use tokio::net::TcpListener;

/// Serve `router` on an ephemeral port and return its base URL
pub async fn serve(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Client against `router` (mounted under `/api`) with an inspectable token store
pub async fn shop(router: Router) -> (ShopClient, Arc<MemoryTokenStore>) {
    let base_url = serve(Router::new().nest("/api", router)).await;
    let tokens = Arc::new(MemoryTokenStore::new());
    let config = ClientConfig::new(format!("{base_url}/api"));
    let shop = ShopClient::with_token_store(&config, tokens.clone()).unwrap();
    (shop, tokens)
}

pub fn ok(data: Value) -> Json<ApiResponse<Value>> {
    Json(ApiResponse::ok(data))
}

pub fn fail(message: &str) -> Json<ApiResponse<()>> {
    Json(ApiResponse::error(message))
}

/// Captures request bodies seen by handlers
#[derive(Clone, Default)]
pub struct Recorder(Arc<Mutex<Vec<Value>>>);

impl Recorder {
    pub fn push(&self, body: Value) {
        self.0.lock().unwrap().push(body);
    }

    pub fn bodies(&self) -> Vec<Value> {
        self.0.lock().unwrap().clone()
    }

    pub fn last(&self) -> Value {
        self.bodies().last().cloned().expect("no request recorded")
    }
}
