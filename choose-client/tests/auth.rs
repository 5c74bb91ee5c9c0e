// choose-client/tests/auth.rs
// Token side effects of the auth flows, file-backed token store

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use choose_client::models::Role;
use choose_client::{ClientConfig, FileTokenStore, ShopClient, TokenStore};
use common::{Recorder, fail, ok, serve, shop};
use serde_json::{Value, json};
use tempfile::TempDir;

fn user_json(token: Option<&str>) -> Value {
    json!({
        "id": 8,
        "email": "lin@example.com",
        "name": "Lin",
        "phone": "0912345678",
        "role": "ADMIN",
        "token": token,
        "emailVerified": true
    })
}

#[tokio::test]
async fn test_login_stores_token() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let router = Router::new().route(
        "/auth/login",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push(body);
                ok(user_json(Some("jwt-1")))
            }
        }),
    );
    let (shop, tokens) = shop(router).await;

    let user = shop.auth().login("lin@example.com", "secret1").await.unwrap();
    assert_eq!(user.id, "8");
    assert_eq!(user.role, Role::Admin);
    assert!(user.email_verified);
    assert!(!user.password_set);
    assert_eq!(tokens.get().as_deref(), Some("jwt-1"));
    assert!(shop.is_logged_in());
    assert_eq!(
        recorder.last(),
        json!({ "email": "lin@example.com", "password": "secret1" })
    );
}

#[tokio::test]
async fn test_failed_login_leaves_store_untouched() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async { (StatusCode::BAD_REQUEST, fail("帳號或密碼錯誤")) }),
    );
    let (shop, tokens) = shop(router).await;

    let err = shop.auth().login("lin@example.com", "wrong").await.unwrap_err();
    assert_eq!(err.to_string(), "帳號或密碼錯誤");
    assert!(tokens.get().is_none());
}

#[tokio::test]
async fn test_logout_clears_token_even_when_backend_fails() {
    let router = Router::new().route(
        "/auth/logout",
        post(|| async { StatusCode::BAD_GATEWAY }),
    );
    let (shop, tokens) = shop(router).await;
    tokens.set("jwt-1");

    let err = shop.auth().logout().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    assert!(tokens.get().is_none());
    assert!(!shop.is_logged_in());
}

#[tokio::test]
async fn test_verify_flows_store_token() {
    let router = Router::new()
        .route(
            "/auth/verify-email",
            post(|| async { ok(user_json(Some("jwt-verify"))) }),
        )
        .route(
            "/auth/login-verify",
            post(|Json(body): Json<Value>| async move {
                if body["token"] == "good" {
                    ok(user_json(Some("jwt-magic")))
                } else {
                    ok(user_json(None))
                }
            }),
        );
    let (shop, tokens) = shop(router).await;

    let session = shop.auth().verify_email("mail-token").await.unwrap().unwrap();
    assert_eq!(session.token, "jwt-verify");
    assert_eq!(session.user.email, "lin@example.com");
    assert_eq!(tokens.get().as_deref(), Some("jwt-verify"));

    // no token in the response: nothing stored, no session
    assert!(shop.auth().login_verify("bad").await.unwrap().is_none());
    assert_eq!(tokens.get().as_deref(), Some("jwt-verify"));

    let session = shop.auth().login_verify("good").await.unwrap().unwrap();
    assert_eq!(session.token, "jwt-magic");
    assert_eq!(tokens.get().as_deref(), Some("jwt-magic"));
}

#[tokio::test]
async fn test_get_me_unauthorized_is_none() {
    let router = Router::new().route(
        "/auth/me",
        get(|| async { (StatusCode::UNAUTHORIZED, fail("Unauthorized")).into_response() }),
    );
    let (shop, tokens) = shop(router).await;
    tokens.set("stale");
    let mut expired = shop.subscribe_session_expired();

    assert!(shop.auth().get_me().await.unwrap().is_none());
    assert!(tokens.get().is_none());
    assert!(expired.try_recv().is_ok());
}

#[tokio::test]
async fn test_set_password_body() {
    let recorder = Recorder::default();
    let seen = recorder.clone();
    let router = Router::new().route(
        "/auth/set-password",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push(body);
                ok(Value::Null)
            }
        }),
    );
    let (shop, _) = shop(router).await;

    shop.auth().set_password("secret1", None).await.unwrap();
    assert_eq!(recorder.last(), json!({ "newPassword": "secret1" }));

    shop.auth().set_password("secret2", Some("link-token")).await.unwrap();
    assert_eq!(
        recorder.last(),
        json!({ "newPassword": "secret2", "token": "link-token" })
    );
}

#[tokio::test]
async fn test_user_statistics_and_order_count() {
    let router = Router::new()
        .route(
            "/users/{id}/statistics",
            get(|| async {
                ok(json!({
                    "userId": 8, "name": "Lin", "email": "lin@example.com",
                    "totalSpent": 1780, "averageOrderValue": 890, "orderCount": 2,
                    "completedOrderCount": 1
                }))
            }),
        )
        .route(
            "/orders/user/{id}",
            get(|| async { ok(json!([{ "id": 1 }, { "id": 2 }, { "id": 3 }])) }),
        );
    let (shop, _) = shop(router).await;

    let stats = shop.users().get_statistics("8").await.unwrap().unwrap();
    assert_eq!(stats.total_spent, 1780.0);
    assert_eq!(stats.order_count, 2);

    assert_eq!(shop.users().get_user_order_count("8").await.unwrap(), 3);
}

#[tokio::test]
async fn test_file_token_store_persists_across_clients() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("session").join("token.json");

    let store = FileTokenStore::new(&path);
    assert!(store.get().is_none());
    store.set("persisted");
    assert!(path.exists());

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved, json!({ "auth_token": "persisted" }));

    let reopened = FileTokenStore::new(&path);
    assert_eq!(reopened.get().as_deref(), Some("persisted"));

    reopened.remove();
    reopened.remove();
    assert!(!path.exists());
    assert!(FileTokenStore::new(&path).get().is_none());
}

#[tokio::test]
async fn test_config_token_path_selects_file_store() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("token.json");
    std::fs::write(&path, r#"{"auth_token":"from-disk"}"#).unwrap();

    let base_url = serve(Router::new()).await;
    let config = ClientConfig::new(base_url).with_token_path(&path);
    let shop = ShopClient::new(&config).unwrap();
    assert_eq!(shop.token().as_deref(), Some("from-disk"));

    // an explicit store wins over the configured path
    let other = Arc::new(FileTokenStore::new(temp_dir.path().join("other.json")));
    let shop = ShopClient::with_token_store(&config, other).unwrap();
    assert!(!shop.is_logged_in());
}
