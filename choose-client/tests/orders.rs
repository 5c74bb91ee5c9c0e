// choose-client/tests/orders.rs
// Order creation, status updates, cart transforms

mod common;

use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post, put};
use axum::{Json, Router};
use choose_client::ClientError;
use choose_client::models::{CartItem, OrderCreate, OrderStatus, Product, ShippingDetails, Variant};
use common::{Recorder, ok, shop};
use serde_json::{Value, json};

fn order_json(recipient: Option<&str>) -> Value {
    json!({
        "id": 501,
        "userId": 8,
        "userName": "Lin",
        "userEmail": "lin@example.com",
        "total": "1780.00",
        "status": "PENDING",
        "paymentMethod": "BANK_TRANSFER",
        "shippingMethod": null,
        "recipientName": recipient,
        "recipientPhone": "0912345678",
        "shippingAddress": "台北市信義區",
        "createdAt": "2024-03-07T10:30:00",
        "items": [
            { "id": 1, "variantId": 11, "skuCode": "P1-W-M", "productName": "Tee", "color": "white", "size": "M", "price": 890, "quantity": 2 }
        ]
    })
}

fn cart_line(variant_id: &str, quantity: u32) -> CartItem {
    CartItem {
        cart_item_id: None,
        product: Product::default(),
        variant: Variant {
            id: variant_id.to_string(),
            ..Default::default()
        },
        quantity,
    }
}

fn details(method: &str, address: Option<&str>, store_name: Option<&str>) -> ShippingDetails {
    ShippingDetails {
        full_name: "Lin".into(),
        phone: "0912345678".into(),
        email: "lin@example.com".into(),
        method: method.into(),
        address: address.map(str::to_string),
        store_name: store_name.map(str::to_string),
    }
}

fn order_router(recorder: &Recorder) -> Router {
    let seen = recorder.clone();
    Router::new().route(
        "/orders",
        post(move |Json(body): Json<Value>| {
            let seen = seen.clone();
            async move {
                seen.push(body);
                ok(order_json(Some("Lin")))
            }
        }),
    )
}

#[tokio::test]
async fn test_create_store_pickup_order() {
    let recorder = Recorder::default();
    let (shop, _) = shop(order_router(&recorder)).await;

    let order = OrderCreate {
        items: vec![cart_line("11", 2), cart_line("12", 1)],
        shipping_details: details("STORE_PICKUP", None, Some("信義門市")),
    };
    let created = shop.orders().create(&order).await.unwrap();
    assert_eq!(created.id, "501");
    assert_eq!(created.total, 1780.0);

    assert_eq!(
        recorder.last(),
        json!({
            "shippingMethod": "STORE_PICKUP",
            "paymentMethod": "STORE_PICKUP",
            "recipientName": "Lin",
            "recipientPhone": "0912345678",
            "shippingAddress": "信義門市",
            "items": [
                { "variantId": 11, "quantity": 2 },
                { "variantId": 12, "quantity": 1 }
            ]
        })
    );
}

#[tokio::test]
async fn test_create_home_delivery_for_other_methods() {
    let recorder = Recorder::default();
    let (shop, _) = shop(order_router(&recorder)).await;

    for method in ["BANK_TRANSFER", "CASH_ON_DELIVERY", "store_pickup"] {
        let order = OrderCreate {
            items: vec![cart_line("11", 1)],
            shipping_details: details(method, Some("台北市信義區"), None),
        };
        shop.orders().create(&order).await.unwrap();
        let body = recorder.last();
        assert_eq!(body["shippingMethod"], "HOME_DELIVERY");
        assert_eq!(body["paymentMethod"], method);
        assert_eq!(body["shippingAddress"], "台北市信義區");
    }

    // neither address nor store name
    let order = OrderCreate {
        items: vec![cart_line("11", 1)],
        shipping_details: details("BANK_TRANSFER", Some(""), None),
    };
    shop.orders().create(&order).await.unwrap();
    assert_eq!(recorder.last()["shippingAddress"], "");
}

#[tokio::test]
async fn test_create_rejects_empty_order_without_request() {
    let recorder = Recorder::default();
    let (shop, _) = shop(order_router(&recorder)).await;

    let order = OrderCreate {
        items: Vec::new(),
        shipping_details: details("BANK_TRANSFER", Some("x"), None),
    };
    let err = shop.orders().create(&order).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(recorder.bodies().is_empty());
}

#[tokio::test]
async fn test_order_shipping_details_reconstruction() {
    let router = Router::new()
        .route("/orders/my", get(|| async { ok(json!([order_json(Some("Lin")), order_json(None)])) }))
        .route(
            "/orders/{id}",
            get(|Path(id): Path<String>| async move {
                if id == "501" {
                    ok(order_json(Some("Lin"))).into_response()
                } else {
                    StatusCode::NOT_FOUND.into_response()
                }
            }),
        );
    let (shop, _) = shop(router).await;

    let orders = shop.orders().get_my().await.unwrap();
    let details = orders[0].shipping_details.as_ref().unwrap();
    assert_eq!(details.full_name, "Lin");
    assert_eq!(details.phone, "0912345678");
    assert_eq!(details.email, "lin@example.com");
    assert_eq!(details.method, "BANK_TRANSFER");
    assert_eq!(details.address.as_deref(), Some("台北市信義區"));
    assert!(orders[1].shipping_details.is_none());

    assert_eq!(orders[0].shipping_method, "HOME_DELIVERY");
    assert_eq!(orders[0].user_id.as_deref(), Some("8"));
    assert_eq!(orders[0].items[0].variant.id, "11");
    assert_eq!(orders[0].items[0].product.name, "Tee");
    assert_eq!(orders[0].date.as_deref(), Some("2024/3/7"));

    assert!(shop.orders().get_by_id("501").await.unwrap().is_some());
    assert!(shop.orders().get_by_id("999").await.unwrap().is_none());
}

#[tokio::test]
async fn test_status_and_payment_note_updates() {
    let recorder = Recorder::default();
    let (on_status, on_note) = (recorder.clone(), recorder.clone());
    let router = Router::new()
        .route(
            "/orders/{id}/status",
            patch(move |Json(body): Json<Value>| {
                let seen = on_status.clone();
                async move {
                    seen.push(body);
                    ok(order_json(Some("Lin")))
                }
            }),
        )
        .route(
            "/orders/{id}/payment-note",
            patch(move |Json(body): Json<Value>| {
                let seen = on_note.clone();
                async move {
                    seen.push(body);
                    (StatusCode::BAD_REQUEST, common::fail("Note too long"))
                }
            }),
        );
    let (shop, _) = shop(router).await;

    shop.orders()
        .update_status("501", OrderStatus::Shipped)
        .await
        .unwrap();
    assert_eq!(recorder.last(), json!({ "status": "SHIPPED" }));

    let err = shop
        .orders()
        .update_payment_note("501", "末五碼 12345")
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Note too long");
    assert_eq!(recorder.last(), json!({ "paymentNote": "末五碼 12345" }));
}

#[tokio::test]
async fn test_cart_operations() {
    let recorder = Recorder::default();
    let (on_add, on_qty) = (recorder.clone(), recorder.clone());
    let router = Router::new()
        .route(
            "/cart",
            get(|| async {
                ok(json!([{
                    "cartItemId": 31,
                    "quantity": 2,
                    "variant": {
                        "id": 11, "productId": 3, "color": "white", "size": "M", "stock": 4,
                        "product": { "id": 3, "name": "Tee", "image": "https://cdn/t.jpg", "price": 490 }
                    }
                }]))
            })
            .post(move |Json(body): Json<Value>| {
                let seen = on_add.clone();
                async move {
                    seen.push(body);
                    ok(json!({ "cartItemId": 32, "quantity": 1 }))
                }
            })
            .delete(|| async { ok(Value::Null) }),
        )
        .route(
            "/cart/{id}",
            put(move |Json(body): Json<Value>| {
                let seen = on_qty.clone();
                async move {
                    seen.push(body);
                    ok(Value::Null)
                }
            })
            .delete(|| async { ok(Value::Null) }),
        );
    let (shop, _) = shop(router).await;

    let items = shop.cart().get_all().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].cart_item_id.as_deref(), Some("31"));
    assert_eq!(items[0].product.name, "Tee");
    assert_eq!(items[0].variant.stock, 4);

    // backend returned the line without its variant
    let err = shop.cart().add("11", 1).await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
    assert_eq!(recorder.last(), json!({ "variantId": 11, "quantity": 1 }));

    shop.cart().update_quantity("31", 5).await.unwrap();
    assert_eq!(recorder.last(), json!({ "quantity": 5 }));

    shop.cart().remove("31").await.unwrap();
    shop.cart().clear().await.unwrap();
}

#[tokio::test]
async fn test_remove_missing_cart_line_is_not_found() {
    let router = Router::new().route("/cart/{id}", delete(|| async { StatusCode::NOT_FOUND }));
    let (shop, _) = shop(router).await;
    let err = shop.cart().remove("404").await.unwrap_err();
    assert!(err.is_not_found());
}
