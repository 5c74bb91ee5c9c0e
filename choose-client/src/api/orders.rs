//! Orders client

use serde::de::IgnoredAny;
use shared::models::{
    Order, OrderCreate, OrderCreateRequest, OrderDto, OrderStatus, OrderStatusUpdate,
    PaymentNoteUpdate,
};
use tracing::info;

use super::NotFoundExt;
use crate::{ClientError, ClientResult, HttpClient};

pub struct OrdersApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> OrdersApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Every order (admin)
    pub async fn get_all(&self) -> ClientResult<Vec<Order>> {
        let dtos: Vec<OrderDto> = self.http.get("/orders").await?;
        Ok(dtos.into_iter().map(Order::from).collect())
    }

    /// Orders of the signed-in user
    pub async fn get_my(&self) -> ClientResult<Vec<Order>> {
        let dtos: Vec<OrderDto> = self.http.get("/orders/my").await?;
        Ok(dtos.into_iter().map(Order::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Option<Order>> {
        let dto: Option<OrderDto> = self
            .http
            .get(&format!("/orders/{id}"))
            .await
            .or_not_found()?;
        Ok(dto.map(Order::from))
    }

    /// Place an order from cart lines and shipping details.
    ///
    /// Fails with [`ClientError::Validation`] without contacting the backend
    /// when `order.items` is empty.
    pub async fn create(&self, order: &OrderCreate) -> ClientResult<Order> {
        if order.items.is_empty() {
            return Err(ClientError::Validation(
                "order must contain at least one item".into(),
            ));
        }
        let body = OrderCreateRequest::from(order);
        let dto: OrderDto = self.http.post("/orders", &body).await?;
        let created = Order::from(dto);
        info!(order_id = %created.id, items = order.items.len(), "Order created");
        Ok(created)
    }

    pub async fn update_status(&self, id: &str, status: OrderStatus) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .patch(&format!("/orders/{id}/status"), &OrderStatusUpdate { status })
            .await?;
        Ok(())
    }

    pub async fn update_payment_note(&self, id: &str, note: &str) -> ClientResult<()> {
        let body = PaymentNoteUpdate {
            payment_note: note.to_string(),
        };
        let _: IgnoredAny = self
            .http
            .patch(&format!("/orders/{id}/payment-note"), &body)
            .await?;
        Ok(())
    }
}
