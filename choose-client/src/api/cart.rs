//! Cart client

use serde::de::IgnoredAny;
use shared::RawId;
use shared::models::{CartAdd, CartItem, CartItemDto, CartQuantity};

use crate::{ClientError, ClientResult, HttpClient};

pub struct CartApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> CartApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Fails with `InvalidResponse` if any line comes back without its variant
    pub async fn get_all(&self) -> ClientResult<Vec<CartItem>> {
        let dtos: Vec<CartItemDto> = self.http.get("/cart").await?;
        dtos.into_iter()
            .map(|dto| CartItem::try_from(dto).map_err(ClientError::from))
            .collect()
    }

    pub async fn add(&self, variant_id: impl Into<RawId>, quantity: u32) -> ClientResult<CartItem> {
        let body = CartAdd {
            variant_id: variant_id.into(),
            quantity,
        };
        let dto: CartItemDto = self.http.post("/cart", &body).await?;
        Ok(CartItem::try_from(dto)?)
    }

    pub async fn update_quantity(&self, cart_item_id: &str, quantity: u32) -> ClientResult<()> {
        let _: IgnoredAny = self
            .http
            .put(&format!("/cart/{cart_item_id}"), &CartQuantity { quantity })
            .await?;
        Ok(())
    }

    pub async fn remove(&self, cart_item_id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("/cart/{cart_item_id}")).await?;
        Ok(())
    }

    pub async fn clear(&self) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete("/cart").await?;
        Ok(())
    }
}
