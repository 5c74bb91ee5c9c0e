//! Variants client

use serde::de::IgnoredAny;
use shared::models::{Variant, VariantCreate, VariantCreateRequest, VariantDto, VariantUpdate};

use super::NotFoundExt;
use crate::{ClientResult, HttpClient};

pub struct VariantsApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> VariantsApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    pub async fn get_by_product_id(&self, product_id: &str) -> ClientResult<Vec<Variant>> {
        let dtos: Vec<VariantDto> = self
            .http
            .get(&format!("/variants/product/{product_id}"))
            .await?;
        Ok(dtos.into_iter().map(Variant::from).collect())
    }

    /// Create a variant under `product_id`. The backend assigns the SKU code.
    pub async fn create(&self, product_id: &str, data: VariantCreate) -> ClientResult<Variant> {
        let body = VariantCreateRequest::new(product_id, data);
        let dto: VariantDto = self.http.post("/variants", &body).await?;
        Ok(Variant::from(dto))
    }

    pub async fn update(&self, id: &str, patch: &VariantUpdate) -> ClientResult<Option<Variant>> {
        let dto: Option<VariantDto> = self
            .http
            .put(&format!("/variants/{id}"), patch)
            .await
            .or_not_found()?;
        Ok(dto.map(Variant::from))
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("/variants/{id}")).await?;
        Ok(())
    }
}
