//! Featured ("new arrivals") client

use shared::RawId;
use shared::models::{FeaturedDto, FeaturedToggle, Product, ProductDto};

use crate::{ClientError, ClientResult, HttpClient};

pub struct FeaturedApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> FeaturedApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Featured products. Variants are not loaded; `total_stock` is the
    /// backend's figure.
    pub async fn get_products(&self) -> ClientResult<Vec<Product>> {
        let dtos: Option<Vec<ProductDto>> = self.http.get("/products/featured").await?;
        Ok(dtos
            .unwrap_or_default()
            .into_iter()
            .map(Product::from)
            .collect())
    }

    /// Flip a product's featured flag. Accepts `"12"` or `12`.
    pub async fn toggle(&self, product_id: impl Into<RawId>) -> ClientResult<FeaturedToggle> {
        let product_id = product_id.into();
        let numeric = product_id
            .numeric()
            .ok_or_else(|| ClientError::Validation(format!("invalid product id: {product_id}")))?;
        let dto: FeaturedDto = self
            .http
            .patch_empty(&format!("/products/{numeric}/featured"))
            .await?;
        Ok(FeaturedToggle::from(dto))
    }
}
