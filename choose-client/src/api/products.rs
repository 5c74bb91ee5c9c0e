//! Products client
//!
//! Every product read is a composite fetch: the product call, then one
//! variants call per product (run concurrently) to fill `variants` and
//! recompute `total_stock`. A failed variants call keeps the product with
//! the backend's stock figure and no variants.

use futures::future::join_all;
use serde::de::IgnoredAny;
use shared::models::{
    Product, ProductCreate, ProductDto, ProductUpdate, UploadedImage, Variant, VariantDto,
};
use tracing::warn;

use super::NotFoundExt;
use crate::{ClientResult, HttpClient};

pub struct ProductsApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> ProductsApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Listed products
    pub async fn get_all(&self) -> ClientResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self.http.get("/products").await?;
        Ok(self.attach_all(dtos).await)
    }

    /// All products including unlisted ones (admin)
    pub async fn get_all_admin(&self) -> ClientResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self.http.get("/products/admin/all").await?;
        Ok(self.attach_all(dtos).await)
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Option<Product>> {
        let dto: Option<ProductDto> = self
            .http
            .get(&format!("/products/{id}"))
            .await
            .or_not_found()?;
        match dto {
            Some(dto) => Ok(Some(self.attach_variants(Product::from(dto)).await)),
            None => Ok(None),
        }
    }

    pub async fn get_by_category(&self, category_id: &str) -> ClientResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self
            .http
            .get(&format!("/products/category/{category_id}"))
            .await?;
        Ok(self.attach_all(dtos).await)
    }

    pub async fn search(&self, keyword: &str) -> ClientResult<Vec<Product>> {
        let dtos: Vec<ProductDto> = self
            .http
            .get_query("/products/search", &[("keyword", keyword)])
            .await?;
        Ok(self.attach_all(dtos).await)
    }

    /// Variants of one product, in backend order
    pub async fn get_variants(&self, product_id: &str) -> ClientResult<Vec<Variant>> {
        let dtos: Vec<VariantDto> = self
            .http
            .get(&format!("/products/{product_id}/variants"))
            .await?;
        Ok(dtos.into_iter().map(Variant::from).collect())
    }

    pub async fn create(&self, data: &ProductCreate) -> ClientResult<Product> {
        let dto: ProductDto = self.http.post("/products", data).await?;
        Ok(self.attach_variants(Product::from(dto)).await)
    }

    /// Sparse update; `None` when the product does not exist
    pub async fn update(&self, id: &str, patch: &ProductUpdate) -> ClientResult<Option<Product>> {
        let dto: Option<ProductDto> = self
            .http
            .put(&format!("/products/{id}"), patch)
            .await
            .or_not_found()?;
        match dto {
            Some(dto) => Ok(Some(self.attach_variants(Product::from(dto)).await)),
            None => Ok(None),
        }
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("/products/{id}")).await?;
        Ok(())
    }

    /// Upload a product image, returning its hosted URL
    pub async fn upload_image(&self, file_name: &str, bytes: Vec<u8>) -> ClientResult<UploadedImage> {
        self.http.upload("/upload/image", file_name, bytes).await
    }

    async fn attach_all(&self, dtos: Vec<ProductDto>) -> Vec<Product> {
        join_all(
            dtos.into_iter()
                .map(|dto| self.attach_variants(Product::from(dto))),
        )
        .await
    }

    async fn attach_variants(&self, product: Product) -> Product {
        match self.get_variants(&product.id).await {
            Ok(variants) => product.with_variants(variants),
            Err(e) => {
                warn!(product_id = %product.id, error = %e, "Failed to load variants, keeping backend stock");
                product
            }
        }
    }
}
