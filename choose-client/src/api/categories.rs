//! Categories client

use serde::de::IgnoredAny;
use shared::models::{Category, CategoryCreate, CategoryDto, CategoryUpdate};

use super::NotFoundExt;
use crate::{ClientResult, HttpClient};

pub struct CategoriesApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> CategoriesApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<Category>> {
        let dtos: Vec<CategoryDto> = self.http.get("/categories").await?;
        Ok(dtos.into_iter().map(Category::from).collect())
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<Option<Category>> {
        let dto: Option<CategoryDto> = self
            .http
            .get(&format!("/categories/{id}"))
            .await
            .or_not_found()?;
        Ok(dto.map(Category::from))
    }

    pub async fn create(&self, data: &CategoryCreate) -> ClientResult<Category> {
        let dto: CategoryDto = self.http.post("/categories", data).await?;
        Ok(Category::from(dto))
    }

    pub async fn update(&self, id: &str, patch: &CategoryUpdate) -> ClientResult<Option<Category>> {
        let dto: Option<CategoryDto> = self
            .http
            .put(&format!("/categories/{id}"), patch)
            .await
            .or_not_found()?;
        Ok(dto.map(Category::from))
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("/categories/{id}")).await?;
        Ok(())
    }
}
