//! Reply templates client (admin)

use serde::de::IgnoredAny;
use shared::models::{ReplyTemplate, ReplyTemplateDto, ReplyTemplateWrite};

use super::NotFoundExt;
use crate::{ClientResult, HttpClient};

pub struct ReplyTemplatesApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> ReplyTemplatesApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    pub async fn get_all(&self) -> ClientResult<Vec<ReplyTemplate>> {
        let dtos: Vec<ReplyTemplateDto> = self.http.get("/reply-templates").await?;
        Ok(dtos.into_iter().map(ReplyTemplate::from).collect())
    }

    pub async fn create(&self, name: &str, content: &str) -> ClientResult<ReplyTemplate> {
        let body = ReplyTemplateWrite {
            name: name.to_string(),
            content: content.to_string(),
        };
        let dto: ReplyTemplateDto = self.http.post("/reply-templates", &body).await?;
        Ok(ReplyTemplate::from(dto))
    }

    /// Replace name and content; `None` when the template does not exist
    pub async fn update(
        &self,
        id: &str,
        name: &str,
        content: &str,
    ) -> ClientResult<Option<ReplyTemplate>> {
        let body = ReplyTemplateWrite {
            name: name.to_string(),
            content: content.to_string(),
        };
        let dto: Option<ReplyTemplateDto> = self
            .http
            .put(&format!("/reply-templates/{id}"), &body)
            .await
            .or_not_found()?;
        Ok(dto.map(ReplyTemplate::from))
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        let _: IgnoredAny = self.http.delete(&format!("/reply-templates/{id}")).await?;
        Ok(())
    }
}
