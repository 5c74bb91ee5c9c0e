//! Inquiries client

use shared::models::{Inquiry, InquiryCreate, InquiryDto, InquiryReply};

use super::NotFoundExt;
use crate::{ClientResult, HttpClient};

pub struct InquiriesApi<'a, H> {
    http: &'a H,
}

impl<'a, H: HttpClient> InquiriesApi<'a, H> {
    pub fn new(http: &'a H) -> Self {
        Self { http }
    }

    /// Every inquiry (admin)
    pub async fn get_all(&self) -> ClientResult<Vec<Inquiry>> {
        let dtos: Vec<InquiryDto> = self.http.get("/inquiries").await?;
        Ok(dtos.into_iter().map(Inquiry::from).collect())
    }

    /// Submit the contact form
    pub async fn create(&self, data: &InquiryCreate) -> ClientResult<Inquiry> {
        let dto: InquiryDto = self.http.post("/inquiries", data).await?;
        Ok(Inquiry::from(dto))
    }

    /// Reply to an inquiry; the backend also emails the reply.
    pub async fn reply(&self, id: &str, reply_content: &str) -> ClientResult<Option<Inquiry>> {
        let body = InquiryReply {
            reply_content: reply_content.to_string(),
        };
        let dto: Option<InquiryDto> = self
            .http
            .post(&format!("/inquiries/{id}/reply"), &body)
            .await
            .or_not_found()?;
        Ok(dto.map(Inquiry::from))
    }

    pub async fn close(&self, id: &str) -> ClientResult<Option<Inquiry>> {
        let dto: Option<InquiryDto> = self
            .http
            .patch_empty(&format!("/inquiries/{id}/close"))
            .await
            .or_not_found()?;
        Ok(dto.map(Inquiry::from))
    }

    /// Move a closed inquiry back to in-progress
    pub async fn reopen(&self, id: &str) -> ClientResult<Option<Inquiry>> {
        let dto: Option<InquiryDto> = self
            .http
            .patch_empty(&format!("/inquiries/{id}/reopen"))
            .await
            .or_not_found()?;
        Ok(dto.map(Inquiry::from))
    }
}
