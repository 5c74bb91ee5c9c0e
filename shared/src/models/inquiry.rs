//! Inquiry Model
//!
//! Customer-service cases opened from the contact form.

use serde::{Deserialize, Serialize};

use crate::util::coerce::RawId;
use crate::util::date::display_date;

/// Inquiry as returned by `/inquiries*`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDto {
    pub id: RawId,
    pub case_number: Option<String>,
    pub user_id: Option<RawId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub status: Option<String>,
    pub admin_reply: Option<String>,
    pub admin_reply_by: Option<RawId>,
    pub created_at: Option<String>,
    pub replied_at: Option<String>,
}

/// Inquiry entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Inquiry {
    pub id: String,
    pub case_number: Option<String>,
    pub user_id: Option<String>,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: String,
    pub admin_reply: Option<String>,
    pub admin_reply_by: Option<String>,
    pub created_at: Option<String>,
    pub replied_at: Option<String>,
    /// Display date derived from `created_at`
    pub date: Option<String>,
}

impl From<InquiryDto> for Inquiry {
    fn from(dto: InquiryDto) -> Self {
        let date = dto.created_at.as_deref().and_then(display_date);
        Self {
            id: dto.id.to_string(),
            case_number: dto.case_number,
            user_id: dto.user_id.as_ref().map(ToString::to_string),
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            subject: dto.subject,
            message: dto.message.unwrap_or_default(),
            status: dto.status.unwrap_or_default(),
            admin_reply: dto.admin_reply,
            admin_reply_by: dto.admin_reply_by.as_ref().map(ToString::to_string),
            created_at: dto.created_at,
            replied_at: dto.replied_at,
            date,
        }
    }
}

/// Contact form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryCreate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
}

/// Body of `POST /inquiries/{id}/reply`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryReply {
    pub reply_content: String,
}
