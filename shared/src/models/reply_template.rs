//! Reply Template Model
//!
//! Canned answers the admin console inserts into inquiry replies.

use serde::{Deserialize, Serialize};

use crate::util::coerce::{RawId, id_or_empty};

/// Template as returned by `/reply-templates`.
///
/// The id arrives under `id`; `templateId` is read only when `id` is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyTemplateDto {
    pub id: Option<RawId>,
    pub template_id: Option<RawId>,
    pub name: Option<String>,
    pub content: Option<String>,
    pub created_by: Option<RawId>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Reply template entity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyTemplate {
    pub id: String,
    pub name: String,
    pub content: String,
    pub created_by: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<ReplyTemplateDto> for ReplyTemplate {
    fn from(dto: ReplyTemplateDto) -> Self {
        Self {
            id: id_or_empty(dto.id.as_ref().or(dto.template_id.as_ref())),
            name: dto.name.unwrap_or_default(),
            content: dto.content.unwrap_or_default(),
            created_by: dto.created_by.as_ref().map(ToString::to_string),
            created_at: dto.created_at,
            updated_at: dto.updated_at,
        }
    }
}

/// Create / replace template payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyTemplateWrite {
    pub name: String,
    pub content: String,
}
