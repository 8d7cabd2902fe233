use actix_web::{post, web, Responder};
use serde::Deserialize;

use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::timeline::application::use_cases::create_timeline_entry::CreateTimelineEntryError;
use crate::timeline::application::use_cases::TimelineDraft;
use crate::timeline::domain::WorkRole;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TimelineEntryRequest {
    #[serde(default, rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub title: String,
    // Education payloads say `institution`, work payloads `company`.
    pub company: Option<String>,
    pub institution: Option<String>,
    pub location: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub key_achievements: Option<Vec<String>>,
    pub tech_stacks: Option<Vec<String>>,
    pub role: Option<WorkRole>,
}

impl TimelineEntryRequest {
    pub fn into_draft(self) -> TimelineDraft {
        TimelineDraft {
            entry_type: self.entry_type,
            title: self.title,
            company: self.company.or(self.institution).unwrap_or_default(),
            location: self.location,
            period: self.period,
            description: self.description,
            key_achievements: self.key_achievements,
            tech_stacks: self.tech_stacks,
            role: self.role,
        }
    }
}

#[post("/api/timelines")]
pub async fn create_timeline_entry_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<TimelineEntryRequest>,
) -> impl Responder {
    match data
        .create_timeline_entry_use_case
        .execute(payload.into_inner().into_draft())
        .await
    {
        Ok(created) => ApiResponse::created(created),
        Err(CreateTimelineEntryError::Validation(msg)) => ApiResponse::bad_request(&msg),
        Err(CreateTimelineEntryError::RepositoryError(msg)) => {
            tracing::error!("failed to create timeline entry: {msg}");
            ApiResponse::internal_error("Failed to create timeline entry")
        }
    }
}
