use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Work arrangement of an experience entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkRole {
    #[serde(rename = "remote")]
    Remote,
    #[serde(rename = "on-site")]
    OnSite,
    #[serde(rename = "internship")]
    Internship,
}

impl WorkRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkRole::Remote => "remote",
            WorkRole::OnSite => "on-site",
            WorkRole::Internship => "internship",
        }
    }

    /// Lenient read from storage: an unrecognized value maps to `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "remote" => Some(WorkRole::Remote),
            "on-site" => Some(WorkRole::OnSite),
            "internship" => Some(WorkRole::Internship),
            _ => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_achievements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stacks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<WorkRole>,
    pub order: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    /// Degree or programme name; optional unlike the work counterpart.
    /// Wire name is `degree` so both entry kinds share one read shape.
    #[serde(rename = "degree", alias = "title", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Wire name is `company`, mirroring the work entries.
    #[serde(rename = "company", alias = "institution")]
    pub institution: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub order: i32,
    pub created_at: DateTime<FixedOffset>,
    pub updated_at: DateTime<FixedOffset>,
}

/// One logical timeline row. The `type` discriminant exists only at the
/// boundary; storage infers it from which physical table a row lives in.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum TimelineEntry {
    #[serde(rename = "work")]
    Work(Experience),
    #[serde(rename = "education")]
    Education(Education),
}

impl TimelineEntry {
    pub fn id(&self) -> &str {
        match self {
            TimelineEntry::Work(e) => &e.id,
            TimelineEntry::Education(e) => &e.id,
        }
    }
}
