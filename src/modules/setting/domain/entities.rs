use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// One profile key-value pair (residence, availability flag, about-me
/// markdown, social URLs and the like).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Setting {
    pub id: String,
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<FixedOffset>,
}
