use crate::timeline::domain::WorkRole;

/// Incoming timeline payload before it is routed to one of the two
/// physical tables. `company` doubles as the institution for education
/// entries; blank strings count as missing.
#[derive(Debug, Clone, Default)]
pub struct TimelineDraft {
    pub entry_type: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub period: Option<String>,
    pub description: Option<String>,
    pub key_achievements: Option<Vec<String>>,
    pub tech_stacks: Option<Vec<String>>,
    pub role: Option<WorkRole>,
}

impl TimelineDraft {
    pub fn is_education(&self) -> bool {
        self.entry_type == "education"
    }

    pub fn is_work(&self) -> bool {
        self.entry_type == "work"
    }
}
