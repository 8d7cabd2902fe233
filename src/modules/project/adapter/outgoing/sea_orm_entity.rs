use crate::project::domain::Project;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    pub description: Option<String>,

    pub image: Option<String>,

    /// JSON-encoded array of strings, e.g. `["Rust","Postgres"]`.
    pub technologies: Option<String>,

    pub github_url: Option<String>,

    pub live_url: Option<String>,

    pub objectives: Option<String>,

    pub key_challenges: Option<String>,

    pub featured: bool,

    pub order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Lenient read: malformed JSON text reads back as `None` rather than
/// failing the whole list.
fn parse_array(text: Option<String>) -> Option<Vec<String>> {
    text.as_deref().and_then(|t| serde_json::from_str(t).ok())
}

fn encode_array(items: &Option<Vec<String>>) -> Option<String> {
    items
        .as_ref()
        .and_then(|v| serde_json::to_string(v).ok())
}

impl Model {
    pub fn into_entity(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            image: self.image,
            technologies: parse_array(self.technologies),
            github_url: self.github_url,
            live_url: self.live_url,
            objectives: parse_array(self.objectives),
            key_challenges: parse_array(self.key_challenges),
            featured: self.featured,
            order: self.order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub fn active_model_from_entity(project: Project) -> ActiveModel {
    ActiveModel {
        id: Set(project.id),
        title: Set(project.title),
        description: Set(project.description),
        image: Set(project.image),
        technologies: Set(encode_array(&project.technologies)),
        github_url: Set(project.github_url),
        live_url: Set(project.live_url),
        objectives: Set(encode_array(&project.objectives)),
        key_challenges: Set(encode_array(&project.key_challenges)),
        featured: Set(project.featured),
        order: Set(project.order),
        created_at: Set(project.created_at),
        updated_at: Set(project.updated_at),
    }
}

pub(super) fn encode_array_field(items: &Option<Vec<String>>) -> Option<String> {
    encode_array(items)
}
