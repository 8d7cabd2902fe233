use crate::timeline::domain::{Education, Experience, WorkRole};

fn parse_array(text: Option<&str>) -> Option<Vec<String>> {
    text.and_then(|t| serde_json::from_str(t).ok())
}

fn encode_array(items: &Option<Vec<String>>) -> Option<String> {
    items
        .as_ref()
        .and_then(|v| serde_json::to_string(v).ok())
}

pub mod work {
    use super::*;
    use sea_orm::entity::prelude::*;
    use sea_orm::Set;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "work")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,

        pub title: String,

        pub company: String,

        pub location: Option<String>,

        pub period: Option<String>,

        pub description: Option<String>,

        /// JSON-encoded array of strings.
        pub key_achievements: Option<String>,

        pub tech_stacks: Option<String>,

        pub role: Option<String>,

        pub order: i32,

        pub created_at: DateTimeWithTimeZone,

        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn into_entity(self) -> Experience {
            Experience {
                id: self.id,
                title: self.title,
                company: self.company,
                location: self.location,
                period: self.period,
                description: self.description,
                key_achievements: parse_array(self.key_achievements.as_deref()),
                tech_stacks: parse_array(self.tech_stacks.as_deref()),
                role: self.role.as_deref().and_then(WorkRole::parse),
                order: self.order,
                created_at: self.created_at,
                updated_at: self.updated_at,
            }
        }
    }

    pub fn active_model_from_entity(experience: Experience) -> ActiveModel {
        ActiveModel {
            id: Set(experience.id),
            title: Set(experience.title),
            company: Set(experience.company),
            location: Set(experience.location),
            period: Set(experience.period),
            description: Set(experience.description),
            key_achievements: Set(encode_array(&experience.key_achievements)),
            tech_stacks: Set(encode_array(&experience.tech_stacks)),
            role: Set(experience.role.map(|r| r.as_str().to_string())),
            order: Set(experience.order),
            created_at: Set(experience.created_at),
            updated_at: Set(experience.updated_at),
        }
    }

}

pub(super) fn encode_array_field(items: &Option<Vec<String>>) -> Option<String> {
    encode_array(items)
}

pub mod education {
    use super::*;
    use sea_orm::entity::prelude::*;
    use sea_orm::Set;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
    #[sea_orm(table_name = "education")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: String,

        pub title: Option<String>,

        pub institution: String,

        pub location: Option<String>,

        pub period: Option<String>,

        pub description: Option<String>,

        pub order: i32,

        pub created_at: DateTimeWithTimeZone,

        pub updated_at: DateTimeWithTimeZone,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}

    impl Model {
        pub fn into_entity(self) -> Education {
            Education {
                id: self.id,
                title: self.title,
                institution: self.institution,
                location: self.location,
                period: self.period,
                description: self.description,
                order: self.order,
                created_at: self.created_at,
                updated_at: self.updated_at,
            }
        }
    }

    pub fn active_model_from_entity(education: Education) -> ActiveModel {
        ActiveModel {
            id: Set(education.id),
            title: Set(education.title),
            institution: Set(education.institution),
            location: Set(education.location),
            period: Set(education.period),
            description: Set(education.description),
            order: Set(education.order),
            created_at: Set(education.created_at),
            updated_at: Set(education.updated_at),
        }
    }
}
