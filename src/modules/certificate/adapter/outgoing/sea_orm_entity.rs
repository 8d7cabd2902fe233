use crate::certificate::domain::Certificate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "certificate")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub title: String,

    pub issuer: String,

    pub issue_date: String,

    pub credential_id: Option<String>,

    pub credential_url: Option<String>,

    pub image: Option<String>,

    pub order: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_entity(self) -> Certificate {
        Certificate {
            id: self.id,
            title: self.title,
            issuer: self.issuer,
            issue_date: self.issue_date,
            credential_id: self.credential_id,
            credential_url: self.credential_url,
            image: self.image,
            order: self.order,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub fn active_model_from_entity(certificate: Certificate) -> ActiveModel {
    ActiveModel {
        id: Set(certificate.id),
        title: Set(certificate.title),
        issuer: Set(certificate.issuer),
        issue_date: Set(certificate.issue_date),
        credential_id: Set(certificate.credential_id),
        credential_url: Set(certificate.credential_url),
        image: Set(certificate.image),
        order: Set(certificate.order),
        created_at: Set(certificate.created_at),
        updated_at: Set(certificate.updated_at),
    }
}
