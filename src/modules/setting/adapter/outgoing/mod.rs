mod setting_repository_postgres;
pub mod sea_orm_entity;

pub use setting_repository_postgres::SettingRepositoryPostgres;
