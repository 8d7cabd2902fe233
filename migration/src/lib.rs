pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_auth_tables;
mod m20250810_000002_create_table_project;
mod m20250810_000003_create_table_certificate;
mod m20250810_000004_create_timeline_tables;
mod m20250810_000005_create_table_setting;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_auth_tables::Migration),
            Box::new(m20250810_000002_create_table_project::Migration),
            Box::new(m20250810_000003_create_table_certificate::Migration),
            Box::new(m20250810_000004_create_timeline_tables::Migration),
            Box::new(m20250810_000005_create_table_setting::Migration),
        ]
    }
}
