use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// The logical timeline is stored across two physical tables: `work`
// (experience entries) and `education`. The `type` discriminant is never
// a column; it is inferred from the table a row came from.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Work::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Work::Id).text().not_null().primary_key())
                    .col(ColumnDef::new(Work::Title).text().not_null())
                    .col(ColumnDef::new(Work::Company).text().not_null())
                    .col(ColumnDef::new(Work::Location).text())
                    .col(ColumnDef::new(Work::Period).text())
                    .col(ColumnDef::new(Work::Description).text())
                    .col(ColumnDef::new(Work::KeyAchievements).text())
                    .col(ColumnDef::new(Work::TechStacks).text())
                    // 'remote', 'on-site' or 'internship'
                    .col(ColumnDef::new(Work::Role).text())
                    .col(
                        ColumnDef::new(Work::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Work::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Work::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Education::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Education::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    // Degree is stored in the `title` column and is optional
                    .col(ColumnDef::new(Education::Title).text())
                    .col(ColumnDef::new(Education::Institution).text().not_null())
                    .col(ColumnDef::new(Education::Location).text())
                    .col(ColumnDef::new(Education::Period).text())
                    .col(ColumnDef::new(Education::Description).text())
                    .col(
                        ColumnDef::new(Education::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Education::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Education::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_work_order ON work ("order");
                CREATE INDEX IF NOT EXISTS idx_education_order ON education ("order");
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Education::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Work::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Work {
    Table,
    Id,
    Title,
    Company,
    Location,
    Period,
    Description,
    KeyAchievements,
    TechStacks,
    Role,
    Order,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Education {
    Table,
    Id,
    Title,
    Institution,
    Location,
    Period,
    Description,
    Order,
    CreatedAt,
    UpdatedAt,
}
