use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Certificate::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Certificate::Id)
                            .text()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Certificate::Title).text().not_null())
                    .col(ColumnDef::new(Certificate::Issuer).text().not_null())
                    .col(ColumnDef::new(Certificate::IssueDate).text().not_null())
                    .col(ColumnDef::new(Certificate::CredentialId).text())
                    .col(ColumnDef::new(Certificate::CredentialUrl).text())
                    .col(ColumnDef::new(Certificate::Image).text())
                    .col(
                        ColumnDef::new(Certificate::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Certificate::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Certificate::UpdatedAt)
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
                CREATE INDEX IF NOT EXISTS idx_certificate_order
                ON certificate ("order");
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Certificate::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Certificate {
    Table,
    Id,
    Title,
    Issuer,
    IssueDate,
    CredentialId,
    CredentialUrl,
    Image,
    Order,
    CreatedAt,
    UpdatedAt,
}
