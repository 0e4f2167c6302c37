use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ContactSubmissions::Table)
                    .if_not_exists()
                    .col(uuid(ContactSubmissions::Id).primary_key())
                    .col(string_len(ContactSubmissions::Name, 128).not_null())
                    .col(string_len(ContactSubmissions::Email, 256).not_null())
                    .col(string_len(ContactSubmissions::Phone, 32).not_null())
                    .col(string_len(ContactSubmissions::ApplianceType, 64).not_null())
                    .col(text(ContactSubmissions::Message).not_null())
                    .col(string_len(ContactSubmissions::Location, 256).not_null())
                    .col(string_len(ContactSubmissions::Status, 16).not_null().default("new"))
                    .col(timestamp_with_time_zone(ContactSubmissions::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ContactSubmissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ContactSubmissions {
    Table,
    Id,
    Name,
    Email,
    Phone,
    ApplianceType,
    Message,
    Location,
    Status,
    CreatedAt,
}
