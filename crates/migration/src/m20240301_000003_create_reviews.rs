use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(uuid(Reviews::Id).primary_key())
                    .col(string_len(Reviews::Name, 128).not_null())
                    .col(integer(Reviews::Rating).not_null())
                    .col(text(Reviews::Message).not_null())
                    .col(string_len(Reviews::Service, 128).not_null())
                    .col(boolean(Reviews::Approved).not_null().default(false))
                    .col(timestamp_with_time_zone(Reviews::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Reviews::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Reviews {
    Table,
    Id,
    Name,
    Rating,
    Message,
    Service,
    Approved,
    CreatedAt,
}
