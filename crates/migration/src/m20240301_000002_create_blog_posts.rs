use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPosts::Table)
                    .if_not_exists()
                    .col(uuid(BlogPosts::Id).primary_key())
                    .col(string_len(BlogPosts::Title, 256).not_null())
                    .col(string_len(BlogPosts::Slug, 160).not_null().unique_key())
                    .col(text(BlogPosts::Summary).not_null())
                    .col(text(BlogPosts::Content).not_null())
                    .col(string_len(BlogPosts::Author, 128).not_null())
                    .col(string_len(BlogPosts::ImageUrl, 512).not_null())
                    .col(boolean(BlogPosts::Published).not_null().default(false))
                    .col(timestamp_with_time_zone(BlogPosts::CreatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BlogPosts::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BlogPosts {
    Table,
    Id,
    Title,
    Slug,
    Summary,
    Content,
    Author,
    ImageUrl,
    Published,
    CreatedAt,
}
