use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Listing pages always order by created_at descending; public views filter on
// the visibility flags. Composite indexes cover both at once.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_services_created_at")
                    .table(Services::Table)
                    .col(Services::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_posts_published_created_at")
                    .table(BlogPosts::Table)
                    .col(BlogPosts::Published)
                    .col(BlogPosts::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_approved_created_at")
                    .table(Reviews::Table)
                    .col(Reviews::Approved)
                    .col(Reviews::CreatedAt)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_contact_submissions_status")
                    .table(ContactSubmissions::Table)
                    .col(ContactSubmissions::Status)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_services_created_at").table(Services::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_blog_posts_published_created_at")
                    .table(BlogPosts::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_reviews_approved_created_at")
                    .table(Reviews::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_contact_submissions_status")
                    .table(ContactSubmissions::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Services { Table, CreatedAt }

#[derive(DeriveIden)]
enum BlogPosts { Table, Published, CreatedAt }

#[derive(DeriveIden)]
enum Reviews { Table, Approved, CreatedAt }

#[derive(DeriveIden)]
enum ContactSubmissions { Table, Status }
