//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_services;
mod m20240301_000002_create_blog_posts;
mod m20240301_000003_create_reviews;
mod m20240301_000004_create_contact_submissions;
mod m20240301_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_services::Migration),
            Box::new(m20240301_000002_create_blog_posts::Migration),
            Box::new(m20240301_000003_create_reviews::Migration),
            Box::new(m20240301_000004_create_contact_submissions::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000005_add_indexes::Migration),
        ]
    }
}
