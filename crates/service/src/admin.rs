//! Admin dashboard aggregation: every table, newest first, plus totals.
//! The four reads fan out concurrently; any failure fails the overview.

use common::types::DashboardStats;
use models::{blog_post, contact_submission, review, service};
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use serde::Serialize;

use crate::errors::ServiceError;

#[derive(Debug, Serialize)]
pub struct AdminOverview {
    pub services: Vec<service::Model>,
    pub blog_posts: Vec<blog_post::Model>,
    pub reviews: Vec<review::Model>,
    pub contact_submissions: Vec<contact_submission::Model>,
    pub stats: DashboardStats,
}

pub async fn overview(db: &DatabaseConnection) -> Result<AdminOverview, ServiceError> {
    let services = async {
        service::Entity::find()
            .order_by_desc(service::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    };
    let blog_posts = async {
        blog_post::Entity::find()
            .order_by_desc(blog_post::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    };
    let reviews = async {
        review::Entity::find()
            .order_by_desc(review::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    };
    let contacts = async {
        contact_submission::Entity::find()
            .order_by_desc(contact_submission::Column::CreatedAt)
            .all(db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    };

    let (services, blog_posts, reviews, contact_submissions) =
        tokio::try_join!(services, blog_posts, reviews, contacts)?;

    let stats = DashboardStats {
        total_services: services.len() as u64,
        total_posts: blog_posts.len() as u64,
        total_reviews: reviews.len() as u64,
        total_contacts: contact_submissions.len() as u64,
    };

    Ok(AdminOverview { services, blog_posts, reviews, contact_submissions, stats })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn overview_counts_match_lists() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() || std::env::var("DATABASE_URL").is_err() {
            return Ok(());
        }
        let db = get_db().await?;
        let ov = overview(&db).await?;
        assert_eq!(ov.stats.total_services, ov.services.len() as u64);
        assert_eq!(ov.stats.total_posts, ov.blog_posts.len() as u64);
        assert_eq!(ov.stats.total_reviews, ov.reviews.len() as u64);
        assert_eq!(ov.stats.total_contacts, ov.contact_submissions.len() as u64);
        Ok(())
    }
}
