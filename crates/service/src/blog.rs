//! Read operations for blog posts. Public views only ever see published
//! posts; the predicate is pushed down to the database.

use models::blog_post;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::errors::ServiceError;
use crate::search::FilteredList;

pub async fn list_published(
    db: &DatabaseConnection,
    query: Option<&str>,
) -> Result<Vec<blog_post::Model>, ServiceError> {
    let rows = blog_post::Entity::find()
        .filter(blog_post::Column::Published.eq(true))
        .order_by_desc(blog_post::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(match query {
        Some(q) if !q.trim().is_empty() => FilteredList::new(rows).with_query(q).into_filtered(),
        _ => rows,
    })
}

/// Slug lookup for the detail page. Unpublished posts stay invisible here
/// even when the slug is known.
pub async fn get_published_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<blog_post::Model>, ServiceError> {
    blog_post::Entity::find()
        .filter(blog_post::Column::Slug.eq(slug))
        .filter(blog_post::Column::Published.eq(true))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
