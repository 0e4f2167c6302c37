//! Read operations for the services catalog.

use models::service;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect};

use crate::errors::ServiceError;
use crate::search::FilteredList;

/// Full catalog, newest first, optionally narrowed by a case-insensitive
/// substring match over title+description. A database failure surfaces as
/// `Err`, an empty table as `Ok(vec![])`; callers must not conflate the two.
pub async fn list_services(
    db: &DatabaseConnection,
    query: Option<&str>,
) -> Result<Vec<service::Model>, ServiceError> {
    let rows = service::Entity::find()
        .order_by_desc(service::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(apply_query(rows, query))
}

/// Size-limited variant for the home page.
pub async fn featured_services(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<service::Model>, ServiceError> {
    service::Entity::find()
        .order_by_desc(service::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

pub async fn get_service_by_slug(
    db: &DatabaseConnection,
    slug: &str,
) -> Result<Option<service::Model>, ServiceError> {
    service::Entity::find()
        .filter(service::Column::Slug.eq(slug))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

fn apply_query(rows: Vec<service::Model>, query: Option<&str>) -> Vec<service::Model> {
    match query {
        Some(q) if !q.trim().is_empty() => FilteredList::new(rows).with_query(q).into_filtered(),
        _ => rows,
    }
}
