//! Read operations for customer reviews. Only approved reviews are shown
//! publicly; approval happens in the back office.

use common::pagination::Pagination;
use models::review;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::errors::ServiceError;

pub async fn list_approved(
    db: &DatabaseConnection,
    opts: Pagination,
) -> Result<Vec<review::Model>, ServiceError> {
    let (page_idx, per_page) = opts.normalize();
    review::Entity::find()
        .filter(review::Column::Approved.eq(true))
        .order_by_desc(review::Column::CreatedAt)
        .paginate(db, per_page)
        .fetch_page(page_idx)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Size-limited variant for the home page.
pub async fn featured(db: &DatabaseConnection, limit: u64) -> Result<Vec<review::Model>, ServiceError> {
    review::Entity::find()
        .filter(review::Column::Approved.eq(true))
        .order_by_desc(review::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
