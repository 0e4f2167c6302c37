use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use common::pagination::Pagination;
use service::reviews;

use crate::errors::ApiFailure;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

/// Approved reviews, newest first.
pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<models::review::Model>>, ApiFailure> {
    let defaults = Pagination::default();
    let opts = Pagination {
        page: params.page.unwrap_or(defaults.page),
        per_page: params.per_page.unwrap_or(defaults.per_page),
    };
    let rows = reviews::list_approved(&state.db, opts).await?;
    Ok(Json(rows))
}
