use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use service::catalog;
use service::errors::ServiceError;

use crate::errors::ApiFailure;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Substring to match against title+description, case-insensitive.
    pub q: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<models::service::Model>>, ApiFailure> {
    let rows = catalog::list_services(&state.db, params.q.as_deref()).await?;
    Ok(Json(rows))
}

pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<models::service::Model>, ApiFailure> {
    match catalog::get_service_by_slug(&state.db, &slug).await? {
        Some(svc) => Ok(Json(svc)),
        None => Err(ServiceError::not_found("service").into()),
    }
}
