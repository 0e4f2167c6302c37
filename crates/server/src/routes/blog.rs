use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;

use service::blog;
use service::errors::ServiceError;

use crate::errors::ApiFailure;
use crate::routes::ServerState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Substring to match against title+summary, case-insensitive.
    pub q: Option<String>,
}

pub async fn list(
    State(state): State<ServerState>,
    Query(params): Query<ListQuery>,
) -> Result<Json<Vec<models::blog_post::Model>>, ApiFailure> {
    let rows = blog::list_published(&state.db, params.q.as_deref()).await?;
    Ok(Json(rows))
}

pub async fn get_by_slug(
    State(state): State<ServerState>,
    Path(slug): Path<String>,
) -> Result<Json<models::blog_post::Model>, ApiFailure> {
    match blog::get_published_by_slug(&state.db, &slug).await? {
        Some(post) => Ok(Json(post)),
        None => Err(ServiceError::not_found("blog post").into()),
    }
}
