use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use service::contact::{self, ContactInput, SeaOrmContactRepository};

use crate::errors::ApiFailure;
use crate::routes::ServerState;

/// Book-your-service form. Validation failures come back as 422 with one
/// message per offending field and nothing is written; a passing payload is
/// inserted exactly once and echoed back with its server-assigned identity.
pub async fn submit(
    State(state): State<ServerState>,
    Json(input): Json<ContactInput>,
) -> Result<(StatusCode, Json<models::contact_submission::Model>), ApiFailure> {
    let repo = SeaOrmContactRepository { db: state.db.clone() };
    let created = contact::submit(&repo, &input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
