use axum::extract::State;
use axum::Json;

use service::admin::{self, AdminOverview};

use crate::errors::ApiFailure;
use crate::routes::ServerState;

/// Record lists and totals for the dashboard. Open by design: the dashboard
/// is an internal convenience view, mirroring the hosted-database console.
pub async fn overview(State(state): State<ServerState>) -> Result<Json<AdminOverview>, ApiFailure> {
    let data = admin::overview(&state.db).await?;
    Ok(Json(data))
}
