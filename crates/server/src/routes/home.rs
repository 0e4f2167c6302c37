use axum::extract::State;
use axum::Json;
use serde::Serialize;

use service::{catalog, reviews};

use crate::errors::ApiFailure;
use crate::routes::ServerState;

const FEATURED_LIMIT: u64 = 6;

#[derive(Debug, Serialize)]
pub struct HomePayload {
    pub services: Vec<models::service::Model>,
    pub reviews: Vec<models::review::Model>,
}

/// Home page data: featured services and approved reviews, fetched
/// concurrently. If the client disconnects, axum drops the future and both
/// fetches are abandoned with it.
pub async fn overview(State(state): State<ServerState>) -> Result<Json<HomePayload>, ApiFailure> {
    let (services, reviews) = tokio::try_join!(
        catalog::featured_services(&state.db, FEATURED_LIMIT),
        reviews::featured(&state.db, FEATURED_LIMIT),
    )?;
    Ok(Json(HomePayload { services, reviews }))
}
