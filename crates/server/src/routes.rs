use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod admin;
pub mod blog;
pub mod contact;
pub mod home;
pub mod reviews;
pub mod services;

#[derive(Clone)]
pub struct ServerState {
    pub db: sea_orm::DatabaseConnection,
    pub site: configs::SiteConfig,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Business contact details for the frontend; sourced from `[site]` config
/// so the static pages carry no hard-coded phone numbers.
pub async fn site_info(State(state): State<ServerState>) -> Json<configs::SiteConfig> {
    Json(state.site.clone())
}

/// Build the full application router: static frontend, public JSON API and
/// the (deliberately open) admin overview.
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes; anything unmatched falls through to the static frontend
    let public = Router::new()
        .route("/health", get(health))
        .fallback_service(static_dir);

    // Public JSON API consumed by the marketing pages
    let api = Router::new()
        .route("/api/services", get(services::list))
        .route("/api/services/:slug", get(services::get_by_slug))
        .route("/api/blog", get(blog::list))
        .route("/api/blog/:slug", get(blog::get_by_slug))
        .route("/api/reviews", get(reviews::list))
        .route("/api/home", get(home::overview))
        .route("/api/site-info", get(site_info))
        .route("/api/contact", post(contact::submit));

    // Admin routes
    let admin_routes = Router::new().route("/admin/overview", get(admin::overview));

    // Compose
    public
        .merge(api)
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
