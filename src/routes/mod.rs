// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs: Main router assembly and middleware
// - health.rs: Health check and metrics endpoints
// - clans.rs: Clan lookup and listing endpoints
// - players.rs: Player lookup endpoint
// - locations.rs: Location listing endpoint
// - pages.rs: HTML clan list and detail pages
// - middleware.rs: Request logging
//
// ============================================================================

mod clans;
mod health;
mod locations;
mod middleware;
mod pages;
mod players;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::context::AppContext;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // HTML pages
        .route("/", get(pages::home))
        // JSON envelope endpoints
        .route("/findClan", get(clans::find_clan))
        .route("/fwaClans", get(clans::fwa_clans))
        .route("/indClans", get(clans::ind_clans))
        .route("/all-locations", get(locations::all_locations))
        .route("/player", get(players::player))
        // Health and monitoring
        .route("/health", get(health::health_check))
        .route("/metrics", get(health::metrics))
        // Static assets
        .nest_service("/static", ServeDir::new("public"))
        // Clan detail page; fixed paths above take precedence over the
        // tag parameter
        .route("/:tag", get(pages::clan_page))
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                // Tracing layer (outermost - runs first)
                .layer(TraceLayer::new_for_http())
                // Request logging
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .into_inner(),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_context)
}
