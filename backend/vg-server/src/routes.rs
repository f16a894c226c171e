use crate::{
    AppState, assign_ticket, create_candidate, create_election, create_region, health,
    list_candidates, list_elections, list_open_elections, list_public_candidates, list_regions,
    login, me, register, sponsor_vote,
};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Citizen endpoints
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/me", get(me))
        // Ticket and vote relay
        .route("/api/voter/assign-ticket", post(assign_ticket))
        .route("/api/vote/sponsor", post(sponsor_vote))
        // Public catalogue
        .route("/api/elections", get(list_open_elections))
        .route("/api/candidates", get(list_public_candidates))
        // Admin endpoints
        .route(
            "/api/admin/elections",
            get(list_elections).post(create_election),
        )
        .route("/api/admin/regions", get(list_regions).post(create_region))
        .route(
            "/api/admin/candidates",
            get(list_candidates).post(create_candidate),
        )
        .with_state(state)
        // Browser wallets call from arbitrary origins
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
