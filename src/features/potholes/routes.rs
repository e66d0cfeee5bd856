use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::potholes::handlers::{self, PotholeState};
use crate::features::potholes::services::{PotholeService, RouteLinkBuilder};

/// Create routes for the potholes feature
pub fn routes(
    pothole_service: Arc<PotholeService>,
    route_builder: Arc<RouteLinkBuilder>,
) -> Router {
    let state = PotholeState {
        pothole_service,
        route_builder,
    };

    Router::new()
        .route(
            "/api/potholes",
            get(handlers::list_potholes).post(handlers::create_pothole),
        )
        .route("/api/potholes/finalize", post(handlers::finalize_potholes))
        .route("/api/potholes/history", get(handlers::pothole_history))
        .route("/api/potholes/route", get(handlers::route_link))
        .route(
            "/api/potholes/{id}",
            get(handlers::get_pothole).delete(handlers::delete_pothole),
        )
        .with_state(state)
}
