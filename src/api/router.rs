//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layers (outermost → innermost): CORS → access log → handler.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::store::RecordStore;

/// Build the API router over `store`.
pub fn api_router(store: Arc<dyn RecordStore>) -> Router {
    build_router(ApiContext::new(store))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/history",
            get(endpoints::history::list).post(endpoints::history::create),
        )
        .route(
            "/prescriptions",
            get(endpoints::prescriptions::list).post(endpoints::prescriptions::create),
        )
        .route(
            "/prescriptions/:id/status",
            post(endpoints::prescriptions::set_status),
        )
        .route(
            "/prescriptions/:id/dispense",
            post(endpoints::prescriptions::dispense),
        )
        .route("/dashboard/:role", get(endpoints::dashboard::view))
        .route("/login", post(endpoints::auth::login))
        .route("/signup", post(endpoints::auth::signup))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(CorsLayer::permissive())
}
