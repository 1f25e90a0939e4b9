//! Reception API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Routes are nested under `/api/`.
//!
//! Layers (outermost first): CORS, `Cache-Control: no-store`, access log.

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;
use crate::core_state::CoreState;

/// Build the reception API router.
pub fn reception_api_router(core: Arc<CoreState>) -> Router {
    build_router(ApiContext::new(core))
}

fn build_router(ctx: ApiContext) -> Router {
    // NOTE: `/appointments/quick` is a static segment; axum 0.7 path params use `:param`.
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/doctors", get(endpoints::doctors::list))
        .route("/patients", get(endpoints::patients::list))
        .route("/patients/lookup", get(endpoints::patients::lookup))
        .route("/appointments", get(endpoints::appointments::list))
        .route(
            "/appointments/quick",
            post(endpoints::appointments::quick_add),
        )
        .route("/agenda", get(endpoints::agenda::day))
        .route("/reports", get(endpoints::reports::summary))
        .route("/seed", post(endpoints::seed::load))
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
}
