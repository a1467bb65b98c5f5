use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::Service;

/// Register the calculator routes on `router`, wiring `service` into them.
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let calculator = Router::new()
        .route("/calculator/add", get(handlers::add))
        .route("/calculator/subtract", get(handlers::subtract))
        .route("/calculator/multiply", get(handlers::multiply))
        .route("/calculator/divide", get(handlers::divide))
        .layer(Extension(service));

    router.merge(calculator)
}
