//! API gateway — owns the HTTP server, assembles the module routers into a
//! single axum application, and serves the aggregated OpenAPI document.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::{middleware::from_fn, routing::get, Router};
use tokio_util::sync::CancellationToken;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
};

mod config;
pub mod openapi;
pub mod request_id;
mod web;

pub use config::ApiGatewayConfig;

/// Main API gateway — collects module routes, applies the shared middleware
/// stack, and runs the HTTP listener until cancelled.
pub struct ApiGateway {
    config: ApiGatewayConfig,
}

impl ApiGateway {
    /// Create a new gateway with the given configuration.
    pub fn new(config: ApiGatewayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ApiGatewayConfig {
        &self.config
    }

    /// Build the HTTP router from the module services.
    pub fn build_router(
        &self,
        users: Arc<users_directory::domain::service::Service>,
        calculator_svc: Arc<calculator::Service>,
    ) -> Router {
        let mut router = Router::new().route("/health", get(web::health_check));

        router = users_directory::api::rest::routes::register_routes(router, users);
        router = calculator::api::rest::routes::register_routes(router, calculator_svc);

        if self.config.enable_docs {
            router = router
                .route("/openapi.json", get(openapi::serve_openapi))
                .route("/docs", get(web::serve_docs));
        }

        // Middleware order (outermost to innermost):
        // PropagateRequestId -> SetRequestId -> push_req_id_to_extensions -> Trace -> Timeout -> CORS -> BodyLimit
        let x_request_id = request_id::header();

        // 1. If client sent x-request-id, propagate it; otherwise we will set it
        router = router.layer(PropagateRequestIdLayer::new(x_request_id.clone()));

        // 2. Generate x-request-id when missing
        router = router.layer(SetRequestIdLayer::new(
            x_request_id.clone(),
            request_id::MakeReqId,
        ));

        // 3. Put request_id into extensions and span
        router = router.layer(from_fn(request_id::push_req_id_to_extensions));

        // 4. Trace with request_id/status/latency
        router = router.layer(request_id::create_trace_layer());

        // 5. Timeout layer - 30 second timeout for handlers
        router = router.layer(TimeoutLayer::new(Duration::from_secs(30)));

        // 6. CORS layer (if enabled)
        if self.config.cors_enabled {
            router = router.layer(CorsLayer::permissive());
        }

        // 7. Body limit layer - 16MB default limit
        router = router.layer(RequestBodyLimitLayer::new(16 * 1024 * 1024));

        router
    }

    /// Bind the configured address and serve `router` until `cancel` fires.
    pub async fn serve(&self, router: Router, cancel: CancellationToken) -> Result<()> {
        let addr: SocketAddr = self.config.bind_addr.parse().map_err(|e| {
            anyhow::anyhow!("Invalid bind address '{}': {}", self.config.bind_addr, e)
        })?;

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("HTTP server bound on {}", addr);

        // Graceful shutdown on cancel
        let shutdown = {
            let cancel = cancel.clone();
            async move {
                cancel.cancelled().await;
                tracing::info!("HTTP server shutting down gracefully (cancellation)");
            }
        };

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| anyhow::anyhow!(e))
    }
}
