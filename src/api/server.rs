use crate::api::server_config::*;
use axum::{
    error_handling::HandleErrorLayer,
    http::StatusCode,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::{limit::ConcurrencyLimitLayer, timeout::TimeoutLayer, BoxError, ServiceBuilder};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::api::csp_middleware::csp_middleware;
use crate::api::handlers;
use crate::api::nft::{self, AlchemyNftClient, NftSource};
use crate::core::config::GalleryConfig;
use crate::gallery::{Gallery, SharedGallery};

#[derive(Clone)]
pub struct GalleryServer {
    pub gallery: SharedGallery,
    pub source: Arc<dyn NftSource>,
    pub host: String,
    pub port: u16,
}

impl GalleryServer {
    /// Server backed by the Alchemy client described in `config`.
    pub fn new(config: &GalleryConfig) -> Self {
        tracing::info!(
            "Using NFT provider {} (network {})",
            config.provider.redacted_base_url(),
            config.provider.network
        );
        let source = Arc::new(AlchemyNftClient::new(&config.provider));
        Self::with_source(source, config.server.host.clone(), config.server.port)
    }

    /// Server backed by any [`NftSource`]; tests pass fixtures here.
    pub fn with_source(source: Arc<dyn NftSource>, host: String, port: u16) -> Self {
        Self { gallery: Gallery::shared(), source, host, port }
    }

    pub fn create_router(self) -> Router {
        let state = Arc::new(self);

        Router::new()
            .route("/", get(handlers::index))
            .route("/form", post(handlers::update_form))
            .route("/fetch", post(handlers::fetch))
            .route("/health", get(handlers::health_check))
            .route("/api/nfts/:wallet", get(nft::get_nfts))
            .route("/api/collections/:address", get(nft::get_collection))
            .with_state(state)
            .layer(middleware::from_fn(csp_middleware))
            .layer(
                ServiceBuilder::new()
                    // Convert middleware errors (timeout/overload) into HTTP responses
                    .layer(HandleErrorLayer::new(|err: BoxError| async move {
                        if err.is::<tower::timeout::error::Elapsed>() {
                            (StatusCode::REQUEST_TIMEOUT, "request timed out")
                        } else {
                            (StatusCode::SERVICE_UNAVAILABLE, "service overloaded")
                        }
                    }))
                    .layer(ConcurrencyLimitLayer::new(MAX_CONCURRENCY))
                    .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
                    .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
                    .layer(TraceLayer::new_for_http()),
            )
    }

    pub async fn start(self) -> Result<(), anyhow::Error> {
        let addr = format!("{}:{}", self.host, self.port);
        let app = self.create_router();
        tracing::info!("Gallery listening on http://{}", addr);
        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, app.into_make_service()).await?;
        Ok(())
    }
}
