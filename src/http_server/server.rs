//! # HTTP Server
//!
//! Server assembly: the book routes and the observability routes merged
//! into one router, CORS applied, listener bound.

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event_with_fields, Event, MetricsRegistry};

use super::book_routes::{book_routes, CatalogState};
use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;

/// HTTP server for the book catalog
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Server over the default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Server over the given configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Assemble the full router: fresh catalog state, both route sets, CORS
    fn build_router(config: &HttpServerConfig) -> Router {
        let metrics = Arc::new(MetricsRegistry::new());
        let catalog_state = Arc::new(CatalogState::new(Arc::clone(&metrics)));

        Router::new()
            .merge(book_routes(catalog_state))
            .merge(observability_routes(metrics))
            .layer(cors_layer(config))
    }

    /// The `host:port` string the listener binds to
    pub fn bind_addr(&self) -> String {
        self.config.bind_addr()
    }

    /// Consume the server, returning its router
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the listener and serve until the process exits.
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr.as_str()).await?;
        let local_addr = listener.local_addr()?;

        log_event_with_fields(Event::ServerListening, &[("addr", &local_addr.to_string())]);

        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// CORS layer derived from the configured origins.
///
/// An empty origin list keeps the API open to any caller; a non-empty list
/// restricts browsers to exactly those origins. Origins that do not parse
/// as header values are skipped.
fn cors_layer(config: &HttpServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
