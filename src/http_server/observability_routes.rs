//! Observability HTTP Routes
//!
//! Health check and metrics endpoints. Both are read-only and never touch
//! the catalog.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::observability::MetricsRegistry;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Create observability routes over the shared metrics registry
pub fn observability_routes(metrics: Arc<MetricsRegistry>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(metrics)
}

/// GET /health
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /metrics - the live counters as JSON
async fn metrics_handler(State(metrics): State<Arc<MetricsRegistry>>) -> Json<Value> {
    let rendered: Value = serde_json::from_str(&metrics.to_json())
        .unwrap_or_else(|_| serde_json::json!({"error": "metrics rendering failed"}));

    Json(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok",
            version: "0.1.0",
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "ok");
        assert_eq!(value["version"], "0.1.0");
    }

    #[test]
    fn test_registry_json_reflects_counts() {
        let metrics = MetricsRegistry::new();
        metrics.increment_books_created();

        let value: Value = serde_json::from_str(&metrics.to_json()).unwrap();
        assert_eq!(value["books_created"], 1);
    }
}
