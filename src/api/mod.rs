//! Bubblechart REST API
//!
//! HTTP API layer, built with Axum. The front end owns the mode selector
//! and renders whatever figure JSON it gets back.
//!
//! # Endpoints
//!
//! ## Figures
//! - `GET /api/v1/figure?mode=temporal` - Animated freedom vs. happiness chart
//! - `GET /api/v1/figure?mode=delta` - Decade change chart
//! - `GET /api/v1/modes` - Selectable modes and their labels
//!
//! ## Datasets
//! - `GET /api/v1/datasets` - Summary of the loaded data
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use bubblechart::api::{serve, AppState};
//! use bubblechart::config::Config;
//! use bubblechart::data::Datasets;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let datasets = Datasets::load(&config.data.temporal_csv, &config.data.delta_csv)?;
//!
//!     let state = AppState::new(datasets, config.figure.clone());
//!     serve(state, &config.server).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/figure", get(routes::figure::get_figure))
        .route("/modes", get(routes::figure::list_modes))
        .route("/datasets", get(routes::datasets::get_summary));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Bubblechart API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Bubblechart API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::sample_datasets;
    use crate::figure::FigureOptions;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    fn create_test_app() -> Router {
        let state = AppState::new(sample_datasets(), FigureOptions::default());
        build_router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get_json(create_test_app(), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let (status, _) = get_json(create_test_app(), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get_json(create_test_app(), "/health").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["temporal_records"], 9);
        assert_eq!(body["delta_records"], 5);
    }

    #[tokio::test]
    async fn test_temporal_figure() {
        let (status, body) = get_json(create_test_app(), "/api/v1/figure?mode=temporal").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["frames"].as_array().unwrap().len(), 3);
        assert_eq!(body["data"][0]["type"], "scatter");
        for frame in body["frames"].as_array().unwrap() {
            for trace in frame["data"].as_array().unwrap() {
                assert!(trace["hovertemplate"]
                    .as_str()
                    .unwrap()
                    .contains("%{customdata[2]:.2f}"));
            }
        }
    }

    #[tokio::test]
    async fn test_default_mode_is_temporal() {
        let (_, default) = get_json(create_test_app(), "/api/v1/figure").await;
        let (_, temporal) = get_json(create_test_app(), "/api/v1/figure?mode=temporal").await;
        assert_eq!(default, temporal);
    }

    #[tokio::test]
    async fn test_delta_figure() {
        let (status, body) = get_json(create_test_app(), "/api/v1/figure?mode=delta").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["layout"]["annotations"].as_array().unwrap().len(), 2);
        assert_eq!(body["layout"]["shapes"].as_array().unwrap().len(), 2);
        assert!(body.get("frames").is_none());
    }

    #[tokio::test]
    async fn test_unknown_mode() {
        let (status, body) = get_json(create_test_app(), "/api/v1/figure?mode=unknown").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "UNRECOGNIZED_MODE");
        assert!(body["error"]["message"].as_str().unwrap().contains("unknown"));
        assert!(!body["request_id"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_modes() {
        let (status, body) = get_json(create_test_app(), "/api/v1/modes").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["default"], "temporal");
        assert_eq!(body["modes"][0]["value"], "temporal");
        assert_eq!(body["modes"][1]["value"], "delta");
        assert_eq!(body["modes"][1]["label"], "Change 2012–2022");
    }

    #[tokio::test]
    async fn test_dataset_summary() {
        let (status, body) = get_json(create_test_app(), "/api/v1/datasets").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["years"], serde_json::json!([2012, 2017, 2022]));
        assert_eq!(body["quartiles"], serde_json::json!(["Q1", "Q2", "Q3", "Q4"]));
        assert_eq!(body["regions"][0], "Western Europe");
    }
}
