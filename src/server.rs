//! HTTP server initialization and runtime setup.
//!
//! Builds the store, service and router, then runs the Axum server until a
//! shutdown signal arrives.

use crate::application::services::ProductService;
use crate::config::Config;
use crate::infrastructure::persistence::{InMemoryProductRepository, seed_products};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use chrono::Utc;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the shared application state from configuration.
///
/// The store starts with the sample catalogue when `seed_store` is set,
/// empty otherwise.
pub async fn build_state(config: &Config) -> AppState {
    let repository = if config.seed_store {
        InMemoryProductRepository::with_products(seed_products(Utc::now()))
    } else {
        InMemoryProductRepository::new()
    };
    let repository = Arc::new(repository);

    tracing::info!(products = repository.len().await, "Product store ready");

    let product_service = Arc::new(ProductService::new(repository));

    AppState::new(product_service, config.api_token.clone())
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await;

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
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

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use axum::body::Body;
    use axum::http::StatusCode;
    use tower::ServiceExt as _;

    fn test_config(seed_store: bool) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            api_token: Some("secret".to_string()),
            seed_store,
        }
    }

    #[tokio::test]
    async fn test_build_state_seeded() {
        let state = build_state(&test_config(true)).await;

        let products = state.product_service.get_all().await.unwrap();

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(state.api_token.as_deref(), Some("secret"));
    }

    #[tokio::test]
    async fn test_build_state_unseeded() {
        let state = build_state(&test_config(false)).await;

        assert_eq!(
            state.product_service.get_all().await.unwrap_err(),
            RepositoryError::EmptyCollection
        );
    }

    #[tokio::test]
    async fn test_unseeded_list_is_server_error() {
        let app = app_router(build_state(&test_config(false)).await);

        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/v1/product/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
