#![allow(dead_code)]

use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use chrono::{DateTime, Utc};
use product_api::application::services::ProductService;
use product_api::domain::entities::Product;
use product_api::infrastructure::persistence::{InMemoryProductRepository, seed_products};
use product_api::routes::app_router;
use product_api::state::AppState;
use std::sync::Arc;

pub const TEST_TOKEN: &str = "test-token";

pub fn test_expiration() -> DateTime<Utc> {
    "2030-01-01T00:00:00Z".parse().unwrap()
}

pub fn create_test_product(id: &str, name: &str) -> Product {
    Product::new(
        id.to_string(),
        name.to_string(),
        5,
        "000111222".to_string(),
        false,
        test_expiration(),
        2.75,
    )
}

/// Repository preloaded with the sample products "1", "2" and "3".
pub fn seeded_repository() -> Arc<InMemoryProductRepository> {
    Arc::new(InMemoryProductRepository::with_products(seed_products(
        test_expiration(),
    )))
}

pub fn create_test_state(repository: Arc<InMemoryProductRepository>) -> AppState {
    let product_service = Arc::new(ProductService::new(repository));
    AppState::new(product_service, Some(TEST_TOKEN.to_string()))
}

/// Test server over the same router `server::run` serves, plus a handle on its store.
pub fn make_server(
    repository: Arc<InMemoryProductRepository>,
) -> (TestServer, Arc<InMemoryProductRepository>) {
    let server = make_server_with_state(create_test_state(repository.clone()));
    (server, repository)
}

pub fn make_server_with_state(state: AppState) -> TestServer {
    let app = ServiceExt::<Request>::into_make_service(app_router(state));
    TestServer::new(app).unwrap()
}
