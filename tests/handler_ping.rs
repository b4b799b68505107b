mod common;

#[tokio::test]
async fn test_ping() {
    let (server, _repo) = common::make_server(common::seeded_repository());

    let response = server.get("/api/v1/ping").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "\"pong\"");
}

#[tokio::test]
async fn test_unknown_route() {
    let (server, _repo) = common::make_server(common::seeded_repository());

    server.get("/api/v2/ping").await.assert_status_not_found();
}

#[tokio::test]
async fn test_trailing_slash_normalized() {
    let (server, _repo) = common::make_server(common::seeded_repository());

    let response = server.get("/api/v1/ping/").await;

    response.assert_status_ok();
    assert_eq!(response.text(), "\"pong\"");
}

#[tokio::test]
async fn test_trailing_slash_on_product_routes() {
    let (server, _repo) = common::make_server(common::seeded_repository());

    server.get("/api/v1/product/").await.assert_status_ok();

    let response = server.get("/api/v1/product/2/").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["name"], "Pepsito");
}
