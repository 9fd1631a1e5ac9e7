mod common;

use axum::http::StatusCode;
use axum::{Router, routing::get};
use axum_test::TestServer;
use urlsnip::api::handlers::session_urls_handler;
use urlsnip::domain::repositories::UrlRepository;

fn test_server() -> (TestServer, std::sync::Arc<common::InMemoryUrlRepository>) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/session-urls", get(session_urls_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_session_listing_is_scoped_to_the_token() {
    let (server, repository) = test_server();

    repository
        .insert(common::make_record("one111", "tok1", None))
        .await
        .unwrap();
    repository
        .insert(common::make_record("two222", "tok1", None))
        .await
        .unwrap();
    repository
        .insert(common::make_record("other1", "tok2", None))
        .await
        .unwrap();

    let response = server
        .get("/api/session-urls")
        .add_query_param("session_token", "tok1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let records = json["result"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    for record in records {
        assert_eq!(record["session_token"], "tok1");
        assert!(record.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_session_listing_for_unknown_token_is_empty() {
    let (server, _repository) = test_server();

    let response = server
        .get("/api/session-urls")
        .add_query_param("session_token", "nobody")
        .await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["result"]
            .as_array()
            .unwrap()
            .len(),
        0
    );
}

#[tokio::test]
async fn test_session_listing_without_token_is_rejected() {
    let (server, _repository) = test_server();

    let response = server.get("/api/session-urls").await;
    response.assert_status(StatusCode::FORBIDDEN);
}
