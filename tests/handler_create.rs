mod common;

use axum::http::StatusCode;
use axum::{Router, routing::post};
use axum_test::TestServer;
use chrono::{DateTime, Duration, Utc};
use urlsnip::api::handlers::create_short_url_handler;
use urlsnip::domain::repositories::UrlRepository;
use urlsnip::utils::code_generator::ALPHABET;

fn test_server() -> (TestServer, std::sync::Arc<common::InMemoryUrlRepository>) {
    let (state, repository) = common::create_test_state();
    let app = Router::new()
        .route("/api/create-short-url", post(create_short_url_handler))
        .with_state(state);

    (TestServer::new(app).unwrap(), repository)
}

#[tokio::test]
async fn test_create_returns_full_record() {
    let (server, repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "https://example.com/page")
        .add_query_param("session_token", "tok1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let result = &json["result"];

    assert_eq!(result["destination"], "https://example.com/page");
    assert_eq!(result["session_token"], "tok1");
    assert!(result["self_destruct"].is_null());

    let id = result["id"].as_str().unwrap();
    assert_eq!(id.len(), 6);
    assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    assert_eq!(
        result["url"],
        format!("{}/{}", common::BASE_URL, id)
    );

    assert!(repository.contains(id));
}

#[tokio::test]
async fn test_create_never_exposes_password_hash() {
    let (server, repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "https://example.com")
        .add_query_param("session_token", "tok1")
        .add_query_param("password", "hunter2")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert!(json["result"].get("password_hash").is_none());

    let id = json["result"]["id"].as_str().unwrap().to_string();
    let stored = repository.find_by_id(&id).await.unwrap().unwrap();
    assert!(stored.is_protected());
    assert_ne!(stored.password_hash.unwrap(), "hunter2");
}

#[tokio::test]
async fn test_create_with_self_destruct_schedules_expiry() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "https://example.com")
        .add_query_param("session_token", "tok1")
        .add_query_param("self_destruct", "3600")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let created: DateTime<Utc> = json["result"]["date_created"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let expires: DateTime<Utc> = json["result"]["self_destruct"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();

    assert_eq!(expires, created + Duration::seconds(3600));
}

#[tokio::test]
async fn test_create_with_negative_self_destruct_never_expires() {
    let (server, _repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "https://example.com")
        .add_query_param("session_token", "tok1")
        .add_query_param("self_destruct", "-1")
        .await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["result"]["self_destruct"].is_null());
}

#[tokio::test]
async fn test_create_without_url_is_rejected() {
    let (server, repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("session_token", "tok1")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["error"]["message"],
        "A URL was not provided or the input was incorrect"
    );
    assert_eq!(json["error"]["errorCode"], 403);
    assert_eq!(repository.record_count(), 0);
}

#[tokio::test]
async fn test_create_without_session_token_is_rejected() {
    let (server, repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "https://example.com")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(repository.record_count(), 0);
}

#[tokio::test]
async fn test_create_rejects_malformed_destination() {
    let (server, repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "not a url at all")
        .add_query_param("session_token", "tok1")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["errorCode"], 403);
    assert!(json["error"]["message"].is_string());
    assert_eq!(repository.record_count(), 0);
}

#[tokio::test]
async fn test_create_rejects_self_referential_destination() {
    let (server, repository) = test_server();

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", format!("{}/abc", common::BASE_URL))
        .add_query_param("session_token", "tok1")
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    assert_eq!(repository.record_count(), 0);
}

#[tokio::test]
async fn test_create_avoids_seeded_codes() {
    let (server, repository) = test_server();

    // Fill the whole length-2 space minus nothing relevant: seed a handful of
    // known codes, then confirm a fresh create never lands on one of them.
    for id in ["aaaaaa", "bbbbbb", "cccccc"] {
        repository
            .insert(common::make_record(id, "seeder", None))
            .await
            .unwrap();
    }

    let response = server
        .post("/api/create-short-url")
        .add_query_param("url", "https://example.com")
        .add_query_param("session_token", "tok1")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let id = json["result"]["id"].as_str().unwrap();
    assert!(!["aaaaaa", "bbbbbb", "cccccc"].contains(&id));
    assert_eq!(repository.record_count(), 4);
}
