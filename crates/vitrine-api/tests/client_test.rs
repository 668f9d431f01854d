#![allow(clippy::unwrap_used)]
// Integration tests for `SiteClient` using wiremock.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vitrine_api::{Error, SiteClient, SiteClientBuilder};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SiteClient) {
    let server = MockServer::start().await;
    let client = SiteClient::new(&server.uri()).unwrap();
    (server, client)
}

fn sample_event(id: &str, published: bool) -> serde_json::Value {
    json!({
        "id": id,
        "title": "Research Meetup",
        "description": "Monthly gathering of the working groups",
        "startDate": "2026-09-12T17:00:00.000Z",
        "location": "Tunis",
        "featured": false,
        "status": "UPCOMING",
        "published": published
    })
}

// ── List endpoint ───────────────────────────────────────────────────

#[tokio::test]
async fn list_events_returns_records() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            sample_event("evt_1", true),
            sample_event("evt_2", true),
        ])))
        .mount(&server)
        .await;

    let events = client.list_events(false).await.unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].id, "evt_1");
    assert_eq!(events[0].status, "UPCOMING");
}

#[tokio::test]
async fn list_events_empty_array_is_ok_not_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let events = client.list_events(false).await.unwrap();
    assert!(events.is_empty());
}

#[tokio::test]
async fn include_unpublished_sends_query_and_bearer_token() {
    let server = MockServer::start().await;
    let client = SiteClientBuilder::new(server.uri())
        .token(Some("s3cret-admin-token".to_string().into()))
        .build()
        .unwrap();

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .and(query_param("includeUnpublished", "true"))
        .and(header("authorization", "Bearer s3cret-admin-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([sample_event("evt_draft", false)])),
        )
        .mount(&server)
        .await;

    let events = client.list_events(true).await.unwrap();
    assert_eq!(events.len(), 1);
    assert!(!events[0].published);
}

#[tokio::test]
async fn server_error_surfaces_backend_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Failed to fetch events"})),
        )
        .mount(&server)
        .await;

    let err = client.list_events(false).await.unwrap_err();
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Failed to fetch events");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_unauthorized_variant() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Admin only"})))
        .mount(&server)
        .await;

    let err = client.list_events(true).await.unwrap_err();
    assert!(matches!(err, Error::Unauthorized { .. }), "got: {err:?}");
}

// ── Single-event endpoint ───────────────────────────────────────────

#[tokio::test]
async fn get_event_by_id() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events/evt_9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_event("evt_9", true)))
        .mount(&server)
        .await;

    let event = client.get_event("evt_9").await.unwrap();
    assert_eq!(event.id, "evt_9");
}

#[tokio::test]
async fn get_event_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let err = client.get_event("missing").await.unwrap_err();
    match err {
        Error::NotFound { id } => assert_eq!(id, "missing"),
        other => panic!("expected NotFound, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/events"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.list_events(false).await.unwrap_err();
    assert!(matches!(err, Error::Decode(_)), "got: {err:?}");
}
