//! Article resource client against the mock backend.

mod common;

use common::{backend_config, client_for, MockBackend, MockResponse};
use serde_json::json;
use shop_admin::domain::Artikel;
use shop_admin::rest::{ArtikelResource, RestError, ShopClient};

fn resource(mock: &MockBackend) -> ArtikelResource {
    ArtikelResource::new(client_for(mock))
}

#[tokio::test]
async fn get_fetches_single_article() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"id":301,"bezeichnung":"Testartikel","preis":9.99,"version":1}"#,
    ))
    .await;

    let artikel = resource(&mock).get(301).await.unwrap();

    assert_eq!(artikel.id, Some(301));
    assert_eq!(artikel.bezeichnung, "Testartikel");
    assert_eq!(artikel.preis, 9.99);
    assert_eq!(artikel.version, Some(1));

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/shop/rest/artikel/301");
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn get_unknown_id_is_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "Kein Artikel mit ID 999"))
        .await;

    let err = resource(&mock).get(999).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.user_message().starts_with("Not found"));
    assert!(err.user_message().contains("Kein Artikel mit ID 999"));
}

#[tokio::test]
async fn list_sends_description_filter() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[{"id":1,"bezeichnung":"Tisch klein","preis":50.0,"version":0},
            {"id":2,"bezeichnung":"Tisch groß","preis":80.0,"version":3}]"#,
    ))
    .await;

    let artikel = resource(&mock).list(Some("Tisch")).await.unwrap();

    assert_eq!(artikel.len(), 2);
    assert_eq!(artikel[1].version, Some(3));
    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/shop/rest/artikel");
    assert_eq!(requests[0].query.as_deref(), Some("bezeichnung=Tisch"));
}

#[tokio::test]
async fn list_without_filter_has_no_query() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("[]")).await;

    let artikel = resource(&mock).list(None).await.unwrap();

    assert!(artikel.is_empty());
    assert_eq!(mock.captured_requests().await[0].query, None);
}

#[tokio::test]
async fn list_with_no_content_is_empty() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::empty(204)).await;

    assert!(resource(&mock).list(Some("Nichts")).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_posts_draft_without_id() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{"id":42,"bezeichnung":"Stuhl","preis":19.9,"version":0}"#,
    ))
    .await;

    let created = resource(&mock)
        .create(&Artikel::draft("Stuhl", 19.9))
        .await
        .unwrap();

    assert_eq!(created.id, Some(42));
    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/shop/rest/artikel");
    assert_eq!(
        requests[0].header("content-type"),
        Some("application/json")
    );
    let body = requests[0].json();
    assert!(body.get("id").is_none());
    assert_eq!(body["bezeichnung"], "Stuhl");
    assert_eq!(body["preis"], 19.9);
}

#[tokio::test]
async fn create_falls_back_to_location_header() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::created(
        "https://localhost:8443/shop/rest/artikel/77",
    ))
    .await;

    let created = resource(&mock)
        .create(&Artikel::draft("Lampe", 35.0))
        .await
        .unwrap();

    assert_eq!(created.id, Some(77));
    assert_eq!(created.bezeichnung, "Lampe");
}

#[tokio::test]
async fn update_puts_full_entity() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::empty(204)).await;

    let artikel: Artikel = serde_json::from_value(json!({
        "id": 301,
        "bezeichnung": "Neuer Name",
        "preis": 9.99,
        "version": 1,
        "erzeugt": "2024-01-01T00:00:00Z"
    }))
    .unwrap();
    let updated = resource(&mock).update(301, &artikel).await.unwrap();

    assert_eq!(updated, artikel);
    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/shop/rest/artikel/301");
    assert_eq!(
        requests[0].json(),
        json!({
            "id": 301,
            "bezeichnung": "Neuer Name",
            "preis": 9.99,
            "version": 1,
            "erzeugt": "2024-01-01T00:00:00Z"
        })
    );
}

#[tokio::test]
async fn update_conflict_carries_backend_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(409, "Veraltete Version 1"))
        .await;

    let err = resource(&mock)
        .update(301, &Artikel::draft("x", 1.0))
        .await
        .unwrap_err();

    match &err {
        RestError::Status { status, message } => {
            assert_eq!(*status, 409);
            assert_eq!(message, "Veraltete Version 1");
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert!(err.user_message().contains("Veraltete Version 1"));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = ShopClient::new(&backend_config(&format!("http://127.0.0.1:{port}"))).unwrap();

    let err = ArtikelResource::new(client).get(1).await.unwrap_err();

    assert_eq!(err.error_type(), "transport");
    assert_eq!(err.status(), None);
    assert!(err.user_message().starts_with("Backend not reachable"));
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json("{not json")).await;

    let err = resource(&mock).get(1).await.unwrap_err();

    assert_eq!(err.error_type(), "decode");
}
