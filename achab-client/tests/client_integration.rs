// achab-client/tests/client_integration.rs
// Integration tests against an in-process mock of the reservation backend.
//
// The mock stores schemaless JSON documents, like the real backend's
// document store, so legacy records without a status can be seeded.

use achab_client::{ClientConfig, ClientError, HttpClient};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    routing::{delete, get, patch},
};
use serde_json::{Value, json};
use shared::ReservationStatus;
use std::sync::{Arc, Mutex};

const ADMIN_KEY: &str = "test-admin-key";

#[derive(Clone, Default)]
struct MockState {
    docs: Arc<Mutex<Vec<Value>>>,
}

fn authorized(headers: &HeaderMap) -> bool {
    headers.get("x-admin-key").and_then(|v| v.to_str().ok()) == Some(ADMIN_KEY)
}

async fn list(
    State(state): State<MockState>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(Json(Value::Array(state.docs.lock().unwrap().clone())))
}

async fn patch_status(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut docs = state.docs.lock().unwrap();
    let doc = docs
        .iter_mut()
        .find(|d| d["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    doc["status"] = payload["status"].clone();
    Ok(Json(doc.clone()))
}

async fn patch_persons(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut docs = state.docs.lock().unwrap();
    let doc = docs
        .iter_mut()
        .find(|d| d["id"] == json!(id))
        .ok_or(StatusCode::NOT_FOUND)?;
    doc["persons"] = payload["persons"].clone();
    Ok(Json(doc.clone()))
}

async fn remove(
    State(state): State<MockState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, StatusCode> {
    if !authorized(&headers) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let mut docs = state.docs.lock().unwrap();
    let before = docs.len();
    docs.retain(|d| d["id"] != json!(id));
    if docs.len() == before {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(json!({ "success": true })))
}

async fn spawn_mock(docs: Vec<Value>) -> String {
    let state = MockState {
        docs: Arc::new(Mutex::new(docs)),
    };
    let app = Router::new()
        .route("/api/reservations", get(list))
        .route("/api/reservations/{id}/status", patch(patch_status))
        .route("/api/reservations/{id}/persons", patch(patch_persons))
        .route("/api/reservations/{id}", delete(remove))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn doc(name: &str, status: Option<&str>) -> Value {
    let mut doc = json!({
        "id": uuid::Uuid::new_v4().to_string(),
        "name": name,
        "phone": "0612345678",
        "date": "2026-09-01",
        "time": "20:00",
        "persons": 2,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });
    if let Some(status) = status {
        doc["status"] = json!(status);
    }
    doc
}

fn client_for(base_url: &str) -> HttpClient {
    ClientConfig::new(base_url).with_timeout(5).build_http_client()
}

#[tokio::test]
async fn test_list_reservations() {
    let base = spawn_mock(vec![doc("Ali Ben", Some("confirme")), doc("Sara", None)]).await;
    let client = client_for(&base);

    let reservations = client.list_reservations(ADMIN_KEY).await.unwrap();
    assert_eq!(reservations.len(), 2);
    assert_eq!(reservations[0].status, ReservationStatus::Confirmed);
    // Legacy document without a status normalizes to pending on ingestion
    assert_eq!(reservations[1].status, ReservationStatus::Pending);
}

#[tokio::test]
async fn test_wrong_key_is_unauthorized_on_every_operation() {
    let base = spawn_mock(vec![doc("Ali Ben", Some("en_attente"))]).await;
    let client = client_for(&base);

    let err = client.list_reservations("wrong").await.unwrap_err();
    assert!(err.is_unauthorized());

    let err = client
        .update_status("wrong", "some-id", ReservationStatus::Confirmed)
        .await
        .unwrap_err();
    assert!(err.is_unauthorized());

    let err = client.update_persons("wrong", "some-id", 3).await.unwrap_err();
    assert!(err.is_unauthorized());

    let err = client.delete_reservation("wrong", "some-id").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn test_update_status_round_trip() {
    let base = spawn_mock(vec![doc("Ali Ben", Some("en_attente"))]).await;
    let client = client_for(&base);

    let id = client.list_reservations(ADMIN_KEY).await.unwrap()[0].id.clone();
    let updated = client
        .update_status(ADMIN_KEY, &id, ReservationStatus::Arrived)
        .await
        .unwrap();
    assert_eq!(updated.id, id);
    assert_eq!(updated.status, ReservationStatus::Arrived);
}

#[tokio::test]
async fn test_update_persons_round_trip() {
    let base = spawn_mock(vec![doc("Ali Ben", Some("confirme"))]).await;
    let client = client_for(&base);

    let id = client.list_reservations(ADMIN_KEY).await.unwrap()[0].id.clone();
    let updated = client.update_persons(ADMIN_KEY, &id, 6).await.unwrap();
    assert_eq!(updated.persons, 6);
    assert_eq!(updated.status, ReservationStatus::Confirmed);
}

#[tokio::test]
async fn test_delete_reservation() {
    let base = spawn_mock(vec![doc("Ali Ben", Some("arrive"))]).await;
    let client = client_for(&base);

    let id = client.list_reservations(ADMIN_KEY).await.unwrap()[0].id.clone();
    client.delete_reservation(ADMIN_KEY, &id).await.unwrap();

    let remaining = client.list_reservations(ADMIN_KEY).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_missing_record_is_not_found() {
    let base = spawn_mock(vec![]).await;
    let client = client_for(&base);

    let err = client
        .update_status(ADMIN_KEY, "no-such-id", ReservationStatus::Arrived)
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::NotFound(_)));
    assert!(!err.is_unauthorized());
}

#[tokio::test]
async fn test_unreachable_backend_is_generic_failure() {
    // Nothing listens here; the request must fail without being classified
    // as an invalid-credential signal.
    let client = client_for("http://127.0.0.1:9");

    let err = client.list_reservations(ADMIN_KEY).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(!err.is_unauthorized());
}
