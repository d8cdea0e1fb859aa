//! HTTP API tests.
//!
//! The router runs over the in-memory store, so no database is needed.

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use club_service_lib::routes::create_router;
use club_service_lib::state::AppState;

fn app() -> Router {
    create_router(AppState::in_memory())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

fn member_body(name: &str) -> Value {
    json!({
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase()),
        "birth_date": "1993-03-21"
    })
}

fn club_body(description: &str) -> Value {
    json!({
        "name": "Lakeside Rowing",
        "founding_date": "1911-06-05",
        "description": description,
        "image": "https://example.com/rowing.png"
    })
}

async fn create_member(app: &Router, name: &str) -> String {
    let (status, body) = send(app, Method::POST, "/members", Some(member_body(name))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn create_club(app: &Router) -> String {
    let (status, body) = send(app, Method::POST, "/clubs", Some(club_body("Early mornings"))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_health_in_memory() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["storage"]["backend"], "memory");
}

#[tokio::test]
async fn test_member_crud() {
    let app = app();
    let id = create_member(&app, "Nora").await;

    let (status, body) = send(&app, Method::GET, &format!("/members/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "nora@example.com");
    assert_eq!(body["birth_date"], "1993-03-21");

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/members/{}", id),
        Some(member_body("Nadia")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nadia");

    let (status, body) = send(&app, Method::GET, "/members", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &format!("/members/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &format!("/members/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_member_validation_errors() {
    let app = app();

    let mut body = member_body("Nora");
    body["email"] = json!("nora-at-example");
    let (status, json) = send(&app, Method::POST, "/members", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");

    let mut body = member_body("Nora");
    body["birth_date"] = json!("21/03/1993");
    let (status, json) = send(&app, Method::POST, "/members", Some(body)).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(json["error"]["code"], "PRECONDITION_FAILED");

    let (status, _) = send(&app, Method::POST, "/members", Some(json!({"name": "Nora"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_member_update_is_not_found() {
    let app = app();
    let (status, _) = send(
        &app,
        Method::PUT,
        &format!("/members/{}", Uuid::new_v4()),
        Some(member_body("Nora")),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_club_description_limit() {
    let app = app();

    let (status, _) = send(&app, Method::POST, "/clubs", Some(club_body(&"x".repeat(100)))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/clubs", Some(club_body(&"x".repeat(101)))).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(
        body["error"]["message"],
        "The description cannot be longer than 100 characters"
    );
}

#[tokio::test]
async fn test_club_image_must_be_url() {
    let app = app();
    let mut body = club_body("Early mornings");
    body["image"] = json!("rowing.png");

    let (status, _) = send(&app, Method::POST, "/clubs", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_membership_flow() {
    let app = app();
    let member_id = create_member(&app, "Nora").await;
    let club_id = create_club(&app).await;
    let member_uri = format!("/clubs/{}/members/{}", club_id, member_id);

    let (status, body) = send(&app, Method::POST, &member_uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["members"][0]["id"], member_id.as_str());

    let (status, body) = send(&app, Method::GET, &member_uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Nora");

    let (status, body) = send(&app, Method::GET, &format!("/clubs/{}/members", club_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, Method::GET, &format!("/clubs/{}", club_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["members"].as_array().unwrap().len(), 1);

    let (status, _) = send(&app, Method::DELETE, &member_uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&app, Method::GET, &member_uri, None).await;
    assert_eq!(status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(
        body["error"]["message"],
        "The member with the given id is not associated with the club"
    );
}

#[tokio::test]
async fn test_membership_member_checked_before_club() {
    let app = app();
    let uri = format!("/clubs/{}/members/{}", Uuid::new_v4(), Uuid::new_v4());

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "The member with the given id was not found");

    let (status, body) = send(&app, Method::GET, "/clubs/not-a-uuid/members/also-not", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "The member with the given id was not found");
}

#[tokio::test]
async fn test_replace_club_members() {
    let app = app();
    let club_id = create_club(&app).await;
    let a = create_member(&app, "Ana").await;
    let b = create_member(&app, "Bruno").await;
    let uri = format!("/clubs/{}/members", club_id);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!([{ "id": a }, { "id": b, "name": "ignored" }])),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["members"].as_array().unwrap().len(), 2);

    let (status, _) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!([{ "id": a }, { "id": Uuid::new_v4().to_string() }])),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!([]))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["members"].as_array().unwrap().is_empty());

    let (status, _) = send(&app, Method::PUT, &uri, Some(json!({"id": a}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_replace_members_unknown_club() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/clubs/{}/members", Uuid::new_v4()),
        Some(json!([])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], "The club with the given id was not found");
}
