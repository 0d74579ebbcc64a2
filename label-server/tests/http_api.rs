//! HTTP API tests, driven in-process against an in-memory database

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use label_server::db::DbService;
use label_server::{Config, ServerState, build_router};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn test_app() -> Router {
    let db = DbService::in_memory().await.unwrap();
    let mut config = Config::with_overrides(":memory:", 0);
    config.environment = "development".into();
    config.max_label_quantity = 20;
    build_router(ServerState::new(config, db.pool))
}

async fn send_raw(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, text) = send_raw(app, method, uri, body).await;
    let value = serde_json::from_str(&text).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn template_crud_round() {
    let app = test_app().await;

    let (status, created) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "bin", "name": "Scarves", "data": { "labelText": "Scarves", "quantity": 2 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["type"], "bin");
    assert_eq!(created["data"]["labelText"], "Scarves");
    let id = created["id"].as_i64().unwrap();

    send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "notice", "name": "Closed", "data": { "noticeText": "Closed" } })),
    )
    .await;

    let (status, all) = send(&app, "GET", "/api/labels/templates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, bins) = send(&app, "GET", "/api/labels/templates?type=bin", None).await;
    assert_eq!(bins.as_array().unwrap().len(), 1);
    assert_eq!(bins[0]["name"], "Scarves");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/labels/templates/{id}"),
        Some(json!({ "name": "Warm scarves", "data": { "labelText": "Warm scarves" } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Warm scarves");
    assert_eq!(updated["type"], "bin");

    let (status, fetched) = send(&app, "GET", &format!("/api/labels/templates/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["labelText"], "Warm scarves");

    let (status, deleted) = send(&app, "DELETE", &format!("/api/labels/templates/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Template deleted successfully");

    let (status, missing) = send(&app, "GET", &format!("/api/labels/templates/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["code"], 6101);
    assert_eq!(missing["message"], "Template not found");
}

#[tokio::test]
async fn template_validation_errors() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "bin", "data": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 7);
    assert_eq!(body["details"]["field"], "name");

    let (status, body) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "sticker", "name": "x", "data": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6001);

    let (status, _) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "bin", "name": "n".repeat(201), "data": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    for falsy in [json!(""), json!(0), json!(false)] {
        let (status, body) = send(
            &app,
            "POST",
            "/api/labels/templates",
            Some(json!({ "type": "bin", "name": "x", "data": falsy })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], 7);
        assert_eq!(body["details"]["field"], "data");
    }

    let (status, body) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "bin", "name": "x", "data": "Scarves" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);

    let (status, body) = send(&app, "GET", "/api/labels/templates?type=sticker", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(
        &app,
        "PUT",
        "/api/labels/templates/42",
        Some(json!({ "name": "x" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "data");

    let (status, _) = send(
        &app,
        "PUT",
        "/api/labels/templates/42",
        Some(json!({ "name": "x", "data": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/labels/templates/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn queue_compose_places_breaks() {
    let app = test_app().await;

    let (status, first) = send(
        &app,
        "POST",
        "/api/print-queue",
        Some(json!({ "type": "shelf", "data": { "size": "M", "category": "Jeans", "quantity": 2 } })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(first["id"], 1);

    let (_, second) = send(
        &app,
        "POST",
        "/api/print-queue",
        Some(json!({ "type": "bin", "data": { "labelText": "Scarves", "quantity": 3 } })),
    )
    .await;
    assert_eq!(second["id"], 2);

    let (status, composed) = send(&app, "GET", "/api/print-queue/compose", None).await;
    assert_eq!(status, StatusCode::OK);

    let fragments = composed["fragments"].as_array().unwrap();
    let types: Vec<_> = fragments.iter().map(|f| f["type"].as_str().unwrap()).collect();
    assert_eq!(types, ["shelf", "shelf", "bin", "bin", "bin"]);
    let breaks: Vec<_> = fragments
        .iter()
        .map(|f| f["forcedBreakAfter"].as_bool().unwrap())
        .collect();
    assert_eq!(breaks, [false, false, false, true, false]);
    assert_eq!(composed["summary"]["totalLabels"], 5);

    let (_, listing) = send(&app, "GET", "/api/print-queue", None).await;
    assert_eq!(listing["summaryText"], "2 label type(s) in queue (5 total labels)");
    assert_eq!(listing["entries"][0]["displayName"], "Shelf");
    assert_eq!(listing["entries"][0]["preview"], "Size: M - Jeans");
    assert_eq!(listing["entries"][1]["displayName"], "Generic Bin");

    let (status, html) = send_raw(&app, "GET", "/api/print-queue/print", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(html.matches("page-break-after: always").count(), 1);
    assert!(html.contains("@page { size: 8.5in 11in; margin: 0.25in; }"));
}

#[tokio::test]
async fn queue_mutations_are_tolerant() {
    let app = test_app().await;

    let add_bin = json!({ "type": "bin", "data": { "labelText": "Hats" } });
    send(&app, "POST", "/api/print-queue", Some(add_bin.clone())).await;
    send(&app, "POST", "/api/print-queue", Some(add_bin.clone())).await;

    let (status, removed) = send(&app, "DELETE", "/api/print-queue/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(removed, json!(true));

    let (_, removed_again) = send(&app, "DELETE", "/api/print-queue/1", None).await;
    assert_eq!(removed_again, json!(false));

    let (_, patched) = send(
        &app,
        "PATCH",
        "/api/print-queue/2",
        Some(json!({ "labelText": "Gloves", "quantity": 4 })),
    )
    .await;
    assert_eq!(patched, json!(true));

    let (_, patched_missing) = send(
        &app,
        "PATCH",
        "/api/print-queue/99",
        Some(json!({ "labelText": "Gloves" })),
    )
    .await;
    assert_eq!(patched_missing, json!(false));

    let (_, listing) = send(&app, "GET", "/api/print-queue", None).await;
    assert_eq!(listing["entries"][0]["preview"], "Gloves");
    assert_eq!(listing["summary"]["totalLabels"], 4);

    let (status, _) = send(&app, "DELETE", "/api/print-queue", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, listing) = send(&app, "GET", "/api/print-queue", None).await;
    assert!(listing["entries"].as_array().unwrap().is_empty());

    let (_, next) = send(&app, "POST", "/api/print-queue", Some(add_bin)).await;
    assert_eq!(next["id"], 3);
}

#[tokio::test]
async fn queue_rejects_bad_input() {
    let app = test_app().await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/print-queue",
        Some(json!({ "type": "bin", "data": { "labelText": "Hats", "quantity": 21 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6002);

    let (status, _) = send(
        &app,
        "POST",
        "/api/print-queue",
        Some(json!({ "type": "bin", "data": { "labelText": "Hats", "quantity": 0 } })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(
        &app,
        "POST",
        "/api/print-queue",
        Some(json!({ "type": "sticker", "data": {} })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6001);

    let (status, body) = send(&app, "POST", "/api/print-queue", Some(json!({ "type": "bin" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "data");

    let (_, listing) = send(&app, "GET", "/api/print-queue", None).await;
    assert!(listing["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn queue_from_template() {
    let app = test_app().await;

    let (_, saved) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "shoe", "name": "Boots", "data": { "season": "Fall/Winter", "sizeRange": "9 & 9.5", "category": "Tall Boots", "quantity": 2 } })),
    )
    .await;
    let id = saved["id"].as_i64().unwrap();

    let (status, queued) = send(&app, "POST", &format!("/api/print-queue/from-template/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(queued["id"], 1);

    let (_, listing) = send(&app, "GET", "/api/print-queue", None).await;
    assert_eq!(listing["entries"][0]["preview"], "Fall/Winter | 9 & 9.5 | Tall Boots");
    assert_eq!(listing["entries"][0]["displayName"], "Shoe Bin");

    let (status, _) = send(&app, "POST", "/api/print-queue/from-template/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, broken) = send(
        &app,
        "POST",
        "/api/labels/templates",
        Some(json!({ "type": "bin", "name": "Broken", "data": { "labelText": 5 } })),
    )
    .await;
    let broken_id = broken["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/print-queue/from-template/{broken_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6102);
}
