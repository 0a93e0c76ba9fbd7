use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use subway_core::Database;
use subway_http::{build_router, AppState, ErrorBody};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(Database::in_memory().unwrap()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Option<String>, Vec<u8>) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .map(|value| value.to_str().unwrap().to_string());
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, location, bytes.to_vec())
}

#[tokio::test]
async fn create_station_returns_created_with_location() {
    let app = app();

    let (status, location, body) =
        send(&app, Method::POST, "/stations", Some(json!({ "name": "강남역" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    let station: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(station["name"], "강남역");
    let id = station["id"].as_i64().unwrap();
    assert_eq!(location, Some(format!("/stations/{id}")));

    let (status, _, body) = send(&app, Method::GET, &format!("/stations/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let shown: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(shown, station);
}

#[tokio::test]
async fn list_stations_returns_all_created() {
    let app = app();
    send(&app, Method::POST, "/stations", Some(json!({ "name": "강남역" }))).await;
    send(&app, Method::POST, "/stations", Some(json!({ "name": "서초역" }))).await;

    let (status, _, body) = send(&app, Method::GET, "/stations", None).await;

    assert_eq!(status, StatusCode::OK);
    let stations: Vec<Value> = serde_json::from_slice(&body).unwrap();
    let names = stations
        .iter()
        .map(|station| station["name"].as_str().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["강남역", "서초역"]);
}

#[tokio::test]
async fn delete_station_removes_it_from_list() {
    let app = app();
    let (_, _, body) =
        send(&app, Method::POST, "/stations", Some(json!({ "name": "서초역" }))).await;
    let id = serde_json::from_slice::<Value>(&body).unwrap()["id"]
        .as_i64()
        .unwrap();

    let (status, _, body) = send(&app, Method::DELETE, &format!("/stations/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (_, _, body) = send(&app, Method::GET, "/stations", None).await;
    let stations: Vec<Value> = serde_json::from_slice(&body).unwrap();
    assert!(stations.iter().all(|station| station["name"] != "서초역"));
}

#[tokio::test]
async fn missing_station_returns_error_body() {
    let app = app();

    let (status, _, body) = send(&app, Method::DELETE, "/stations/7", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let error: ErrorBody = serde_json::from_slice(&body).unwrap();
    assert_eq!(error.code, "station_not_found");
    assert_eq!(error.message, "station not found: 7");

    let (status, _, _) = send(&app, Method::GET, "/stations/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
