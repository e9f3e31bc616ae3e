use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Days, Utc};
use serde_json::{json, Value};
use tempfile::tempdir;
use tower::ServiceExt;

use pawkeeper_server::config::Config;
use pawkeeper_server::{app_router, build_state};

async fn build_test_router() -> (tempfile::TempDir, axum::Router) {
    let tmp = tempdir().unwrap();
    let config = Config {
        db_path: tmp.path().join("test.db").to_string_lossy().to_string(),
        listen_addr: "127.0.0.1:0".to_string(),
        jwt_secret: "test-signing-secret".to_string(),
        token_ttl_hours: 1,
        email: None,
    };
    let state = build_state(&config).await.unwrap();
    (tmp, app_router(state))
}

async fn request(
    app: &axum::Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        req = req.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
        Some(body) => req
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => req.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn register(app: &axum::Router, email: &str) -> String {
    let (status, body) = request(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Casey",
            "email": email,
            "password": "hunter22",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["accessToken"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn register_login_and_profile() {
    let (_tmp, app) = build_test_router().await;

    let token = register(&app, "casey@example.com").await;

    // Duplicate registration conflicts
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "name": "Casey",
            "email": "casey@example.com",
            "password": "hunter22",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Wrong password rejected
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "casey@example.com", "password": "nope" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Correct login succeeds
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "casey@example.com", "password": "hunter22" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["accessToken"].is_string());
    assert!(body["user"]["passwordHash"].is_null());

    // Profile round trip
    let (status, body) = request(&app, Method::GET, "/api/auth/profile", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "casey@example.com");
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let (_tmp, app) = build_test_router().await;

    let (status, _) = request(&app, Method::GET, "/api/dogs", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = request(&app, Method::GET, "/api/dogs", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Status probe stays open
    let (status, body) = request(&app, Method::GET, "/api/public/status", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn dogs_are_scoped_to_their_owner() {
    let (_tmp, app) = build_test_router().await;
    let owner = register(&app, "owner@example.com").await;
    let stranger = register(&app, "stranger@example.com").await;

    let (status, dog) = request(
        &app,
        Method::POST,
        "/api/dogs",
        Some(&owner),
        Some(json!({
            "name": "Piper",
            "breed": "Border Collie",
            "age": 4,
            "weight": 18.5,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let dog_id = dog["id"].as_str().unwrap();

    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/dogs/{dog_id}"),
        Some(&stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        Method::GET,
        &format!("/api/dogs/{dog_id}/health-status"),
        Some(&stranger),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_status_reflects_care_history() {
    let (_tmp, app) = build_test_router().await;
    let token = register(&app, "vet-fan@example.com").await;

    let (_, dog) = request(
        &app,
        Method::POST,
        "/api/dogs",
        Some(&token),
        Some(json!({
            "name": "Scout",
            "breed": "Labrador",
            "age": 3,
            "weight": 27.0,
        })),
    )
    .await;
    let dog_id = dog["id"].as_str().unwrap().to_string();

    // Empty history still produces a report, flagged as data-poor.
    let (status, report) = request(
        &app,
        Method::GET,
        &format!("/api/dogs/{dog_id}/health-status"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["hasEnoughData"], false);
    assert_eq!(report["score"], 20);
    assert_eq!(report["status"], "Poor");

    let today = Utc::now().date_naive();
    let fmt = |days_ago: u64| (today - Days::new(days_ago)).format("%Y-%m-%d").to_string();

    for days_ago in [10, 100, 200] {
        let (status, _) = request(
            &app,
            Method::POST,
            &format!("/api/vaccinations/dog/{dog_id}"),
            Some(&token),
            Some(json!({
                "vaccineName": "Rabies",
                "vaccineType": "core",
                "dateGiven": fmt(days_ago),
                "veterinarian": "Dr. Chen",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = request(
        &app,
        Method::POST,
        &format!("/api/health/dog/{dog_id}"),
        Some(&token),
        Some(json!({
            "date": fmt(5),
            "type": "vet-visit",
            "title": "Annual checkup",
            "description": "All clear",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let upcoming = (today + Days::new(7)).format("%Y-%m-%d").to_string();
    let (status, _) = request(
        &app,
        Method::POST,
        &format!("/api/appointments/dog/{dog_id}"),
        Some(&token),
        Some(json!({
            "title": "Dental cleaning",
            "type": "vet",
            "date": upcoming,
            "time": "10:30:00",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // 40 vaccinations + 30 health + 20 upcoming appointment + 10 care bonus
    let (status, report) = request(
        &app,
        Method::GET,
        &format!("/api/dogs/{dog_id}/health-status"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["hasEnoughData"], true);
    assert_eq!(report["score"], 100);
    assert_eq!(report["status"], "Excellent");
    assert_eq!(report["statusColor"], "green");
    assert_eq!(
        report["factors"],
        json!([
            "Up-to-date vaccinations",
            "Regular vet checkups",
            "Scheduled appointments",
            "Comprehensive care history",
        ])
    );
    assert_eq!(report["summary"]["totalVaccinations"], 3);
    assert_eq!(report["summary"]["upcomingAppointments"], 1);
}

#[tokio::test]
async fn vaccination_crud_round_trip() {
    let (_tmp, app) = build_test_router().await;
    let token = register(&app, "crud@example.com").await;

    let (_, dog) = request(
        &app,
        Method::POST,
        "/api/dogs",
        Some(&token),
        Some(json!({ "name": "Rex", "breed": "Beagle", "age": 2, "weight": 11.0 })),
    )
    .await;
    let dog_id = dog["id"].as_str().unwrap().to_string();

    let (status, created) = request(
        &app,
        Method::POST,
        &format!("/api/vaccinations/dog/{dog_id}"),
        Some(&token),
        Some(json!({
            "vaccineName": "Distemper",
            "vaccineType": "core",
            "dateGiven": "2025-04-12",
            "veterinarian": "Dr. Chen",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let vaccination_id = created["id"].as_str().unwrap().to_string();

    let (status, updated) = request(
        &app,
        Method::PUT,
        &format!("/api/vaccinations/dog/{dog_id}/{vaccination_id}"),
        Some(&token),
        Some(json!({
            "vaccineName": "Distemper",
            "vaccineType": "core",
            "dateGiven": "2025-04-12",
            "veterinarian": "Dr. Alvarez",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["veterinarian"], "Dr. Alvarez");

    // Updating an id that does not exist is a 404, not a server error.
    let (status, _) = request(
        &app,
        Method::PUT,
        &format!("/api/vaccinations/dog/{dog_id}/no-such-id"),
        Some(&token),
        Some(json!({
            "vaccineName": "Distemper",
            "vaccineType": "core",
            "dateGiven": "2025-04-12",
            "veterinarian": "Dr. Chen",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/vaccinations/dog/{dog_id}/{vaccination_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Deleting the same record again is a 404.
    let (status, _) = request(
        &app,
        Method::DELETE,
        &format!("/api/vaccinations/dog/{dog_id}/{vaccination_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, listed) = request(
        &app,
        Method::GET,
        &format!("/api/vaccinations/dog/{dog_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn validation_errors_return_bad_request() {
    let (_tmp, app) = build_test_router().await;
    let token = register(&app, "invalid@example.com").await;

    // Age outside the accepted range
    let (status, body) = request(
        &app,
        Method::POST,
        "/api/dogs",
        Some(&token),
        Some(json!({ "name": "Methuselah", "breed": "Mix", "age": 45, "weight": 20.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    // Short password
    let (status, _) = request(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({ "name": "X", "email": "x@example.com", "password": "abc" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
