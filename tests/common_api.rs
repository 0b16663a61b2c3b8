mod common;

use axum::http::StatusCode;
use common::{get, router, send};
use household_planner::db::stub::StubDatabase;
use serde_json::json;

#[tokio::test]
async fn health_does_not_touch_the_store() {
    let (app, db) = router(StubDatabase::new());

    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn ready_reports_an_unavailable_store() {
    let (app, _) = router(StubDatabase::new().fails(|| sqlx::Error::PoolTimedOut));

    let (status, body) = send(&app, get("/ready")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "status": "degraded", "database": "unavailable" }));
}

#[tokio::test]
async fn ready_and_version() {
    let (app, db) = router(StubDatabase::new());

    let (status, body) = send(&app, get("/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "ok");
    assert_eq!(db.calls()[0].sql, "SELECT 1");

    let (status, body) = send(&app, get("/version")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "household-planner");
}

#[tokio::test]
async fn unknown_paths_answer_with_the_envelope() {
    let (app, db) = router(StubDatabase::new());

    let (status, body) = send(&app, get("/pantry")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Bad Request: Couldn't access /pantry", "success": false }));
    assert!(db.calls().is_empty());
}
