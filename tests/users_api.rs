mod common;

use axum::http::StatusCode;
use common::{delete, get, json_request, router, send};
use household_planner::db::stub::StubDatabase;
use serde_json::json;

const USER_ID: &str = "6a1c0e8e-8a55-4f0e-b7a5-2a9c3d4e5f60";
const HOUSEHOLD_ID: &str = "0b6f2f1e-3c1d-4c55-9a4e-5f0d7c9b2a11";

#[tokio::test]
async fn patch_with_a_wrong_type_fails_before_the_store() {
    let (app, db) = router(StubDatabase::new());

    let (status, body) = send(&app, json_request("PATCH", &format!("/users/{}", USER_ID), json!({ "name": 10 }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": format!("Bad Request: unable to update User {}", USER_ID), "success": false })
    );
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn patch_can_detach_a_user_from_their_household() {
    let stub = StubDatabase::new().reply(|_, params| {
        Ok(vec![json!({ "id": params[1], "name": "Cooper", "household": params[0] })])
    });
    let (app, db) = router(stub);

    let (status, body) = send(
        &app,
        json_request("PATCH", &format!("/users/{}", USER_ID), json!({ "household": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], format!("User {} updated", USER_ID));
    assert_eq!(body["payload"], json!({ "id": USER_ID, "name": "Cooper", "household": null }));
    assert!(db.calls()[0].sql.starts_with(r#"UPDATE "users" SET "household" = $1::uuid WHERE"#));
}

#[tokio::test]
async fn list_returns_all_users() {
    let rows = vec![
        json!({ "id": USER_ID, "name": "Ghost", "household": HOUSEHOLD_ID }),
        json!({ "id": "9d2f7b0c-1e4a-4b8d-a6c3-0f1e2d3c4b5a", "name": "Cirrus", "household": null }),
    ];
    let (app, _) = router(StubDatabase::new().rows(rows.clone()));

    let (status, body) = send(&app, get("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "All users", "success": true, "payload": rows }));
}

#[tokio::test]
async fn list_store_failure_is_a_server_error() {
    let (app, _) = router(StubDatabase::new().fails(|| sqlx::Error::PoolClosed));

    let (status, body) = send(&app, get("/users")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Server Error: Couldn't retrieve users", "success": false }));
}

#[tokio::test]
async fn name_search_uses_the_name_in_messages() {
    let (app, db) = router(StubDatabase::new().rows(vec![json!({ "id": USER_ID, "name": "Cooperson", "household": null })]));

    let (status, body) = send(&app, get("/users?name=Cooper")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "User Cooper");
    assert_eq!(db.calls()[0].params, vec![json!("%Cooper%")]);

    let (app, _) = router(StubDatabase::new().fails(|| sqlx::Error::PoolTimedOut));
    let (status, body) = send(&app, get("/users?name=Cooper")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Server Error: couldn't retrieve User Cooper");
}

#[tokio::test]
async fn post_creates_a_user_without_a_household() {
    let stub = StubDatabase::new().reply(|_, params| {
        Ok(vec![json!({ "id": USER_ID, "name": params[0], "household": params[1] })])
    });
    let (app, db) = router(stub);

    let (status, body) = send(&app, json_request("POST", "/users", json!({ "name": "Ghost" }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": "Ghost added",
            "success": true,
            "payload": { "id": USER_ID, "name": "Ghost", "household": null }
        })
    );
    assert_eq!(db.calls()[0].params, vec![json!("Ghost"), json!(null)]);
}

#[tokio::test]
async fn post_with_a_bad_household_is_rejected() {
    let (app, db) = router(StubDatabase::new());

    let (status, body) = send(
        &app,
        json_request("POST", "/users", json!({ "name": "Ghost", "household": "not-an-id" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Bad Request: unable to add Ghost");
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn put_requires_household_to_be_present() {
    let (app, db) = router(StubDatabase::new());
    let uri = format!("/users/{}", USER_ID);

    let (status, _) = send(&app, json_request("PUT", &uri, json!({ "name": "Ghost" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(db.calls().is_empty());
}

#[tokio::test]
async fn put_accepts_a_null_household() {
    let stub = StubDatabase::new().reply(|_, params| {
        Ok(vec![json!({ "id": params[2], "name": params[0], "household": params[1] })])
    });
    let (app, _) = router(stub);

    let (status, body) = send(
        &app,
        json_request("PUT", &format!("/users/{}", USER_ID), json!({ "name": "Ghost", "household": null })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["payload"], json!({ "id": USER_ID, "name": "Ghost", "household": null }));
}

#[tokio::test]
async fn update_store_failure_is_a_server_error() {
    let (app, _) = router(StubDatabase::new().fails(|| sqlx::Error::PoolTimedOut));

    let (status, body) = send(&app, json_request("PATCH", &format!("/users/{}", USER_ID), json!({ "name": "x" }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], format!("Server Error: unable to update User {}", USER_ID));
}

#[tokio::test]
async fn get_and_delete_unknown_users_are_bad_requests() {
    let (app, _) = router(StubDatabase::new());

    let (status, body) = send(&app, get(&format!("/users/{}", USER_ID))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], format!("Bad Request: unable to retrieve User {}", USER_ID));

    let (status, body) = send(&app, delete(&format!("/users/{}", USER_ID))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], format!("Bad Request: unable to delete User {}", USER_ID));
}

#[tokio::test]
async fn delete_returns_the_removed_user() {
    let row = json!({ "id": USER_ID, "name": "Ghost", "household": HOUSEHOLD_ID });
    let (app, _) = router(StubDatabase::new().rows(vec![row.clone()]));

    let (status, body) = send(&app, delete(&format!("/users/{}", USER_ID))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": format!("User {} deleted", USER_ID), "success": true, "payload": row }));
}

#[tokio::test]
async fn patch_and_put_of_an_unknown_user_are_bad_requests() {
    let (app, db) = router(StubDatabase::new().rows(vec![]).rows(vec![]));
    let uri = format!("/users/{}", USER_ID);

    let (status, body) = send(&app, json_request("PATCH", &uri, json!({ "name": "Ghost" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": format!("Bad Request: unable to update User {}", USER_ID), "success": false })
    );

    let (status, body) = send(&app, json_request("PUT", &uri, json!({ "name": "Ghost", "household": null }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "message": format!("Bad Request: unable to update User {}", USER_ID), "success": false })
    );
    assert_eq!(db.calls().len(), 2);
}
