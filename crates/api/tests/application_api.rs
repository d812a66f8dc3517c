//! HTTP-level tests for the application lifecycle endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_application, delete, get, post_json, put_json, USER_A, USER_B};
use jobtrail_core::status::TransitionPolicy;
use serde_json::json;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_then_list_shows_applied(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    assert_eq!(created["status"], "APPLIED");
    assert_eq!(created["companyName"], "Acme");
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert!(created["postUrl"].is_null());

    let response = get(common::build_test_app(pool), "/api/v1/applications", USER_A).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["application"]["id"], created["id"]);
    assert_eq!(data[0]["application"]["status"], "APPLIED");
    assert!(data[0]["position"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_is_scoped_to_caller(pool: PgPool) {
    create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    create_application(&pool, USER_B, json!({"companyName": "Hooli"})).await;

    let json = body_json(get(common::build_test_app(pool), "/api/v1/applications", USER_B).await).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["application"]["companyName"], "Hooli");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_keeps_submitted_at(pool: PgPool) {
    let created = create_application(
        &pool,
        USER_A,
        json!({
            "companyName": "Acme",
            "postUrl": "https://acme.test/careers/42",
            "submittedAt": "2026-02-01T10:00:00Z"
        }),
    )
    .await;
    assert_eq!(created["submittedAt"], "2026-02-01T10:00:00Z");
    assert_eq!(created["postUrl"], "https://acme.test/careers/42");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_blank_company(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/applications",
        USER_A,
        json!({"companyName": "  "}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"].as_object().is_some_and(|f| !f.is_empty()));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_company_reports_the_field(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/applications",
        USER_A,
        json!({"postUrl": "https://acme.test"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["companyName"][0]
        .as_str()
        .is_some_and(|msg| msg.contains("missing field")));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_mistyped_field_reports_the_field(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/applications",
        USER_A,
        json!({"companyName": "Acme", "submittedAt": 17}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["submittedAt"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unparsable_body_is_bad_request(pool: PgPool) {
    let response = common::post_raw(
        common::build_test_app(pool),
        "/api/v1/applications",
        USER_A,
        "{\"companyName\": ",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_blank_or_schemeless_link(pool: PgPool) {
    let blank = create_application(&pool, USER_A, json!({"companyName": "Acme", "postUrl": ""})).await;
    assert!(blank["postUrl"].is_null());

    let schemeless = create_application(
        &pool,
        USER_A,
        json!({"companyName": "Globex", "postUrl": "linkedin.com/jobs/view/123"}),
    )
    .await;
    assert_eq!(schemeless["postUrl"], "linkedin.com/jobs/view/123");
}

// ---------------------------------------------------------------------------
// Position references
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_typed_role_creates_then_reuses_position(pool: PgPool) {
    let first = create_application(
        &pool,
        USER_A,
        json!({
            "companyName": "Acme",
            "positionName": "Backend Engineer",
            "positionColor": "#336699"
        }),
    )
    .await;
    let second = create_application(
        &pool,
        USER_A,
        json!({
            "companyName": "Globex",
            "positionName": "Backend Engineer",
            "positionColor": "#ff0000"
        }),
    )
    .await;

    assert!(first["positionId"].is_string());
    assert_eq!(first["positionId"], second["positionId"]);

    let positions = body_json(get(common::build_test_app(pool), "/api/v1/positions", USER_A).await).await;
    let data = positions["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["color"], "#336699");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_includes_joined_position(pool: PgPool) {
    let created = create_application(
        &pool,
        USER_A,
        json!({
            "companyName": "Acme",
            "positionName": "Designer",
            "positionColor": "#aa33aa"
        }),
    )
    .await;

    let json = body_json(get(common::build_test_app(pool), "/api/v1/applications", USER_A).await).await;
    let entry = &json["data"][0];
    assert_eq!(entry["position"]["id"], created["positionId"]);
    assert_eq!(entry["position"]["name"], "Designer");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_foreign_position_id_is_forbidden(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/positions",
        USER_B,
        json!({"name": "Spy", "color": "#000000"}),
    )
    .await;
    let position = body_json(response).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/applications",
        USER_A,
        json!({"companyName": "Acme", "positionId": position["id"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // Nothing was written for the caller.
    let json = body_json(get(common::build_test_app(pool), "/api/v1/applications", USER_A).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_failed_insert_leaves_no_new_position(pool: PgPool) {
    sqlx::query(
        "CREATE FUNCTION reject_application_insert() RETURNS TRIGGER AS $$ \
         BEGIN RAISE EXCEPTION 'applications are read-only'; END; \
         $$ LANGUAGE plpgsql",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER trg_reject_application_insert BEFORE INSERT ON applications \
         FOR EACH ROW EXECUTE FUNCTION reject_application_insert()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/applications",
        USER_A,
        json!({
            "companyName": "Acme",
            "positionName": "Platform Engineer",
            "positionColor": "#0055aa"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(get(common::build_test_app(pool), "/api/v1/positions", USER_A).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_rejects_both_position_id_and_name(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        "/api/v1/applications",
        USER_A,
        json!({
            "companyName": "Acme",
            "positionId": "some-id",
            "positionName": "Designer",
            "positionColor": "#aa33aa"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_status_update_changes_only_status(pool: PgPool) {
    let created = create_application(
        &pool,
        USER_A,
        json!({"companyName": "Acme", "postUrl": "https://acme.test/jobs/1"}),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/applications/{id}"),
        USER_A,
        json!({"status": "INTERVIEWING"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let updated = body_json(response).await;
    assert_eq!(updated["status"], "INTERVIEWING");
    assert_eq!(updated["companyName"], "Acme");
    assert_eq!(updated["postUrl"], "https://acme.test/jobs/1");
    assert_eq!(updated["submittedAt"], created["submittedAt"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert_ne!(updated["updatedAt"], created["updatedAt"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_permissive_policy_allows_any_column_move(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    let uri = format!("/api/v1/applications/{}", created["id"].as_str().unwrap());

    for status in ["ARCHIVED", "APPLIED", "ACCEPTED"] {
        let response = put_json(
            common::build_test_app(pool.clone()),
            &uri,
            USER_A,
            json!({"status": status}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK, "move to {status}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_guarded_policy_rejects_skipping_interview(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    let uri = format!("/api/v1/applications/{}", created["id"].as_str().unwrap());

    let app = common::build_test_app_with_policy(pool.clone(), TransitionPolicy::Guarded);
    let response = put_json(app, &uri, USER_A, json!({"status": "ACCEPTED"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let app = common::build_test_app_with_policy(pool, TransitionPolicy::Guarded);
    let response = put_json(app, &uri, USER_A, json!({"status": "INTERVIEWING"})).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_status_is_rejected(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    let response = put_json(
        common::build_test_app(pool),
        &format!("/api/v1/applications/{}", created["id"].as_str().unwrap()),
        USER_A,
        json!({"status": "GHOSTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["status"].is_array());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_by_other_user_is_forbidden(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    let uri = format!("/api/v1/applications/{}", created["id"].as_str().unwrap());

    let response = put_json(
        common::build_test_app(pool.clone()),
        &uri,
        USER_B,
        json!({"status": "REJECTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(body_json(response).await["code"], "FORBIDDEN");

    let json = body_json(get(common::build_test_app(pool), "/api/v1/applications", USER_A).await).await;
    assert_eq!(json["data"][0]["application"]["status"], "APPLIED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_application_is_internal_error(pool: PgPool) {
    let response = put_json(
        common::build_test_app(pool),
        "/api/v1/applications/does-not-exist",
        USER_A,
        json!({"companyName": "Nope"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["code"], "INTERNAL_ERROR");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_returns_id(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    let id = created["id"].as_str().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/applications/{id}"),
        USER_A,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"id": id}));

    let json = body_json(get(common::build_test_app(pool), "/api/v1/applications", USER_A).await).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_nonexistent_fails_on_absence_not_format(pool: PgPool) {
    for id in ["0190b6a4-0000-7000-8000-000000000000", "not-even-a-uuid"] {
        let response = delete(
            common::build_test_app(pool.clone()),
            &format!("/api/v1/applications/{id}"),
            USER_A,
        )
        .await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "id {id}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_by_other_user_is_forbidden(pool: PgPool) {
    let created = create_application(&pool, USER_A, json!({"companyName": "Acme"})).await;
    let uri = format!("/api/v1/applications/{}", created["id"].as_str().unwrap());

    let response = delete(common::build_test_app(pool.clone()), &uri, USER_B).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(get(common::build_test_app(pool), "/api/v1/applications", USER_A).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);
}
