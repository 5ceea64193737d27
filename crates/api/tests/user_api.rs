//! HTTP-level tests for caller identity, profiles, roles, the dashboard and
//! the health endpoint.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_project, get, get_as, put_json_as, seed_roles, ADMIN, EDITOR, GUEST,
};
use sqlx::PgPool;

fn profile_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "role": "Foreman",
        "email": "foreman@example.com",
        "phone": "555-0199",
    })
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_health_needs_no_token(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_token_is_unauthorized(pool: PgPool) {
    let request = axum::http::Request::builder()
        .uri("/api/v1/user/role")
        .header("authorization", "Bearer not-a-jwt")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = tower::ServiceExt::oneshot(common::build_test_app(pool), request)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_own_profile_round_trip(pool: PgPool) {
    let empty = get_as(common::build_test_app(pool.clone()), "/api/v1/user/profile", GUEST).await;
    assert_eq!(empty.status(), StatusCode::OK);
    assert!(body_json(empty).await["data"].is_null());

    let saved = put_json_as(
        common::build_test_app(pool.clone()),
        "/api/v1/user/profile",
        GUEST,
        profile_body("Dana Ruiz"),
    )
    .await;
    assert_eq!(saved.status(), StatusCode::OK);

    let updated = put_json_as(
        common::build_test_app(pool.clone()),
        "/api/v1/user/profile",
        GUEST,
        profile_body("Dana R. Ruiz"),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);

    let fetched = get_as(common::build_test_app(pool), "/api/v1/user/profile", GUEST).await;
    let json = body_json(fetched).await;
    assert_eq!(json["data"]["principal"], GUEST);
    assert_eq!(json["data"]["name"], "Dana R. Ruiz");
    assert_eq!(json["data"]["role"], "Foreman");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_with_bad_email_is_rejected(pool: PgPool) {
    let mut body = profile_body("Dana Ruiz");
    body["email"] = serde_json::json!("nope");
    let response = put_json_as(
        common::build_test_app(pool),
        "/api/v1/user/profile",
        GUEST,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "INVALID_INPUT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_profiles_need_admin(pool: PgPool) {
    seed_roles(&pool).await;
    put_json_as(
        common::build_test_app(pool.clone()),
        "/api/v1/user/profile",
        EDITOR,
        profile_body("Sam Okafor"),
    )
    .await;
    let uri = format!("/api/v1/users/{EDITOR}/profile");

    let own = get_as(common::build_test_app(pool.clone()), &uri, EDITOR).await;
    assert_eq!(own.status(), StatusCode::OK);

    let guest = get_as(common::build_test_app(pool.clone()), &uri, GUEST).await;
    assert_eq!(guest.status(), StatusCode::FORBIDDEN);

    let admin = get_as(common::build_test_app(pool), &uri, ADMIN).await;
    assert_eq!(admin.status(), StatusCode::OK);
    assert_eq!(body_json(admin).await["data"]["name"], "Sam Okafor");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_role_and_admin_flag(pool: PgPool) {
    seed_roles(&pool).await;
    let cases = [(ADMIN, "admin", true), (EDITOR, "user", false), (GUEST, "guest", false)];
    for (principal, role, admin) in cases {
        let response = get_as(common::build_test_app(pool.clone()), "/api/v1/user/role", principal).await;
        let json = body_json(response).await;
        assert_eq!(json["data"]["principal"], principal);
        assert_eq!(json["data"]["role"], role);

        let response =
            get_as(common::build_test_app(pool.clone()), "/api/v1/user/is-admin", principal).await;
        assert_eq!(body_json(response).await["data"], admin);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_admin_assigns_roles(pool: PgPool) {
    seed_roles(&pool).await;
    let uri = format!("/api/v1/admin/users/{GUEST}/role");

    let denied = put_json_as(
        common::build_test_app(pool.clone()),
        &uri,
        EDITOR,
        serde_json::json!({"role": "admin"}),
    )
    .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    let bad = put_json_as(
        common::build_test_app(pool.clone()),
        &uri,
        ADMIN,
        serde_json::json!({"role": "superuser"}),
    )
    .await;
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    let ok = put_json_as(
        common::build_test_app(pool.clone()),
        &uri,
        ADMIN,
        serde_json::json!({"role": "user"}),
    )
    .await;
    assert_eq!(ok.status(), StatusCode::OK);
    assert_eq!(body_json(ok).await["data"]["assigned_by"], ADMIN);

    let role = get_as(common::build_test_app(pool), "/api/v1/user/role", GUEST).await;
    assert_eq!(body_json(role).await["data"]["role"], "user");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_summary_counts(pool: PgPool) {
    seed_roles(&pool).await;
    let first = create_project(&pool, 1_000.0).await;
    create_project(&pool, 2_500.0).await;

    put_json_as(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{first}/status"),
        EDITOR,
        serde_json::json!({"status": "inProgress"}),
    )
    .await;
    common::post_json_as(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{first}/change-orders"),
        EDITOR,
        serde_json::json!({"description": "Add EV charger", "additional_cost": 900.0}),
    )
    .await;

    let response = get_as(common::build_test_app(pool), "/api/v1/dashboard/summary", GUEST).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_projects"], 2);
    assert_eq!(json["data"]["active_projects"], 1);
    assert_eq!(json["data"]["completed_projects"], 0);
    assert_eq!(json["data"]["total_project_value"], 3_500.0);
    assert_eq!(json["data"]["pending_change_orders"], 1);
}
