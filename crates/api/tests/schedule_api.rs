//! HTTP-level tests for tasks, crew assignment, weather warnings and
//! reminder sweeps.

mod common;

use std::sync::Arc;

use ampsite_api::background::reminder_sweep;
use ampsite_core::reminders::UrgencyTier;
use ampsite_events::EventBus;
use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use common::{
    body_json, create_project, get_as, post_as, post_json_as, put_json_as, seed_roles, ADMIN,
    EDITOR, GUEST,
};
use sqlx::PgPool;

async fn create_task(pool: &PgPool, project_id: i64, due_nanos: i64, is_outdoor: bool) -> i64 {
    let response = post_json_as(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/projects/{project_id}/tasks"),
        EDITOR,
        serde_json::json!({
            "description": "Pull feeders to unit 4",
            "due_date": due_nanos,
            "is_outdoor": is_outdoor,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

fn nanos(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .unwrap()
        .timestamp_nanos_opt()
        .unwrap()
}

fn from_now(duration: Duration) -> i64 {
    (Utc::now() + duration).timestamp_nanos_opt().unwrap()
}

async fn assign(pool: &PgPool, task_id: i64, crew_id: i64) -> axum::response::Response {
    put_json_as(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/tasks/{task_id}/crew"),
        EDITOR,
        serde_json::json!({"crew_id": crew_id}),
    )
    .await
}

// ---------------------------------------------------------------------------
// Tasks and crews
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tasks_listed_by_due_date(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let late = create_task(&pool, project, nanos(2030, 6, 9, 8), false).await;
    let early = create_task(&pool, project, nanos(2030, 6, 2, 8), false).await;

    let response = get_as(common::build_test_app(pool), "/api/v1/tasks", GUEST).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, [early, late]);
    assert_eq!(json["data"][0]["due_date"], nanos(2030, 6, 2, 8));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_crew_double_booking_is_rejected(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let morning = create_task(&pool, project, nanos(2030, 6, 3, 9), false).await;
    let afternoon = create_task(&pool, project, nanos(2030, 6, 3, 15), false).await;
    let next_day = create_task(&pool, project, nanos(2030, 6, 4, 9), false).await;

    let first = assign(&pool, morning, 7).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_json(first).await["data"]["assigned_crew_id"], 7);

    let clash = assign(&pool, afternoon, 7).await;
    assert_eq!(clash.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(clash).await["code"], "CREW_CONFLICT");

    assert_eq!(assign(&pool, afternoon, 8).await.status(), StatusCode::OK);
    assert_eq!(assign(&pool, next_day, 7).await.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_crew_assignment_validation(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let task = create_task(&pool, project, nanos(2030, 6, 3, 9), false).await;

    let bad_crew = assign(&pool, task, 0).await;
    assert_eq!(bad_crew.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(bad_crew).await["code"], "INVALID_INPUT");

    assert_eq!(assign(&pool, 987_654, 3).await.status(), StatusCode::NOT_FOUND);

    let guest = put_json_as(
        common::build_test_app(pool),
        &format!("/api/v1/tasks/{task}/crew"),
        GUEST,
        serde_json::json!({"crew_id": 3}),
    )
    .await;
    assert_eq!(guest.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Weather warnings
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_weather_flag_on_indoor_task_records_nothing(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let task = create_task(&pool, project, nanos(2030, 6, 3, 9), false).await;
    let uri = format!("/api/v1/tasks/{task}/weather-warnings");

    let response = post_json_as(
        common::build_test_app(pool.clone()),
        &uri,
        EDITOR,
        serde_json::json!({"condition": "Thunderstorms"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "not_outdoor");
    assert!(json["data"]["warning"].is_null());

    let list = get_as(common::build_test_app(pool), &uri, GUEST).await;
    assert!(body_json(list).await["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_weather_flag_on_outdoor_task_is_recorded(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let task = create_task(&pool, project, nanos(2030, 6, 3, 9), true).await;
    let uri = format!("/api/v1/tasks/{task}/weather-warnings");

    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();
    let response = post_json_as(
        common::build_test_app_with_bus(pool.clone(), bus),
        &uri,
        EDITOR,
        serde_json::json!({"condition": "High winds"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["outcome"], "flagged");
    assert_eq!(json["data"]["warning"]["condition"], "High winds");

    let event = rx.try_recv().unwrap();
    assert_eq!(event.event_type, "task.weather_warning");
    assert_eq!(event.source_entity_id, Some(task));
    assert_eq!(event.actor.as_deref(), Some(EDITOR));

    let list = get_as(common::build_test_app(pool.clone()), &uri, GUEST).await;
    assert_eq!(body_json(list).await["data"].as_array().unwrap().len(), 1);

    let blank = post_json_as(
        common::build_test_app(pool),
        &uri,
        EDITOR,
        serde_json::json!({"condition": " "}),
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reminder_sweep_requires_admin(pool: PgPool) {
    seed_roles(&pool).await;
    for principal in [EDITOR, GUEST] {
        let response = post_as(
            common::build_test_app(pool.clone()),
            "/api/v1/reminders/send",
            principal,
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reminder_sweep_sends_once_per_day(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let urgent = create_task(&pool, project, from_now(Duration::days(2) + Duration::hours(1)), false).await;
    let upcoming = create_task(&pool, project, from_now(Duration::days(10) + Duration::hours(1)), false).await;
    create_task(&pool, project, from_now(Duration::days(30)), false).await;

    let bus = Arc::new(EventBus::default());
    let mut rx = bus.subscribe();
    let response = post_as(
        common::build_test_app_with_bus(pool.clone(), bus.clone()),
        "/api/v1/reminders/send",
        ADMIN,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let report = body_json(response).await["data"].clone();
    assert_eq!(report["evaluated"], 2);
    assert_eq!(report["sent"], 2);
    assert_eq!(report["suppressed"], 0);

    let tiers: Vec<(i64, String)> = report["reminders"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| {
            (
                r["subject_id"].as_i64().unwrap(),
                r["tier"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert!(tiers.contains(&(urgent, "urgent".to_string())));
    assert!(tiers.contains(&(upcoming, "upcoming".to_string())));

    let first = rx.try_recv().unwrap();
    assert_eq!(first.event_type, "task.reminder");

    let again = post_as(
        common::build_test_app_with_bus(pool, bus),
        "/api/v1/reminders/send",
        ADMIN,
    )
    .await;
    let report = body_json(again).await["data"].clone();
    assert_eq!(report["sent"], 0);
    assert_eq!(report["suppressed"], 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_escalation_on_same_day_is_sent_again(pool: PgPool) {
    seed_roles(&pool).await;
    let project = create_project(&pool, 1_000.0).await;
    let task = create_task(&pool, project, nanos(2030, 6, 4, 6), false).await;
    let bus = EventBus::default();

    let early = Utc.with_ymd_and_hms(2030, 6, 1, 0, 30, 0).unwrap();
    let report = reminder_sweep::sweep(&pool, &bus, early).await.unwrap();
    assert_eq!(report.sent, 1);
    assert_eq!(report.reminders[0].subject_id, task);
    assert_eq!(report.reminders[0].tier, UrgencyTier::Soon);

    let late = Utc.with_ymd_and_hms(2030, 6, 1, 23, 0, 0).unwrap();
    let report = reminder_sweep::sweep(&pool, &bus, late).await.unwrap();
    assert_eq!(report.sent, 1);
    assert_eq!(report.suppressed, 0);
    assert_eq!(report.reminders[0].tier, UrgencyTier::Urgent);
    assert_eq!(report.reminders[0].days_until, 2);

    let report = reminder_sweep::sweep(&pool, &bus, late).await.unwrap();
    assert_eq!(report.sent, 0);
    assert_eq!(report.suppressed, 1);
}
