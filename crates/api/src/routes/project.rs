//! Route definitions for the `/projects` resource and everything recorded
//! against a project.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{change_order, ledger, permit, project, safety, site_log, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}/status                       -> advance_status
/// GET    /{id}/purchases                    -> list_purchases
/// POST   /{id}/purchases                    -> record_purchase
/// GET    /{id}/budget                       -> budget
/// GET    /{id}/safety-incidents             -> list
/// POST   /{id}/safety-incidents             -> report
/// GET    /{id}/change-orders                -> list_for_project
/// POST   /{id}/change-orders                -> create
/// GET    /{id}/permits                      -> list
/// POST   /{id}/permits                      -> create
/// POST   /{id}/tasks                        -> create
/// GET    /{id}/check-ins                    -> list_check_ins
/// POST   /{id}/check-ins                    -> check_in
/// GET    /{id}/mileage                      -> list_mileage
/// POST   /{id}/mileage                      -> log_mileage
/// GET    /{id}/photo-annotations            -> list_photo_annotations
/// POST   /{id}/photo-annotations            -> annotate_photo
/// GET    /{id}/compliance-verifications     -> list_compliance
/// POST   /{id}/compliance-verifications     -> verify_compliance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/{id}", get(project::get_by_id))
        .route("/{id}/status", put(project::advance_status))
        .route(
            "/{id}/purchases",
            get(ledger::list_purchases).post(ledger::record_purchase),
        )
        .route("/{id}/budget", get(ledger::budget))
        .route(
            "/{id}/safety-incidents",
            get(safety::list).post(safety::report),
        )
        .route(
            "/{id}/change-orders",
            get(change_order::list_for_project).post(change_order::create),
        )
        .route("/{id}/permits", get(permit::list).post(permit::create))
        .route("/{id}/tasks", post(task::create))
        .route(
            "/{id}/check-ins",
            get(site_log::list_check_ins).post(site_log::check_in),
        )
        .route(
            "/{id}/mileage",
            get(site_log::list_mileage).post(site_log::log_mileage),
        )
        .route(
            "/{id}/photo-annotations",
            get(site_log::list_photo_annotations).post(site_log::annotate_photo),
        )
        .route(
            "/{id}/compliance-verifications",
            get(site_log::list_compliance).post(site_log::verify_compliance),
        )
}
