pub mod admin;
pub mod change_order;
pub mod dashboard;
pub mod health;
pub mod project;
pub mod reminders;
pub mod task;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                                       list, create
/// /projects/{id}                                  get
/// /projects/{id}/status                           advance status (PUT)
/// /projects/{id}/purchases                        list, record
/// /projects/{id}/budget                           budget summary
/// /projects/{id}/safety-incidents                 list, report
/// /projects/{id}/change-orders                    list, submit
/// /projects/{id}/permits                          list, add
/// /projects/{id}/tasks                            create
/// /projects/{id}/check-ins                        list, check in
/// /projects/{id}/mileage                          list, log
/// /projects/{id}/photo-annotations                list, annotate
/// /projects/{id}/compliance-verifications         list, verify
///
/// /change-orders/pending                          pending queue
/// /change-orders/{id}/approve                     approve (admin)
/// /change-orders/{id}/reject                      reject (admin)
///
/// /tasks                                          list by due date
/// /tasks/{id}/crew                                assign crew (PUT)
/// /tasks/{id}/weather-warnings                    list, flag
///
/// /reminders/send                                 run sweep (admin)
///
/// /user/profile                                   get, save own profile
/// /user/role                                      caller role
/// /user/is-admin                                  caller admin flag
/// /users/{principal}/profile                      profile (self or admin)
/// /admin/users/{principal}/role                   assign role (admin)
///
/// /dashboard/summary                              portfolio totals
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/change-orders", change_order::router())
        .nest("/tasks", task::router())
        .nest("/reminders", reminders::router())
        .merge(user::router())
        .nest("/admin", admin::router())
        .nest("/dashboard", dashboard::router())
}
