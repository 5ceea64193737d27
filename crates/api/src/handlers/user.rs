//! Handlers for caller identity: profile, role and admin checks.

use ampsite_core::error::CoreError;
use ampsite_core::profile::ProfileInput;
use ampsite_core::roles::{Capability, UserRole};
use ampsite_db::models::role::{AssignRole, UserRoleAssignment};
use ampsite_db::models::user_profile::UserProfile;
use ampsite_db::repositories::{RoleRepo, UserProfileRepo};
use ampsite_events::PlatformEvent;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleResponse {
    pub principal: String,
    pub role: UserRole,
}

/// GET /api/v1/user/profile
///
/// `data` is `null` when the caller has not saved a profile yet.
pub async fn get_own_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<UserProfile>>>> {
    user.require(Capability::ManageOwnProfile)?;
    let profile = UserProfileRepo::find(&state.pool, &user.principal).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/user/profile
pub async fn save_own_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ProfileInput>,
) -> AppResult<Json<DataResponse<UserProfile>>> {
    user.require(Capability::ManageOwnProfile)?;
    input.check()?;

    let profile = UserProfileRepo::upsert(&state.pool, &user.principal, &input).await?;
    tracing::info!(principal = %user.principal, "Profile saved");
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/users/{principal}/profile
///
/// Callers may read their own profile; anyone else's requires admin.
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Path(principal): Path<String>,
) -> AppResult<Json<DataResponse<Option<UserProfile>>>> {
    if principal != user.principal {
        user.require(Capability::ViewAnyProfile)?;
    }
    let profile = UserProfileRepo::find(&state.pool, &principal).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/user/role
pub async fn get_own_role(user: AuthUser) -> Json<DataResponse<RoleResponse>> {
    Json(DataResponse {
        data: RoleResponse {
            principal: user.principal,
            role: user.role,
        },
    })
}

/// GET /api/v1/user/is-admin
pub async fn is_admin(user: AuthUser) -> Json<DataResponse<bool>> {
    Json(DataResponse {
        data: user.is_admin(),
    })
}

/// PUT /api/v1/admin/users/{principal}/role
pub async fn assign_role(
    user: AuthUser,
    State(state): State<AppState>,
    Path(principal): Path<String>,
    Json(input): Json<AssignRole>,
) -> AppResult<Json<DataResponse<UserRoleAssignment>>> {
    user.require(Capability::AssignRoles)?;
    let role = UserRole::parse(&input.role)?;
    if principal.trim().is_empty() {
        return Err(AppError::Core(CoreError::InvalidInput(
            "principal must not be empty".into(),
        )));
    }

    let assignment = RoleRepo::assign(&state.pool, &principal, role, &user.principal).await?;

    tracing::info!(
        target_principal = %principal,
        role = role.name(),
        principal = %user.principal,
        "Role assigned"
    );
    state.event_bus.publish(
        PlatformEvent::new("role.assigned")
            .with_actor(&user.principal)
            .with_payload(serde_json::json!({
                "principal": principal,
                "role": role.name(),
            })),
    );

    Ok(Json(DataResponse { data: assignment }))
}
