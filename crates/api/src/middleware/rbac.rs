//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects callers whose role lacks
//! the capability. Capabilities checked only by some handlers go through
//! [`AuthUser::require`] instead.

use ampsite_core::roles::Capability;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires [`Capability::EditProjects`] (user or admin). 403 otherwise.
///
/// ```ignore
/// async fn create(RequireEditor(user): RequireEditor) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireEditor(pub AuthUser);

impl FromRequestParts<AppState> for RequireEditor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        user.require(Capability::EditProjects)?;
        Ok(RequireEditor(user))
    }
}

/// Requires [`Capability::ResolveChangeOrders`] (admin). 403 otherwise.
pub struct RequireApprover(pub AuthUser);

impl FromRequestParts<AppState> for RequireApprover {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        user.require(Capability::ResolveChangeOrders)?;
        Ok(RequireApprover(user))
    }
}
