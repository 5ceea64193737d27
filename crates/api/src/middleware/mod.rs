//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`]: the caller's principal and resolved role.
//! - [`rbac::RequireEditor`]: callers allowed to record project data.

pub mod auth;
pub mod rbac;
