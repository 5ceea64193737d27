//! Well-known role names and the capability policy table.
//!
//! Role names must match the seed data in `20260301000002_create_roles.sql`.
//! Every mutating command checks a [`Capability`] against [`POLICY`] before
//! touching the store.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_USER: &str = "user";
pub const ROLE_GUEST: &str = "guest";

/// Caller role. Principals without an explicit assignment are [`UserRole::Guest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

impl UserRole {
    pub fn name(self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::User => ROLE_USER,
            UserRole::Guest => ROLE_GUEST,
        }
    }

    /// Database id in the `roles` lookup table (1-based seed order).
    pub fn id(self) -> i16 {
        match self {
            UserRole::Admin => 1,
            UserRole::User => 2,
            UserRole::Guest => 3,
        }
    }

    pub fn from_id(id: i16) -> Option<Self> {
        match id {
            1 => Some(UserRole::Admin),
            2 => Some(UserRole::User),
            3 => Some(UserRole::Guest),
            _ => None,
        }
    }

    pub fn parse(name: &str) -> Result<Self, CoreError> {
        match name {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_USER => Ok(UserRole::User),
            ROLE_GUEST => Ok(UserRole::Guest),
            other => Err(CoreError::InvalidInput(format!(
                "Invalid role '{other}'. Must be one of: {ROLE_ADMIN}, {ROLE_USER}, {ROLE_GUEST}"
            ))),
        }
    }
}

/// An operation class gated by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Read projects and everything recorded against them.
    ReadProjects,
    /// Read and upsert the caller's own profile.
    ManageOwnProfile,
    /// Create projects and record purchases, change orders, tasks, permits,
    /// incidents, site logs, crew assignments and weather warnings.
    EditProjects,
    /// Approve or reject change orders.
    ResolveChangeOrders,
    /// Trigger a reminder sweep on demand.
    RunReminders,
    /// Assign roles to principals.
    AssignRoles,
    /// Read another principal's profile.
    ViewAnyProfile,
}

/// Capability grants per role. Admin holds every capability.
pub const POLICY: &[(UserRole, &[Capability])] = &[
    (
        UserRole::Admin,
        &[
            Capability::ReadProjects,
            Capability::ManageOwnProfile,
            Capability::EditProjects,
            Capability::ResolveChangeOrders,
            Capability::RunReminders,
            Capability::AssignRoles,
            Capability::ViewAnyProfile,
        ],
    ),
    (
        UserRole::User,
        &[
            Capability::ReadProjects,
            Capability::ManageOwnProfile,
            Capability::EditProjects,
        ],
    ),
    (
        UserRole::Guest,
        &[Capability::ReadProjects, Capability::ManageOwnProfile],
    ),
];

/// Whether `role` holds `capability` according to [`POLICY`].
pub fn allows(role: UserRole, capability: Capability) -> bool {
    POLICY
        .iter()
        .find(|(r, _)| *r == role)
        .is_some_and(|(_, caps)| caps.contains(&capability))
}

/// Check `capability` for `role`, failing with [`CoreError::Forbidden`].
pub fn authorize(role: UserRole, capability: Capability) -> Result<(), CoreError> {
    if allows(role, capability) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Role '{}' may not perform {capability:?}",
            role.name()
        )))
    }
}
