//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Domain timestamps serialize as integer nanoseconds since the Unix epoch.

pub mod change_order;
pub mod event;
pub mod material_purchase;
pub mod permit;
pub mod project;
pub mod reminder;
pub mod role;
pub mod safety_incident;
pub mod site_log;
pub mod status;
pub mod task;
pub mod user_profile;
