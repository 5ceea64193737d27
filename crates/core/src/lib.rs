//! Domain rules for the project workflow and accounting core.
//!
//! This crate has no internal dependencies so the repository layer, the
//! HTTP layer and background jobs can all share the same rules.

pub mod change_order;
pub mod crew;
pub mod error;
pub mod fields;
pub mod ledger;
pub mod profile;
pub mod project;
pub mod reminders;
pub mod roles;
pub mod site_log;
pub mod types;
