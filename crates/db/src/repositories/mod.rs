//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument.

pub mod change_order_repo;
pub mod event_repo;
pub mod material_purchase_repo;
pub mod permit_repo;
pub mod project_repo;
pub mod reminder_repo;
pub mod role_repo;
pub mod safety_incident_repo;
pub mod site_log_repo;
pub mod task_repo;
pub mod user_profile_repo;
pub mod weather_warning_repo;

pub use change_order_repo::ChangeOrderRepo;
pub use event_repo::EventRepo;
pub use material_purchase_repo::MaterialPurchaseRepo;
pub use permit_repo::PermitRepo;
pub use project_repo::ProjectRepo;
pub use reminder_repo::ReminderRepo;
pub use role_repo::RoleRepo;
pub use safety_incident_repo::SafetyIncidentRepo;
pub use site_log_repo::SiteLogRepo;
pub use task_repo::TaskRepo;
pub use user_profile_repo::UserProfileRepo;
pub use weather_warning_repo::WeatherWarningRepo;
