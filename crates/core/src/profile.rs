//! User profile input and validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;

/// Profile fields a caller may save for themselves.
///
/// `role` is the caller's job title (e.g. "Foreman"), not an access role.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileInput {
    #[validate(length(min = 1, max = 200, message = "name must be 1-200 characters"))]
    pub name: String,
    #[validate(length(max = 100, message = "role must be at most 100 characters"))]
    pub role: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(max = 40, message = "phone must be at most 40 characters"))]
    pub phone: String,
}

impl ProfileInput {
    /// Run the derived validators, flattening failures into one message.
    pub fn check(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::InvalidInput("name must not be empty".into()));
        }
        self.validate()
            .map_err(|e| CoreError::InvalidInput(e.to_string()))
    }
}
