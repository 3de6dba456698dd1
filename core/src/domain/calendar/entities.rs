use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's calendar, identified by the owner's email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Calendar {
    pub user_email: String,
}

impl Calendar {
    pub fn new(user_email: String) -> Self {
        Self { user_email }
    }
}
