//! Admin user account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Role string as the server reports it (e.g. "admin", "staff")
    pub role: String,
    pub is_active: bool,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create/update dto; unset fields stay unchanged server-side.
/// `password` is only sent on create or explicit reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl User {
    /// Copies the row's editable fields into a decoupled draft. The password
    /// field starts empty; it is never round-tripped from the server.
    #[must_use]
    pub fn draft(&self) -> UserDraft {
        UserDraft {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            password: None,
            role: Some(self.role.clone()),
            phone: self.phone.clone(),
            is_active: Some(self.is_active),
        }
    }
}
