//! Brand entity. Active flag is a plain JSON boolean here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Brand record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub logo: Option<String>,
    pub is_active: bool,
    /// Server-computed product count, present in list rows
    #[serde(default)]
    pub product_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Create/update dto; unset fields stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Brand {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> BrandDraft {
        BrandDraft {
            name: Some(self.name.clone()),
            logo: self.logo.clone(),
            is_active: Some(self.is_active),
        }
    }
}
