//! Category entity.
//!
//! Categories encode their active flag as the integer `0`/`1` on the wire,
//! handled by [`IntBool`](crate::entities::IntBool).

use crate::entities::IntBool;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Wire encoding is `0` or `1`, not a JSON boolean
    pub is_active: IntBool,
    /// Server-computed product count, present in list rows
    #[serde(default)]
    pub product_count: u64,
    pub created_at: DateTime<Utc>,
}

/// Create/update dto; unset fields stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<IntBool>,
}

impl Category {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: Some(self.name.clone()),
            description: self.description.clone(),
            is_active: Some(self.is_active),
        }
    }
}
