//! Homepage banner entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Banner record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub id: i64,
    pub name: String,
    /// Image path (relative or absolute)
    #[serde(default)]
    pub image: Option<String>,
    /// Click-through target
    #[serde(default)]
    pub link: Option<String>,
    /// Display slot on the homepage, 1-indexed
    pub position: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Create/update dto; unset fields stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BannerDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl Banner {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> BannerDraft {
        BannerDraft {
            name: Some(self.name.clone()),
            image: self.image.clone(),
            link: self.link.clone(),
            position: Some(self.position),
            is_active: Some(self.is_active),
        }
    }
}
