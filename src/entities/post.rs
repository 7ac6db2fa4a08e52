//! Blog post entity.
//!
//! Posts carry a `"draft"`/`"published"` string status, and their slug is
//! derived client-side from the title via [`slugify`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Publication status as the server encodes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
}

/// Blog post record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    /// Full body, absent in list rows
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub status: PostStatus,
    #[serde(default)]
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update dto; unset fields stay unchanged server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PostDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl Post {
    /// Copies the row's editable fields into a decoupled draft.
    #[must_use]
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: Some(self.title.clone()),
            slug: Some(self.slug.clone()),
            excerpt: self.excerpt.clone(),
            content: self.content.clone(),
            image: self.image.clone(),
            status: Some(self.status),
        }
    }
}

/// Derives a URL slug from a title: lowercase ASCII alphanumerics with single
/// hyphens between words, everything else dropped.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // suppress a leading hyphen
    for ch in title.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Top 5 Whey Proteins"), "top-5-whey-proteins");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("Creatine -- a primer!"), "creatine-a-primer");
    }

    #[test]
    fn test_slugify_trims_edges() {
        assert_eq!(slugify("  BCAA?  "), "bcaa");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_slugify_drops_non_ascii() {
        // Non-ASCII letters are dropped rather than transliterated
        assert_eq!(slugify("Tết Sale 2024"), "t-t-sale-2024");
    }
}
