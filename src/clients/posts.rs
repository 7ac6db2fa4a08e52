//! Blog posts resource client. The slug is derived from the title when the
//! draft does not set one explicitly.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::post::{Post, PostDraft, PostStatus, slugify};
use crate::errors::{Error, Result};
use crate::transport::Transport;
use std::sync::Arc;

const BASE: &str = "/posts/admin";
const LIST: &str = "/posts/admin/list";

/// Typed client for blog posts.
#[derive(Clone)]
pub struct PostsClient {
    inner: ResourceClient,
}

impl PostsClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of posts (content omitted from list rows).
    pub async fn list(&self, query: &ListQuery) -> Result<Page<Post>> {
        self.inner.list(query).await
    }

    /// Fetches one post with its full body.
    pub async fn get_by_id(&self, id: i64) -> Result<Post> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a post. A missing slug is derived from the title.
    pub async fn create(&self, draft: &PostDraft) -> Result<MutationOutcome> {
        let title = draft.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(Error::Validation {
                field: "title",
                message: "Post title cannot be empty".to_string(),
            });
        }

        let mut draft = draft.clone();
        if draft.slug.as_deref().is_none_or(str::is_empty) {
            draft.slug = Some(slugify(title));
        }
        self.inner.create(&draft).await
    }

    /// Partially updates a post.
    pub async fn update(&self, id: i64, draft: &PostDraft) -> Result<MutationOutcome> {
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a post. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Single-field publication-status mutation.
    pub async fn set_status(&self, id: i64, status: PostStatus) -> Result<MutationOutcome> {
        let draft = PostDraft {
            status: Some(status),
            ..Default::default()
        };
        self.update(id, &draft).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::FakeApi;

    fn fixture() -> (Arc<FakeApi>, PostsClient) {
        let api = FakeApi::new();
        api.mount(BASE, LIST);
        let client = PostsClient::new(Arc::clone(&api) as Arc<dyn Transport>);
        (api, client)
    }

    #[tokio::test]
    async fn test_slug_derived_from_title() -> Result<()> {
        let (api, client) = fixture();
        let draft = PostDraft {
            title: Some("Top 5 Whey Proteins".to_string()),
            status: Some(PostStatus::Draft),
            ..Default::default()
        };
        client.create(&draft).await?;

        let post = api.rows(BASE)[0].clone();
        assert_eq!(post["slug"], "top-5-whey-proteins");
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_slug_wins() -> Result<()> {
        let (api, client) = fixture();
        let draft = PostDraft {
            title: Some("Top 5 Whey Proteins".to_string()),
            slug: Some("whey-guide".to_string()),
            status: Some(PostStatus::Draft),
            ..Default::default()
        };
        client.create(&draft).await?;
        assert_eq!(api.rows(BASE)[0]["slug"], "whey-guide");
        Ok(())
    }
}
