//! Admin users resource client.
//!
//! Users create at the non-standard `/users/admin/createUser` path; everything
//! else follows the usual shape.

use crate::clients::resource::{EntityId, ListQuery, MutationOutcome, Page, ResourceClient};
use crate::entities::user::{User, UserDraft};
use crate::errors::{Error, Result};
use crate::screen::ListResource;
use crate::transport::Transport;
use async_trait::async_trait;
use std::sync::Arc;

const BASE: &str = "/users/admin";
const LIST: &str = "/users/admin/list/all";
const CREATE: &str = "/users/admin/createUser";

/// Typed client for admin user accounts.
#[derive(Clone)]
pub struct UsersClient {
    inner: ResourceClient,
}

impl UsersClient {
    /// Creates the client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self {
            inner: ResourceClient::new(transport, BASE, LIST),
        }
    }

    /// Fetches one page of users.
    pub async fn list(&self, query: &ListQuery) -> Result<Page<User>> {
        self.inner.list(query).await
    }

    /// Fetches one user; a missing id surfaces as `NotFound`.
    pub async fn get_by_id(&self, id: i64) -> Result<User> {
        self.inner.get_by_id(&EntityId::Num(id)).await
    }

    /// Creates a user after presence and email-shape checks.
    pub async fn create(&self, draft: &UserDraft) -> Result<MutationOutcome> {
        validate_create(draft)?;
        self.inner.create_at(CREATE, draft).await
    }

    /// Partially updates a user.
    pub async fn update(&self, id: i64, draft: &UserDraft) -> Result<MutationOutcome> {
        if let Some(email) = &draft.email {
            validate_email(email)?;
        }
        self.inner.update(&EntityId::Num(id), draft).await
    }

    /// Deletes a user. Not idempotent.
    pub async fn remove(&self, id: i64) -> Result<MutationOutcome> {
        self.inner.remove(&EntityId::Num(id)).await
    }

    /// Fetches the current flag and writes back its inverse.
    pub async fn toggle_active(&self, id: i64) -> Result<MutationOutcome> {
        let current = self.get_by_id(id).await?;
        let draft = UserDraft {
            is_active: Some(!current.is_active),
            ..Default::default()
        };
        self.update(id, &draft).await
    }
}

/// Cheap shape check only: one `@` with something on both sides. The server
/// remains the authority on deliverability.
fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    let valid = trimmed
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
    if valid {
        Ok(())
    } else {
        Err(Error::Validation {
            field: "email",
            message: format!("Not a valid email address: {email}"),
        })
    }
}

fn validate_create(draft: &UserDraft) -> Result<()> {
    let name = draft.name.as_deref().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(Error::Validation {
            field: "name",
            message: "User name cannot be empty".to_string(),
        });
    }
    match &draft.email {
        Some(email) => validate_email(email)?,
        None => {
            return Err(Error::Validation {
                field: "email",
                message: "Email is required".to_string(),
            });
        }
    }
    Ok(())
}

#[async_trait]
impl ListResource for UsersClient {
    type Item = User;
    type Draft = UserDraft;

    async fn fetch_page(&self, query: &ListQuery) -> Result<Page<User>> {
        self.list(query).await
    }

    async fn create_item(&self, draft: &UserDraft) -> Result<MutationOutcome> {
        self.create(draft).await
    }

    async fn update_item(&self, id: &EntityId, draft: &UserDraft) -> Result<MutationOutcome> {
        self.inner.update(id, draft).await
    }

    async fn remove_item(&self, id: &EntityId) -> Result<MutationOutcome> {
        self.inner.remove(id).await
    }

    fn id_of(item: &User) -> EntityId {
        EntityId::Num(item.id)
    }

    fn draft_of(item: &User) -> UserDraft {
        item.draft()
    }

    fn validate_draft(draft: &UserDraft) -> Result<()> {
        validate_create(draft)
    }
}
