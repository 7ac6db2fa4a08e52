//! Injected session state: auth token and current admin profile.
//!
//! Built once at startup and shared by reference with whatever issues
//! authenticated requests. This replaces the ambient token-in-storage global
//! of a browser app with an explicit, injectable store.

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Profile of the signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminProfile {
    /// Unique identifier of the admin account
    pub id: i64,
    /// Login email
    pub email: String,
    /// Display name
    pub name: String,
    /// Role string as the server reports it (e.g. "admin", "staff")
    pub role: String,
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<AdminProfile>,
}

/// Shared session store. All methods are async because the state sits behind
/// a `tokio` lock; none of them block.
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<SessionState>,
}

impl SessionStore {
    /// Creates an empty session (no token, no profile).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current auth token, if one is set.
    pub async fn token(&self) -> Option<String> {
        self.inner.read().await.token.clone()
    }

    /// Replaces the auth token.
    pub async fn set_token(&self, token: impl Into<String>) {
        self.inner.write().await.token = Some(token.into());
    }

    /// Returns the signed-in admin's profile, if known.
    pub async fn current_user(&self) -> Option<AdminProfile> {
        self.inner.read().await.user.clone()
    }

    /// Records the signed-in admin's profile.
    pub async fn set_current_user(&self, user: AdminProfile) {
        self.inner.write().await.user = Some(user);
    }

    /// Clears both token and profile (sign-out).
    pub async fn clear(&self) {
        let mut state = self.inner.write().await;
        state.token = None;
        state.user = None;
    }
}
