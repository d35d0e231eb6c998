use std::sync::RwLock;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::Session;

/// Explicit holder for the auth session, injected into services instead of
/// being read as ambient global state.
///
/// Initialized once at startup (optionally from persisted storage), written
/// on login/logout, read by the HTTP layer on every request. A 401 response
/// clears it through [`clear`](SessionStore::clear).
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    /// Init-on-start from whatever the embedding app persisted, if anything
    pub fn restore(session: Option<Session>) -> Self {
        Self {
            inner: RwLock::new(session),
        }
    }

    pub fn set(&self, session: Session) {
        *self.write_guard() = Some(session);
    }

    pub fn clear(&self) {
        *self.write_guard() = None;
    }

    pub fn current(&self) -> Option<Session> {
        self.read_guard().clone()
    }

    pub fn token(&self) -> Option<String> {
        self.read_guard().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read_guard().is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.read_guard().as_ref().is_some_and(Session::is_admin)
    }

    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AppError::Forbidden(
                "This operation requires an admin session".to_string(),
            ))
        }
    }

    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
