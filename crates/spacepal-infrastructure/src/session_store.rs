//! TOML-backed session persistence.
//!
//! Reads the persisted state once at construction and caches it behind an
//! `RwLock`; every setter writes the file atomically before updating the
//! cache, so a crash never leaves the cache ahead of the disk.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use spacepal_core::error::Result;
use spacepal_core::session::{Selection, SessionState, SessionStore, SelectionStore};
use tokio::sync::RwLock;

use crate::paths::SpacePalPaths;
use crate::storage::AtomicTomlFile;

/// File-backed implementation of [`SessionStore`] and [`SelectionStore`].
#[derive(Clone)]
pub struct TomlSessionStore {
    file: Arc<AtomicTomlFile<SessionState>>,
    cache: Arc<RwLock<SessionState>>,
}

impl TomlSessionStore {
    /// Opens the store at the default session file location.
    pub fn new_default() -> Result<Self> {
        Self::new(SpacePalPaths::session_file()?)
    }

    /// Opens the store at an explicit path. A missing file starts a fresh
    /// logged-out session.
    pub fn new(path: PathBuf) -> Result<Self> {
        let file = AtomicTomlFile::new(path);
        let state = file.load()?.unwrap_or_default();

        Ok(Self {
            file: Arc::new(file),
            cache: Arc::new(RwLock::new(state)),
        })
    }

    /// Applies a mutation to the persisted state, then to the cache.
    async fn mutate<F>(&self, f: F) -> Result<()>
    where
        F: Fn(&mut SessionState) + Send,
    {
        let mut cache = self.cache.write().await;
        self.file.update(cache.clone(), |state| {
            f(state);
            Ok(())
        })?;
        f(&mut cache);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for TomlSessionStore {
    async fn state(&self) -> Result<SessionState> {
        Ok(self.cache.read().await.clone())
    }

    async fn set_credentials(
        &self,
        token: String,
        username: String,
        user_id: String,
        is_admin: bool,
    ) -> Result<()> {
        self.mutate(move |state| {
            state.set_credentials(token.clone(), username.clone(), user_id.clone(), is_admin);
        })
        .await
    }

    async fn clear_credentials(&self) -> Result<()> {
        self.mutate(|state| state.clear_credentials()).await
    }

    async fn access_token(&self) -> Option<String> {
        self.cache.read().await.access_token.clone()
    }

    async fn is_admin(&self) -> bool {
        self.cache.read().await.is_admin
    }
}

#[async_trait]
impl SelectionStore for TomlSessionStore {
    async fn selection(&self) -> Result<Selection> {
        Ok(self.cache.read().await.selection.clone())
    }

    async fn set_space(&self, space_id: String) -> Result<()> {
        self.mutate(move |state| state.selection.space_id = space_id.clone())
            .await
    }

    async fn set_style(&self, style_id: String) -> Result<()> {
        self.mutate(move |state| state.selection.style_id = style_id.clone())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_fresh_store_is_logged_out() {
        let temp_dir = TempDir::new().unwrap();
        let store = TomlSessionStore::new(temp_dir.path().join("session.toml")).unwrap();

        let state = store.state().await.unwrap();
        assert!(!state.is_authenticated());
        assert!(!state.selection.is_complete());
        assert!(store.access_token().await.is_none());
    }

    #[tokio::test]
    async fn test_credentials_survive_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        {
            let store = TomlSessionStore::new(path.clone()).unwrap();
            store
                .set_credentials("tok".into(), "ana".into(), "u1".into(), false)
                .await
                .unwrap();
            store.set_space("sp1".into()).await.unwrap();
            store.set_style("st1".into()).await.unwrap();
        }

        let reopened = TomlSessionStore::new(path).unwrap();
        let state = reopened.state().await.unwrap();
        assert_eq!(state.access_token.as_deref(), Some("tok"));
        assert_eq!(state.username.as_deref(), Some("ana"));
        assert!(state.selection.is_complete());
    }

    #[tokio::test]
    async fn test_logout_keeps_selection() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");

        let store = TomlSessionStore::new(path.clone()).unwrap();
        store
            .set_credentials("tok".into(), "admin".into(), "u1".into(), true)
            .await
            .unwrap();
        store.set_space("sp1".into()).await.unwrap();
        assert!(store.is_admin().await);

        store.clear_credentials().await.unwrap();

        let reopened = TomlSessionStore::new(path).unwrap();
        let state = reopened.state().await.unwrap();
        assert!(!state.is_authenticated());
        assert!(!state.is_admin);
        assert_eq!(state.selection.space_id, "sp1");
    }
}
