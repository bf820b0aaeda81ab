//! File-backed Record Store.
//!
//! One JSON document per record at `<base>/<collection>/<id>.json`. There is
//! no locking: concurrent writers to the same key race at the file layer.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::domain::repository::{StoreError, TokenRepository, UserRepository};
use crate::domain::types::{Phone, Token, TokenId, User};

pub const USERS: &str = "users";
pub const TOKENS: &str = "tokens";

#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Create the collection directories. Called once at startup.
    pub async fn ensure_collections(&self, collections: &[&str]) -> Result<(), StoreError> {
        for collection in collections {
            fs::create_dir_all(self.base_dir.join(collection)).await?;
        }
        Ok(())
    }

    fn record_path(&self, collection: &str, id: &str) -> Result<PathBuf, StoreError> {
        let unsafe_key = id.is_empty()
            || id.starts_with('.')
            || id.contains(['/', '\\', '\0']);
        if unsafe_key {
            return Err(StoreError::InvalidKey(id.to_owned()));
        }
        Ok(self.base_dir.join(collection).join(format!("{id}.json")))
    }

    pub async fn create<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        record: &T,
    ) -> Result<(), StoreError> {
        let path = self.record_path(collection, id)?;
        let bytes = serde_json::to_vec(record)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StoreError::AlreadyExists,
                _ => StoreError::Io(e),
            })?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn read<T: DeserializeOwned>(
        &self,
        collection: &str,
        id: &str,
    ) -> Result<Option<T>, StoreError> {
        let path = self.record_path(collection, id)?;
        match fs::read(&path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update<T: Serialize>(
        &self,
        collection: &str,
        id: &str,
        record: &T,
    ) -> Result<(), StoreError> {
        let path = self.record_path(collection, id)?;
        let bytes = serde_json::to_vec(record)?;
        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
            .await
            .map_err(not_found_or_io)?;
        file.write_all(&bytes).await?;
        file.flush().await?;
        Ok(())
    }

    pub async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        let path = self.record_path(collection, id)?;
        fs::remove_file(&path).await.map_err(not_found_or_io)
    }
}

fn not_found_or_io(e: std::io::Error) -> StoreError {
    match e.kind() {
        ErrorKind::NotFound => StoreError::NotFound,
        _ => StoreError::Io(e),
    }
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FsUserRepository {
    pub store: FileStore,
}

impl UserRepository for FsUserRepository {
    async fn find(&self, phone: &Phone) -> Result<Option<User>, StoreError> {
        self.store.read(USERS, phone.as_str()).await
    }

    async fn create(&self, user: &User) -> Result<(), StoreError> {
        self.store.create(USERS, user.phone.as_str(), user).await
    }

    async fn update(&self, user: &User) -> Result<(), StoreError> {
        self.store.update(USERS, user.phone.as_str(), user).await
    }

    async fn delete(&self, phone: &Phone) -> Result<(), StoreError> {
        self.store.delete(USERS, phone.as_str()).await
    }
}

// ── Token repository ─────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct FsTokenRepository {
    pub store: FileStore,
}

impl TokenRepository for FsTokenRepository {
    async fn find(&self, id: &str) -> Result<Option<Token>, StoreError> {
        self.store.read(TOKENS, id).await
    }

    async fn create(&self, token: &Token) -> Result<(), StoreError> {
        self.store.create(TOKENS, token.id.as_str(), token).await
    }

    async fn update(&self, token: &Token) -> Result<(), StoreError> {
        self.store.update(TOKENS, token.id.as_str(), token).await
    }

    async fn delete(&self, id: &TokenId) -> Result<(), StoreError> {
        self.store.delete(TOKENS, id.as_str()).await
    }
}
