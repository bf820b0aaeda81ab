use crate::infra::crypto::PasswordHasher;
use crate::infra::store::{FileStore, FsTokenRepository, FsUserRepository};

/// Shared application state passed to every handler via axum `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: FileStore,
    pub hasher: PasswordHasher,
}

impl AppState {
    pub fn user_repo(&self) -> FsUserRepository {
        FsUserRepository {
            store: self.store.clone(),
        }
    }

    pub fn token_repo(&self) -> FsTokenRepository {
        FsTokenRepository {
            store: self.store.clone(),
        }
    }
}
