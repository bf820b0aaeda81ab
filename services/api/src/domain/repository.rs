#![allow(async_fn_in_trait)]

use crate::domain::types::{Phone, Token, TokenId, User};

/// Record Store faults.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("record already exists")]
    AlreadyExists,
    #[error("record not found")]
    NotFound,
    #[error("invalid record key {0:?}")]
    InvalidKey(String),
    #[error("record i/o failed")]
    Io(#[from] std::io::Error),
    #[error("record is not valid json")]
    Codec(#[from] serde_json::Error),
}

/// Repository for user records, keyed by phone number.
pub trait UserRepository: Send + Sync {
    /// `Ok(None)` when no record exists for `phone`.
    async fn find(&self, phone: &Phone) -> Result<Option<User>, StoreError>;

    /// Fails with `AlreadyExists` if a record for the phone is present.
    async fn create(&self, user: &User) -> Result<(), StoreError>;

    /// Fails with `NotFound` if no record for the phone is present.
    async fn update(&self, user: &User) -> Result<(), StoreError>;

    async fn delete(&self, phone: &Phone) -> Result<(), StoreError>;
}

/// Repository for token records, keyed by token id.
pub trait TokenRepository: Send + Sync {
    /// Looks up by the raw id as received, which need not be well-formed.
    async fn find(&self, id: &str) -> Result<Option<Token>, StoreError>;

    async fn create(&self, token: &Token) -> Result<(), StoreError>;

    async fn update(&self, token: &Token) -> Result<(), StoreError>;

    async fn delete(&self, id: &TokenId) -> Result<(), StoreError>;
}
