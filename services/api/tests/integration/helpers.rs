use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use chrono::Utc;

use restful_api::domain::repository::{StoreError, TokenRepository, UserRepository};
use restful_api::domain::types::{Phone, TOKEN_TTL_MS, Token, TokenId, User};
use restful_api::infra::crypto::PasswordHasher;

fn disk_full() -> StoreError {
    StoreError::Io(io::Error::other("disk full"))
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

/// In-memory user store. Clones share the same records, so a test can keep a
/// handle for inspection after moving one into a use case.
#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<HashMap<String, User>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        let users = users
            .into_iter()
            .map(|u| (u.phone.as_str().to_owned(), u))
            .collect();
        Self {
            users: Arc::new(Mutex::new(users)),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, phone: &Phone) -> Option<User> {
        self.users.lock().unwrap().get(phone.as_str()).cloned()
    }
}

impl UserRepository for MockUserRepo {
    async fn find(&self, phone: &Phone) -> Result<Option<User>, StoreError> {
        if self.fail_reads {
            return Err(StoreError::Codec(
                serde_json::from_str::<User>("{").unwrap_err(),
            ));
        }
        Ok(self.get(phone))
    }

    async fn create(&self, user: &User) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(disk_full());
        }
        let mut users = self.users.lock().unwrap();
        let key = user.phone.as_str().to_owned();
        if users.contains_key(&key) {
            return Err(StoreError::AlreadyExists);
        }
        users.insert(key, user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(disk_full());
        }
        let mut users = self.users.lock().unwrap();
        match users.get_mut(user.phone.as_str()) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, phone: &Phone) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(disk_full());
        }
        self.users
            .lock()
            .unwrap()
            .remove(phone.as_str())
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

// ── MockTokenRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockTokenRepo {
    pub tokens: Arc<Mutex<HashMap<String, Token>>>,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MockTokenRepo {
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .map(|t| (t.id.as_str().to_owned(), t))
            .collect();
        Self {
            tokens: Arc::new(Mutex::new(tokens)),
            ..Self::default()
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<Token> {
        self.tokens.lock().unwrap().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.tokens.lock().unwrap().len()
    }
}

impl TokenRepository for MockTokenRepo {
    async fn find(&self, id: &str) -> Result<Option<Token>, StoreError> {
        if self.fail_reads {
            return Err(disk_full());
        }
        Ok(self.get(id))
    }

    async fn create(&self, token: &Token) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(disk_full());
        }
        let mut tokens = self.tokens.lock().unwrap();
        let key = token.id.as_str().to_owned();
        if tokens.contains_key(&key) {
            return Err(StoreError::AlreadyExists);
        }
        tokens.insert(key, token.clone());
        Ok(())
    }

    async fn update(&self, token: &Token) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(disk_full());
        }
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get_mut(token.id.as_str()) {
            Some(existing) => {
                *existing = token.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: &TokenId) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(disk_full());
        }
        self.tokens
            .lock()
            .unwrap()
            .remove(id.as_str())
            .map(|_| ())
            .ok_or(StoreError::NotFound)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub const TEST_HASHING_SECRET: &str = "test-hashing-secret-for-tests-only";
pub const TEST_PASSWORD: &str = "p";

pub fn test_hasher() -> PasswordHasher {
    PasswordHasher::new(TEST_HASHING_SECRET)
}

pub fn test_phone() -> Phone {
    Phone::parse("12345678901").unwrap()
}

pub fn other_phone() -> Phone {
    Phone::parse("10987654321").unwrap()
}

pub fn test_user() -> User {
    User {
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
        phone: test_phone(),
        hashed_password: test_hasher().hash(TEST_PASSWORD).unwrap(),
        tos_agreement: true,
    }
}

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn token_id(raw: &str) -> TokenId {
    TokenId::parse(raw).unwrap()
}

/// Bound to `phone`, 30 minutes left.
pub fn active_token(phone: Phone) -> Token {
    Token {
        phone,
        id: token_id("activetoken000000001"),
        expires: now_ms() + TOKEN_TTL_MS / 2,
    }
}

/// Bound to `phone`, expired a minute ago.
pub fn expired_token(phone: Phone) -> Token {
    Token {
        phone,
        id: token_id("expiredtoken00000001"),
        expires: now_ms() - 60_000,
    }
}
