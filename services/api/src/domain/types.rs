use serde::{Deserialize, Serialize};

/// Phone numbers are exactly this many characters.
pub const PHONE_LEN: usize = 11;

/// Token identifiers are exactly this many characters.
pub const TOKEN_ID_LEN: usize = 20;

/// Token lifetime, from issue or from the latest extension, in milliseconds.
pub const TOKEN_TTL_MS: i64 = 60 * 60 * 1000;

/// A user's phone number and primary key. Always trimmed, exactly
/// [`PHONE_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (trimmed.chars().count() == PHONE_LEN).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A token's identifier and primary key. Always trimmed, exactly
/// [`TOKEN_ID_LEN`] characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        (trimmed.chars().count() == TOKEN_ID_LEN).then(|| Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Persisted user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    pub hashed_password: String,
    pub tos_agreement: bool,
}

/// Persisted session token. Bound to a phone number by value; nothing
/// enforces that the user still exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub phone: Phone,
    pub id: TokenId,
    /// Absolute expiry, milliseconds since the Unix epoch.
    pub expires: i64,
}

impl Token {
    pub fn issue(id: TokenId, phone: Phone, now_ms: i64) -> Self {
        Self {
            phone,
            id,
            expires: now_ms + TOKEN_TTL_MS,
        }
    }

    pub fn is_expired(&self, now_ms: i64) -> bool {
        self.expires <= now_ms
    }

    /// Unexpired and bound to `phone`.
    pub fn is_valid_for(&self, phone: &Phone, now_ms: i64) -> bool {
        self.phone == *phone && !self.is_expired(now_ms)
    }

    pub fn extend(&mut self, now_ms: i64) {
        self.expires = now_ms + TOKEN_TTL_MS;
    }
}
