use std::fmt;
use std::sync::Arc;

use hmac::{Hmac, Mac};
use rand::RngExt;
use sha2::Sha256;

use crate::domain::types::{TOKEN_ID_LEN, TokenId};

type HmacSha256 = Hmac<Sha256>;

/// Charset for generating token ids (lowercase alphanumeric).
const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Keyed password hash: hex-encoded HMAC-SHA256 under the configured secret.
#[derive(Clone)]
pub struct PasswordHasher {
    secret: Arc<str>,
}

impl PasswordHasher {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// `None` for input that is empty after trimming.
    pub fn hash(&self, plain: &str) -> Option<String> {
        if plain.trim().is_empty() {
            return None;
        }
        let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes()).ok()?;
        mac.update(plain.as_bytes());
        Some(hex::encode(mac.finalize().into_bytes()))
    }

    pub fn verify(&self, plain: &str, hashed: &str) -> bool {
        self.hash(plain).is_some_and(|h| h == hashed)
    }
}

impl fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHasher").finish_non_exhaustive()
    }
}

pub fn generate_token_id() -> TokenId {
    let mut rng = rand::rng();
    let raw: String = (0..TOKEN_ID_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect();
    TokenId::parse(&raw).expect("generated id has the token id length")
}
