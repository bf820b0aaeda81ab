use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::types::{Phone, Token, TokenId};
use crate::error::ApiError;
use crate::infra::crypto::{PasswordHasher, generate_token_id};
use crate::usecase::{found, now_ms};

// ── CreateToken (login) ──────────────────────────────────────────────────────

#[derive(Debug)]
pub struct CreateTokenInput {
    pub phone: Phone,
    pub password: String,
}

pub struct CreateTokenUseCase<U: UserRepository, T: TokenRepository> {
    pub users: U,
    pub tokens: T,
    pub hasher: PasswordHasher,
}

impl<U: UserRepository, T: TokenRepository> CreateTokenUseCase<U, T> {
    pub async fn execute(&self, input: CreateTokenInput) -> Result<Token, ApiError> {
        let user = found(self.users.find(&input.phone).await).ok_or(ApiError::UnknownUser)?;

        if !self.hasher.verify(&input.password, &user.hashed_password) {
            return Err(ApiError::PasswordMismatch);
        }

        let token = Token::issue(generate_token_id(), input.phone, now_ms());
        self.tokens
            .create(&token)
            .await
            .map_err(|source| ApiError::Storage {
                message: "Could not create the new token",
                source,
            })?;
        Ok(token)
    }
}

// ── GetToken ─────────────────────────────────────────────────────────────────

/// Expired tokens are still returned; only the gate and extension care.
pub struct GetTokenUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> GetTokenUseCase<T> {
    pub async fn execute(&self, id: &TokenId) -> Result<Token, ApiError> {
        found(self.tokens.find(id.as_str()).await).ok_or(ApiError::TokenNotFound)
    }
}

// ── ExtendToken ──────────────────────────────────────────────────────────────

pub struct ExtendTokenUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> ExtendTokenUseCase<T> {
    pub async fn execute(&self, id: &TokenId) -> Result<(), ApiError> {
        let mut token =
            found(self.tokens.find(id.as_str()).await).ok_or(ApiError::TokenDoesNotExist)?;

        let now = now_ms();
        if token.is_expired(now) {
            return Err(ApiError::TokenExpired);
        }
        token.extend(now);

        self.tokens
            .update(&token)
            .await
            .map_err(|source| ApiError::Storage {
                message: "Could not update the token's expiration",
                source,
            })
    }
}

// ── DeleteToken ──────────────────────────────────────────────────────────────

pub struct DeleteTokenUseCase<T: TokenRepository> {
    pub tokens: T,
}

impl<T: TokenRepository> DeleteTokenUseCase<T> {
    pub async fn execute(&self, id: &TokenId) -> Result<(), ApiError> {
        if found(self.tokens.find(id.as_str()).await).is_none() {
            return Err(ApiError::UnknownToken);
        }
        self.tokens
            .delete(id)
            .await
            .map_err(|source| ApiError::Storage {
                message: "Could not delete the specified token",
                source,
            })
    }
}
