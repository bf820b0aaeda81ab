use crate::domain::repository::{TokenRepository, UserRepository};
use crate::domain::types::{Phone, User};
use crate::error::ApiError;
use crate::infra::crypto::PasswordHasher;
use crate::usecase::authorize::verify_token;
use crate::usecase::found;

// ── CreateUser ───────────────────────────────────────────────────────────────

/// Terms acceptance is checked while decoding; only accepted requests get here.
#[derive(Debug)]
pub struct CreateUserInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    pub password: String,
}

pub struct CreateUserUseCase<U: UserRepository> {
    pub users: U,
    pub hasher: PasswordHasher,
}

impl<U: UserRepository> CreateUserUseCase<U> {
    pub async fn execute(&self, input: CreateUserInput) -> Result<(), ApiError> {
        if found(self.users.find(&input.phone).await).is_some() {
            return Err(ApiError::UserAlreadyExists);
        }

        let hashed_password = self
            .hasher
            .hash(&input.password)
            .ok_or(ApiError::HashFailed)?;

        let user = User {
            first_name: input.first_name,
            last_name: input.last_name,
            phone: input.phone,
            hashed_password,
            tos_agreement: true,
        };
        self.users
            .create(&user)
            .await
            .map_err(ApiError::UserNotCreated)
    }
}

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<U: UserRepository, T: TokenRepository> {
    pub users: U,
    pub tokens: T,
}

impl<U: UserRepository, T: TokenRepository> GetUserUseCase<U, T> {
    pub async fn execute(&self, phone: &Phone, token: Option<&str>) -> Result<User, ApiError> {
        if !verify_token(&self.tokens, token, phone).await {
            return Err(ApiError::Unauthorized);
        }
        found(self.users.find(phone).await).ok_or(ApiError::UserNotFound)
    }
}

// ── UpdateUser ───────────────────────────────────────────────────────────────

/// At least one of the optional fields is set; decoding rejects the rest.
#[derive(Debug)]
pub struct UpdateUserInput {
    pub phone: Phone,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateUserUseCase<U: UserRepository, T: TokenRepository> {
    pub users: U,
    pub tokens: T,
    pub hasher: PasswordHasher,
}

impl<U: UserRepository, T: TokenRepository> UpdateUserUseCase<U, T> {
    pub async fn execute(&self, input: UpdateUserInput, token: Option<&str>) -> Result<(), ApiError> {
        if !verify_token(&self.tokens, token, &input.phone).await {
            return Err(ApiError::Unauthorized);
        }

        let mut user =
            found(self.users.find(&input.phone).await).ok_or(ApiError::UserDoesNotExist)?;

        if let Some(first_name) = input.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = input.last_name {
            user.last_name = last_name;
        }
        if let Some(password) = input.password {
            user.hashed_password = self.hasher.hash(&password).ok_or(ApiError::HashFailed)?;
        }

        self.users
            .update(&user)
            .await
            .map_err(|source| ApiError::Storage {
                message: "Could not update the user",
                source,
            })
    }
}

// ── DeleteUser ───────────────────────────────────────────────────────────────

pub struct DeleteUserUseCase<U: UserRepository, T: TokenRepository> {
    pub users: U,
    pub tokens: T,
}

impl<U: UserRepository, T: TokenRepository> DeleteUserUseCase<U, T> {
    pub async fn execute(&self, phone: &Phone, token: Option<&str>) -> Result<(), ApiError> {
        if !verify_token(&self.tokens, token, phone).await {
            return Err(ApiError::Unauthorized);
        }

        if found(self.users.find(phone).await).is_none() {
            return Err(ApiError::UnknownUser);
        }

        // TODO: delete the user's tokens too; they stay on disk, unusable only
        // once they expire.
        self.users
            .delete(phone)
            .await
            .map_err(|source| ApiError::Storage {
                message: "Could not delete the specified user",
                source,
            })
    }
}
