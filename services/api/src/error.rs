use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::repository::StoreError;

/// Every failure a users/tokens request can end in.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Missing required fields")]
    MissingRequiredFields,
    #[error("Missing required field")]
    MissingRequiredField,
    #[error("Missing fields to update")]
    NothingToUpdate,
    #[error("Missing required fields or invalid fields")]
    InvalidFields,
    #[error("A user with that phone number already exists")]
    UserAlreadyExists,
    #[error("The specified user does not exist")]
    UserDoesNotExist,
    #[error("Could not find the specified user")]
    UnknownUser,
    #[error("Password did not match the specified user's stored password")]
    PasswordMismatch,
    #[error("Specified token does not exist")]
    TokenDoesNotExist,
    #[error("Could not find the specified token")]
    UnknownToken,
    #[error("The token has already expired and cannot be extended")]
    TokenExpired,
    #[error("Could not create the new user")]
    UserNotCreated(#[source] StoreError),
    #[error("Missing required token in header, or token is invalid")]
    Unauthorized,
    #[error("user not found")]
    UserNotFound,
    #[error("token not found")]
    TokenNotFound,
    #[error("Could not hash the user's password")]
    HashFailed,
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingRequiredFields => "MISSING_REQUIRED_FIELDS",
            Self::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            Self::NothingToUpdate => "NOTHING_TO_UPDATE",
            Self::InvalidFields => "INVALID_FIELDS",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::UserDoesNotExist => "USER_DOES_NOT_EXIST",
            Self::UnknownUser => "UNKNOWN_USER",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::TokenDoesNotExist => "TOKEN_DOES_NOT_EXIST",
            Self::UnknownToken => "UNKNOWN_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::UserNotCreated(_) => "USER_NOT_CREATED",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::TokenNotFound => "TOKEN_NOT_FOUND",
            Self::HashFailed => "HASH_FAILED",
            Self::Storage { .. } => "STORAGE",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingRequiredFields
            | Self::MissingRequiredField
            | Self::NothingToUpdate
            | Self::InvalidFields
            | Self::UserAlreadyExists
            | Self::UserDoesNotExist
            | Self::UnknownUser
            | Self::PasswordMismatch
            | Self::TokenDoesNotExist
            | Self::UnknownToken
            | Self::TokenExpired
            | Self::UserNotCreated(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::TokenNotFound => StatusCode::NOT_FOUND,
            Self::HashFailed | Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Client mistakes are not faults; only storage and hashing failures
        // are logged, with their cause.
        match &self {
            Self::UserNotCreated(source) | Self::Storage { source, .. } => {
                tracing::error!(error = %source, kind = self.kind(), "{self}");
            }
            Self::HashFailed => tracing::error!(kind = self.kind(), "{self}"),
            _ => {}
        }
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status(), axum::Json(body)).into_response()
    }
}
