use axum::{Json, extract::State};
use serde::Serialize;

use restful_core::extract::{Fields, JsonPayload, QueryFields};
use restful_core::response::EmptyBody;

use crate::domain::types::{Phone, User};
use crate::error::ApiError;
use crate::handlers::extract::TokenHeader;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserInput, CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, UpdateUserInput,
    UpdateUserUseCase,
};
use crate::validate;

// ── Decoding ─────────────────────────────────────────────────────────────────

impl TryFrom<&Fields> for CreateUserInput {
    type Error = ApiError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        let first_name = validate::text(fields, "firstName");
        let last_name = validate::text(fields, "lastName");
        let phone = validate::phone(fields, "phone");
        let password = validate::text(fields, "password");
        let tos_agreement = validate::is_true(fields, "tosAgreement");

        match (first_name, last_name, phone, password, tos_agreement) {
            (Some(first_name), Some(last_name), Some(phone), Some(password), true) => Ok(Self {
                first_name,
                last_name,
                phone,
                password,
            }),
            _ => Err(ApiError::MissingRequiredFields),
        }
    }
}

impl TryFrom<&Fields> for UpdateUserInput {
    type Error = ApiError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        let phone = validate::phone(fields, "phone").ok_or(ApiError::MissingRequiredField)?;
        let input = Self {
            phone,
            first_name: validate::text(fields, "firstName"),
            last_name: validate::text(fields, "lastName"),
            password: validate::text(fields, "password"),
        };
        if input.first_name.is_none() && input.last_name.is_none() && input.password.is_none() {
            return Err(ApiError::NothingToUpdate);
        }
        Ok(input)
    }
}

fn phone_from_query(query: &Fields) -> Result<Phone, ApiError> {
    validate::phone(query, "phone").ok_or(ApiError::MissingRequiredField)
}

// ── POST /users ──────────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<EmptyBody>, ApiError> {
    let input = CreateUserInput::try_from(&payload)?;
    let usecase = CreateUserUseCase {
        users: state.user_repo(),
        hasher: state.hasher.clone(),
    };
    usecase.execute(input).await?;
    Ok(Json(EmptyBody {}))
}

// ── GET /users?phone= ────────────────────────────────────────────────────────

/// A user as returned to clients: everything but the password hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub phone: Phone,
    pub tos_agreement: bool,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            tos_agreement: user.tos_agreement,
        }
    }
}

pub async fn get_user(
    State(state): State<AppState>,
    token: TokenHeader,
    QueryFields(query): QueryFields,
) -> Result<Json<UserResponse>, ApiError> {
    let phone = phone_from_query(&query)?;
    let usecase = GetUserUseCase {
        users: state.user_repo(),
        tokens: state.token_repo(),
    };
    let user = usecase.execute(&phone, token.as_deref()).await?;
    Ok(Json(user.into()))
}

// ── PUT /users ───────────────────────────────────────────────────────────────

pub async fn update_user(
    State(state): State<AppState>,
    token: TokenHeader,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<EmptyBody>, ApiError> {
    let input = UpdateUserInput::try_from(&payload)?;
    let usecase = UpdateUserUseCase {
        users: state.user_repo(),
        tokens: state.token_repo(),
        hasher: state.hasher.clone(),
    };
    usecase.execute(input, token.as_deref()).await?;
    Ok(Json(EmptyBody {}))
}

// ── DELETE /users?phone= ─────────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    token: TokenHeader,
    QueryFields(query): QueryFields,
) -> Result<Json<EmptyBody>, ApiError> {
    let phone = phone_from_query(&query)?;
    let usecase = DeleteUserUseCase {
        users: state.user_repo(),
        tokens: state.token_repo(),
    };
    usecase.execute(&phone, token.as_deref()).await?;
    Ok(Json(EmptyBody {}))
}
