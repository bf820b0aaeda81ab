use axum::{Json, extract::State};

use restful_core::extract::{Fields, JsonPayload, QueryFields};
use restful_core::response::EmptyBody;

use crate::domain::types::{Token, TokenId};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::token::{
    CreateTokenInput, CreateTokenUseCase, DeleteTokenUseCase, ExtendTokenUseCase,
    GetTokenUseCase,
};
use crate::validate;

// ── Decoding ─────────────────────────────────────────────────────────────────

impl TryFrom<&Fields> for CreateTokenInput {
    type Error = ApiError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        match (
            validate::phone(fields, "phone"),
            validate::text(fields, "password"),
        ) {
            (Some(phone), Some(password)) => Ok(Self { phone, password }),
            _ => Err(ApiError::MissingRequiredFields),
        }
    }
}

/// `PUT /tokens` body: the id plus an explicit `extend: true`.
fn decode_extend(fields: &Fields) -> Result<TokenId, ApiError> {
    match validate::token_id(fields, "id") {
        Some(id) if validate::is_true(fields, "extend") => Ok(id),
        _ => Err(ApiError::InvalidFields),
    }
}

fn id_from_query(query: &Fields) -> Result<TokenId, ApiError> {
    validate::token_id(query, "id").ok_or(ApiError::MissingRequiredField)
}

// ── POST /tokens ─────────────────────────────────────────────────────────────

pub async fn create_token(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<Token>, ApiError> {
    let input = CreateTokenInput::try_from(&payload)?;
    let usecase = CreateTokenUseCase {
        users: state.user_repo(),
        tokens: state.token_repo(),
        hasher: state.hasher.clone(),
    };
    let token = usecase.execute(input).await?;
    Ok(Json(token))
}

// ── GET /tokens?id= ──────────────────────────────────────────────────────────

pub async fn get_token(
    State(state): State<AppState>,
    QueryFields(query): QueryFields,
) -> Result<Json<Token>, ApiError> {
    let id = id_from_query(&query)?;
    let usecase = GetTokenUseCase {
        tokens: state.token_repo(),
    };
    Ok(Json(usecase.execute(&id).await?))
}

// ── PUT /tokens ──────────────────────────────────────────────────────────────

pub async fn extend_token(
    State(state): State<AppState>,
    JsonPayload(payload): JsonPayload,
) -> Result<Json<EmptyBody>, ApiError> {
    let id = decode_extend(&payload)?;
    let usecase = ExtendTokenUseCase {
        tokens: state.token_repo(),
    };
    usecase.execute(&id).await?;
    Ok(Json(EmptyBody {}))
}

// ── DELETE /tokens?id= ───────────────────────────────────────────────────────

pub async fn delete_token(
    State(state): State<AppState>,
    QueryFields(query): QueryFields,
) -> Result<Json<EmptyBody>, ApiError> {
    let id = id_from_query(&query)?;
    let usecase = DeleteTokenUseCase {
        tokens: state.token_repo(),
    };
    usecase.execute(&id).await?;
    Ok(Json(EmptyBody {}))
}
