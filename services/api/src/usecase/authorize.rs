use crate::domain::repository::TokenRepository;
use crate::domain::types::Phone;
use crate::usecase::{found, now_ms};

/// Authorization gate: is `token_id` an existing, unexpired token bound to
/// `phone`? Every failure reason collapses into `false`.
pub async fn verify_token<T: TokenRepository>(
    tokens: &T,
    token_id: Option<&str>,
    phone: &Phone,
) -> bool {
    verify_token_at(tokens, token_id, phone, now_ms()).await
}

/// [`verify_token`] against an explicit clock reading.
pub async fn verify_token_at<T: TokenRepository>(
    tokens: &T,
    token_id: Option<&str>,
    phone: &Phone,
    now_ms: i64,
) -> bool {
    let Some(token_id) = token_id else {
        return false;
    };
    found(tokens.find(token_id).await).is_some_and(|token| token.is_valid_for(phone, now_ms))
}
