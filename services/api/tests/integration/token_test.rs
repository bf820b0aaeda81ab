use restful_api::domain::types::{TOKEN_ID_LEN, TOKEN_TTL_MS};
use restful_api::error::ApiError;
use restful_api::usecase::token::{
    CreateTokenInput, CreateTokenUseCase, DeleteTokenUseCase, ExtendTokenUseCase,
    GetTokenUseCase,
};

use crate::helpers::{
    MockTokenRepo, MockUserRepo, TEST_PASSWORD, active_token, expired_token, now_ms, test_hasher,
    test_phone, test_user, token_id,
};

fn login(password: &str) -> CreateTokenInput {
    CreateTokenInput {
        phone: test_phone(),
        password: password.to_owned(),
    }
}

// ── CreateTokenUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_for_correct_password() {
    let tokens = MockTokenRepo::empty();
    let usecase = CreateTokenUseCase {
        users: MockUserRepo::new(vec![test_user()]),
        tokens: tokens.clone(),
        hasher: test_hasher(),
    };

    let before = now_ms();
    let token = usecase.execute(login(TEST_PASSWORD)).await.unwrap();
    let after = now_ms();

    assert_eq!(token.phone, test_phone());
    assert_eq!(token.id.as_str().chars().count(), TOKEN_ID_LEN);
    assert!(token.expires >= before + TOKEN_TTL_MS);
    assert!(token.expires <= after + TOKEN_TTL_MS);
    assert_eq!(tokens.get(token.id.as_str()), Some(token));
}

#[tokio::test]
async fn should_issue_distinct_ids_per_login() {
    let tokens = MockTokenRepo::empty();
    let usecase = CreateTokenUseCase {
        users: MockUserRepo::new(vec![test_user()]),
        tokens: tokens.clone(),
        hasher: test_hasher(),
    };

    let first = usecase.execute(login(TEST_PASSWORD)).await.unwrap();
    let second = usecase.execute(login(TEST_PASSWORD)).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(tokens.len(), 2);
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let tokens = MockTokenRepo::empty();
    let usecase = CreateTokenUseCase {
        users: MockUserRepo::new(vec![test_user()]),
        tokens: tokens.clone(),
        hasher: test_hasher(),
    };

    let result = usecase.execute(login("not-the-password")).await;
    assert!(matches!(result, Err(ApiError::PasswordMismatch)));
    assert_eq!(tokens.len(), 0);
}

#[tokio::test]
async fn should_reject_login_for_unknown_user() {
    let usecase = CreateTokenUseCase {
        users: MockUserRepo::empty(),
        tokens: MockTokenRepo::empty(),
        hasher: test_hasher(),
    };

    let result = usecase.execute(login(TEST_PASSWORD)).await;
    assert!(matches!(result, Err(ApiError::UnknownUser)));
}

#[tokio::test]
async fn should_report_store_failure_on_login() {
    let usecase = CreateTokenUseCase {
        users: MockUserRepo::new(vec![test_user()]),
        tokens: MockTokenRepo {
            fail_writes: true,
            ..MockTokenRepo::empty()
        },
        hasher: test_hasher(),
    };

    let err = usecase.execute(login(TEST_PASSWORD)).await.unwrap_err();
    assert_eq!(err.status().as_u16(), 500);
    assert_eq!(err.to_string(), "Could not create the new token");
}

// ── GetTokenUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_expired_token_on_lookup() {
    let token = expired_token(test_phone());
    let usecase = GetTokenUseCase {
        tokens: MockTokenRepo::new(vec![token.clone()]),
    };

    assert_eq!(usecase.execute(&token.id).await.unwrap(), token);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_token() {
    let usecase = GetTokenUseCase {
        tokens: MockTokenRepo::empty(),
    };

    let result = usecase.execute(&token_id("nosuchtoken000000001")).await;
    assert!(matches!(result, Err(ApiError::TokenNotFound)));
}

// ── ExtendTokenUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_extend_active_token_by_full_ttl() {
    let token = active_token(test_phone());
    let tokens = MockTokenRepo::new(vec![token.clone()]);
    let usecase = ExtendTokenUseCase {
        tokens: tokens.clone(),
    };

    let before = now_ms();
    usecase.execute(&token.id).await.unwrap();

    let stored = tokens.get(token.id.as_str()).unwrap();
    assert!(stored.expires >= before + TOKEN_TTL_MS);
    assert!(stored.expires > token.expires);
    assert_eq!(stored.phone, token.phone);
}

#[tokio::test]
async fn should_refuse_to_extend_expired_token() {
    let token = expired_token(test_phone());
    let tokens = MockTokenRepo::new(vec![token.clone()]);
    let usecase = ExtendTokenUseCase {
        tokens: tokens.clone(),
    };

    let result = usecase.execute(&token.id).await;
    assert!(matches!(result, Err(ApiError::TokenExpired)));
    assert_eq!(tokens.get(token.id.as_str()), Some(token));
}

#[tokio::test]
async fn should_refuse_to_extend_unknown_token() {
    let usecase = ExtendTokenUseCase {
        tokens: MockTokenRepo::empty(),
    };

    let result = usecase.execute(&token_id("nosuchtoken000000001")).await;
    assert!(matches!(result, Err(ApiError::TokenDoesNotExist)));
}

#[tokio::test]
async fn should_report_store_failure_on_extend() {
    let token = active_token(test_phone());
    let usecase = ExtendTokenUseCase {
        tokens: MockTokenRepo {
            fail_writes: true,
            ..MockTokenRepo::new(vec![token.clone()])
        },
    };

    let err = usecase.execute(&token.id).await.unwrap_err();
    assert_eq!(err.to_string(), "Could not update the token's expiration");
}

// ── DeleteTokenUseCase ───────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_token() {
    let token = active_token(test_phone());
    let tokens = MockTokenRepo::new(vec![token.clone()]);
    let usecase = DeleteTokenUseCase {
        tokens: tokens.clone(),
    };

    usecase.execute(&token.id).await.unwrap();
    assert!(tokens.get(token.id.as_str()).is_none());
}

#[tokio::test]
async fn should_delete_expired_token() {
    let token = expired_token(test_phone());
    let tokens = MockTokenRepo::new(vec![token.clone()]);
    let usecase = DeleteTokenUseCase {
        tokens: tokens.clone(),
    };

    usecase.execute(&token.id).await.unwrap();
    assert_eq!(tokens.len(), 0);
}

#[tokio::test]
async fn should_reject_delete_of_unknown_token() {
    let usecase = DeleteTokenUseCase {
        tokens: MockTokenRepo::empty(),
    };

    let result = usecase.execute(&token_id("nosuchtoken000000001")).await;
    assert!(matches!(result, Err(ApiError::UnknownToken)));
}

#[tokio::test]
async fn should_report_store_failure_on_delete() {
    let token = active_token(test_phone());
    let usecase = DeleteTokenUseCase {
        tokens: MockTokenRepo {
            fail_writes: true,
            ..MockTokenRepo::new(vec![token.clone()])
        },
    };

    let result = usecase.execute(&token.id).await;
    assert!(matches!(
        result,
        Err(ApiError::Storage {
            message: "Could not delete the specified token",
            ..
        })
    ));
}
