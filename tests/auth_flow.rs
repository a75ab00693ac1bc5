// =====================================================
// 인증 플로우 통합 테스트
// =====================================================

mod common;
use common::*;

use nwt_api_server::domains::auth::models::{SigninRequest, SignupRequest};
use nwt_api_server::shared::errors::AuthError;

fn signup_request(email: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: "password123".to_string(),
        username: Some("tester".to_string()),
    }
}

/// 테스트: 회원가입
///
/// 가입하면 사용자 + 프로필 + 잔고 0짜리 지갑이 함께 만들어집니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_signup_creates_profile_and_zero_wallet() {
    let (app_state, db) = setup_test().await;

    let (user, profile) = app_state
        .auth_state
        .auth_service
        .signup(signup_request("signup@example.com"))
        .await
        .expect("Failed to sign up");

    assert_eq!(user.email, "signup@example.com");
    assert_ne!(user.password_hash, "password123"); // 평문 저장 금지

    // 지갑이 잔고 0으로 만들어졌는지 확인
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile.id)
        .await
        .expect("Failed to get balance");
    assert_eq!(balance, 0);

    teardown_test(&db).await;
}

/// 테스트: 이메일 중복 가입 거부
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_signup_duplicate_email_rejected() {
    let (app_state, db) = setup_test().await;

    app_state
        .auth_state
        .auth_service
        .signup(signup_request("dup@example.com"))
        .await
        .expect("Failed to sign up");

    let result = app_state
        .auth_state
        .auth_service
        .signup(signup_request("dup@example.com"))
        .await;
    assert!(matches!(result, Err(AuthError::EmailAlreadyExists { .. })));

    teardown_test(&db).await;
}

/// 테스트: 로그인 및 토큰 발급
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_signin_and_token_verification() {
    let (app_state, db) = setup_test().await;

    let (user, profile) = app_state
        .auth_state
        .auth_service
        .signup(signup_request("signin@example.com"))
        .await
        .expect("Failed to sign up");

    let (signed_in, profile_id, _refresh_token) = app_state
        .auth_state
        .auth_service
        .signin(SigninRequest {
            email: "signin@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .expect("Failed to sign in");

    assert_eq!(signed_in.id, user.id);
    assert_eq!(profile_id, profile.id);

    // Access Token 생성 및 검증
    let access_token = app_state
        .auth_state
        .jwt_service
        .generate_access_token(user.id, profile.id.clone(), user.email.clone())
        .expect("Failed to generate access token");

    let claims = app_state
        .auth_state
        .jwt_service
        .verify_access_token(&access_token)
        .expect("Failed to verify access token");
    assert_eq!(claims.user_id, user.id);
    assert_eq!(claims.profile_id, profile.id);

    teardown_test(&db).await;
}

/// 테스트: 잘못된 비밀번호 거부
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_signin_wrong_password() {
    let (app_state, db) = setup_test().await;

    app_state
        .auth_state
        .auth_service
        .signup(signup_request("wrongpw@example.com"))
        .await
        .expect("Failed to sign up");

    let result = app_state
        .auth_state
        .auth_service
        .signin(SigninRequest {
            email: "wrongpw@example.com".to_string(),
            password: "not-the-password".to_string(),
        })
        .await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));

    teardown_test(&db).await;
}

/// 테스트: Refresh Token 회전
///
/// 갱신하면 새 토큰 쌍이 발급되고, 사용한 토큰은 무효화됩니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_refresh_token_rotation() {
    let (app_state, db) = setup_test().await;

    app_state
        .auth_state
        .auth_service
        .signup(signup_request("refresh@example.com"))
        .await
        .expect("Failed to sign up");

    let (_, _, refresh_token) = app_state
        .auth_state
        .auth_service
        .signin(SigninRequest {
            email: "refresh@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .expect("Failed to sign in");

    // 1차 갱신: 성공
    let (access_token, new_refresh_token) = app_state
        .auth_state
        .auth_service
        .refresh_access_token(&refresh_token)
        .await
        .expect("Failed to refresh access token");
    assert!(!access_token.is_empty());
    assert_ne!(new_refresh_token, refresh_token);

    // 사용한 토큰으로 재갱신: 거부 (회전됨)
    let result = app_state
        .auth_state
        .auth_service
        .refresh_access_token(&refresh_token)
        .await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));

    teardown_test(&db).await;
}

/// 테스트: 로그아웃 후 Refresh Token 무효화
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_logout_revokes_refresh_token() {
    let (app_state, db) = setup_test().await;

    app_state
        .auth_state
        .auth_service
        .signup(signup_request("logout@example.com"))
        .await
        .expect("Failed to sign up");

    let (_, _, refresh_token) = app_state
        .auth_state
        .auth_service
        .signin(SigninRequest {
            email: "logout@example.com".to_string(),
            password: "password123".to_string(),
        })
        .await
        .expect("Failed to sign in");

    app_state
        .auth_state
        .auth_service
        .logout(&refresh_token)
        .await
        .expect("Failed to log out");

    let result = app_state
        .auth_state
        .auth_service
        .refresh_access_token(&refresh_token)
        .await;
    assert!(matches!(result, Err(AuthError::InvalidToken)));

    teardown_test(&db).await;
}
