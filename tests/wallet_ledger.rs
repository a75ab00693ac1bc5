// =====================================================
// NWT 지갑 원장 통합 테스트
// =====================================================

mod common;
use common::*;

use nwt_api_server::shared::errors::WalletError;

/// 테스트: 잔고 조회
///
/// 시드된 지갑의 잔고가 그대로 조회되는지 확인합니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_balance() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile_id)
        .await
        .expect("Failed to get balance");
    assert_eq!(balance, 100);

    // 조회는 잔고를 변경하지 않음
    let again = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile_id)
        .await
        .expect("Failed to get balance");
    assert_eq!(again, 100);

    teardown_test(&db).await;
}

/// 테스트: 지갑 없음
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_get_balance_wallet_not_found() {
    let (app_state, db) = setup_test().await;

    let result = app_state
        .wallet_state
        .wallet_service
        .get_balance("nonexistent")
        .await;
    assert!(matches!(result, Err(WalletError::WalletNotFound)));

    teardown_test(&db).await;
}

/// 테스트: 정상 차감
///
/// 잔고 100에서 50을 차감하면 50이 남는지 확인합니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_debit_success() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let new_balance = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(&profile_id, 50)
        .await
        .expect("Failed to debit wallet");
    assert_eq!(new_balance, 50);

    // DB에 반영되었는지 확인
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile_id)
        .await
        .expect("Failed to get balance");
    assert_eq!(balance, 50);

    teardown_test(&db).await;
}

/// 테스트: 잔고 부족 차감 거부
///
/// 잔고 100에서 200 차감은 실패하고 잔고는 변하지 않아야 합니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_debit_insufficient_funds() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let result = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(&profile_id, 200)
        .await;
    assert!(matches!(result, Err(WalletError::InsufficientFunds)));

    // 잔고는 그대로
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile_id)
        .await
        .expect("Failed to get balance");
    assert_eq!(balance, 100);

    teardown_test(&db).await;
}

/// 테스트: 잔고 전액 차감 (경계값)
///
/// 잔고와 정확히 같은 금액은 차감할 수 있고, 결과는 0이어야 합니다.
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_debit_exact_balance() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let new_balance = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(&profile_id, 100)
        .await
        .expect("Failed to debit wallet");
    assert_eq!(new_balance, 0);

    // 0에서 한 번 더 차감하면 잔고 부족
    let result = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(&profile_id, 1)
        .await;
    assert!(matches!(result, Err(WalletError::InsufficientFunds)));

    teardown_test(&db).await;
}

/// 테스트: 없는 지갑 차감
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_debit_wallet_not_found() {
    let (app_state, db) = setup_test().await;

    let result = app_state
        .wallet_state
        .wallet_service
        .debit_wallet("nonexistent", 50)
        .await;
    assert!(matches!(result, Err(WalletError::WalletNotFound)));

    teardown_test(&db).await;
}

/// 테스트: 0 이하 금액 거부
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_debit_rejects_non_positive_amount() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let result = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(&profile_id, 0)
        .await;
    assert!(matches!(result, Err(WalletError::InvalidAmount)));

    let result = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(&profile_id, -10)
        .await;
    assert!(matches!(result, Err(WalletError::InvalidAmount)));

    // 잔고는 그대로
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile_id)
        .await
        .expect("Failed to get balance");
    assert_eq!(balance, 100);

    teardown_test(&db).await;
}

/// 테스트: 충전
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_credit_success() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let new_balance = app_state
        .wallet_state
        .wallet_service
        .credit_wallet(&profile_id, 25)
        .await
        .expect("Failed to credit wallet");
    assert_eq!(new_balance, 125);

    teardown_test(&db).await;
}

/// 테스트: 없는 지갑 충전
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_credit_wallet_not_found() {
    let (app_state, db) = setup_test().await;

    let result = app_state
        .wallet_state
        .wallet_service
        .credit_wallet("nonexistent", 25)
        .await;
    assert!(matches!(result, Err(WalletError::WalletNotFound)));

    teardown_test(&db).await;
}

/// 테스트: 동시 차감
///
/// 잔고 100에서 60짜리 차감 두 건을 동시에 보내면
/// 정확히 한 건만 성공해야 합니다 (조건부 UPDATE라 중복 차감 불가).
#[tokio::test]
#[ignore = "requires a running PostgreSQL instance"]
async fn test_concurrent_debits_no_double_spend() {
    let (app_state, db) = setup_test().await;
    let profile_id = seed_wallet(&db, 100).await;

    let service_a = app_state.wallet_state.wallet_service.clone();
    let service_b = app_state.wallet_state.wallet_service.clone();
    let id_a = profile_id.clone();
    let id_b = profile_id.clone();

    let (a, b) = tokio::join!(
        tokio::spawn(async move { service_a.debit_wallet(&id_a, 60).await }),
        tokio::spawn(async move { service_b.debit_wallet(&id_b, 60).await }),
    );
    let a = a.unwrap();
    let b = b.unwrap();

    let successes = [&a, &b].iter().filter(|r| r.is_ok()).count();
    assert_eq!(successes, 1, "exactly one of the two debits must win");

    // 패배한 쪽은 잔고 부족
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(loser, Err(WalletError::InsufficientFunds)));

    // 최종 잔고는 40 (100 - 60)
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&profile_id)
        .await
        .expect("Failed to get balance");
    assert_eq!(balance, 40);

    teardown_test(&db).await;
}
