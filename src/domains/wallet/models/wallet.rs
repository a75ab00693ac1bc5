use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =====================================================
// Wallet 모델
// =====================================================
// 역할: 사용자의 NWT 잔고를 나타내는 데이터 모델
// 설명: 프로필당 정확히 1개의 지갑 (user_profile_id UNIQUE)
//
// 불변식:
// - nwt_balance >= 0 (어떤 연산이 끝난 후에도)
// =====================================================

/// NWT 지갑 (데이터베이스에서 조회한 행)
/// NWT wallet (row retrieved from database)
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[schema(as = Wallet)]
pub struct Wallet {
    /// Wallet ID (uuid, generated at creation)
    /// 지갑 ID (생성 시 발급되는 uuid)
    pub id: String,

    /// Owning profile ID (exactly one wallet per profile)
    /// 소유 프로필 ID (프로필당 지갑 1개)
    pub user_profile_id: String,

    /// Spendable NWT balance (never negative)
    /// 사용 가능 NWT 잔고 (음수 불가)
    #[schema(example = 100)]
    pub nwt_balance: i64,

    /// Reserved balance (stored, not spendable)
    /// 잠긴 잔고 (저장만 되고 비즈니스 로직에서 사용하지 않음)
    pub nwt_locked_balance: i64,

    /// KYC status (stored, no enforcement)
    /// KYC 상태 (저장만 함)
    pub kyc_status: String,

    /// KYC level (stored, no enforcement)
    /// KYC 레벨 (저장만 함)
    pub kyc_level: i32,

    /// Daily spending limit (stored, no enforcement)
    /// 일일 지출 한도 (저장만 함)
    pub spending_limit_daily: Option<i64>,

    /// Monthly spending limit (stored, no enforcement)
    /// 월간 지출 한도 (저장만 함)
    pub spending_limit_monthly: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// =====================================================
// 요청/응답 모델 (Request/Response models)
// =====================================================

/// 잔고 조회 응답 모델
/// Wallet balance response model
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = WalletBalanceResponse)]
pub struct WalletBalanceResponse {
    /// Current spendable balance
    /// 현재 사용 가능 잔고
    #[schema(example = 100)]
    pub balance: i64,
}

/// 잔고 차감/충전 요청 모델
/// Debit/credit request model
///
/// 필드를 Option으로 받아 핸들러에서 직접 검증 (누락 시 400)
/// Fields are Option so the handler can return 400 on missing fields
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = WalletMutationRequest)]
pub struct WalletMutationRequest {
    /// Target profile ID
    /// 대상 프로필 ID
    #[schema(example = "a3b1c2d4-...")]
    pub user_id: Option<String>,

    /// Amount in NWT (must be positive)
    /// NWT 금액 (양수여야 함)
    #[schema(example = 50)]
    pub amount: Option<i64>,
}

/// 잔고 차감/충전 응답 모델
/// Debit/credit response model
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = WalletMutationResponse)]
pub struct WalletMutationResponse {
    /// Always true on success
    /// 성공 시 항상 true
    pub success: bool,

    /// Balance after the operation (from RETURNING, not recomputed)
    /// 연산 후 잔고 (RETURNING 값, 재계산 아님)
    #[schema(example = 50)]
    pub balance: i64,
}
