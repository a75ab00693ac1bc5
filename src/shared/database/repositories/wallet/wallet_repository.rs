use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domains::wallet::models::wallet::Wallet;

/// NWT 지갑 Repository
/// NWT wallet repository
///
/// 잔고 변경은 전부 조건부 UPDATE 한 문장으로 처리한다.
/// 읽고-계산하고-쓰는 구간이 없으므로 동시 차감이 잔고를 음수로 만들 수 없다.
/// All balance mutations are single conditional UPDATE statements.
/// There is no read-modify-write window, so concurrent debits can never
/// drive the balance negative.
pub struct WalletRepository {
    pool: PgPool,
}

impl WalletRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 지갑 생성 (잔고 0으로 시작)
    /// Create wallet (starts with zero balance)
    pub async fn create_wallet(&self, profile_id: &str) -> Result<Wallet> {
        let id = Uuid::new_v4().to_string();
        let row = sqlx::query(
            r#"
            INSERT INTO user_wallets (id, user_profile_id, nwt_balance, nwt_locked_balance, kyc_status, kyc_level, created_at, updated_at)
            VALUES ($1, $2, 0, 0, 'unverified', 0, $3, $3)
            RETURNING id, user_profile_id, nwt_balance, nwt_locked_balance, kyc_status, kyc_level,
                      spending_limit_daily, spending_limit_monthly, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(profile_id)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create wallet")?;

        Ok(Self::row_to_wallet(&row))
    }

    /// 프로필 ID로 지갑 조회
    /// Find wallet by profile id
    pub async fn find_by_profile_id(&self, profile_id: &str) -> Result<Option<Wallet>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_profile_id, nwt_balance, nwt_locked_balance, kyc_status, kyc_level,
                   spending_limit_daily, spending_limit_monthly, created_at, updated_at
            FROM user_wallets
            WHERE user_profile_id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch wallet by profile id")?;

        Ok(row.map(|r| Self::row_to_wallet(&r)))
    }

    /// 잔고 차감 (원자적)
    /// Debit balance (atomic)
    ///
    /// `WHERE nwt_balance >= $1` 가드로 잔고가 부족하면 행이 매칭되지 않는다.
    /// 반환값이 None이면 "지갑 없음" 또는 "잔고 부족" — 호출자가 구분한다.
    /// With the `WHERE nwt_balance >= $1` guard, an insufficient balance
    /// matches no row. `None` means either "no wallet" or "insufficient
    /// funds"; the caller disambiguates.
    pub async fn debit_balance(&self, profile_id: &str, amount: i64) -> Result<Option<i64>> {
        let row = sqlx::query(
            r#"
            UPDATE user_wallets
            SET nwt_balance = nwt_balance - $1, updated_at = $2
            WHERE user_profile_id = $3 AND nwt_balance >= $1
            RETURNING nwt_balance
            "#,
        )
        .bind(amount)
        .bind(Utc::now())
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to debit wallet balance")?;

        Ok(row.map(|r| r.get("nwt_balance")))
    }

    /// 잔고 충전 (원자적)
    /// Credit balance (atomic)
    ///
    /// 반환값이 None이면 지갑이 존재하지 않음.
    /// `None` means the wallet does not exist.
    pub async fn credit_balance(&self, profile_id: &str, amount: i64) -> Result<Option<i64>> {
        let row = sqlx::query(
            r#"
            UPDATE user_wallets
            SET nwt_balance = nwt_balance + $1, updated_at = $2
            WHERE user_profile_id = $3
            RETURNING nwt_balance
            "#,
        )
        .bind(amount)
        .bind(Utc::now())
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to credit wallet balance")?;

        Ok(row.map(|r| r.get("nwt_balance")))
    }

    fn row_to_wallet(row: &sqlx::postgres::PgRow) -> Wallet {
        Wallet {
            id: row.get("id"),
            user_profile_id: row.get("user_profile_id"),
            nwt_balance: row.get("nwt_balance"),
            nwt_locked_balance: row.get("nwt_locked_balance"),
            kyc_status: row.get("kyc_status"),
            kyc_level: row.get("kyc_level"),
            spending_limit_daily: row.get("spending_limit_daily"),
            spending_limit_monthly: row.get("spending_limit_monthly"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
