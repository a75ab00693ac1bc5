use crate::domains::wallet::models::wallet::Wallet;
use crate::shared::database::{Database, WalletRepository};
use crate::shared::errors::WalletError;

/// NWT 지갑 서비스
/// NWT Wallet Service
///
/// 역할:
/// - 잔고 조회 / 차감 / 충전의 비즈니스 규칙 적용
/// - 불변식: 어떤 연산이 끝난 후에도 nwt_balance >= 0
///
/// 주의:
/// - 차감/충전은 Repository의 조건부 UPDATE 한 문장으로 처리되므로
///   동시 요청이 같은 잔고를 중복 차감할 수 없다 (lost update 없음)
/// - Debit/credit go through a single conditional UPDATE in the
///   repository, so concurrent requests cannot double-spend the same
///   balance (no lost updates)
#[derive(Clone)]
pub struct WalletService {
    db: Database,
}

impl WalletService {
    /// 생성자
    /// Constructor
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 지갑 생성 (회원가입 시, 잔고 0)
    /// Create wallet (at signup, zero balance)
    pub async fn create_wallet(&self, profile_id: &str) -> Result<Wallet, WalletError> {
        let wallet_repo = WalletRepository::new(self.db.pool().clone());

        let wallet = wallet_repo
            .create_wallet(profile_id)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to create wallet: {}", e)))?;

        Ok(wallet)
    }

    /// 잔고 조회
    /// Get current balance
    ///
    /// # Returns
    /// * `Ok(i64)` - 현재 사용 가능 잔고
    /// * `Err(WalletNotFound)` - 지갑이 없는 경우
    pub async fn get_balance(&self, profile_id: &str) -> Result<i64, WalletError> {
        let wallet_repo = WalletRepository::new(self.db.pool().clone());

        let wallet = wallet_repo
            .find_by_profile_id(profile_id)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to fetch wallet: {}", e)))?;

        match wallet {
            Some(w) => Ok(w.nwt_balance),
            None => Err(WalletError::WalletNotFound),
        }
    }

    /// 잔고 차감
    /// Debit wallet
    ///
    /// # Arguments
    /// * `profile_id` - 대상 프로필 ID
    /// * `amount` - 차감할 금액 (양수)
    ///
    /// # Returns
    /// * `Ok(i64)` - 차감 후 잔고 (UPDATE ... RETURNING 값)
    /// * `Err(InvalidAmount)` - amount <= 0
    /// * `Err(WalletNotFound)` - 지갑이 없는 경우
    /// * `Err(InsufficientFunds)` - 잔고 부족 (잔고는 변경되지 않음)
    pub async fn debit_wallet(&self, profile_id: &str, amount: i64) -> Result<i64, WalletError> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let wallet_repo = WalletRepository::new(self.db.pool().clone());

        // 조건부 UPDATE: 잔고가 충분한 행만 매칭됨
        // Conditional UPDATE: only matches when the balance covers the amount
        let new_balance = wallet_repo
            .debit_balance(profile_id, amount)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to debit wallet: {}", e)))?;

        match new_balance {
            Some(balance) => Ok(balance),
            None => {
                // 매칭된 행 없음: 지갑이 없는지, 잔고가 부족한지 구분
                // No row matched: distinguish missing wallet from insufficient funds
                let exists = wallet_repo
                    .find_by_profile_id(profile_id)
                    .await
                    .map_err(|e| {
                        WalletError::DatabaseError(format!("Failed to fetch wallet: {}", e))
                    })?;

                match exists {
                    Some(_) => Err(WalletError::InsufficientFunds),
                    None => Err(WalletError::WalletNotFound),
                }
            }
        }
    }

    /// 잔고 충전
    /// Credit wallet
    ///
    /// # Returns
    /// * `Ok(i64)` - 충전 후 잔고 (UPDATE ... RETURNING 값)
    /// * `Err(InvalidAmount)` - amount <= 0
    /// * `Err(WalletNotFound)` - 지갑이 없는 경우
    pub async fn credit_wallet(&self, profile_id: &str, amount: i64) -> Result<i64, WalletError> {
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let wallet_repo = WalletRepository::new(self.db.pool().clone());

        let new_balance = wallet_repo
            .credit_balance(profile_id, amount)
            .await
            .map_err(|e| WalletError::DatabaseError(format!("Failed to credit wallet: {}", e)))?;

        new_balance.ok_or(WalletError::WalletNotFound)
    }
}
