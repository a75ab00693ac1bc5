use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 지갑 관련 에러
/// Wallet-related errors
///
/// 호출자가 에러 종류를 프로그램적으로 구분할 수 있도록 타입으로 표현
/// (문자열 비교 대신 enum variant 매칭)
#[derive(Error, Debug)]
pub enum WalletError {
    /// 지갑이 존재하지 않음
    /// Wallet row does not exist for the given profile
    #[error("Wallet not found")]
    WalletNotFound,

    /// 잔고 부족 (차감 금액 > 현재 잔고)
    /// Debit amount exceeds the current balance
    #[error("Insufficient funds")]
    InsufficientFunds,

    /// 금액이 0 이하
    /// Amount is zero or negative
    #[error("Amount must be positive")]
    InvalidAmount,

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// WalletError를 HTTP 응답으로 변환
impl From<WalletError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: WalletError) -> Self {
        let status = match &err {
            WalletError::WalletNotFound => StatusCode::NOT_FOUND,
            WalletError::InsufficientFunds => StatusCode::BAD_REQUEST,
            WalletError::InvalidAmount => StatusCode::BAD_REQUEST,
            WalletError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_exact_message() {
        let (status, body): (StatusCode, Json<serde_json::Value>) =
            WalletError::WalletNotFound.into();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0["error"], "Wallet not found");
    }

    #[test]
    fn insufficient_funds_maps_to_400_with_exact_message() {
        let (status, body): (StatusCode, Json<serde_json::Value>) =
            WalletError::InsufficientFunds.into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0["error"], "Insufficient funds");
    }

    #[test]
    fn invalid_amount_maps_to_400() {
        let (status, _): (StatusCode, Json<serde_json::Value>) =
            WalletError::InvalidAmount.into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_error_maps_to_500() {
        let (status, _): (StatusCode, Json<serde_json::Value>) =
            WalletError::DatabaseError("connection reset".to_string()).into();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
