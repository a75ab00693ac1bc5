use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Refresh Token (데이터베이스 행)
/// Refresh token (database row, stores only the hash)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RefreshToken {
    pub id: u64,
    pub user_id: u64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub revoked: bool,
}

/// Refresh Token 생성용 내부 모델
/// Internal model for creating refresh tokens
#[derive(Debug)]
pub struct RefreshTokenCreate {
    pub user_id: u64,
    pub token_hash: String,
    pub expires_at: DateTime<Utc>,
}
