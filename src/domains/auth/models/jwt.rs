use serde::{Deserialize, Serialize};

/// JWT Claims (토큰에 포함될 데이터)
/// JWT Claims (data to be included in token)
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// 사용자 ID
    /// User ID
    pub user_id: u64,

    /// 프로필 ID (지갑/만화 도메인의 식별자)
    /// Profile ID (identifier used by wallet/comics domains)
    pub profile_id: String,

    /// 이메일
    /// Email
    pub email: String,

    /// 만료 시간 (Unix timestamp)
    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// 발급 시간 (Unix timestamp)
    /// Issued at (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// 새 Claims 생성 (만료 시간 자동 계산)
    /// Create new Claims (expiration time automatically calculated)
    pub fn new(user_id: u64, profile_id: String, email: String, expiration_hours: i64) -> Self {
        let now = chrono::Utc::now().timestamp();
        let exp = now + (expiration_hours * 3600); // hours to seconds

        Self {
            user_id,
            profile_id,
            email,
            exp,
            iat: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiration_is_hours_after_issuance() {
        let claims = Claims::new(1, "profile-1".to_string(), "a@b.com".to_string(), 2);
        assert_eq!(claims.exp - claims.iat, 2 * 3600);
    }
}
