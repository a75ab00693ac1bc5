use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha2::{Digest, Sha256};

use crate::domains::auth::models::jwt::Claims;
use crate::shared::errors::AuthError;

/// JWT 서비스
/// JWT Service for token generation and verification
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    /// JWT Service 생성
    /// Create JWT Service
    pub fn new(secret: String) -> Self {
        let encoding_key = EncodingKey::from_secret(secret.as_ref());
        let decoding_key = DecodingKey::from_secret(secret.as_ref());

        Self {
            encoding_key,
            decoding_key,
        }
    }

    /// Access Token 발급 (짧은 수명)
    /// Generate Access Token (short lifetime)
    pub fn generate_access_token(
        &self,
        user_id: u64,
        profile_id: String,
        email: String,
    ) -> Result<String, AuthError> {
        let claims = Claims::new(user_id, profile_id, email, 1); // 1시간 만료

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to generate access token: {}", e)))
    }

    /// Refresh Token 생성 (랜덤 문자열, DB에 저장할 것)
    /// Generate Refresh Token (random string, to be stored in DB)
    pub fn generate_refresh_token(&self) -> String {
        // 64자 랜덤 문자열 생성
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(64)
            .map(char::from)
            .collect()
    }

    /// Refresh Token 해싱 (DB 저장용)
    /// Hash Refresh Token (for database storage)
    pub fn hash_refresh_token(&self, token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Access Token 검증
    /// Verify Access Token
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> JwtService {
        JwtService::new("test-secret".to_string())
    }

    #[test]
    fn access_token_round_trip() {
        let jwt = service();
        let token = jwt
            .generate_access_token(7, "profile-7".to_string(), "user@example.com".to_string())
            .unwrap();

        let claims = jwt.verify_access_token(&token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.profile_id, "profile-7");
        assert_eq!(claims.email, "user@example.com");
    }

    #[test]
    fn token_with_wrong_secret_is_rejected() {
        let jwt = service();
        let token = jwt
            .generate_access_token(1, "p".to_string(), "a@b.com".to_string())
            .unwrap();

        let other = JwtService::new("different-secret".to_string());
        assert!(matches!(
            other.verify_access_token(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(matches!(
            service().verify_access_token("not-a-jwt"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn refresh_tokens_are_unique_and_64_chars() {
        let jwt = service();
        let a = jwt.generate_refresh_token();
        let b = jwt.generate_refresh_token();
        assert_eq!(a.len(), 64);
        assert_ne!(a, b);
    }

    #[test]
    fn refresh_token_hash_is_deterministic() {
        let jwt = service();
        let token = "some-refresh-token";
        assert_eq!(jwt.hash_refresh_token(token), jwt.hash_refresh_token(token));
        assert_ne!(jwt.hash_refresh_token(token), jwt.hash_refresh_token("other"));
    }
}
