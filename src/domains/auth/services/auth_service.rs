use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::{Duration, Utc};

use crate::domains::auth::models::{RefreshTokenCreate, SigninRequest, SignupRequest, User};
use crate::domains::auth::services::JwtService;
use crate::domains::users::models::profile::UserProfile;
use crate::domains::users::services::ProfileService;
use crate::domains::wallet::services::WalletService;
use crate::shared::database::{Database, RefreshTokenRepository, UserRepository};
use crate::shared::errors::AuthError;

// 인증 서비스
// AuthService: handles authentication business logic
//
// 회원가입은 사용자 + 프로필 + 잔고 0짜리 지갑을 함께 만든다
// Signup creates the user, the profile, and a zero-balance wallet together
#[derive(Clone)]
pub struct AuthService {
    db: Database,
    jwt_service: JwtService,
    profile_service: ProfileService,
    wallet_service: WalletService,
}

impl AuthService {
    // 생성자 (JWT Service 주입)
    pub fn new(db: Database, jwt_service: JwtService) -> Self {
        let profile_service = ProfileService::new(db.clone());
        let wallet_service = WalletService::new(db.clone());

        Self {
            db,
            jwt_service,
            profile_service,
            wallet_service,
        }
    }

    // 회원가입 (비즈니스 로직)
    // Returns: (User, UserProfile)
    pub async fn signup(&self, request: SignupRequest) -> Result<(User, UserProfile), AuthError> {
        // Repository 생성 (Service 내부에서)
        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 이메일 중복 확인
        let existing_user = user_repo
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to check email existence: {}", e)))?;

        if existing_user.is_some() {
            return Err(AuthError::EmailAlreadyExists { email: request.email });
        }

        // 2. 비밀번호 해싱
        let password_hash = Self::hash_password(&request.password)?;

        // 3. 사용자 생성
        let user = user_repo
            .create_user(&request.email, &password_hash, request.username.as_deref())
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create user: {}", e)))?;

        // 4. 프로필 생성
        let profile = self
            .profile_service
            .create_profile(user.id, request.username.as_deref())
            .await
            .map_err(|e| AuthError::Internal(format!("Failed to create profile: {}", e)))?;

        // 5. 지갑 생성 (잔고 0)
        // Wallet starts at zero balance
        self.wallet_service
            .create_wallet(&profile.id)
            .await
            .map_err(|e| AuthError::Internal(format!("Failed to create wallet: {}", e)))?;

        Ok((user, profile))
    }

    // 로그인 (비즈니스 로직)
    // Returns: (User, profile_id, refresh_token)
    pub async fn signin(&self, request: SigninRequest) -> Result<(User, String, String), AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        // 1. 이메일로 사용자 조회
        let user = user_repo
            .get_user_by_email(&request.email)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?;

        let user = match user {
            Some(u) => u,
            None => return Err(AuthError::InvalidCredentials),
        };

        // 2. 비밀번호 검증
        Self::verify_password(&request.password, &user.password_hash)?;

        // 3. 프로필 조회 (JWT claims에 들어감)
        let profile = self
            .profile_service
            .get_profile_by_user_id(user.id)
            .await
            .map_err(|e| AuthError::Internal(format!("Failed to fetch profile: {}", e)))?;

        // 4. 이전 Refresh Token들 무효화 (새 로그인 시 기존 세션 종료)
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());
        refresh_token_repo
            .revoke_all_for_user(user.id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to revoke previous tokens: {}", e)))?;

        // 5. 새 Refresh Token 생성 및 저장
        let refresh_token = self.create_refresh_token(user.id).await?;

        Ok((user, profile.id, refresh_token))
    }

    /// Refresh Token 생성 및 DB 저장
    /// Create and store refresh token
    pub async fn create_refresh_token(&self, user_id: u64) -> Result<String, AuthError> {
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());

        // 1. Refresh Token 생성 (랜덤 문자열)
        let refresh_token = self.jwt_service.generate_refresh_token();

        // 2. Token 해싱 (DB 저장용)
        let token_hash = self.jwt_service.hash_refresh_token(&refresh_token);

        // 3. 만료 시간 설정 (7일)
        let expires_at = Utc::now() + Duration::days(7);

        // 4. DB에 저장
        let _ = refresh_token_repo
            .create(RefreshTokenCreate {
                user_id,
                token_hash,
                expires_at,
            })
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to create refresh token: {}", e)))?;

        // 5. 원본 토큰 반환 (해싱 전)
        Ok(refresh_token)
    }

    /// Refresh Token 검증 및 새 Access Token 발급
    /// Verify refresh token and issue new access token
    pub async fn refresh_access_token(&self, refresh_token: &str) -> Result<(String, String), AuthError> {
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());

        // 1. Refresh Token 해싱
        let token_hash = self.jwt_service.hash_refresh_token(refresh_token);

        // 2. DB에서 조회
        let stored_token = refresh_token_repo
            .find_by_token_hash(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to find refresh token: {}", e)))?;

        let stored_token = match stored_token {
            Some(t) => t,
            None => return Err(AuthError::InvalidToken),
        };

        // 3. 토큰 유효성 검증
        if stored_token.revoked {
            return Err(AuthError::InvalidToken); // 무효화된 토큰
        }

        if stored_token.expires_at < Utc::now() {
            return Err(AuthError::InvalidToken); // 만료된 토큰
        }

        // 4. 사용자/프로필 정보 조회
        let user_repo = UserRepository::new(self.db.pool().clone());
        let user = user_repo
            .get_user_by_id(stored_token.user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::InvalidToken)?;

        let profile = self
            .profile_service
            .get_profile_by_user_id(user.id)
            .await
            .map_err(|e| AuthError::Internal(format!("Failed to fetch profile: {}", e)))?;

        // 5. 새 Access Token 생성
        let access_token =
            self.jwt_service
                .generate_access_token(user.id, profile.id, user.email.clone())?;

        // 6. 기존 Refresh Token 무효화 (새 토큰 생성 전에 먼저 무효화)
        refresh_token_repo
            .revoke(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to revoke old refresh token: {}", e)))?;

        // 7. 새 Refresh Token 생성 (Rotation)
        let new_refresh_token = self.create_refresh_token(user.id).await?;

        Ok((access_token, new_refresh_token))
    }

    /// 로그아웃 - Refresh Token 무효화
    /// Logout - Revoke refresh token
    pub async fn logout(&self, refresh_token: &str) -> Result<(), AuthError> {
        let refresh_token_repo = RefreshTokenRepository::new(self.db.pool().clone());

        let token_hash = self.jwt_service.hash_refresh_token(refresh_token);

        refresh_token_repo
            .revoke(&token_hash)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to revoke refresh token: {}", e)))?;

        Ok(())
    }

    pub async fn get_user_info(&self, user_id: u64) -> Result<User, AuthError> {
        let user_repo = UserRepository::new(self.db.pool().clone());

        let user = user_repo
            .get_user_by_id(user_id)
            .await
            .map_err(|e| AuthError::DatabaseError(format!("Failed to fetch user: {}", e)))?
            .ok_or(AuthError::InvalidToken)?; // 사용자가 없으면 InvalidToken 에러

        Ok(user)
    }

    fn hash_password(password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let password_hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHashingFailed(format!("Failed to hash password: {}", e)))?
            .to_string();

        Ok(password_hash)
    }

    fn verify_password(password: &str, password_hash: &str) -> Result<(), AuthError> {
        let parsed_hash = PasswordHash::new(password_hash)
            .map_err(|e| AuthError::PasswordVerificationFailed(format!("Invalid password hash: {}", e)))?;

        let argon2 = Argon2::default();

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AuthError::InvalidCredentials)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_verifies_and_rejects() {
        let hash = AuthService::hash_password("password123").unwrap();

        assert!(AuthService::verify_password("password123", &hash).is_ok());
        assert!(matches!(
            AuthService::verify_password("wrong-password", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn same_password_hashes_differently() {
        // salt가 달라서 해시도 달라야 함
        let a = AuthService::hash_password("password123").unwrap();
        let b = AuthService::hash_password("password123").unwrap();
        assert_ne!(a, b);
    }
}
