use crate::domains::users::models::profile::{UserProfile, UserProfileUpdate};
use crate::shared::database::{Database, ProfileRepository};
use crate::shared::errors::ProfileError;

/// 프로필 서비스
/// ProfileService: handles profile-related business logic
#[derive(Clone)]
pub struct ProfileService {
    db: Database,
}

impl ProfileService {
    /// 생성자
    /// Constructor
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 프로필 생성 (회원가입 시)
    /// Create profile (at signup)
    pub async fn create_profile(
        &self,
        user_id: u64,
        username: Option<&str>,
    ) -> Result<UserProfile, ProfileError> {
        let profile_repo = ProfileRepository::new(self.db.pool().clone());

        let profile = profile_repo
            .create_profile(user_id, username)
            .await
            .map_err(|e| ProfileError::DatabaseError(format!("Failed to create profile: {}", e)))?;

        Ok(profile)
    }

    /// 프로필 조회 (ID로)
    /// Get profile by id
    pub async fn get_profile(&self, profile_id: &str) -> Result<UserProfile, ProfileError> {
        let profile_repo = ProfileRepository::new(self.db.pool().clone());

        let profile = profile_repo
            .get_profile_by_id(profile_id)
            .await
            .map_err(|e| ProfileError::DatabaseError(format!("Failed to fetch profile: {}", e)))?;

        profile.ok_or(ProfileError::ProfileNotFound)
    }

    /// 프로필 조회 (사용자 ID로)
    /// Get profile by user id
    pub async fn get_profile_by_user_id(&self, user_id: u64) -> Result<UserProfile, ProfileError> {
        let profile_repo = ProfileRepository::new(self.db.pool().clone());

        let profile = profile_repo
            .get_profile_by_user_id(user_id)
            .await
            .map_err(|e| ProfileError::DatabaseError(format!("Failed to fetch profile: {}", e)))?;

        profile.ok_or(ProfileError::ProfileNotFound)
    }

    /// 프로필 부분 업데이트
    /// Partial profile update
    pub async fn update_profile(
        &self,
        profile_id: &str,
        update: UserProfileUpdate,
    ) -> Result<UserProfile, ProfileError> {
        let profile_repo = ProfileRepository::new(self.db.pool().clone());

        let profile = profile_repo
            .update_profile(profile_id, &update)
            .await
            .map_err(|e| ProfileError::DatabaseError(format!("Failed to update profile: {}", e)))?;

        profile.ok_or(ProfileError::ProfileNotFound)
    }
}
