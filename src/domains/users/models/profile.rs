use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 사용자 프로필 (데이터베이스 행)
/// User profile (database row)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    /// Profile ID (uuid, 지갑/만화 도메인에서 이 ID로 참조)
    /// Profile ID (uuid, referenced by wallet/comics domains)
    pub id: String,
    pub user_id: u64,
    pub username: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 프로필 응답 모델
/// Profile response model
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ProfileResponse)]
pub struct ProfileResponse {
    /// Profile ID
    /// 프로필 ID
    pub id: String,

    /// Username
    /// 사용자명
    #[schema(example = "johndoe")]
    pub username: Option<String>,

    /// Bio
    /// 소개글
    pub bio: Option<String>,

    /// Avatar URL
    /// 아바타 이미지 URL
    pub avatar_url: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
        }
    }
}

/// 프로필 부분 업데이트 요청 (전달된 필드만 변경)
/// Partial profile update request (only provided fields change)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateProfileRequest)]
pub struct UserProfileUpdate {
    /// New username
    /// 새 사용자명
    pub username: Option<String>,

    /// New bio
    /// 새 소개글
    pub bio: Option<String>,

    /// New avatar URL
    /// 새 아바타 URL
    pub avatar_url: Option<String>,
}
