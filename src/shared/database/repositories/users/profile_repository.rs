use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domains::users::models::profile::{UserProfile, UserProfileUpdate};

/// 사용자 프로필 Repository
/// User profile repository
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 프로필 생성 (회원가입 시)
    /// Create profile (at signup)
    pub async fn create_profile(&self, user_id: u64, username: Option<&str>) -> Result<UserProfile> {
        let id = Uuid::new_v4().to_string();
        let row = sqlx::query(
            r#"
            INSERT INTO user_profiles (id, user_id, username, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $4)
            RETURNING id, user_id, username, bio, avatar_url, created_at, updated_at
            "#,
        )
        .bind(&id)
        .bind(user_id as i64)
        .bind(username)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create user profile")?;

        Ok(Self::row_to_profile(&row))
    }

    /// 프로필 ID로 조회
    /// Get profile by id
    pub async fn get_profile_by_id(&self, profile_id: &str) -> Result<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, username, bio, avatar_url, created_at, updated_at
            FROM user_profiles
            WHERE id = $1
            "#,
        )
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch profile by id")?;

        Ok(row.map(|r| Self::row_to_profile(&r)))
    }

    /// 사용자 ID로 프로필 조회
    /// Get profile by user id
    pub async fn get_profile_by_user_id(&self, user_id: u64) -> Result<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
            SELECT id, user_id, username, bio, avatar_url, created_at, updated_at
            FROM user_profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch profile by user id")?;

        Ok(row.map(|r| Self::row_to_profile(&r)))
    }

    /// 프로필 부분 업데이트 (전달된 필드만 변경)
    /// Partial profile update (only provided fields change)
    pub async fn update_profile(
        &self,
        profile_id: &str,
        update: &UserProfileUpdate,
    ) -> Result<Option<UserProfile>> {
        let row = sqlx::query(
            r#"
            UPDATE user_profiles
            SET username = COALESCE($1, username),
                bio = COALESCE($2, bio),
                avatar_url = COALESCE($3, avatar_url),
                updated_at = $4
            WHERE id = $5
            RETURNING id, user_id, username, bio, avatar_url, created_at, updated_at
            "#,
        )
        .bind(&update.username)
        .bind(&update.bio)
        .bind(&update.avatar_url)
        .bind(Utc::now())
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update profile")?;

        Ok(row.map(|r| Self::row_to_profile(&r)))
    }

    fn row_to_profile(row: &sqlx::postgres::PgRow) -> UserProfile {
        UserProfile {
            id: row.get("id"),
            user_id: row.get::<i64, _>("user_id") as u64,
            username: row.get("username"),
            bio: row.get("bio"),
            avatar_url: row.get("avatar_url"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
