use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::domains::comics::models::comic::{Comic, ComicCreate, ComicUpdate};

/// 만화 Repository
/// Comic repository
pub struct ComicRepository {
    pool: PgPool,
}

impl ComicRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 만화 생성
    /// Create comic
    pub async fn create_comic(&self, data: &ComicCreate) -> Result<Comic> {
        let row = sqlx::query(
            r#"
            INSERT INTO comics (creator_profile_id, title, slug, description, cover_url, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 'draft', $6, $6)
            RETURNING id, creator_profile_id, title, slug, description, cover_url, status, created_at, updated_at
            "#,
        )
        .bind(&data.creator_profile_id)
        .bind(&data.title)
        .bind(&data.slug)
        .bind(&data.description)
        .bind(&data.cover_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create comic")?;

        Ok(Self::row_to_comic(&row))
    }

    /// 만화 조회 (ID로)
    /// Get comic by id
    pub async fn get_comic_by_id(&self, id: u64) -> Result<Option<Comic>> {
        let row = sqlx::query(
            r#"
            SELECT id, creator_profile_id, title, slug, description, cover_url, status, created_at, updated_at
            FROM comics
            WHERE id = $1
            "#,
        )
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch comic by id")?;

        Ok(row.map(|r| Self::row_to_comic(&r)))
    }

    /// 공개된 만화 목록 조회 (최신순)
    /// List published comics (newest first)
    pub async fn list_published(&self) -> Result<Vec<Comic>> {
        let rows = sqlx::query(
            r#"
            SELECT id, creator_profile_id, title, slug, description, cover_url, status, created_at, updated_at
            FROM comics
            WHERE status = 'published'
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list published comics")?;

        Ok(rows.iter().map(Self::row_to_comic).collect())
    }

    /// 만화 부분 업데이트
    /// Partial comic update
    pub async fn update_comic(&self, id: u64, update: &ComicUpdate) -> Result<Option<Comic>> {
        let row = sqlx::query(
            r#"
            UPDATE comics
            SET title = COALESCE($1, title),
                description = COALESCE($2, description),
                cover_url = COALESCE($3, cover_url),
                status = COALESCE($4, status),
                updated_at = $5
            WHERE id = $6
            RETURNING id, creator_profile_id, title, slug, description, cover_url, status, created_at, updated_at
            "#,
        )
        .bind(&update.title)
        .bind(&update.description)
        .bind(&update.cover_url)
        .bind(&update.status)
        .bind(Utc::now())
        .bind(id as i64)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to update comic")?;

        Ok(row.map(|r| Self::row_to_comic(&r)))
    }

    fn row_to_comic(row: &sqlx::postgres::PgRow) -> Comic {
        Comic {
            id: row.get::<i64, _>("id") as u64,
            creator_profile_id: row.get("creator_profile_id"),
            title: row.get("title"),
            slug: row.get("slug"),
            description: row.get("description"),
            cover_url: row.get("cover_url"),
            status: row.get("status"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
