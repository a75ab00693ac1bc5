use anyhow::{Context, Result};
use chrono::Utc;
use sqlx::{PgPool, Row};

use crate::domains::comics::models::chapter::{Chapter, ChapterCreate};

/// 챕터 Repository
/// Chapter repository
pub struct ChapterRepository {
    pool: PgPool,
}

impl ChapterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 챕터 생성
    /// Create chapter
    ///
    /// (comic_id, chapter_number) UNIQUE 제약이 중복 번호를 막는다.
    /// The (comic_id, chapter_number) UNIQUE constraint rejects duplicates.
    pub async fn create_chapter(&self, comic_id: u64, data: &ChapterCreate) -> Result<Chapter> {
        let row = sqlx::query(
            r#"
            INSERT INTO chapters (comic_id, chapter_number, title, content_url, published, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $6)
            RETURNING id, comic_id, chapter_number, title, content_url, published, created_at, updated_at
            "#,
        )
        .bind(comic_id as i64)
        .bind(data.chapter_number)
        .bind(&data.title)
        .bind(&data.content_url)
        .bind(data.published.unwrap_or(false))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .context("Failed to create chapter")?;

        Ok(Self::row_to_chapter(&row))
    }

    /// 만화의 모든 챕터 조회 (번호순)
    /// List all chapters of a comic (by number)
    pub async fn list_by_comic(&self, comic_id: u64) -> Result<Vec<Chapter>> {
        let rows = sqlx::query(
            r#"
            SELECT id, comic_id, chapter_number, title, content_url, published, created_at, updated_at
            FROM chapters
            WHERE comic_id = $1
            ORDER BY chapter_number ASC
            "#,
        )
        .bind(comic_id as i64)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list chapters")?;

        Ok(rows.iter().map(Self::row_to_chapter).collect())
    }

    /// 챕터 조회 (만화 ID + 챕터 번호)
    /// Get chapter by comic id + chapter number
    pub async fn get_by_number(
        &self,
        comic_id: u64,
        chapter_number: i32,
    ) -> Result<Option<Chapter>> {
        let row = sqlx::query(
            r#"
            SELECT id, comic_id, chapter_number, title, content_url, published, created_at, updated_at
            FROM chapters
            WHERE comic_id = $1 AND chapter_number = $2
            "#,
        )
        .bind(comic_id as i64)
        .bind(chapter_number)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch chapter")?;

        Ok(row.map(|r| Self::row_to_chapter(&r)))
    }

    fn row_to_chapter(row: &sqlx::postgres::PgRow) -> Chapter {
        Chapter {
            id: row.get::<i64, _>("id") as u64,
            comic_id: row.get::<i64, _>("comic_id") as u64,
            chapter_number: row.get("chapter_number"),
            title: row.get("title"),
            content_url: row.get("content_url"),
            published: row.get("published"),
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        }
    }
}
