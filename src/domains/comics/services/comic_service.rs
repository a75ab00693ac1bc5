use uuid::Uuid;

use crate::domains::comics::models::comic::{Comic, ComicCreate, ComicUpdate, CreateComicRequest};
use crate::shared::database::{ComicRepository, Database};
use crate::shared::errors::ComicError;

/// 만화 서비스
/// ComicService: handles comic-related business logic
#[derive(Clone)]
pub struct ComicService {
    db: Database,
}

impl ComicService {
    /// 생성자
    /// Constructor
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 만화 생성 (작성자 = 호출자의 프로필)
    /// Create comic (creator = caller's profile)
    pub async fn create_comic(
        &self,
        creator_profile_id: &str,
        request: CreateComicRequest,
    ) -> Result<Comic, ComicError> {
        let comic_repo = ComicRepository::new(self.db.pool().clone());

        // 슬러그 생성: 제목 기반 + 짧은 uuid 접미사 (유일성 보장)
        // Slug: title-derived + short uuid suffix (guarantees uniqueness)
        let slug = format!("{}-{}", slugify(&request.title), short_suffix());

        let comic = comic_repo
            .create_comic(&ComicCreate {
                creator_profile_id: creator_profile_id.to_string(),
                title: request.title,
                slug,
                description: request.description,
                cover_url: request.cover_url,
            })
            .await
            .map_err(|e| ComicError::DatabaseError(format!("Failed to create comic: {}", e)))?;

        Ok(comic)
    }

    /// 만화 조회 (ID로)
    /// Get comic by id
    pub async fn get_comic(&self, id: u64) -> Result<Comic, ComicError> {
        let comic_repo = ComicRepository::new(self.db.pool().clone());

        let comic = comic_repo
            .get_comic_by_id(id)
            .await
            .map_err(|e| ComicError::DatabaseError(format!("Failed to fetch comic: {}", e)))?;

        comic.ok_or(ComicError::ComicNotFound { id })
    }

    /// 공개된 만화 목록 조회
    /// List published comics
    pub async fn list_comics(&self) -> Result<Vec<Comic>, ComicError> {
        let comic_repo = ComicRepository::new(self.db.pool().clone());

        let comics = comic_repo
            .list_published()
            .await
            .map_err(|e| ComicError::DatabaseError(format!("Failed to list comics: {}", e)))?;

        Ok(comics)
    }

    /// 만화 수정 (작성자만 가능)
    /// Update comic (creator only)
    pub async fn update_comic(
        &self,
        id: u64,
        caller_profile_id: &str,
        update: ComicUpdate,
    ) -> Result<Comic, ComicError> {
        // 1. 만화 조회 + 소유권 확인
        // Load the comic and check ownership
        let comic = self.get_comic(id).await?;
        if comic.creator_profile_id != caller_profile_id {
            return Err(ComicError::NotComicOwner);
        }

        // 2. 부분 업데이트
        let comic_repo = ComicRepository::new(self.db.pool().clone());
        let updated = comic_repo
            .update_comic(id, &update)
            .await
            .map_err(|e| ComicError::DatabaseError(format!("Failed to update comic: {}", e)))?;

        updated.ok_or(ComicError::ComicNotFound { id })
    }
}

/// 제목을 URL 슬러그로 변환 (소문자 영숫자 + 하이픈)
/// Turn a title into a URL slug (lowercase alphanumerics + hyphens)
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // 선행 하이픈 방지

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    let slug = slug.trim_end_matches('-').to_string();
    if slug.is_empty() {
        "comic".to_string()
    } else {
        slug
    }
}

/// 슬러그 유일성용 짧은 접미사 (uuid 앞 8자)
/// Short suffix for slug uniqueness (first 8 chars of a uuid)
fn short_suffix() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_basic_title() {
        assert_eq!(slugify("Space Cats"), "space-cats");
    }

    #[test]
    fn slugify_collapses_separators_and_trims() {
        assert_eq!(slugify("  Space -- Cats!! "), "space-cats");
        assert_eq!(slugify("Hello, World: Part 2"), "hello-world-part-2");
    }

    #[test]
    fn slugify_non_ascii_falls_back() {
        // ASCII 영숫자가 하나도 없으면 기본 슬러그 사용
        assert_eq!(slugify("우주 고양이"), "comic");
    }

    #[test]
    fn short_suffix_is_8_hex_chars() {
        let s = short_suffix();
        assert_eq!(s.len(), 8);
        assert!(s.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
    }
}
