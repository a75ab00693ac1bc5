use crate::domains::comics::models::chapter::{Chapter, ChapterCreate};
use crate::domains::comics::services::ComicService;
use crate::shared::database::{ChapterRepository, Database};
use crate::shared::errors::ComicError;

/// 챕터 서비스
/// ChapterService: handles chapter-related business logic
#[derive(Clone)]
pub struct ChapterService {
    db: Database,
    comic_service: ComicService,
}

impl ChapterService {
    /// 생성자
    /// Constructor
    pub fn new(db: Database) -> Self {
        let comic_service = ComicService::new(db.clone());
        Self { db, comic_service }
    }

    /// 챕터 생성 (만화 작성자만 가능)
    /// Create chapter (comic creator only)
    pub async fn create_chapter(
        &self,
        comic_id: u64,
        caller_profile_id: &str,
        request: ChapterCreate,
    ) -> Result<Chapter, ComicError> {
        // 1. 만화 존재 + 소유권 확인
        // Comic must exist and the caller must be its creator
        let comic = self.comic_service.get_comic(comic_id).await?;
        if comic.creator_profile_id != caller_profile_id {
            return Err(ComicError::NotComicOwner);
        }

        // 2. 챕터 생성 (UNIQUE 제약이 중복 번호를 막음)
        let chapter_repo = ChapterRepository::new(self.db.pool().clone());
        let chapter_number = request.chapter_number;

        let chapter = chapter_repo
            .create_chapter(comic_id, &request)
            .await
            .map_err(|e| {
                // UNIQUE 제약 위반 에러 처리 (root_cause가 Postgres 에러)
                // Unique violation check (the root cause is the Postgres error)
                let error_msg = e.root_cause().to_string();
                if error_msg.contains("unique constraint") || error_msg.contains("duplicate key") {
                    ComicError::ChapterNumberTaken { chapter_number }
                } else {
                    ComicError::DatabaseError(format!("Failed to create chapter: {}", e))
                }
            })?;

        Ok(chapter)
    }

    /// 만화의 모든 챕터 조회
    /// List all chapters of a comic
    pub async fn list_chapters(&self, comic_id: u64) -> Result<Vec<Chapter>, ComicError> {
        // 만화 존재 확인 (없으면 404)
        self.comic_service.get_comic(comic_id).await?;

        let chapter_repo = ChapterRepository::new(self.db.pool().clone());
        let chapters = chapter_repo
            .list_by_comic(comic_id)
            .await
            .map_err(|e| ComicError::DatabaseError(format!("Failed to list chapters: {}", e)))?;

        Ok(chapters)
    }

    /// 챕터 조회 (만화 ID + 챕터 번호)
    /// Get chapter by comic id + chapter number
    pub async fn get_chapter(
        &self,
        comic_id: u64,
        chapter_number: i32,
    ) -> Result<Chapter, ComicError> {
        // 만화 존재 확인 (없으면 404)
        self.comic_service.get_comic(comic_id).await?;

        let chapter_repo = ChapterRepository::new(self.db.pool().clone());
        let chapter = chapter_repo
            .get_by_number(comic_id, chapter_number)
            .await
            .map_err(|e| ComicError::DatabaseError(format!("Failed to fetch chapter: {}", e)))?;

        chapter.ok_or(ComicError::ChapterNotFound {
            comic_id,
            chapter_number,
        })
    }
}
