// Comics domain state
// 만화 도메인 상태
use crate::domains::comics::services::{ChapterService, ComicService};
use crate::shared::database::Database;

/// Comics domain state
/// 만화 도메인에서 필요한 서비스들을 포함하는 상태
#[derive(Clone)]
pub struct ComicState {
    pub comic_service: ComicService,
    pub chapter_service: ChapterService,
}

impl ComicState {
    /// Create ComicState with database
    /// ComicState 생성 (데이터베이스 필요)
    pub fn new(db: Database) -> Self {
        Self {
            comic_service: ComicService::new(db.clone()),
            chapter_service: ChapterService::new(db),
        }
    }
}
