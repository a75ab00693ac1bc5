use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 챕터 (데이터베이스 행)
/// Chapter (database row)
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[schema(as = Chapter)]
pub struct Chapter {
    pub id: u64,

    /// Owning comic ID
    /// 소속 만화 ID
    pub comic_id: u64,

    /// Chapter number (unique per comic)
    /// 챕터 번호 (만화당 유일)
    #[schema(example = 1)]
    pub chapter_number: i32,

    /// Title
    /// 제목
    #[schema(example = "First Contact")]
    pub title: String,

    /// Content URL (pages location)
    /// 콘텐츠 URL
    pub content_url: Option<String>,

    /// Published flag
    /// 공개 여부
    pub published: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 챕터 생성 요청 모델
/// Create chapter request model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateChapterRequest)]
pub struct ChapterCreate {
    /// Chapter number (unique per comic)
    /// 챕터 번호 (만화당 유일)
    #[schema(example = 1)]
    pub chapter_number: i32,

    /// Title
    /// 제목
    #[schema(example = "First Contact")]
    pub title: String,

    /// Content URL
    /// 콘텐츠 URL
    pub content_url: Option<String>,

    /// Published flag (default: false)
    /// 공개 여부 (기본값: false)
    pub published: Option<bool>,
}

/// 챕터 목록 응답 모델
/// Chapters list response model
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ChaptersResponse)]
pub struct ChaptersResponse {
    /// List of chapters
    /// 챕터 목록
    pub chapters: Vec<Chapter>,
}
