use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 만화 (데이터베이스 행)
/// Comic (database row)
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
#[schema(as = Comic)]
pub struct Comic {
    /// Comic ID
    /// 만화 ID
    pub id: u64,

    /// Creator's profile ID
    /// 작성자 프로필 ID
    pub creator_profile_id: String,

    /// Title
    /// 제목
    #[schema(example = "Space Cats")]
    pub title: String,

    /// URL slug (derived from title, unique)
    /// URL 슬러그 (제목에서 파생, 유일)
    #[schema(example = "space-cats")]
    pub slug: String,

    /// Description
    /// 설명
    pub description: Option<String>,

    /// Cover image URL
    /// 표지 이미지 URL
    pub cover_url: Option<String>,

    /// Status: "draft" | "published"
    /// 상태: "draft" | "published"
    #[schema(example = "draft")]
    pub status: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 만화 생성 요청 모델
/// Create comic request model
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = CreateComicRequest)]
pub struct CreateComicRequest {
    /// Title
    /// 제목
    #[schema(example = "Space Cats")]
    pub title: String,

    /// Description
    /// 설명
    pub description: Option<String>,

    /// Cover image URL
    /// 표지 이미지 URL
    pub cover_url: Option<String>,
}

/// 만화 생성용 내부 모델 (Repository에서 사용)
/// Internal model for creating comics (used by repository)
#[derive(Debug)]
pub struct ComicCreate {
    pub creator_profile_id: String,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub cover_url: Option<String>,
}

/// 만화 부분 업데이트 요청 (전달된 필드만 변경)
/// Partial comic update request (only provided fields change)
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = UpdateComicRequest)]
pub struct ComicUpdate {
    /// New title (slug은 변경되지 않음)
    /// New title (the slug does not change)
    pub title: Option<String>,

    /// New description
    /// 새 설명
    pub description: Option<String>,

    /// New cover URL
    /// 새 표지 URL
    pub cover_url: Option<String>,

    /// New status: "draft" | "published"
    /// 새 상태
    #[schema(example = "published")]
    pub status: Option<String>,
}

/// 만화 목록 응답 모델
/// Comics list response model
#[derive(Debug, Serialize, ToSchema)]
#[schema(as = ComicsResponse)]
pub struct ComicsResponse {
    /// List of comics
    /// 만화 목록
    pub comics: Vec<Comic>,
}
