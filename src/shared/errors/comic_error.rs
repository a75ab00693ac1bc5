use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 만화/챕터 관련 에러
/// Comic/chapter-related errors
#[derive(Error, Debug)]
pub enum ComicError {
    /// 만화를 찾을 수 없음
    /// Comic not found
    #[error("Comic not found: id={id}")]
    ComicNotFound { id: u64 },

    /// 챕터를 찾을 수 없음
    /// Chapter not found
    #[error("Chapter not found: comic={comic_id}, chapter={chapter_number}")]
    ChapterNotFound { comic_id: u64, chapter_number: i32 },

    /// 만화의 소유자가 아님 (작성자만 수정 가능)
    /// Caller is not the comic's creator
    #[error("Only the comic's creator can modify it")]
    NotComicOwner,

    /// 챕터 번호가 이미 사용 중
    /// Chapter number already taken for this comic
    #[error("Chapter number {chapter_number} already exists for this comic")]
    ChapterNumberTaken { chapter_number: i32 },

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// ComicError를 HTTP 응답으로 변환
impl From<ComicError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ComicError) -> Self {
        let status = match &err {
            ComicError::ComicNotFound { .. } => StatusCode::NOT_FOUND,
            ComicError::ChapterNotFound { .. } => StatusCode::NOT_FOUND,
            ComicError::NotComicOwner => StatusCode::FORBIDDEN,
            ComicError::ChapterNumberTaken { .. } => StatusCode::BAD_REQUEST,
            ComicError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_owner_maps_to_403() {
        let (status, _): (StatusCode, Json<serde_json::Value>) = ComicError::NotComicOwner.into();
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[test]
    fn duplicate_chapter_maps_to_400() {
        let (status, _): (StatusCode, Json<serde_json::Value>) =
            ComicError::ChapterNumberTaken { chapter_number: 3 }.into();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
