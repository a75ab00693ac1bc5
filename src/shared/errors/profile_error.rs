use axum::{http::StatusCode, Json};
use serde_json::json;
use thiserror::Error;

/// 프로필 관련 에러
/// Profile-related errors
#[derive(Error, Debug)]
pub enum ProfileError {
    /// 프로필을 찾을 수 없음
    /// Profile not found
    #[error("Profile not found")]
    ProfileNotFound,

    /// 데이터베이스 에러
    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// ProfileError를 HTTP 응답으로 변환
impl From<ProfileError> for (StatusCode, Json<serde_json::Value>) {
    fn from(err: ProfileError) -> Self {
        let status = match &err {
            ProfileError::ProfileNotFound => StatusCode::NOT_FOUND,
            ProfileError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(json!({ "error": err.to_string() })))
    }
}
