// Chapter Handler
// 챕터 핸들러

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domains::comics::models::chapter::{Chapter, ChapterCreate, ChaptersResponse};
use crate::shared::errors::ComicError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 챕터 생성 핸들러
/// Create chapter (comic creator only)
///
/// 경로: POST /comics/{id}/chapters
/// 인증: 필요 (작성자만)
#[utoipa::path(
    post,
    path = "/comics/{id}/chapters",
    params(
        ("id" = u64, Path, description = "Comic ID")
    ),
    request_body = ChapterCreate,
    responses(
        (status = 201, description = "Chapter created successfully", body = Chapter),
        (status = 400, description = "Chapter number already taken"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not the comic's creator"),
        (status = 404, description = "Comic not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters",
    security(("BearerAuth" = []))
)]
pub async fn create_chapter(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(id): Path<u64>,
    Json(request): Json<ChapterCreate>,
) -> Result<(StatusCode, Json<Chapter>), (StatusCode, Json<serde_json::Value>)> {
    let chapter = app_state
        .comic_state
        .chapter_service
        .create_chapter(id, &authenticated_user.profile_id, request)
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(chapter)))
}

/// 챕터 목록 조회 핸들러
/// List chapters of a comic
///
/// 경로: GET /comics/{id}/chapters
#[utoipa::path(
    get,
    path = "/comics/{id}/chapters",
    params(
        ("id" = u64, Path, description = "Comic ID")
    ),
    responses(
        (status = 200, description = "Chapters retrieved successfully", body = ChaptersResponse),
        (status = 404, description = "Comic not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn list_chapters(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<ChaptersResponse>, (StatusCode, Json<serde_json::Value>)> {
    let chapters = app_state
        .comic_state
        .chapter_service
        .list_chapters(id)
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ChaptersResponse { chapters }))
}

/// 챕터 조회 핸들러
/// Get chapter by number
///
/// 경로: GET /comics/{id}/chapters/{number}
#[utoipa::path(
    get,
    path = "/comics/{id}/chapters/{number}",
    params(
        ("id" = u64, Path, description = "Comic ID"),
        ("number" = i32, Path, description = "Chapter number")
    ),
    responses(
        (status = 200, description = "Chapter retrieved successfully", body = Chapter),
        (status = 404, description = "Comic or chapter not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Chapters"
)]
pub async fn get_chapter(
    State(app_state): State<AppState>,
    Path((id, number)): Path<(u64, i32)>,
) -> Result<Json<Chapter>, (StatusCode, Json<serde_json::Value>)> {
    let chapter = app_state
        .comic_state
        .chapter_service
        .get_chapter(id, number)
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(chapter))
}
