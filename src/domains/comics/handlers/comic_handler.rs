// Comic Handler
// 만화 핸들러

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domains::comics::models::comic::{
    Comic, ComicUpdate, ComicsResponse, CreateComicRequest,
};
use crate::shared::errors::ComicError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 만화 생성 핸들러
/// Create comic
///
/// 경로: POST /comics
/// 인증: 필요 (JWT 토큰, 작성자 = 호출자 프로필)
#[utoipa::path(
    post,
    path = "/comics",
    request_body = CreateComicRequest,
    responses(
        (status = 201, description = "Comic created successfully", body = Comic),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Comics",
    security(("BearerAuth" = []))
)]
pub async fn create_comic(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<CreateComicRequest>,
) -> Result<(StatusCode, Json<Comic>), (StatusCode, Json<serde_json::Value>)> {
    let comic = app_state
        .comic_state
        .comic_service
        .create_comic(&authenticated_user.profile_id, request)
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok((StatusCode::CREATED, Json(comic)))
}

/// 공개 만화 목록 조회 핸들러
/// List published comics
///
/// 경로: GET /comics
#[utoipa::path(
    get,
    path = "/comics",
    responses(
        (status = 200, description = "Comics retrieved successfully", body = ComicsResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Comics"
)]
pub async fn list_comics(
    State(app_state): State<AppState>,
) -> Result<Json<ComicsResponse>, (StatusCode, Json<serde_json::Value>)> {
    let comics = app_state
        .comic_state
        .comic_service
        .list_comics()
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(ComicsResponse { comics }))
}

/// 만화 조회 핸들러
/// Get comic by id
///
/// 경로: GET /comics/{id}
#[utoipa::path(
    get,
    path = "/comics/{id}",
    params(
        ("id" = u64, Path, description = "Comic ID")
    ),
    responses(
        (status = 200, description = "Comic retrieved successfully", body = Comic),
        (status = 404, description = "Comic not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Comics"
)]
pub async fn get_comic(
    State(app_state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Comic>, (StatusCode, Json<serde_json::Value>)> {
    let comic = app_state
        .comic_state
        .comic_service
        .get_comic(id)
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(comic))
}

/// 만화 수정 핸들러
/// Update comic (creator only)
///
/// 경로: PUT /comics/{id}
/// 인증: 필요 (작성자만)
#[utoipa::path(
    put,
    path = "/comics/{id}",
    params(
        ("id" = u64, Path, description = "Comic ID")
    ),
    request_body = ComicUpdate,
    responses(
        (status = 200, description = "Comic updated successfully", body = Comic),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not the comic's creator"),
        (status = 404, description = "Comic not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Comics",
    security(("BearerAuth" = []))
)]
pub async fn update_comic(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Path(id): Path<u64>,
    Json(request): Json<ComicUpdate>,
) -> Result<Json<Comic>, (StatusCode, Json<serde_json::Value>)> {
    let comic = app_state
        .comic_state
        .comic_service
        .update_comic(id, &authenticated_user.profile_id, request)
        .await
        .map_err(|e: ComicError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(comic))
}
