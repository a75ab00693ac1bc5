use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::domains::users::models::profile::{ProfileResponse, UserProfileUpdate};
use crate::shared::errors::ProfileError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 내 프로필 조회 핸들러
/// Get my profile
///
/// 경로: GET /profiles/me
/// 인증: 필요 (JWT 토큰)
#[utoipa::path(
    get,
    path = "/profiles/me",
    responses(
        (status = 200, description = "Profile retrieved successfully", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profiles",
    security(("BearerAuth" = []))
)]
pub async fn get_my_profile(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<serde_json::Value>)> {
    let profile = app_state
        .profile_state
        .profile_service
        .get_profile(&authenticated_user.profile_id)
        .await
        .map_err(|e: ProfileError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(profile.into()))
}

/// 내 프로필 수정 핸들러
/// Update my profile (partial)
///
/// 경로: PUT /profiles/me
/// 인증: 필요 (JWT 토큰)
#[utoipa::path(
    put,
    path = "/profiles/me",
    request_body = UserProfileUpdate,
    responses(
        (status = 200, description = "Profile updated successfully", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profiles",
    security(("BearerAuth" = []))
)]
pub async fn update_my_profile(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(request): Json<UserProfileUpdate>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<serde_json::Value>)> {
    let profile = app_state
        .profile_state
        .profile_service
        .update_profile(&authenticated_user.profile_id, request)
        .await
        .map_err(|e: ProfileError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(profile.into()))
}

/// 프로필 공개 조회 핸들러
/// Get profile by id (public)
///
/// 경로: GET /profiles/{id}
#[utoipa::path(
    get,
    path = "/profiles/{id}",
    params(
        ("id" = String, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile retrieved successfully", body = ProfileResponse),
        (status = 404, description = "Profile not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Profiles"
)]
pub async fn get_profile(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProfileResponse>, (StatusCode, Json<serde_json::Value>)> {
    let profile = app_state
        .profile_state
        .profile_service
        .get_profile(&id)
        .await
        .map_err(|e: ProfileError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(profile.into()))
}
