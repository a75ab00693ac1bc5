// Users domain routes
// 프로필 도메인 라우터
use axum::{routing::get, Router};

use crate::domains::users::handlers::profile_handler;
use crate::shared::services::AppState;

/// Create profiles router
/// 프로필 라우터 생성
pub fn create_profiles_router() -> Router<AppState> {
    Router::new()
        .route(
            "/me",
            get(profile_handler::get_my_profile).put(profile_handler::update_my_profile), // 인증 필요
        )
        .route("/:id", get(profile_handler::get_profile))
}
