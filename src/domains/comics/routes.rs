// Comics domain routes
// 만화 도메인 라우터
use axum::{routing::get, Router};

use crate::domains::comics::handlers::{chapter_handler, comic_handler};
use crate::shared::services::AppState;

/// Create comics router
/// 만화 라우터 생성
pub fn create_comics_router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(comic_handler::list_comics).post(comic_handler::create_comic), // POST는 인증 필요
        )
        .route(
            "/:id",
            get(comic_handler::get_comic).put(comic_handler::update_comic), // PUT은 인증 필요
        )
        .route(
            "/:id/chapters",
            get(chapter_handler::list_chapters).post(chapter_handler::create_chapter), // POST는 인증 필요
        )
        .route("/:id/chapters/:number", get(chapter_handler::get_chapter))
}
