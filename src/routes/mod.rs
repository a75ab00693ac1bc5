// Routes module: 라우팅 설정
// 역할: 모든 도메인의 라우터를 조합
// Routes module: combines all domain routers

use axum::Router;

use crate::domains::auth::routes::create_auth_router;
use crate::domains::comics::routes::create_comics_router;
use crate::domains::users::routes::create_profiles_router;
use crate::domains::wallet::routes::create_wallet_router;
use crate::shared::services::AppState;

/// Create main router (combines all domain routers)
/// 메인 라우터 생성 (모든 도메인 라우터 조합)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", create_auth_router())
        .nest("/profiles", create_profiles_router())
        .nest("/wallet", create_wallet_router())
        .nest("/comics", create_comics_router())
}
