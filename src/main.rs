use axum::http::{HeaderValue, Method};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use nwt_api_server::routes::create_router;
use nwt_api_server::shared::config::Config;
use nwt_api_server::shared::database::Database;
use nwt_api_server::shared::services::AppState;

// Import models for OpenAPI schema
use nwt_api_server::domains::auth::models::*;
use nwt_api_server::domains::comics::models::*;
use nwt_api_server::domains::users::models::*;
use nwt_api_server::domains::wallet::models::*;

// OpenAPI 스키마 정의: Swagger 문서 자동 생성
#[derive(OpenApi)]
#[openapi(
    paths(
        nwt_api_server::domains::auth::handlers::auth_handler::signup,
        nwt_api_server::domains::auth::handlers::auth_handler::signin,
        nwt_api_server::domains::auth::handlers::auth_handler::refresh,
        nwt_api_server::domains::auth::handlers::auth_handler::logout,
        nwt_api_server::domains::auth::handlers::auth_handler::get_me,
        nwt_api_server::domains::users::handlers::profile_handler::get_my_profile,
        nwt_api_server::domains::users::handlers::profile_handler::update_my_profile,
        nwt_api_server::domains::users::handlers::profile_handler::get_profile,
        nwt_api_server::domains::wallet::handlers::wallet_handler::get_wallet_balance,
        nwt_api_server::domains::wallet::handlers::wallet_handler::debit_wallet,
        nwt_api_server::domains::wallet::handlers::wallet_handler::credit_wallet,
        nwt_api_server::domains::comics::handlers::comic_handler::create_comic,
        nwt_api_server::domains::comics::handlers::comic_handler::list_comics,
        nwt_api_server::domains::comics::handlers::comic_handler::get_comic,
        nwt_api_server::domains::comics::handlers::comic_handler::update_comic,
        nwt_api_server::domains::comics::handlers::chapter_handler::create_chapter,
        nwt_api_server::domains::comics::handlers::chapter_handler::list_chapters,
        nwt_api_server::domains::comics::handlers::chapter_handler::get_chapter
    ),
    components(schemas(
        SignupRequest,
        SignupResponse,
        SigninRequest,
        SigninResponse,
        RefreshTokenRequest,
        RefreshTokenResponse,
        LogoutRequest,
        UserResponse,
        ProfileResponse,
        UserProfileUpdate,
        Wallet,
        WalletBalanceResponse,
        WalletMutationRequest,
        WalletMutationResponse,
        Comic,
        CreateComicRequest,
        ComicUpdate,
        ComicsResponse,
        Chapter,
        ChapterCreate,
        ChaptersResponse
    )),
    modifiers(
        &SecurityAddon
    ),
    tags(
        (name = "Auth", description = "Authentication API endpoints"),
        (name = "Profiles", description = "User profile API endpoints"),
        (name = "Wallet", description = "NWT wallet ledger API endpoints"),
        (name = "Comics", description = "Comic management API endpoints"),
        (name = "Chapters", description = "Chapter management API endpoints")
    ),
    info(
        title = "NWT Platform API Server",
        description = "API server for the NWT comics platform (auth, profiles, wallet ledger, comics)",
        version = "1.0.0"
    )
)]
struct ApiDoc;

// Security scheme 정의: Swagger UI에서 "Authorize" 버튼 추가
struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() {
    // 로깅 초기화 (RUST_LOG로 레벨 제어)
    // Initialize logging (level controlled via RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nwt_api_server=info,tower_http=info".into()),
        )
        .init();

    // 설정 로드
    let config = Config::from_env();

    // DB 연결
    let db = Database::new(&config.database_url)
        .await
        .expect("Failed to connect to database");

    db.initialize()
        .await
        .expect("Failed to initialize database");

    // AppState 생성 (모든 Service 초기화)
    let app_state = AppState::new(db, &config);

    // CORS 설정
    let cors = CorsLayer::new()
        .allow_origin(
            config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("Invalid CORS origin"),
        )
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true);

    // Router 생성
    let app = axum::Router::new()
        .merge(create_router())
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .with_state(app_state);

    // 서버 시작
    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .expect("Failed to bind listener");

    tracing::info!("Server running on http://localhost:{}", config.port);
    tracing::info!("Swagger UI available at http://localhost:{}/docs", config.port);

    // 서버 실행
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
