// Wallet Handler
// 지갑 핸들러
// 역할: HTTP 요청을 WalletService 호출로 변환하고 에러를 상태 코드로 매핑

use axum::{extract::State, http::StatusCode, Json};

use crate::domains::wallet::models::wallet::{
    WalletBalanceResponse, WalletMutationRequest, WalletMutationResponse,
};
use crate::shared::errors::WalletError;
use crate::shared::middleware::auth::AuthenticatedUser;
use crate::shared::services::AppState;

/// 잔고 조회 핸들러
/// Get wallet balance for authenticated user
///
/// 경로: GET /wallet/balance
/// 인증: 필요 (JWT 토큰)
#[utoipa::path(
    get,
    path = "/wallet/balance",
    responses(
        (status = 200, description = "Balance retrieved successfully", body = WalletBalanceResponse),
        (status = 401, description = "Unauthorized (missing or invalid token)"),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet",
    security(("BearerAuth" = []))
)]
pub async fn get_wallet_balance(
    State(app_state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<WalletBalanceResponse>, (StatusCode, Json<serde_json::Value>)> {
    // JWT 토큰에서 추출한 profile_id 사용
    // Use profile_id extracted from JWT token
    let balance = app_state
        .wallet_state
        .wallet_service
        .get_balance(&authenticated_user.profile_id)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(WalletBalanceResponse { balance }))
}

/// 잔고 차감 핸들러
/// Debit wallet balance
///
/// 경로: POST /wallet/debit
/// 인증: 없음 (내부 연동용 엔드포인트)
///
/// # Returns
/// * `200 OK` - `{ success: true, balance }` (차감 후 잔고)
/// * `400 Bad Request` - 필드 누락, 금액이 양수가 아님, 잔고 부족
/// * `404 Not Found` - 지갑 없음
/// * `500 Internal Server Error` - 서버 오류
#[utoipa::path(
    post,
    path = "/wallet/debit",
    request_body = WalletMutationRequest,
    responses(
        (status = 200, description = "Balance debited successfully", body = WalletMutationResponse),
        (status = 400, description = "Missing fields, non-positive amount, or insufficient funds"),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet"
)]
pub async fn debit_wallet(
    State(app_state): State<AppState>,
    Json(request): Json<WalletMutationRequest>,
) -> Result<Json<WalletMutationResponse>, (StatusCode, Json<serde_json::Value>)> {
    // 필드 누락은 400 (axum 기본 422가 아니라)
    // Missing fields are a 400 (not axum's default 422)
    let (user_id, amount) = require_fields(&request)?;

    let balance = app_state
        .wallet_state
        .wallet_service
        .debit_wallet(user_id, amount)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(WalletMutationResponse {
        success: true,
        balance,
    }))
}

/// 잔고 충전 핸들러
/// Credit wallet balance
///
/// 경로: POST /wallet/credit
#[utoipa::path(
    post,
    path = "/wallet/credit",
    request_body = WalletMutationRequest,
    responses(
        (status = 200, description = "Balance credited successfully", body = WalletMutationResponse),
        (status = 400, description = "Missing fields or non-positive amount"),
        (status = 404, description = "Wallet not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Wallet"
)]
pub async fn credit_wallet(
    State(app_state): State<AppState>,
    Json(request): Json<WalletMutationRequest>,
) -> Result<Json<WalletMutationResponse>, (StatusCode, Json<serde_json::Value>)> {
    let (user_id, amount) = require_fields(&request)?;

    let balance = app_state
        .wallet_state
        .wallet_service
        .credit_wallet(user_id, amount)
        .await
        .map_err(|e: WalletError| -> (StatusCode, Json<serde_json::Value>) { e.into() })?;

    Ok(Json(WalletMutationResponse {
        success: true,
        balance,
    }))
}

/// userId와 amount가 모두 있는지 검증
/// Require both userId and amount in the request body
fn require_fields(
    request: &WalletMutationRequest,
) -> Result<(&str, i64), (StatusCode, Json<serde_json::Value>)> {
    match (&request.user_id, request.amount) {
        (Some(user_id), Some(amount)) => Ok((user_id.as_str(), amount)),
        _ => Err((
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "userId and amount are required" })),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_fields_accepts_complete_request() {
        let request = WalletMutationRequest {
            user_id: Some("profile-1".to_string()),
            amount: Some(50),
        };
        let (user_id, amount) = require_fields(&request).unwrap();
        assert_eq!(user_id, "profile-1");
        assert_eq!(amount, 50);
    }

    #[test]
    fn require_fields_rejects_missing_amount() {
        let request = WalletMutationRequest {
            user_id: Some("profile-1".to_string()),
            amount: None,
        };
        let (status, _) = require_fields(&request).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn require_fields_rejects_missing_user_id() {
        let request = WalletMutationRequest {
            user_id: None,
            amount: Some(10),
        };
        let (status, body) = require_fields(&request).unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0["error"], "userId and amount are required");
    }
}
