use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{EmailLoginRequest, SignupRequest, TokenResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::cookie::create_access_token_cookie;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 회원가입 API
///
/// 회원을 생성하고 Access Token을 발급합니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "회원가입 성공", body = SuccessTokenResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 409, description = "이메일 또는 닉네임 중복", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<SignupRequest>, AppError>,
) -> Result<Response, AppError> {
    req.validate()?;

    let max_age = state.config.jwt_expiration;
    let result = AuthService::signup(state, req).await?;

    token_response(result, max_age)
}

/// 이메일 로그인 API
///
/// 가입된 이메일로 Access Token을 발급합니다.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = EmailLoginRequest,
    responses(
        (status = 200, description = "로그인 성공", body = SuccessTokenResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(req), _): WithRejection<Json<EmailLoginRequest>, AppError>,
) -> Result<Response, AppError> {
    req.validate()?;

    let max_age = state.config.jwt_expiration;
    let result = AuthService::login_by_email(state, req).await?;

    token_response(result, max_age)
}

fn token_response(result: TokenResponse, max_age: i64) -> Result<Response, AppError> {
    let cookie = create_access_token_cookie(&result.access_token, max_age)?;

    Ok(([(SET_COOKIE, cookie)], Json(BaseResponse::success(result))).into_response())
}
