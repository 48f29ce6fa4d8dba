use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{MemberProfileResponse, UpdateProfileRequest};
use super::service::MemberService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 로그인된 유저 프로필 조회 API
///
/// JWT 토큰에서 사용자 정보를 추출하여 프로필을 반환합니다.
#[utoipa::path(
    get,
    path = "/api/v1/members/me",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "프로필 조회 성공", body = SuccessProfileResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<MemberProfileResponse>>, AppError> {
    let member_id = user.member_id()?;
    let profile = MemberService::get_profile(state, member_id).await?;

    Ok(Json(BaseResponse::success(profile)))
}

/// 닉네임 변경 API
#[utoipa::path(
    patch,
    path = "/api/v1/members/me",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "변경 성공", body = SuccessProfileResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 409, description = "닉네임 중복", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(req), _): WithRejection<Json<UpdateProfileRequest>, AppError>,
) -> Result<Json<BaseResponse<MemberProfileResponse>>, AppError> {
    req.validate()?;

    let member_id = user.member_id()?;
    let profile = MemberService::update_profile(state, member_id, req).await?;

    Ok(Json(BaseResponse::success(profile)))
}

/// 회원 목록 조회 API
///
/// 팀에 추가할 멤버를 고를 때 사용합니다.
#[utoipa::path(
    get,
    path = "/api/v1/members",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessProfileListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Member"
)]
pub async fn list_members(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<BaseResponse<Vec<MemberProfileResponse>>>, AppError> {
    let members = MemberService::list_members(state).await?;

    Ok(Json(BaseResponse::success(members)))
}
