use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    AddTeamMemberRequest, CreateTeamRequest, RequirementItem, SetRequirementRequest,
    TeamDetailResponse, TeamListItem, TeamMemberItem, TeamResponse, UpdateTeamRequest,
};
use super::service::TeamService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 팀 생성 API
///
/// 새로운 팀을 생성하고 생성자를 소유자로 설정합니다.
#[utoipa::path(
    post,
    path = "/api/v1/teams",
    request_body = CreateTeamRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "팀 생성 성공", body = SuccessTeamResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn create_team(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(req), _): WithRejection<Json<CreateTeamRequest>, AppError>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    req.validate()?;

    let member_id = user.member_id()?;
    let result = TeamService::create_team(state, member_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 내 팀 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/teams",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessTeamListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn list_my_teams(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<Vec<TeamListItem>>>, AppError> {
    let member_id = user.member_id()?;
    let result = TeamService::list_my_teams(state, member_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 팀 상세 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/teams/{team_id}",
    params(("team_id" = i64, Path, description = "팀 ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessTeamDetailResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn get_team(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(team_id): Path<i64>,
) -> Result<Json<BaseResponse<TeamDetailResponse>>, AppError> {
    let result = TeamService::get_team(state, team_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 팀 정보 수정 API (소유자 전용)
#[utoipa::path(
    patch,
    path = "/api/v1/teams/{team_id}",
    params(("team_id" = i64, Path, description = "팀 ID")),
    request_body = UpdateTeamRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "수정 성공", body = SuccessTeamResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "소유자가 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn update_team(
    State(state): State<AppState>,
    user: AuthUser,
    Path(team_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateTeamRequest>, AppError>,
) -> Result<Json<BaseResponse<TeamResponse>>, AppError> {
    req.validate()?;

    let member_id = user.member_id()?;
    let result = TeamService::update_team(state, member_id, team_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 팀 삭제 API (소유자 전용)
///
/// 팀 멤버십과 스킬 요구사항도 함께 삭제됩니다.
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}",
    params(("team_id" = i64, Path, description = "팀 ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "삭제 성공", body = SuccessEmptyResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "소유자가 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn delete_team(
    State(state): State<AppState>,
    user: AuthUser,
    Path(team_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;
    TeamService::delete_team(state, member_id, team_id).await?;

    Ok(Json(BaseResponse::empty("팀이 삭제되었습니다.")))
}

/// 팀 멤버 추가 API (소유자 전용)
#[utoipa::path(
    post,
    path = "/api/v1/teams/{team_id}/members",
    params(("team_id" = i64, Path, description = "팀 ID")),
    request_body = AddTeamMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "추가 성공", body = SuccessTeamMemberResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "소유자가 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀 또는 사용자", body = ErrorResponse),
        (status = 409, description = "이미 팀에 속한 멤버", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn add_member(
    State(state): State<AppState>,
    user: AuthUser,
    Path(team_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<AddTeamMemberRequest>, AppError>,
) -> Result<Json<BaseResponse<TeamMemberItem>>, AppError> {
    req.validate()?;

    let owner_id = user.member_id()?;
    let result = TeamService::add_member(state, owner_id, team_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 팀 멤버 제거 API (소유자 전용)
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}/members/{member_id}",
    params(
        ("team_id" = i64, Path, description = "팀 ID"),
        ("member_id" = i64, Path, description = "제거할 멤버 ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "제거 성공", body = SuccessEmptyResponse),
        (status = 400, description = "소유자 제거 시도", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "소유자가 아님", body = ErrorResponse),
        (status = 404, description = "팀에 속하지 않은 멤버", body = ErrorResponse)
    ),
    tag = "Team"
)]
pub async fn remove_member(
    State(state): State<AppState>,
    user: AuthUser,
    Path((team_id, member_id)): Path<(i64, i64)>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let owner_id = user.member_id()?;
    TeamService::remove_member(state, owner_id, team_id, member_id).await?;

    Ok(Json(BaseResponse::empty("팀 멤버가 제거되었습니다.")))
}

/// 팀 스킬 요구사항 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/teams/{team_id}/requirements",
    params(("team_id" = i64, Path, description = "팀 ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessRequirementListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀", body = ErrorResponse)
    ),
    tag = "Requirement"
)]
pub async fn list_requirements(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(team_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<RequirementItem>>>, AppError> {
    let result = TeamService::list_requirements(state, team_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 팀 스킬 요구사항 등록/수정 API (소유자 전용)
///
/// 같은 스킬, 같은 레벨의 요구사항이 있으면 목표 인원만 갱신합니다.
#[utoipa::path(
    put,
    path = "/api/v1/teams/{team_id}/requirements",
    params(("team_id" = i64, Path, description = "팀 ID")),
    request_body = SetRequirementRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "저장 성공", body = SuccessRequirementResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "소유자가 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 팀, 스킬 또는 레벨", body = ErrorResponse)
    ),
    tag = "Requirement"
)]
pub async fn set_requirement(
    State(state): State<AppState>,
    user: AuthUser,
    Path(team_id): Path<i64>,
    WithRejection(Json(req), _): WithRejection<Json<SetRequirementRequest>, AppError>,
) -> Result<Json<BaseResponse<RequirementItem>>, AppError> {
    req.validate()?;

    let owner_id = user.member_id()?;
    let result = TeamService::set_requirement(state, owner_id, team_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 팀 스킬 요구사항 삭제 API (소유자 전용)
#[utoipa::path(
    delete,
    path = "/api/v1/teams/{team_id}/requirements/{requirement_id}",
    params(
        ("team_id" = i64, Path, description = "팀 ID"),
        ("requirement_id" = i64, Path, description = "요구사항 ID")
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "삭제 성공", body = SuccessEmptyResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 403, description = "소유자가 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 요구사항", body = ErrorResponse)
    ),
    tag = "Requirement"
)]
pub async fn delete_requirement(
    State(state): State<AppState>,
    user: AuthUser,
    Path((team_id, requirement_id)): Path<(i64, i64)>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let owner_id = user.member_id()?;
    TeamService::delete_requirement(state, owner_id, team_id, requirement_id).await?;

    Ok(Json(BaseResponse::empty("요구사항이 삭제되었습니다.")))
}
