use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::WithRejection;
use validator::Validate;

use super::dto::{
    CreateSkillRequest, LevelItem, MemberSkillItem, SetMemberSkillRequest, SkillItem,
    UpsertLevelRequest,
};
use super::service::SkillService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 스킬 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/skills",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessSkillListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn list_skills(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<BaseResponse<Vec<SkillItem>>>, AppError> {
    let result = SkillService::list_skills(state).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 스킬 생성 API
#[utoipa::path(
    post,
    path = "/api/v1/skills",
    request_body = CreateSkillRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "생성 성공", body = SuccessSkillResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 409, description = "스킬 이름 중복", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn create_skill(
    State(state): State<AppState>,
    _user: AuthUser,
    WithRejection(Json(req), _): WithRejection<Json<CreateSkillRequest>, AppError>,
) -> Result<Json<BaseResponse<SkillItem>>, AppError> {
    req.validate()?;

    let result = SkillService::create_skill(state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 스킬 삭제 API
///
/// 해당 스킬을 참조하는 멤버 스킬 레벨과 팀 요구사항도 함께 삭제됩니다.
#[utoipa::path(
    delete,
    path = "/api/v1/skills/{skill_id}",
    params(("skill_id" = i64, Path, description = "스킬 ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "삭제 성공", body = SuccessEmptyResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 스킬", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn delete_skill(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(skill_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    SkillService::delete_skill(state, skill_id).await?;

    Ok(Json(BaseResponse::empty("스킬이 삭제되었습니다.")))
}

/// 내 스킬 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/members/me/skills",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessMemberSkillListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn list_my_skills(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<BaseResponse<Vec<MemberSkillItem>>>, AppError> {
    let member_id = user.member_id()?;
    let result = SkillService::list_member_skills(state, member_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 멤버 스킬 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/members/{member_id}/skills",
    params(("member_id" = i64, Path, description = "멤버 ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessMemberSkillListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 사용자", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn list_member_skills(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(member_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<MemberSkillItem>>>, AppError> {
    let result = SkillService::list_member_skills(state, member_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 내 스킬 레벨 등록/수정 API
///
/// 같은 스킬을 다시 등록하면 현재/목표 레벨이 갱신됩니다.
#[utoipa::path(
    put,
    path = "/api/v1/members/me/skills",
    request_body = SetMemberSkillRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "저장 성공", body = SuccessMemberSkillResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 스킬 또는 레벨", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn set_my_skill(
    State(state): State<AppState>,
    user: AuthUser,
    WithRejection(Json(req), _): WithRejection<Json<SetMemberSkillRequest>, AppError>,
) -> Result<Json<BaseResponse<MemberSkillItem>>, AppError> {
    req.validate()?;

    let member_id = user.member_id()?;
    let result = SkillService::set_member_skill(state, member_id, req).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 내 스킬 삭제 API
#[utoipa::path(
    delete,
    path = "/api/v1/members/me/skills/{skill_id}",
    params(("skill_id" = i64, Path, description = "스킬 ID")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "삭제 성공", body = SuccessEmptyResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 404, description = "등록되지 않은 스킬", body = ErrorResponse)
    ),
    tag = "Skill"
)]
pub async fn remove_my_skill(
    State(state): State<AppState>,
    user: AuthUser,
    Path(skill_id): Path<i64>,
) -> Result<Json<BaseResponse<()>>, AppError> {
    let member_id = user.member_id()?;
    SkillService::remove_member_skill(state, member_id, skill_id).await?;

    Ok(Json(BaseResponse::empty("스킬이 삭제되었습니다.")))
}

/// 레벨 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/v1/levels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "조회 성공", body = SuccessLevelListResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Level"
)]
pub async fn list_levels(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<BaseResponse<Vec<LevelItem>>>, AppError> {
    let result = SkillService::list_levels(state).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 레벨 등록/수정 API
#[utoipa::path(
    put,
    path = "/api/v1/levels",
    request_body = UpsertLevelRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "저장 성공", body = SuccessLevelResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse)
    ),
    tag = "Level"
)]
pub async fn upsert_level(
    State(state): State<AppState>,
    _user: AuthUser,
    WithRejection(Json(req), _): WithRejection<Json<UpsertLevelRequest>, AppError>,
) -> Result<Json<BaseResponse<LevelItem>>, AppError> {
    req.validate()?;

    let result = SkillService::upsert_level(state, req).await?;

    Ok(Json(BaseResponse::success(result)))
}
