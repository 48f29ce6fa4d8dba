use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::SkillProgressItem;
use super::service::ProgressService;
use crate::state::AppState;
use crate::utils::auth::AuthUser;
use crate::utils::error::AppError;
use crate::utils::BaseResponse;

/// 팀 스킬 달성 현황 조회 API
///
/// 팀이 요구하는 스킬마다 레벨별 충족 인원과 대표 달성률을 반환합니다.
/// 정렬(약한 스킬 우선)과 개수 제한은 클라이언트에서 처리합니다.
#[utoipa::path(
    get,
    path = "/api/v1/teams/{team_id}/skill-progress",
    params(
        ("team_id" = i64, Path, description = "팀 ID")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "조회 성공", body = SuccessSkillProgressResponse),
        (status = 401, description = "인증 실패", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Progress"
)]
pub async fn get_team_skill_progress(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(team_id): Path<i64>,
) -> Result<Json<BaseResponse<Vec<SkillProgressItem>>>, AppError> {
    let result = ProgressService::team_skill_progress(&state.db, team_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
