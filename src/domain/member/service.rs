use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use tracing::info;

use super::dto::{MemberProfileResponse, UpdateProfileRequest};
use super::entity::member;
use crate::state::AppState;
use crate::utils::error::{map_unique_violation, AppError};

pub struct MemberService;

impl MemberService {
    /// 회원 프로필 조회
    pub async fn get_profile(
        state: AppState,
        member_id: i64,
    ) -> Result<MemberProfileResponse, AppError> {
        let member = member::Entity::find_by_id(member_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::MemberNotFound("존재하지 않는 사용자입니다.".to_string()))?;

        Ok(member.into())
    }

    /// 회원 목록 (member_id 오름차순)
    pub async fn list_members(state: AppState) -> Result<Vec<MemberProfileResponse>, AppError> {
        let members = member::Entity::find()
            .order_by_asc(member::Column::MemberId)
            .all(&state.db)
            .await?;

        Ok(members.into_iter().map(Into::into).collect())
    }

    /// 닉네임 변경
    pub async fn update_profile(
        state: AppState,
        member_id: i64,
        req: UpdateProfileRequest,
    ) -> Result<MemberProfileResponse, AppError> {
        let member = member::Entity::find_by_id(member_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::MemberNotFound("존재하지 않는 사용자입니다.".to_string()))?;

        let duplicated = member::Entity::find()
            .filter(member::Column::Nickname.eq(&req.nickname))
            .filter(member::Column::MemberId.ne(member_id))
            .one(&state.db)
            .await?;
        if duplicated.is_some() {
            return Err(AppError::Conflict("이미 사용 중인 닉네임입니다.".to_string()));
        }

        let mut active: member::ActiveModel = member.into();
        active.nickname = Set(req.nickname);
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active
            .update(&state.db)
            .await
            .map_err(|e| map_unique_violation(e, "이미 사용 중인 닉네임입니다."))?;

        info!(member_id = member_id, "member profile updated");

        Ok(updated.into())
    }
}
