use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::dto::{
    AddTeamMemberRequest, CreateTeamRequest, RequirementItem, SetRequirementRequest,
    TeamDetailResponse, TeamListItem, TeamMemberItem, TeamResponse, UpdateTeamRequest,
    ROLE_MEMBER, ROLE_OWNER,
};
use super::entity::{member_team, team, team_skill_requirement};
use crate::domain::member::entity::member;
use crate::domain::skill::entity::skill;
use crate::domain::skill::SkillService;
use crate::state::AppState;
use crate::utils::error::{map_unique_violation, AppError};

pub struct TeamService;

impl TeamService {
    /// 팀 생성
    ///
    /// 생성자가 팀 소유자이자 첫 번째 멤버가 된다.
    pub async fn create_team(
        state: AppState,
        member_id: i64,
        req: CreateTeamRequest,
    ) -> Result<TeamResponse, AppError> {
        let owner = member::Entity::find_by_id(member_id).one(&state.db).await?;
        if owner.is_none() {
            return Err(AppError::MemberNotFound(
                "존재하지 않는 사용자입니다.".to_string(),
            ));
        }

        let now = Utc::now().naive_utc();
        let txn = state.db.begin().await?;

        let created = team::ActiveModel {
            name: Set(req.name),
            description: Set(req.description),
            owner_id: Set(member_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        member_team::ActiveModel {
            member_id: Set(member_id),
            team_id: Set(created.team_id),
            created_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(team_id = created.team_id, owner_id = member_id, "team created");

        Ok(created.into())
    }

    /// 내가 속한 팀 목록 (team_id 오름차순)
    pub async fn list_my_teams(
        state: AppState,
        member_id: i64,
    ) -> Result<Vec<TeamListItem>, AppError> {
        let rows = member_team::Entity::find()
            .filter(member_team::Column::MemberId.eq(member_id))
            .find_also_related(team::Entity)
            .order_by_asc(member_team::Column::TeamId)
            .all(&state.db)
            .await?;

        let items = rows
            .into_iter()
            .filter_map(|(_, team_model)| team_model)
            .map(|t| TeamListItem {
                role: role_of(&t, member_id).to_string(),
                team_id: t.team_id,
                name: t.name,
                description: t.description,
            })
            .collect();

        Ok(items)
    }

    /// 팀 상세 (멤버 포함)
    pub async fn get_team(state: AppState, team_id: i64) -> Result<TeamDetailResponse, AppError> {
        let team_model = Self::find_team(&state.db, team_id).await?;
        let members = Self::list_members(&state.db, &team_model).await?;

        Ok(TeamDetailResponse {
            team_id: team_model.team_id,
            name: team_model.name,
            description: team_model.description,
            owner_id: team_model.owner_id,
            members,
        })
    }

    /// 팀 정보 수정 (소유자만)
    pub async fn update_team(
        state: AppState,
        member_id: i64,
        team_id: i64,
        req: UpdateTeamRequest,
    ) -> Result<TeamResponse, AppError> {
        let team_model = Self::find_owned_team(&state.db, member_id, team_id).await?;

        let mut active: team::ActiveModel = team_model.into();
        if let Some(name) = req.name {
            active.name = Set(name);
        }
        if let Some(description) = req.description {
            active.description = Set(Some(description));
        }
        active.updated_at = Set(Utc::now().naive_utc());

        let updated = active.update(&state.db).await?;

        Ok(updated.into())
    }

    /// 팀 삭제 (소유자만)
    ///
    /// 멤버십과 스킬 요구사항을 먼저 삭제한 뒤 팀을 삭제한다.
    pub async fn delete_team(state: AppState, member_id: i64, team_id: i64) -> Result<(), AppError> {
        Self::find_owned_team(&state.db, member_id, team_id).await?;

        let txn = state.db.begin().await?;

        team_skill_requirement::Entity::delete_many()
            .filter(team_skill_requirement::Column::TeamId.eq(team_id))
            .exec(&txn)
            .await?;

        member_team::Entity::delete_many()
            .filter(member_team::Column::TeamId.eq(team_id))
            .exec(&txn)
            .await?;

        team::Entity::delete_by_id(team_id).exec(&txn).await?;

        txn.commit().await?;

        info!(team_id = team_id, "team deleted");

        Ok(())
    }

    /// 팀 멤버 추가 (소유자만)
    pub async fn add_member(
        state: AppState,
        owner_id: i64,
        team_id: i64,
        req: AddTeamMemberRequest,
    ) -> Result<TeamMemberItem, AppError> {
        let team_model = Self::find_owned_team(&state.db, owner_id, team_id).await?;

        let new_member = member::Entity::find_by_id(req.member_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::MemberNotFound("존재하지 않는 사용자입니다.".to_string()))?;

        let existing = member_team::Entity::find()
            .filter(member_team::Column::MemberId.eq(req.member_id))
            .filter(member_team::Column::TeamId.eq(team_id))
            .one(&state.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict("이미 팀에 속한 멤버입니다.".to_string()));
        }

        let inserted = member_team::ActiveModel {
            member_id: Set(req.member_id),
            team_id: Set(team_id),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| map_unique_violation(e, "이미 팀에 속한 멤버입니다."))?;

        info!(team_id = team_id, member_id = req.member_id, "team member added");

        Ok(member_item(&team_model, new_member, &inserted))
    }

    /// 팀 멤버 제거 (소유자만, 소유자 본인은 제거 불가)
    pub async fn remove_member(
        state: AppState,
        owner_id: i64,
        team_id: i64,
        member_id: i64,
    ) -> Result<(), AppError> {
        let team_model = Self::find_owned_team(&state.db, owner_id, team_id).await?;

        if team_model.owner_id == member_id {
            return Err(AppError::BadRequest(
                "팀 소유자는 팀에서 제거할 수 없습니다.".to_string(),
            ));
        }

        let result = member_team::Entity::delete_many()
            .filter(member_team::Column::MemberId.eq(member_id))
            .filter(member_team::Column::TeamId.eq(team_id))
            .exec(&state.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::MemberNotFound(
                "팀에 속하지 않은 멤버입니다.".to_string(),
            ));
        }

        info!(team_id = team_id, member_id = member_id, "team member removed");

        Ok(())
    }

    /// 팀 스킬 요구사항 목록 (skill_id, desired_level 순)
    pub async fn list_requirements(
        state: AppState,
        team_id: i64,
    ) -> Result<Vec<RequirementItem>, AppError> {
        Self::find_team(&state.db, team_id).await?;

        let rows = team_skill_requirement::Entity::find()
            .filter(team_skill_requirement::Column::TeamId.eq(team_id))
            .find_also_related(skill::Entity)
            .order_by_asc(team_skill_requirement::Column::SkillId)
            .order_by_asc(team_skill_requirement::Column::DesiredLevel)
            .all(&state.db)
            .await?;

        let items = rows
            .into_iter()
            .filter_map(|(req, skill_model)| skill_model.map(|s| requirement_item(req, &s)))
            .collect();

        Ok(items)
    }

    /// 팀 스킬 요구사항 등록/수정 (소유자만)
    ///
    /// (team, skill, desired_level)이 같은 행이 있으면 desired_members만 갱신한다.
    pub async fn set_requirement(
        state: AppState,
        owner_id: i64,
        team_id: i64,
        req: SetRequirementRequest,
    ) -> Result<RequirementItem, AppError> {
        Self::find_owned_team(&state.db, owner_id, team_id).await?;
        let skill_model = SkillService::find_skill(&state.db, req.skill_id).await?;
        SkillService::ensure_level_exists(&state.db, req.desired_level).await?;

        let now = Utc::now().naive_utc();
        let existing = team_skill_requirement::Entity::find()
            .filter(team_skill_requirement::Column::TeamId.eq(team_id))
            .filter(team_skill_requirement::Column::SkillId.eq(req.skill_id))
            .filter(team_skill_requirement::Column::DesiredLevel.eq(req.desired_level))
            .one(&state.db)
            .await?;

        let saved = match existing {
            Some(model) => {
                let mut active: team_skill_requirement::ActiveModel = model.into();
                active.desired_members = Set(req.desired_members);
                active.updated_at = Set(now);
                active.update(&state.db).await?
            }
            None => team_skill_requirement::ActiveModel {
                team_id: Set(team_id),
                skill_id: Set(req.skill_id),
                desired_level: Set(req.desired_level),
                desired_members: Set(req.desired_members),
                created_at: Set(now),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&state.db)
            .await
            .map_err(|e| map_unique_violation(e, "이미 등록된 요구사항입니다."))?,
        };

        info!(
            team_id = team_id,
            skill_id = req.skill_id,
            desired_level = req.desired_level,
            desired_members = ?req.desired_members,
            "team skill requirement saved"
        );

        Ok(requirement_item(saved, &skill_model))
    }

    /// 팀 스킬 요구사항 삭제 (소유자만)
    pub async fn delete_requirement(
        state: AppState,
        owner_id: i64,
        team_id: i64,
        requirement_id: i64,
    ) -> Result<(), AppError> {
        Self::find_owned_team(&state.db, owner_id, team_id).await?;

        let result = team_skill_requirement::Entity::delete_many()
            .filter(team_skill_requirement::Column::RequirementId.eq(requirement_id))
            .filter(team_skill_requirement::Column::TeamId.eq(team_id))
            .exec(&state.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::RequirementNotFound(
                "존재하지 않는 요구사항입니다.".to_string(),
            ));
        }

        Ok(())
    }

    async fn find_team<C: ConnectionTrait>(db: &C, team_id: i64) -> Result<team::Model, AppError> {
        team::Entity::find_by_id(team_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::TeamNotFound("존재하지 않는 팀입니다.".to_string()))
    }

    /// 팀 조회 및 소유자 확인 헬퍼
    async fn find_owned_team<C: ConnectionTrait>(
        db: &C,
        member_id: i64,
        team_id: i64,
    ) -> Result<team::Model, AppError> {
        let team_model = Self::find_team(db, team_id).await?;
        if team_model.owner_id != member_id {
            return Err(AppError::Forbidden(
                "팀 소유자만 수행할 수 있습니다.".to_string(),
            ));
        }
        Ok(team_model)
    }

    /// 팀 멤버 목록 (OWNER 먼저, 이후 가입 순)
    async fn list_members<C: ConnectionTrait>(
        db: &C,
        team_model: &team::Model,
    ) -> Result<Vec<TeamMemberItem>, AppError> {
        let memberships = member_team::Entity::find()
            .filter(member_team::Column::TeamId.eq(team_model.team_id))
            .order_by_asc(member_team::Column::CreatedAt)
            .order_by_asc(member_team::Column::MemberTeamId)
            .all(db)
            .await?;

        let member_ids: Vec<i64> = memberships.iter().map(|m| m.member_id).collect();
        let mut members: HashMap<i64, member::Model> = member::Entity::find()
            .filter(member::Column::MemberId.is_in(member_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|m| (m.member_id, m))
            .collect();

        let mut items: Vec<TeamMemberItem> = memberships
            .iter()
            .filter_map(|mt| {
                members
                    .remove(&mt.member_id)
                    .map(|m| member_item(team_model, m, mt))
            })
            .collect();

        // stable sort: 가입 순서는 유지
        items.sort_by_key(|item| item.role != ROLE_OWNER);

        Ok(items)
    }
}

fn role_of(team_model: &team::Model, member_id: i64) -> &'static str {
    if team_model.owner_id == member_id {
        ROLE_OWNER
    } else {
        ROLE_MEMBER
    }
}

fn member_item(
    team_model: &team::Model,
    member_model: member::Model,
    membership: &member_team::Model,
) -> TeamMemberItem {
    TeamMemberItem {
        role: role_of(team_model, member_model.member_id).to_string(),
        member_id: member_model.member_id,
        nickname: member_model.nickname,
        email: member_model.email,
        joined_at: membership.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
    }
}

fn requirement_item(
    row: team_skill_requirement::Model,
    skill_model: &skill::Model,
) -> RequirementItem {
    RequirementItem {
        requirement_id: row.requirement_id,
        skill_id: row.skill_id,
        skill_name: skill_model.name.clone(),
        desired_level: row.desired_level,
        desired_members: row.desired_members,
    }
}
