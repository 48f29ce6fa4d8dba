use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::info;

use super::dto::{
    CreateSkillRequest, LevelItem, MemberSkillItem, SetMemberSkillRequest, SkillItem,
    UpsertLevelRequest,
};
use super::entity::{level, member_skill, skill};
use crate::domain::member::entity::member;
use crate::domain::team::entity::team_skill_requirement;
use crate::state::AppState;
use crate::utils::error::{map_unique_violation, AppError};

pub struct SkillService;

impl SkillService {
    /// 스킬 목록 (카테고리, 이름 순)
    pub async fn list_skills(state: AppState) -> Result<Vec<SkillItem>, AppError> {
        let skills = skill::Entity::find()
            .order_by_asc(skill::Column::Category)
            .order_by_asc(skill::Column::Name)
            .all(&state.db)
            .await?;

        Ok(skills.into_iter().map(Into::into).collect())
    }

    /// 스킬 생성
    pub async fn create_skill(
        state: AppState,
        req: CreateSkillRequest,
    ) -> Result<SkillItem, AppError> {
        let name = req.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::ValidationError(
                "스킬 이름은 공백만으로 구성될 수 없습니다.".to_string(),
            ));
        }

        let existing = skill::Entity::find()
            .filter(skill::Column::Name.eq(&name))
            .one(&state.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::Conflict("이미 존재하는 스킬입니다.".to_string()));
        }

        let inserted = skill::ActiveModel {
            name: Set(name),
            category: Set(req.category),
            created_at: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| map_unique_violation(e, "이미 존재하는 스킬입니다."))?;

        info!(skill_id = inserted.skill_id, "skill created");

        Ok(inserted.into())
    }

    /// 스킬 삭제
    ///
    /// 멤버 스킬 레벨과 팀 요구사항 중 해당 스킬을 참조하는 행을 함께 삭제한다.
    pub async fn delete_skill(state: AppState, skill_id: i64) -> Result<(), AppError> {
        Self::find_skill(&state.db, skill_id).await?;

        let txn = state.db.begin().await?;

        let member_skills = member_skill::Entity::delete_many()
            .filter(member_skill::Column::SkillId.eq(skill_id))
            .exec(&txn)
            .await?;

        let requirements = team_skill_requirement::Entity::delete_many()
            .filter(team_skill_requirement::Column::SkillId.eq(skill_id))
            .exec(&txn)
            .await?;

        skill::Entity::delete_by_id(skill_id).exec(&txn).await?;

        txn.commit().await?;

        info!(
            skill_id = skill_id,
            member_skills_removed = member_skills.rows_affected,
            requirements_removed = requirements.rows_affected,
            "skill deleted"
        );

        Ok(())
    }

    /// 멤버 스킬 목록
    pub async fn list_member_skills(
        state: AppState,
        member_id: i64,
    ) -> Result<Vec<MemberSkillItem>, AppError> {
        let exists = member::Entity::find_by_id(member_id).one(&state.db).await?;
        if exists.is_none() {
            return Err(AppError::MemberNotFound(
                "존재하지 않는 사용자입니다.".to_string(),
            ));
        }

        let rows = member_skill::Entity::find()
            .filter(member_skill::Column::MemberId.eq(member_id))
            .find_also_related(skill::Entity)
            .order_by_asc(member_skill::Column::SkillId)
            .all(&state.db)
            .await?;

        let items = rows
            .into_iter()
            .filter_map(|(level_row, skill_row)| {
                skill_row.map(|s| Self::to_member_skill_item(level_row, &s))
            })
            .collect();

        Ok(items)
    }

    /// 내 스킬 레벨 등록/수정 (member, skill 기준 upsert)
    pub async fn set_member_skill(
        state: AppState,
        member_id: i64,
        req: SetMemberSkillRequest,
    ) -> Result<MemberSkillItem, AppError> {
        let skill_model = Self::find_skill(&state.db, req.skill_id).await?;

        for level in [req.current_level, req.desired_level].into_iter().flatten() {
            Self::ensure_level_exists(&state.db, level).await?;
        }

        let now = Utc::now().naive_utc();
        let existing = member_skill::Entity::find()
            .filter(member_skill::Column::MemberId.eq(member_id))
            .filter(member_skill::Column::SkillId.eq(req.skill_id))
            .one(&state.db)
            .await?;

        let saved = match existing {
            Some(model) => {
                let mut active: member_skill::ActiveModel = model.into();
                active.current_level = Set(req.current_level);
                active.desired_level = Set(req.desired_level);
                active.updated_at = Set(now);
                active.update(&state.db).await?
            }
            None => member_skill::ActiveModel {
                member_id: Set(member_id),
                skill_id: Set(req.skill_id),
                current_level: Set(req.current_level),
                desired_level: Set(req.desired_level),
                updated_at: Set(now),
                ..Default::default()
            }
            .insert(&state.db)
            .await
            .map_err(|e| map_unique_violation(e, "이미 등록된 스킬입니다."))?,
        };

        info!(
            member_id = member_id,
            skill_id = req.skill_id,
            current_level = ?req.current_level,
            desired_level = ?req.desired_level,
            "member skill saved"
        );

        Ok(Self::to_member_skill_item(saved, &skill_model))
    }

    /// 내 스킬 삭제
    pub async fn remove_member_skill(
        state: AppState,
        member_id: i64,
        skill_id: i64,
    ) -> Result<(), AppError> {
        let result = member_skill::Entity::delete_many()
            .filter(member_skill::Column::MemberId.eq(member_id))
            .filter(member_skill::Column::SkillId.eq(skill_id))
            .exec(&state.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::SkillNotFound(
                "등록되지 않은 스킬입니다.".to_string(),
            ));
        }

        Ok(())
    }

    /// 레벨 목록 (level 오름차순)
    pub async fn list_levels(state: AppState) -> Result<Vec<LevelItem>, AppError> {
        let levels = level::Entity::find()
            .order_by_asc(level::Column::Level)
            .all(&state.db)
            .await?;

        Ok(levels.into_iter().map(Into::into).collect())
    }

    /// 레벨 등록/수정
    pub async fn upsert_level(
        state: AppState,
        req: UpsertLevelRequest,
    ) -> Result<LevelItem, AppError> {
        let existing = level::Entity::find_by_id(req.level).one(&state.db).await?;

        let saved = match existing {
            Some(model) => {
                let mut active: level::ActiveModel = model.into();
                active.name = Set(req.name);
                active.color = Set(req.color);
                active.update(&state.db).await?
            }
            None => {
                level::ActiveModel {
                    level: Set(req.level),
                    name: Set(req.name),
                    color: Set(req.color),
                }
                .insert(&state.db)
                .await?
            }
        };

        Ok(saved.into())
    }

    pub(crate) async fn find_skill<C: ConnectionTrait>(
        db: &C,
        skill_id: i64,
    ) -> Result<skill::Model, AppError> {
        skill::Entity::find_by_id(skill_id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::SkillNotFound("존재하지 않는 스킬입니다.".to_string()))
    }

    pub(crate) async fn ensure_level_exists<C: ConnectionTrait>(
        db: &C,
        level_value: i32,
    ) -> Result<(), AppError> {
        let found = level::Entity::find_by_id(level_value).one(db).await?;
        if found.is_none() {
            return Err(AppError::LevelNotFound(format!(
                "정의되지 않은 레벨입니다: {}",
                level_value
            )));
        }
        Ok(())
    }

    fn to_member_skill_item(row: member_skill::Model, skill_model: &skill::Model) -> MemberSkillItem {
        MemberSkillItem {
            skill_id: row.skill_id,
            skill_name: skill_model.name.clone(),
            category: skill_model.category.clone(),
            current_level: row.current_level,
            desired_level: row.desired_level,
            updated_at: row.updated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}
