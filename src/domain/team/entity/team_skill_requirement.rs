use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 팀이 요구하는 스킬 목표. 같은 스킬에 대해 레벨별로 여러 행을 가질 수 있다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team_skill_requirement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub requirement_id: i64,
    pub team_id: i64,
    pub skill_id: i64,
    pub desired_level: i32,
    pub desired_members: Option<i32>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::TeamId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Team,
    #[sea_orm(
        belongs_to = "crate::domain::skill::entity::skill::Entity",
        from = "Column::SkillId",
        to = "crate::domain::skill::entity::skill::Column::SkillId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Skill,
}

impl Related<super::team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Team.def()
    }
}

impl Related<crate::domain::skill::entity::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
