use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 멤버가 선언한 스킬 레벨.
///
/// `current_level`과 `desired_level`은 서로 독립적이며 대소 관계를 강제하지 않는다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member_skill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub member_skill_id: i64,
    pub member_id: i64,
    pub skill_id: i64,
    pub current_level: Option<i32>,
    pub desired_level: Option<i32>,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::member::entity::member::Entity",
        from = "Column::MemberId",
        to = "crate::domain::member::entity::member::Column::MemberId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Member,
    #[sea_orm(
        belongs_to = "super::skill::Entity",
        from = "Column::SkillId",
        to = "super::skill::Column::SkillId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Skill,
}

impl Related<crate::domain::member::entity::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Skill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
