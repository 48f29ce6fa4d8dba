use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "skill")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub skill_id: i64,
    pub name: String,
    pub category: Option<String>,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::member_skill::Entity")]
    MemberSkill,
    #[sea_orm(has_many = "crate::domain::team::entity::team_skill_requirement::Entity")]
    TeamSkillRequirement,
}

impl Related<super::member_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberSkill.def()
    }
}

impl Related<crate::domain::team::entity::team_skill_requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamSkillRequirement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
