use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub team_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::domain::member::entity::member::Entity",
        from = "Column::OwnerId",
        to = "crate::domain::member::entity::member::Column::MemberId",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Owner,
    #[sea_orm(has_many = "super::member_team::Entity")]
    MemberTeam,
    #[sea_orm(has_many = "super::team_skill_requirement::Entity")]
    TeamSkillRequirement,
}

impl Related<super::member_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberTeam.def()
    }
}

impl Related<super::team_skill_requirement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TeamSkillRequirement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
