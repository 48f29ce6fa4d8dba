use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::domain::team::entity::member_team::Entity")]
    MemberTeam,
    #[sea_orm(has_many = "crate::domain::skill::entity::member_skill::Entity")]
    MemberSkill,
}

impl Related<crate::domain::team::entity::member_team::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberTeam.def()
    }
}

impl Related<crate::domain::skill::entity::member_skill::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MemberSkill.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
