pub mod member_team;
pub mod team;
pub mod team_skill_requirement;
