pub mod level;
pub mod member_skill;
pub mod skill;
