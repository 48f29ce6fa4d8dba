pub mod auth;
pub mod health;
pub mod member;
pub mod progress;
pub mod skill;
pub mod team;
