use serde::Serialize;
use utoipa::ToSchema;

use super::aggregator::{RequirementTally, SkillTally};
use crate::domain::skill::entity::skill;

/// 요구사항 행별 달성 현황
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementProgressItem {
    pub desired_level: i32,
    pub desired_members: Option<i32>,
    /// 현재 레벨이 desiredLevel과 정확히 같은 팀 멤버 수
    pub matched_members: i64,
    pub progress: i32,
}

/// 스킬별 달성 현황
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillProgressItem {
    pub skill_id: i64,
    pub skill_name: String,
    pub category: Option<String>,
    /// 목표 인원이 가장 많은 요구사항 기준 달성률 (0~100)
    pub progress: i32,
    pub requirements: Vec<RequirementProgressItem>,
}

/// 팀 스킬 달성 현황 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSkillProgressResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<SkillProgressItem>,
}

impl From<RequirementTally> for RequirementProgressItem {
    fn from(t: RequirementTally) -> Self {
        Self {
            desired_level: t.desired_level,
            desired_members: t.desired_members,
            matched_members: t.matched_members,
            progress: t.progress,
        }
    }
}

impl SkillProgressItem {
    pub fn from_tally(tally: SkillTally, skill: &skill::Model) -> Self {
        Self {
            skill_id: tally.skill_id,
            skill_name: skill.name.clone(),
            category: skill.category.clone(),
            progress: tally.progress,
            requirements: tally.requirements.into_iter().map(Into::into).collect(),
        }
    }
}
