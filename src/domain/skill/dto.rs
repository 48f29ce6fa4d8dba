use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::entity::{level, skill};

/// `#RRGGBB` 형식의 색상 코드 검증
fn validate_color(color: &str) -> Result<(), ValidationError> {
    let hex = color
        .strip_prefix('#')
        .ok_or_else(|| ValidationError::new("color_format"))?;
    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Ok(())
    } else {
        Err(ValidationError::new("color_format"))
    }
}

// ============== 스킬 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    #[validate(length(min = 1, max = 50, message = "스킬 이름은 1~50자여야 합니다."))]
    pub name: String,

    #[validate(length(min = 1, max = 50, message = "카테고리는 1~50자여야 합니다."))]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SkillItem {
    pub skill_id: i64,
    pub name: String,
    pub category: Option<String>,
}

impl From<skill::Model> for SkillItem {
    fn from(s: skill::Model) -> Self {
        Self {
            skill_id: s.skill_id,
            name: s.name,
            category: s.category,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSkillResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: SkillItem,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessSkillListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<SkillItem>,
}

// ============== 멤버 스킬 레벨 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetMemberSkillRequest {
    #[validate(range(min = 1, message = "skillId는 1 이상이어야 합니다."))]
    pub skill_id: i64,

    #[validate(range(min = 1, message = "currentLevel은 1 이상이어야 합니다."))]
    pub current_level: Option<i32>,

    #[validate(range(min = 1, message = "desiredLevel은 1 이상이어야 합니다."))]
    pub desired_level: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberSkillItem {
    pub skill_id: i64,
    pub skill_name: String,
    pub category: Option<String>,
    pub current_level: Option<i32>,
    pub desired_level: Option<i32>,
    pub updated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMemberSkillResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: MemberSkillItem,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMemberSkillListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<MemberSkillItem>,
}

// ============== 레벨 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLevelRequest {
    #[validate(range(min = 1, message = "level은 1 이상이어야 합니다."))]
    pub level: i32,

    #[validate(length(min = 1, max = 30, message = "레벨 이름은 1~30자여야 합니다."))]
    pub name: String,

    #[validate(custom(
        function = "validate_color",
        message = "색상은 #RRGGBB 형식이어야 합니다."
    ))]
    pub color: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LevelItem {
    pub level: i32,
    pub name: String,
    pub color: String,
}

impl From<level::Model> for LevelItem {
    fn from(l: level::Model) -> Self {
        Self {
            level: l.level,
            name: l.name,
            color: l.color,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLevelResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: LevelItem,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessLevelListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<LevelItem>,
}
