use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::team;

/// 팀 내 역할
pub const ROLE_OWNER: &str = "OWNER";
pub const ROLE_MEMBER: &str = "MEMBER";

// ============== 팀 생성 / 수정 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 50, message = "팀 이름은 1~50자여야 합니다."))]
    pub name: String,

    #[validate(length(max = 200, message = "팀 소개는 200자를 초과할 수 없습니다."))]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 50, message = "팀 이름은 1~50자여야 합니다."))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "팀 소개는 200자를 초과할 수 없습니다."))]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub team_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<team::Model> for TeamResponse {
    fn from(t: team::Model) -> Self {
        Self {
            team_id: t.team_id,
            name: t.name,
            description: t.description,
            owner_id: t.owner_id,
            created_at: t.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            updated_at: t.updated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TeamResponse,
}

// ============== 팀 목록 / 상세 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamListItem {
    pub team_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub role: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<TeamListItem>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamMemberItem {
    pub member_id: i64,
    pub nickname: String,
    pub email: String,
    pub role: String,
    pub joined_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailResponse {
    pub team_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: i64,
    /// OWNER 먼저, 이후 가입 순
    pub members: Vec<TeamMemberItem>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamDetailResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TeamDetailResponse,
}

// ============== 멤버 추가 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddTeamMemberRequest {
    #[validate(range(min = 1, message = "memberId는 1 이상이어야 합니다."))]
    pub member_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTeamMemberResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TeamMemberItem,
}

// ============== 스킬 요구사항 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SetRequirementRequest {
    #[validate(range(min = 1, message = "skillId는 1 이상이어야 합니다."))]
    pub skill_id: i64,

    #[validate(range(min = 1, message = "desiredLevel은 1 이상이어야 합니다."))]
    pub desired_level: i32,

    #[validate(range(min = 0, message = "desiredMembers는 0 이상이어야 합니다."))]
    pub desired_members: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RequirementItem {
    pub requirement_id: i64,
    pub skill_id: i64,
    pub skill_name: String,
    pub desired_level: i32,
    pub desired_members: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRequirementResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: RequirementItem,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessRequirementListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<RequirementItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_should_reject_empty_name() {
        let req = CreateTeamRequest {
            name: String::new(),
            description: None,
        };

        let err = req.validate().unwrap_err();

        assert!(err.field_errors().contains_key("name"));
    }

    #[test]
    fn create_request_should_reject_long_description() {
        let req = CreateTeamRequest {
            name: "플랫폼팀".to_string(),
            description: Some("a".repeat(201)),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn update_request_should_allow_partial_fields() {
        let req = UpdateTeamRequest {
            name: None,
            description: Some("새 소개".to_string()),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn set_requirement_should_reject_negative_desired_members() {
        let req = SetRequirementRequest {
            skill_id: 1,
            desired_level: 2,
            desired_members: Some(-1),
        };

        let err = req.validate().unwrap_err();

        assert!(err.field_errors().contains_key("desired_members"));
    }

    #[test]
    fn set_requirement_should_allow_null_desired_members() {
        let req = SetRequirementRequest {
            skill_id: 1,
            desired_level: 2,
            desired_members: None,
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn set_requirement_should_deserialize_camel_case() {
        let req: SetRequirementRequest = serde_json::from_str(
            r#"{"skillId": 3, "desiredLevel": 4, "desiredMembers": 2}"#,
        )
        .unwrap();

        assert_eq!(req.skill_id, 3);
        assert_eq!(req.desired_level, 4);
        assert_eq!(req.desired_members, Some(2));
    }
}
