use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::entity::member;

/// 회원 프로필 응답
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberProfileResponse {
    pub member_id: i64,
    pub email: String,
    pub nickname: String,
    pub created_at: String,
}

impl From<member::Model> for MemberProfileResponse {
    fn from(m: member::Model) -> Self {
        Self {
            member_id: m.member_id,
            email: m.email,
            nickname: m.nickname,
            created_at: m.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// 닉네임 변경 요청
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 20, message = "닉네임은 1~20자 이내로 입력해야 합니다"))]
    pub nickname: String,
}

/// 회원 프로필 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessProfileResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: MemberProfileResponse,
}

/// 회원 목록 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessProfileListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<MemberProfileResponse>,
}
