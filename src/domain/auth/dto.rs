use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// 닉네임 유효성 검증 (특수문자 제외)
/// 한글, 영문, 숫자만 허용
fn validate_nickname(nickname: &str) -> Result<(), ValidationError> {
    if nickname.chars().all(|c| c.is_alphanumeric() || is_korean(c)) {
        Ok(())
    } else {
        Err(ValidationError::new("nickname_invalid_chars"))
    }
}

/// 한글 문자 여부 확인 (가-힣, ㄱ-ㅎ, ㅏ-ㅣ)
fn is_korean(c: char) -> bool {
    matches!(c, '\u{AC00}'..='\u{D7A3}' | '\u{3131}'..='\u{314E}' | '\u{314F}'..='\u{3163}')
}

/// 회원가입 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: String,

    /// 사용자 닉네임 (1~20자, 특수문자 제외)
    #[validate(
        length(min = 1, max = 20, message = "닉네임은 1~20자 이내로 입력해야 합니다"),
        custom(
            function = "validate_nickname",
            message = "닉네임에 특수문자를 사용할 수 없습니다"
        )
    )]
    pub nickname: String,
}

/// 이메일 로그인 요청 DTO
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailLoginRequest {
    #[validate(email(message = "이메일 형식이 올바르지 않습니다"))]
    pub email: String,
}

/// 토큰 발급 응답 DTO
///
/// 같은 토큰이 `access_token` 쿠키로도 전달됩니다.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub member_id: i64,
    pub nickname: String,
    pub access_token: String,
}

/// 토큰 발급 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessTokenResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: TokenResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_should_accept_korean_nickname() {
        let req = SignupRequest {
            email: "dev@example.com".to_string(),
            nickname: "홍길동99".to_string(),
        };

        assert!(req.validate().is_ok());
    }

    #[test]
    fn signup_should_reject_special_characters() {
        let req = SignupRequest {
            email: "dev@example.com".to_string(),
            nickname: "dev!".to_string(),
        };

        let err = req.validate().unwrap_err();

        assert!(err.field_errors().contains_key("nickname"));
    }

    #[test]
    fn signup_should_reject_invalid_email() {
        let req = SignupRequest {
            email: "not-an-email".to_string(),
            nickname: "dev".to_string(),
        };

        let err = req.validate().unwrap_err();

        assert!(err.field_errors().contains_key("email"));
    }

    #[test]
    fn login_should_deserialize_camel_case() {
        let req: EmailLoginRequest =
            serde_json::from_str(r#"{"email": "dev@example.com"}"#).unwrap();

        assert_eq!(req.email, "dev@example.com");
    }
}
