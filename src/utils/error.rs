use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use tracing::{error, warn};

use super::response::ErrorResponse;

/// 애플리케이션 전역 에러 타입
#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    ValidationError(String),
    JsonParseFailed(String),
    Unauthorized(String),
    Forbidden(String),
    MemberNotFound(String),
    TeamNotFound(String),
    SkillNotFound(String),
    LevelNotFound(String),
    RequirementNotFound(String),
    Conflict(String),
    InternalError(String),
}

impl AppError {
    /// 에러 메시지 반환
    pub fn message(&self) -> String {
        match self {
            AppError::BadRequest(msg)
            | AppError::ValidationError(msg)
            | AppError::Unauthorized(msg)
            | AppError::Forbidden(msg)
            | AppError::MemberNotFound(msg)
            | AppError::TeamNotFound(msg)
            | AppError::SkillNotFound(msg)
            | AppError::LevelNotFound(msg)
            | AppError::RequirementNotFound(msg)
            | AppError::Conflict(msg) => msg.clone(),
            AppError::JsonParseFailed(msg) => format!("잘못된 요청 형식입니다: {}", msg),
            // 내부 에러 상세는 로그에만 남긴다
            AppError::InternalError(_) => "서버 에러, 관리자에게 문의 바랍니다.".to_string(),
        }
    }

    /// 에러 코드 반환
    pub fn error_code(&self) -> String {
        match self {
            AppError::BadRequest(_) => "COMMON400",
            AppError::ValidationError(_) => "COMMON400",
            AppError::JsonParseFailed(_) => "COMMON400",
            AppError::Unauthorized(_) => "AUTH4001",
            AppError::Forbidden(_) => "TEAM4031",
            AppError::MemberNotFound(_) => "MEMBER4041",
            AppError::TeamNotFound(_) => "TEAM4041",
            AppError::SkillNotFound(_) => "SKILL4041",
            AppError::LevelNotFound(_) => "LEVEL4041",
            AppError::RequirementNotFound(_) => "REQUIREMENT4041",
            AppError::Conflict(_) => "COMMON409",
            AppError::InternalError(_) => "COMMON500",
        }
        .to_string()
    }

    /// HTTP 상태 코드 반환
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::ValidationError(_) | AppError::JsonParseFailed(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::MemberNotFound(_)
            | AppError::TeamNotFound(_)
            | AppError::SkillNotFound(_)
            | AppError::LevelNotFound(_)
            | AppError::RequirementNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.message();

        match &self {
            AppError::InternalError(detail) => {
                error!("Internal Server Error: {}", detail);
            }
            _ => {
                warn!("Error [{}]: {}", error_code, message);
            }
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// JsonRejection을 AppError로 변환
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::JsonParseFailed(rejection.body_text())
    }
}

/// validator 검증 실패를 첫 번째 필드 메시지로 변환
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "입력값이 올바르지 않습니다.".to_string());
        AppError::ValidationError(message)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        AppError::InternalError(err.to_string())
    }
}

/// 유니크 제약 위반을 409로, 그 외 DB 에러는 500으로 매핑
pub fn map_unique_violation(err: DbErr, conflict_message: &str) -> AppError {
    let error_msg = err.to_string().to_lowercase();
    if error_msg.contains("duplicate") || error_msg.contains("unique") {
        AppError::Conflict(conflict_message.to_string())
    } else {
        AppError::InternalError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_variants_should_map_to_404() {
        let errors = [
            AppError::MemberNotFound("m".into()),
            AppError::TeamNotFound("t".into()),
            AppError::SkillNotFound("s".into()),
            AppError::LevelNotFound("l".into()),
            AppError::RequirementNotFound("r".into()),
        ];

        for err in errors {
            assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        }
    }

    #[test]
    fn internal_error_should_hide_detail_from_message() {
        let err = AppError::InternalError("connection refused: 10.0.0.3:3306".into());

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "COMMON500");
        assert!(!err.message().contains("10.0.0.3"));
    }

    #[test]
    fn unique_violation_should_map_to_conflict() {
        let err = DbErr::Custom("UNIQUE constraint failed: member_team.member_id".into());

        let mapped = map_unique_violation(err, "이미 팀에 속한 멤버입니다.");

        assert!(matches!(mapped, AppError::Conflict(_)));
        assert_eq!(mapped.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn other_db_error_should_map_to_internal() {
        let err = DbErr::Custom("connection reset".into());

        let mapped = map_unique_violation(err, "conflict");

        assert!(matches!(mapped, AppError::InternalError(_)));
    }

    #[tokio::test]
    async fn into_response_should_render_error_envelope() {
        let response = AppError::SkillNotFound("존재하지 않는 스킬입니다.".into()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = http_body_util::BodyExt::collect(response.into_body())
            .await
            .unwrap()
            .to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "SKILL4041");
        assert_eq!(body["message"], "존재하지 않는 스킬입니다.");
    }

    #[test]
    fn forbidden_should_use_team_code() {
        let err = AppError::Forbidden("팀 소유자만 수정할 수 있습니다.".into());

        assert_eq!(err.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(err.error_code(), "TEAM4031");
    }
}
