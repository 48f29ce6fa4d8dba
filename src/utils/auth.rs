use axum::{
    async_trait,
    extract::FromRequestParts,
    http::header::{AUTHORIZATION, COOKIE},
    http::request::Parts,
};

use crate::state::AppState;
use crate::utils::cookie::find_access_token;
use crate::utils::error::AppError;
use crate::utils::jwt::{decode_access_token, Claims};

/// 인증된 사용자 정보를 담는 Extractor
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// JWT Claims에서 멤버 ID를 추출합니다.
    pub fn member_id(&self) -> Result<i64, AppError> {
        self.0
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("유효하지 않은 사용자 ID입니다.".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // 1. Authorization 헤더 우선, 없으면 쿠키
        let token = match parts.headers.get(AUTHORIZATION) {
            Some(auth_header) => {
                let auth_header_str = auth_header
                    .to_str()
                    .map_err(|_| AppError::Unauthorized("잘못된 헤더 형식입니다.".to_string()))?;

                auth_header_str
                    .strip_prefix("Bearer ")
                    .ok_or_else(|| {
                        AppError::Unauthorized("토큰 형식이 올바르지 않습니다.".to_string())
                    })?
                    .to_string()
            }
            None => extract_token_from_cookie(parts)?,
        };

        // 2. 토큰 검증 및 디코딩
        let claims = decode_access_token(&token, &state.config.jwt_secret)?;

        Ok(AuthUser(claims))
    }
}

fn extract_token_from_cookie(parts: &Parts) -> Result<String, AppError> {
    let cookie_str = parts
        .headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("로그인이 필요합니다.".to_string()))?;

    find_access_token(cookie_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Unauthorized("로그인이 필요합니다.".to_string()))
}
