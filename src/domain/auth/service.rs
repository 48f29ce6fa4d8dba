use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use tracing::info;

use super::dto::{EmailLoginRequest, SignupRequest, TokenResponse};
use crate::domain::member::entity::member;
use crate::state::AppState;
use crate::utils::error::{map_unique_violation, AppError};
use crate::utils::jwt::encode_token;

pub struct AuthService;

impl AuthService {
    /// 회원가입 후 Access Token 발급
    pub async fn signup(state: AppState, req: SignupRequest) -> Result<TokenResponse, AppError> {
        let existing_email = member::Entity::find()
            .filter(member::Column::Email.eq(&req.email))
            .one(&state.db)
            .await?;
        if existing_email.is_some() {
            return Err(AppError::Conflict("이미 가입된 이메일입니다.".into()));
        }

        let existing_nickname = member::Entity::find()
            .filter(member::Column::Nickname.eq(&req.nickname))
            .one(&state.db)
            .await?;
        if existing_nickname.is_some() {
            return Err(AppError::Conflict("이미 사용 중인 닉네임입니다.".into()));
        }

        let now = Utc::now().naive_utc();
        let new_member = member::ActiveModel {
            email: Set(req.email),
            nickname: Set(req.nickname),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&state.db)
        .await
        .map_err(|e| map_unique_violation(e, "이미 가입된 이메일입니다."))?;

        info!(member_id = new_member.member_id, "member signed up");

        Self::issue_token(&state, new_member)
    }

    /// 이메일 기반 로그인
    pub async fn login_by_email(
        state: AppState,
        req: EmailLoginRequest,
    ) -> Result<TokenResponse, AppError> {
        let member = member::Entity::find()
            .filter(member::Column::Email.eq(&req.email))
            .one(&state.db)
            .await?
            .ok_or_else(|| AppError::Unauthorized("존재하지 않는 사용자입니다.".into()))?;

        Self::issue_token(&state, member)
    }

    fn issue_token(state: &AppState, member: member::Model) -> Result<TokenResponse, AppError> {
        let access_token = encode_token(
            member.member_id.to_string(),
            &state.config.jwt_secret,
            state.config.jwt_expiration,
        )?;

        Ok(TokenResponse {
            member_id: member.member_id,
            nickname: member.nickname,
            access_token,
        })
    }
}
