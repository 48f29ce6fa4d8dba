pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::{auth, health, member, progress, skill, team};
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::handler::health_check,
        auth::handler::signup,
        auth::handler::login,
        member::handler::get_profile,
        member::handler::update_profile,
        member::handler::list_members,
        skill::handler::list_skills,
        skill::handler::create_skill,
        skill::handler::delete_skill,
        skill::handler::list_my_skills,
        skill::handler::list_member_skills,
        skill::handler::set_my_skill,
        skill::handler::remove_my_skill,
        skill::handler::list_levels,
        skill::handler::upsert_level,
        team::handler::create_team,
        team::handler::list_my_teams,
        team::handler::get_team,
        team::handler::update_team,
        team::handler::delete_team,
        team::handler::add_member,
        team::handler::remove_member,
        team::handler::list_requirements,
        team::handler::set_requirement,
        team::handler::delete_requirement,
        progress::handler::get_team_skill_progress,
    ),
    components(
        schemas(
            health::dto::HealthStatus,
            health::dto::HealthState,
            health::dto::HealthChecks,
            health::dto::CheckResult,
            auth::dto::SignupRequest,
            auth::dto::EmailLoginRequest,
            auth::dto::TokenResponse,
            auth::dto::SuccessTokenResponse,
            member::dto::MemberProfileResponse,
            member::dto::UpdateProfileRequest,
            member::dto::SuccessProfileResponse,
            member::dto::SuccessProfileListResponse,
            skill::dto::CreateSkillRequest,
            skill::dto::SkillItem,
            skill::dto::SuccessSkillResponse,
            skill::dto::SuccessSkillListResponse,
            skill::dto::SetMemberSkillRequest,
            skill::dto::MemberSkillItem,
            skill::dto::SuccessMemberSkillResponse,
            skill::dto::SuccessMemberSkillListResponse,
            skill::dto::UpsertLevelRequest,
            skill::dto::LevelItem,
            skill::dto::SuccessLevelResponse,
            skill::dto::SuccessLevelListResponse,
            team::dto::CreateTeamRequest,
            team::dto::UpdateTeamRequest,
            team::dto::TeamResponse,
            team::dto::SuccessTeamResponse,
            team::dto::TeamListItem,
            team::dto::SuccessTeamListResponse,
            team::dto::TeamMemberItem,
            team::dto::TeamDetailResponse,
            team::dto::SuccessTeamDetailResponse,
            team::dto::AddTeamMemberRequest,
            team::dto::SuccessTeamMemberResponse,
            team::dto::SetRequirementRequest,
            team::dto::RequirementItem,
            team::dto::SuccessRequirementResponse,
            team::dto::SuccessRequirementListResponse,
            progress::dto::RequirementProgressItem,
            progress::dto::SkillProgressItem,
            progress::dto::SuccessSkillProgressResponse,
            utils::response::SuccessEmptyResponse,
            utils::response::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Auth", description = "인증 API"),
        (name = "Member", description = "회원 API"),
        (name = "Skill", description = "스킬 / 멤버 스킬 레벨 API"),
        (name = "Level", description = "레벨 정의 API"),
        (name = "Team", description = "팀 / 팀 멤버 API"),
        (name = "Requirement", description = "팀 스킬 요구사항 API"),
        (name = "Progress", description = "팀 스킬 달성 현황 API")
    )
)]
pub struct ApiDoc;

/// Bearer JWT 인증 스키마 등록
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// 허용 origin 목록으로 CORS 레이어 구성
///
/// 파싱할 수 없는 origin은 건너뛰며, 목록이 비어 있으면 모든 origin을 허용한다 (쿠키 전송 불가).
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_allowed_origins);

    let api = Router::new()
        // Auth
        .route("/auth/signup", post(auth::handler::signup))
        .route("/auth/login", post(auth::handler::login))
        // Member
        .route("/members", get(member::handler::list_members))
        .route(
            "/members/me",
            get(member::handler::get_profile).patch(member::handler::update_profile),
        )
        .route(
            "/members/me/skills",
            get(skill::handler::list_my_skills).put(skill::handler::set_my_skill),
        )
        .route(
            "/members/me/skills/:skill_id",
            delete(skill::handler::remove_my_skill),
        )
        .route(
            "/members/:member_id/skills",
            get(skill::handler::list_member_skills),
        )
        // Skill / Level
        .route(
            "/skills",
            get(skill::handler::list_skills).post(skill::handler::create_skill),
        )
        .route("/skills/:skill_id", delete(skill::handler::delete_skill))
        .route(
            "/levels",
            get(skill::handler::list_levels).put(skill::handler::upsert_level),
        )
        // Team
        .route(
            "/teams",
            get(team::handler::list_my_teams).post(team::handler::create_team),
        )
        .route(
            "/teams/:team_id",
            get(team::handler::get_team)
                .patch(team::handler::update_team)
                .delete(team::handler::delete_team),
        )
        .route("/teams/:team_id/members", post(team::handler::add_member))
        .route(
            "/teams/:team_id/members/:member_id",
            delete(team::handler::remove_member),
        )
        .route(
            "/teams/:team_id/requirements",
            get(team::handler::list_requirements).put(team::handler::set_requirement),
        )
        .route(
            "/teams/:team_id/requirements/:requirement_id",
            delete(team::handler::delete_requirement),
        )
        .route(
            "/teams/:team_id/skill-progress",
            get(progress::handler::get_team_skill_progress),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health_check))
        .nest("/api/v1", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(global::request_id_middleware))
        .with_state(state)
}
