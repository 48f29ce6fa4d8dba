//! 통합 테스트 공용 헬퍼
//!
//! 인메모리 SQLite에 스키마를 만들고 라우터와 시드 데이터를 준비한다.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
use serde_json::Value;
use tower::ServiceExt;

use skillboard::config::{create_tables, AppConfig};
use skillboard::create_router;
use skillboard::domain::member::entity::member;
use skillboard::domain::skill::entity::{level, member_skill, skill};
use skillboard::domain::team::entity::{member_team, team, team_skill_requirement};
use skillboard::state::AppState;
use skillboard::utils::jwt::encode_token;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        jwt_expiration: 3600,
        cors_allowed_origins: Vec::new(),
        log_dir: "logs".to_string(),
    }
}

/// 커넥션 하나만 유지해야 인메모리 DB가 요청 사이에 공유된다
pub async fn setup_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts).await.unwrap();
    create_tables(&db).await.unwrap();
    db
}

pub async fn setup_state() -> AppState {
    AppState {
        db: setup_db().await,
        config: test_config(),
    }
}

pub fn router(state: &AppState) -> Router {
    create_router(state.clone())
}

pub fn bearer(member_id: i64) -> String {
    let token = encode_token(member_id.to_string(), TEST_JWT_SECRET, 3600).unwrap();
    format!("Bearer {}", token)
}

// ============== 시드 ==============

pub async fn seed_member(db: &DatabaseConnection, nickname: &str) -> i64 {
    let now = Utc::now().naive_utc();
    member::ActiveModel {
        email: Set(format!("{}@example.com", nickname)),
        nickname: Set(nickname.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .member_id
}

pub async fn seed_team(db: &DatabaseConnection, owner_id: i64, name: &str) -> i64 {
    let now = Utc::now().naive_utc();
    let team_id = team::ActiveModel {
        name: Set(name.to_string()),
        description: Set(None),
        owner_id: Set(owner_id),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .team_id;

    join_team(db, owner_id, team_id).await;
    team_id
}

pub async fn join_team(db: &DatabaseConnection, member_id: i64, team_id: i64) {
    member_team::ActiveModel {
        member_id: Set(member_id),
        team_id: Set(team_id),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_skill(db: &DatabaseConnection, name: &str, category: Option<&str>) -> i64 {
    skill::ActiveModel {
        name: Set(name.to_string()),
        category: Set(category.map(String::from)),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .skill_id
}

/// 1~5 레벨 정의
pub async fn seed_levels(db: &DatabaseConnection) {
    let names = ["Novice", "Beginner", "Intermediate", "Advanced", "Expert"];
    for (i, name) in names.iter().enumerate() {
        level::ActiveModel {
            level: Set(i as i32 + 1),
            name: Set(name.to_string()),
            color: Set("#336699".to_string()),
        }
        .insert(db)
        .await
        .unwrap();
    }
}

pub async fn set_level(db: &DatabaseConnection, member_id: i64, skill_id: i64, current: Option<i32>) {
    member_skill::ActiveModel {
        member_id: Set(member_id),
        skill_id: Set(skill_id),
        current_level: Set(current),
        desired_level: Set(None),
        updated_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_requirement(
    db: &DatabaseConnection,
    team_id: i64,
    skill_id: i64,
    desired_level: i32,
    desired_members: Option<i32>,
) -> i64 {
    let now = Utc::now().naive_utc();
    team_skill_requirement::ActiveModel {
        team_id: Set(team_id),
        skill_id: Set(skill_id),
        desired_level: Set(desired_level),
        desired_members: Set(desired_members),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
    .requirement_id
}

// ============== 요청 ==============

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", token);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn parse_body(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
