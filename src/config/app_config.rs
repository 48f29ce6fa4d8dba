use std::env;

/// JWT_SECRET 미설정 시 사용하는 개발용 시크릿
pub const DEFAULT_JWT_SECRET: &str = "secret";

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub jwt_expiration: i64,
    /// 비어 있으면 모든 Origin 허용
    pub cors_allowed_origins: Vec<String>,
    pub log_dir: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").map_err(|_| ConfigError::MissingDatabaseUrl)?;

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        let jwt_expiration = env::var("JWT_EXPIRATION")
            .unwrap_or_else(|_| "86400".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidExpiration)?;

        let cors_allowed_origins = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let log_dir = Self::log_dir_from_env();

        Ok(Self {
            server_port,
            database_url,
            jwt_secret,
            jwt_expiration,
            cors_allowed_origins,
            log_dir,
        })
    }

    /// 로그 디렉토리 (설정 로드 전에 로깅을 먼저 초기화하기 위해 분리)
    pub fn log_dir_from_env() -> String {
        env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string())
    }

    /// 개발용 기본 JWT 시크릿 사용 여부
    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid expiration time")]
    InvalidExpiration,
    #[error("DATABASE_URL environment variable is required")]
    MissingDatabaseUrl,
}
