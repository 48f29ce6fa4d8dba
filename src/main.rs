use std::net::SocketAddr;

use skillboard::config::{establish_connection, AppConfig};
use skillboard::domain::health::init_start_time;
use skillboard::shutdown::shutdown_signal;
use skillboard::state::AppState;
use skillboard::utils::logging::init_logging;
use skillboard::create_router;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 종료 시까지 유지)
    let _log_guard = init_logging(&AppConfig::log_dir_from_env());
    init_start_time();

    // 3. 설정 로드
    let config = AppConfig::from_env()?;
    if config.uses_default_jwt_secret() {
        tracing::warn!(
            "JWT_SECRET 환경변수가 설정되지 않았습니다. 프로덕션 환경에서는 반드시 설정하세요."
        );
    }

    // 4. DB 연결
    let db = establish_connection(&config.database_url).await?;

    // 5. 라우터 설정
    let port = config.server_port;
    let app = create_router(AppState { db, config });

    // 6. 서버 실행
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");
    tracing::info!("Swagger UI: http://localhost:{}/swagger-ui", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
