use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthStatus};

/// 서버 시작 시간 (전역)
static START_TIME: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// DB 핑 타임아웃 (3초)
const PING_TIMEOUT: Duration = Duration::from_secs(3);

/// Degraded 상태 임계값 (500ms)
const DEGRADED_THRESHOLD: Duration = Duration::from_millis(500);

/// 서버 시작 시간 초기화
///
/// main 함수에서 서버 시작 시 호출해야 합니다.
pub fn init_start_time() {
    START_TIME.get_or_init(Instant::now);
}

/// 서버 가동 시간(초) 반환
pub fn get_uptime_secs() -> u64 {
    START_TIME.get().map(|t| t.elapsed().as_secs()).unwrap_or(0)
}

/// 전체 헬스 체크 수행
pub async fn check_health(db: &DatabaseConnection) -> HealthStatus {
    let database = check_database(db).await;

    HealthStatus {
        status: database.state(DEGRADED_THRESHOLD),
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: get_uptime_secs(),
        checks: HealthChecks { database },
    }
}

async fn check_database(db: &DatabaseConnection) -> CheckResult {
    let start = Instant::now();
    let result = timeout(PING_TIMEOUT, db.ping()).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    match result {
        Ok(Ok(())) => {
            tracing::debug!(latency_ms, "database ping passed");
            CheckResult::from_ping(latency_ms, Ok(()))
        }
        Ok(Err(e)) => {
            tracing::warn!(latency_ms, error = %e, "database ping failed");
            CheckResult::from_ping(latency_ms, Err(e.to_string()))
        }
        Err(_) => {
            tracing::warn!(limit_ms = PING_TIMEOUT.as_millis() as u64, "database ping timed out");
            CheckResult::timed_out(PING_TIMEOUT)
        }
    }
}
