//! 로깅 초기화 모듈
//!
//! stdout과 일별 로그 파일에 JSON 형식의 구조화된 로그를 출력합니다.

use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,skillboard=debug,tower_http=info";

/// 로깅 시스템을 초기화합니다.
///
/// 로그 레벨은 `RUST_LOG`로 지정하며 기본값은 `info,skillboard=debug`입니다.
/// 파일은 `log_dir/skillboard.log.YYYY-MM-DD`로 회전합니다.
///
/// 반환되는 `WorkerGuard`는 main에서 유지해야 종료 시 버퍼링된 로그가 flush됩니다.
pub fn init_logging(log_dir: &str) -> WorkerGuard {
    let file_appender = rolling::daily(log_dir, "skillboard.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let stdout_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false);

    let file_layer = fmt::layer()
        .json()
        .with_timer(fmt::time::UtcTime::rfc_3339())
        .with_current_span(true)
        .flatten_event(false)
        .with_ansi(false)
        .with_writer(non_blocking);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
    {
        // 이미 초기화된 경우(테스트 등)에도 서버는 계속 기동한다
        eprintln!("Failed to initialize tracing: {}", err);
    }

    guard
}
