use std::time::Duration;

use serde::Serialize;
use utoipa::ToSchema;

/// `/health` 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    pub checks: HealthChecks,
}

/// healthy: 핑 정상, degraded: 핑 지연, unhealthy: 핑 실패 또는 타임아웃
#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthChecks {
    pub database: CheckResult,
}

/// DB 핑 결과
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[schema(example = true)]
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 4)]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    /// 완료된 핑의 결과와 소요 시간으로 생성
    pub fn from_ping(latency_ms: u64, outcome: Result<(), String>) -> Self {
        Self {
            status: outcome.is_ok(),
            latency_ms: Some(latency_ms),
            error: outcome.err(),
        }
    }

    /// 제한 시간 안에 핑이 끝나지 않은 경우
    pub fn timed_out(limit: Duration) -> Self {
        Self {
            status: false,
            latency_ms: Some(limit.as_millis() as u64),
            error: Some(format!("ping timed out after {}ms", limit.as_millis())),
        }
    }

    /// 실패는 unhealthy, 성공이라도 `degraded_after` 이상 걸리면 degraded
    pub fn state(&self, degraded_after: Duration) -> HealthState {
        if !self.status {
            return HealthState::Unhealthy;
        }

        match self.latency_ms {
            Some(ms) if ms >= degraded_after.as_millis() as u64 => HealthState::Degraded,
            _ => HealthState::Healthy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    const THRESHOLD: Duration = Duration::from_millis(500);

    #[test]
    fn failed_ping_should_serialize_status_false_with_error() {
        let check = CheckResult::from_ping(7, Err("connection refused".to_string()));

        let value = serde_json::to_value(&check).unwrap();

        assert_eq!(
            value,
            json!({ "status": false, "latencyMs": 7, "error": "connection refused" })
        );
    }

    #[test]
    fn passed_ping_should_omit_error() {
        let value = serde_json::to_value(CheckResult::from_ping(3, Ok(()))).unwrap();

        assert_eq!(value, json!({ "status": true, "latencyMs": 3 }));
    }

    #[test]
    fn timed_out_ping_should_report_limit_as_latency() {
        let check = CheckResult::timed_out(Duration::from_secs(3));

        assert!(!check.status);
        assert_eq!(check.latency_ms, Some(3000));
        assert_eq!(check.error.as_deref(), Some("ping timed out after 3000ms"));
    }

    #[test]
    fn state_should_follow_ping_outcome_and_latency() {
        assert_eq!(
            CheckResult::from_ping(499, Ok(())).state(THRESHOLD),
            HealthState::Healthy
        );
        assert_eq!(
            CheckResult::from_ping(500, Ok(())).state(THRESHOLD),
            HealthState::Degraded
        );
        assert_eq!(
            CheckResult::from_ping(1, Err("broken pipe".into())).state(THRESHOLD),
            HealthState::Unhealthy
        );
        assert_eq!(
            CheckResult::timed_out(Duration::from_secs(3)).state(THRESHOLD),
            HealthState::Unhealthy
        );
    }

    #[test]
    fn health_status_should_nest_database_check_in_camel_case() {
        let status = HealthStatus {
            status: HealthState::Degraded,
            version: "0.1.0",
            uptime_secs: 42,
            checks: HealthChecks {
                database: CheckResult::from_ping(612, Ok(())),
            },
        };

        let value: Value = serde_json::to_value(&status).unwrap();

        assert_eq!(value["status"], "degraded");
        assert_eq!(value["uptimeSecs"], 42);
        assert_eq!(value["checks"]["database"]["latencyMs"], 612);
        assert!(value["checks"]["database"].get("error").is_none());
    }
}
