use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use tracing::{info, Instrument};
use uuid::Uuid;

pub static REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// 클라이언트가 보낸 요청 ID 최대 길이
const MAX_REQUEST_ID_LEN: usize = 64;

/// 요청 확장에 저장되는 요청 ID
#[derive(Clone, Debug)]
pub struct RequestId(pub String);

/// 요청 ID 부여 및 요청 단위 로깅
///
/// `x-request-id` 헤더가 없거나 비정상이면 UUID v4를 생성한다.
/// 같은 값을 응답 헤더로 돌려주고, 요청 span에 기록해 하위 로그와 묶는다.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    request
        .extensions_mut()
        .insert(RequestId(request_id.clone()));

    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let span = tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
    );

    let start = std::time::Instant::now();

    async move {
        let mut response = next.run(request).await;
        let status = response.status().as_u16();

        info!(
            duration_ms = start.elapsed().as_millis() as u64,
            status = status,
            "request completed"
        );

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            response
                .headers_mut()
                .insert(REQUEST_ID_HEADER.clone(), value);
        }
        response
    }
    .instrument(span)
    .await
}
