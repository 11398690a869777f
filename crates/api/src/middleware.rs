use axum::{http::HeaderMap, middleware::Next, response::Response};

use musee_core::SessionId;

use crate::app::errors::ApiError;
use crate::context::SessionContext;

/// Header carrying the visitor session id.
pub const SESSION_HEADER: &str = "x-session-id";

pub async fn session_middleware(
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let session_id = extract_session(req.headers())?;

    req.extensions_mut().insert(SessionContext::new(session_id));

    Ok(next.run(req).await)
}

fn extract_session(headers: &HeaderMap) -> Result<SessionId, ApiError> {
    let header = headers
        .get(SESSION_HEADER)
        .ok_or(ApiError::MissingSession)?;

    let raw = header
        .to_str()
        .map_err(|_| ApiError::InvalidSession("not visible ASCII".to_string()))?;

    raw.parse::<SessionId>()
        .map_err(|e| ApiError::InvalidSession(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn missing_header_is_rejected() {
        let headers = HeaderMap::new();
        assert!(matches!(extract_session(&headers), Err(ApiError::MissingSession)));
    }

    #[test]
    fn malformed_header_is_rejected() {
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_static("visitor-42"));
        assert!(matches!(extract_session(&headers), Err(ApiError::InvalidSession(_))));
    }

    #[test]
    fn uuid_header_is_accepted() {
        let id = SessionId::new();
        let mut headers = HeaderMap::new();
        headers.insert(SESSION_HEADER, HeaderValue::from_str(&id.to_string()).unwrap());
        assert_eq!(extract_session(&headers).unwrap(), id);
    }
}
