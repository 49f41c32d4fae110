use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;
use tracing::error;

/// Application-level error, rendered into the uniform error envelope.
///
/// `Http` carries failures a handler raises on purpose (not found, bad
/// request); `Internal` catches everything else so the client never sees
/// anything beyond the envelope.
#[derive(Debug)]
pub enum AppError {
    Http(StatusCode, String),
    Internal(anyhow::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> AppError {
        AppError::Http(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found(message: impl Into<String>) -> AppError {
        AppError::Http(StatusCode::NOT_FOUND, message.into())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Http(_, message) => write!(f, "{}", message),
            AppError::Internal(e) => write!(f, "{}", e),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> AppError {
        AppError::Internal(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Http(status, message) => (status, message),
            AppError::Internal(e) => {
                // Full chain stays in the log, not in the response body.
                error!("internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "服务器内部错误".to_string(),
                )
            }
        };
        let body = Json(json!({
            "code": status.as_u16(),
            "message": message,
            "data": null,
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod test {
    use super::AppError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[tokio::test]
    async fn test_http_error_envelope() {
        let resp = AppError::not_found("文章不存在").into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["code"], 404);
        assert_eq!(value["message"], "文章不存在");
        assert!(value["data"].is_null());
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let err = AppError::from(anyhow::anyhow!("db connection refused"));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(!body.contains("db connection refused"));
    }
}
