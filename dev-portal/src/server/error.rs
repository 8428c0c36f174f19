use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use portal_core::PortalError;
use serde_json::json;
use tracing::error;

/// HTTP 层错误: 未知 id 返回 404，其余返回 500
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub PortalError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_not_found() {
            return (StatusCode::NOT_FOUND, Json(json!({ "error": err.to_string() })))
                .into_response();
        }

        error!("❌ 请求处理失败: {}", err);
        let body = match &err {
            PortalError::Execution(exec) => match exec.stderr() {
                Some(stderr) => json!({
                    "success": false,
                    "error": exec.to_string(),
                    "stderr": stderr,
                }),
                None => json!({ "success": false, "error": exec.to_string() }),
            },
            other => json!({ "success": false, "error": other.to_string() }),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
