//! 接口层错误：把应用层结果翻译为 HTTP 响应。
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use customer_application::AppError;
use serde::Serialize;

/// 接口层错误
///
/// - `NotFound`：类型化的“查无此人”，映射为 404；
/// - `App`：应用层/领域层错误，映射为 500，细节只进日志不出响应。
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: u32 },

    #[error(transparent)]
    App(#[from] AppError),
}

impl ApiError {
    pub fn not_found(resource: &'static str, id: u32) -> Self {
        Self::NotFound { resource, id }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            Self::App(err) => {
                tracing::error!(error = %err, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
