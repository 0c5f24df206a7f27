//! 健康检查端点。
use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;

/// 健康检查响应体
#[derive(Serialize)]
pub struct HealthResponse {
    /// 服务状态
    pub status: String,
    /// 服务版本
    pub version: String,
}

/// 存活检查：服务在运行即返回 200，不检查任何依赖。
pub async fn health_check() -> (StatusCode, Json<HealthResponse>) {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}
