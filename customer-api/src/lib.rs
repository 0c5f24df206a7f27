//! 客户 CRUD 服务的 HTTP 接入层（customer-api）
//!
//! - 控制器只做三件事：解析 HTTP 输入、构造命令/查询并分发、把结果写回响应；
//! - 对外表面保持最小：JSON 进出，无鉴权、无分页、无内容协商；
//! - 查无此人映射为显式的 404，删除保持幂等的 204。
pub mod config;
pub mod error;
pub mod health;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
