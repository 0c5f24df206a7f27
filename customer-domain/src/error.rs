//! 领域层统一错误定义
use thiserror::Error;

/// 统一错误类型（最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid state: {reason}")]
    InvalidState { reason: String },
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;
