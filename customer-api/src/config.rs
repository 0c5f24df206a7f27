//! 服务配置：从环境变量读取，缺省值可直接用于本地运行。
use std::env;

const BIND_ADDR_ENV: &str = "CUSTOMER_API_ADDR";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// 应用配置
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP 监听地址（`host:port`）
    pub bind_addr: String,
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var(BIND_ADDR_ENV).unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
        }
    }
}
