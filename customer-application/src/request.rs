/// 应用层请求对象
///
/// [`Command`](crate::command::Command) 与 [`Query`](crate::query::Query)
/// 的公共抽象。
///
/// 关联项：
/// - `NAME`：请求的稳定名称，用于日志与追踪。避免依赖 `type_name::<T>()`；
/// - `Output`：请求完成后返回给调用方的数据类型。
pub trait Request: Send + 'static {
    /// 请求的稳定名称（建议常量字符串，不随重构变化）
    const NAME: &'static str;

    /// 请求的返回类型
    type Output: Send;
}
