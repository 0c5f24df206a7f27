//! 客户应用层（customer-application）
//!
//! 以命令/查询中介模式组织用例：
//! - `Request`：带稳定名称与输出类型的请求对象抽象；
//! - `Command` / `Query`：区分写意图与读意图的标记 trait；
//! - `CommandHandler` / `QueryHandler`：一个请求类型对应一个处理器，
//!   处理器只把请求翻译为一次数据访问调用；
//! - `Dispatcher`：按请求的具体类型静态路由到唯一处理器，
//!   处理器的缺失或重复在编译期暴露，而非运行期。
pub mod command;
pub mod command_handler;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod query;
pub mod query_handler;
pub mod request;

pub use dispatcher::{Dispatch, Dispatcher};
pub use error::AppError;
