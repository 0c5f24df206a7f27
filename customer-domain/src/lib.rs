//! 客户领域层（customer-domain）
//!
//! 提供客户 CRUD 服务的领域构件：
//! - 客户实体（`customer`）：平面数据记录，`id == 0` 表示尚未分配标识；
//! - 数据访问接口（`repository`）：对客户集合的读写抽象，与存储实现解耦；
//! - 内存仓储（`inmemory_repository`）：互斥锁守护的 `Vec<Customer>`，
//!   进程启动时以固定种子数据装载；
//! - 错误类型（`error`）：最小必要的领域错误集合。
//!
//! 本 crate 不做任何业务校验与持久化，查无此人以 `None` 表达而非错误。
pub mod customer;
pub mod error;
pub mod inmemory_repository;
pub mod repository;

pub use customer::Customer;
pub use inmemory_repository::InMemoryCustomerRepository;
pub use repository::CustomerRepository;
