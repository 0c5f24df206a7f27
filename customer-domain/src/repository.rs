use crate::customer::Customer;
use crate::error::DomainResult;
use async_trait::async_trait;

/// 客户数据访问接口
///
/// - 定义领域层对客户集合的读写操作，与具体存储实现解耦；
/// - 查无此人返回 `None` 而非错误；
/// - 实现必须可在多任务间共享（`Send + Sync`）。
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// 按写入顺序返回全部客户
    async fn list(&self) -> DomainResult<Vec<Customer>>;

    /// 按 id 查找客户
    async fn find(&self, id: u32) -> DomainResult<Option<Customer>>;

    /// 写入客户；`id == 0` 时由实现分配下一个可用 id
    async fn insert(&self, customer: Customer) -> DomainResult<Customer>;

    /// 按 `customer.id` 原地更新姓名与营收，查无此人返回 `None`
    async fn update(&self, customer: Customer) -> DomainResult<Option<Customer>>;

    /// 按 id 删除客户，查无此人时不做任何事
    async fn remove(&self, id: u32) -> DomainResult<()>;
}
