use crate::command::{AddCustomer, DeleteCustomer, UpdateCustomer};
use crate::command_handler::CommandHandler;
use crate::error::AppError;
use crate::handlers::{
    AddCustomerHandler, DeleteCustomerHandler, GetCustomerHandler, ListCustomersHandler,
    UpdateCustomerHandler,
};
use crate::query::{GetCustomer, ListCustomers};
use crate::query_handler::QueryHandler;
use crate::request::Request;
use async_trait::async_trait;
use customer_domain::{Customer, CustomerRepository};
use std::sync::Arc;

/// 请求分发抽象
///
/// - 每个请求类型恰好存在一个实现（由 trait 一致性在编译期保证）；
/// - 处理器的缺失或重复表现为编译错误，而非运行时的数据错误。
#[async_trait]
pub trait Dispatch<R>: Send + Sync
where
    R: Request,
{
    /// 分发请求到对应处理器，返回该请求的结果
    async fn dispatch(&self, request: R) -> Result<R::Output, AppError>;
}

/// 静态路由的请求分发器
///
/// 持有全部处理器，按请求的具体类型直接调用对应处理器，
/// 不经过基于 `TypeId` 的运行时注册表。
pub struct Dispatcher {
    list_customers: ListCustomersHandler,
    get_customer: GetCustomerHandler,
    add_customer: AddCustomerHandler,
    update_customer: UpdateCustomerHandler,
    delete_customer: DeleteCustomerHandler,
}

impl Dispatcher {
    /// 以同一个仓储实例装配全部处理器
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            list_customers: ListCustomersHandler::new(repository.clone()),
            get_customer: GetCustomerHandler::new(repository.clone()),
            add_customer: AddCustomerHandler::new(repository.clone()),
            update_customer: UpdateCustomerHandler::new(repository.clone()),
            delete_customer: DeleteCustomerHandler::new(repository),
        }
    }
}

#[async_trait]
impl Dispatch<ListCustomers> for Dispatcher {
    async fn dispatch(&self, query: ListCustomers) -> Result<Vec<Customer>, AppError> {
        tracing::debug!(request = ListCustomers::NAME, "dispatch");
        self.list_customers.handle(query).await
    }
}

#[async_trait]
impl Dispatch<GetCustomer> for Dispatcher {
    async fn dispatch(&self, query: GetCustomer) -> Result<Option<Customer>, AppError> {
        tracing::debug!(request = GetCustomer::NAME, id = query.id, "dispatch");
        self.get_customer.handle(query).await
    }
}

#[async_trait]
impl Dispatch<AddCustomer> for Dispatcher {
    async fn dispatch(&self, cmd: AddCustomer) -> Result<Customer, AppError> {
        tracing::debug!(request = AddCustomer::NAME, "dispatch");
        self.add_customer.handle(cmd).await
    }
}

#[async_trait]
impl Dispatch<UpdateCustomer> for Dispatcher {
    async fn dispatch(&self, cmd: UpdateCustomer) -> Result<Option<Customer>, AppError> {
        tracing::debug!(request = UpdateCustomer::NAME, id = cmd.id, "dispatch");
        self.update_customer.handle(cmd).await
    }
}

#[async_trait]
impl Dispatch<DeleteCustomer> for Dispatcher {
    async fn dispatch(&self, cmd: DeleteCustomer) -> Result<(), AppError> {
        tracing::debug!(request = DeleteCustomer::NAME, id = cmd.id, "dispatch");
        self.delete_customer.handle(cmd).await
    }
}
