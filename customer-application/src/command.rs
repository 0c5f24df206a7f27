use crate::request::Request;
use customer_domain::Customer;

/// 应用层命令（Command）
///
/// 表达“意图”的写操作请求，会修改客户集合。
/// - 与 [`Query`](crate::query::Query) 相对，`Command` 应避免读写混用；
/// - 建议保持语义化的“动宾结构”命名，如 `AddCustomer`、`DeleteCustomer`。
pub trait Command: Request {}

/// 新增客户：不携带 `id`，由仓储在写入时分配
#[derive(Debug, Clone)]
pub struct AddCustomer {
    pub first_name: String,
    pub last_name: String,
    pub revenue: f64,
}

impl Request for AddCustomer {
    const NAME: &'static str = "customer.add";
    type Output = Customer;
}

impl Command for AddCustomer {}

/// 按 `id` 原地更新客户的姓名与营收，目标不存在返回 `None`
#[derive(Debug, Clone)]
pub struct UpdateCustomer {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub revenue: f64,
}

impl Request for UpdateCustomer {
    const NAME: &'static str = "customer.update";
    type Output = Option<Customer>;
}

impl Command for UpdateCustomer {}

/// 按 `id` 删除客户；目标不存在时不视为错误
#[derive(Debug, Clone, Copy)]
pub struct DeleteCustomer {
    pub id: u32,
}

impl Request for DeleteCustomer {
    const NAME: &'static str = "customer.delete";
    type Output = ();
}

impl Command for DeleteCustomer {}
