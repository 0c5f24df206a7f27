use crate::request::Request;
use customer_domain::Customer;

/// 应用层查询（Query）
///
/// 表达只读意图，不改变客户集合。
/// - 与 [`Command`](crate::command::Command) 相对，`Query` 应避免副作用。
pub trait Query: Request {}

/// 按写入顺序列出全部客户
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCustomers;

impl Request for ListCustomers {
    const NAME: &'static str = "customer.list";
    type Output = Vec<Customer>;
}

impl Query for ListCustomers {}

/// 按 id 查找单个客户，查无此人返回 `None`
#[derive(Debug, Clone, Copy)]
pub struct GetCustomer {
    pub id: u32,
}

impl Request for GetCustomer {
    const NAME: &'static str = "customer.get";
    type Output = Option<Customer>;
}

impl Query for GetCustomer {}
