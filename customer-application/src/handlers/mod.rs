//! 客户用例处理器
//!
//! 一个请求类型对应一个处理器，处理器不做业务校验，
//! 除一次仓储调用外没有任何副作用。
mod add_customer;
mod delete_customer;
mod get_customer;
mod list_customers;
mod update_customer;

pub use add_customer::AddCustomerHandler;
pub use delete_customer::DeleteCustomerHandler;
pub use get_customer::GetCustomerHandler;
pub use list_customers::ListCustomersHandler;
pub use update_customer::UpdateCustomerHandler;
