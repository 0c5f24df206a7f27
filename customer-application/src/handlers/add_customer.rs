use crate::command::AddCustomer;
use crate::command_handler::CommandHandler;
use crate::error::AppError;
use async_trait::async_trait;
use customer_domain::{Customer, CustomerRepository};
use std::sync::Arc;

pub struct AddCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl AddCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<AddCustomer> for AddCustomerHandler {
    async fn handle(&self, cmd: AddCustomer) -> Result<Customer, AppError> {
        let customer = Customer::unassigned(cmd.first_name, cmd.last_name, cmd.revenue);
        Ok(self.repository.insert(customer).await?)
    }
}
