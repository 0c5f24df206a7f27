use crate::command::UpdateCustomer;
use crate::command_handler::CommandHandler;
use crate::error::AppError;
use async_trait::async_trait;
use customer_domain::{Customer, CustomerRepository};
use std::sync::Arc;

pub struct UpdateCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl UpdateCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<UpdateCustomer> for UpdateCustomerHandler {
    async fn handle(&self, cmd: UpdateCustomer) -> Result<Option<Customer>, AppError> {
        let customer = Customer {
            id: cmd.id,
            first_name: cmd.first_name,
            last_name: cmd.last_name,
            revenue: cmd.revenue,
        };
        Ok(self.repository.update(customer).await?)
    }
}
