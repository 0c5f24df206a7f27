use crate::command::DeleteCustomer;
use crate::command_handler::CommandHandler;
use crate::error::AppError;
use async_trait::async_trait;
use customer_domain::CustomerRepository;
use std::sync::Arc;

pub struct DeleteCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl DeleteCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CommandHandler<DeleteCustomer> for DeleteCustomerHandler {
    async fn handle(&self, cmd: DeleteCustomer) -> Result<(), AppError> {
        self.repository.remove(cmd.id).await?;
        Ok(())
    }
}
