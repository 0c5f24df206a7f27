use crate::error::AppError;
use crate::query::GetCustomer;
use crate::query_handler::QueryHandler;
use async_trait::async_trait;
use customer_domain::{Customer, CustomerRepository};
use std::sync::Arc;

pub struct GetCustomerHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomerHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<GetCustomer> for GetCustomerHandler {
    async fn handle(&self, q: GetCustomer) -> Result<Option<Customer>, AppError> {
        Ok(self.repository.find(q.id).await?)
    }
}
