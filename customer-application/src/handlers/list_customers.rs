use crate::error::AppError;
use crate::query::ListCustomers;
use crate::query_handler::QueryHandler;
use async_trait::async_trait;
use customer_domain::{Customer, CustomerRepository};
use std::sync::Arc;

pub struct ListCustomersHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl ListCustomersHandler {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl QueryHandler<ListCustomers> for ListCustomersHandler {
    async fn handle(&self, _q: ListCustomers) -> Result<Vec<Customer>, AppError> {
        Ok(self.repository.list().await?)
    }
}
