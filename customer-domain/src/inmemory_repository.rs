use crate::customer::Customer;
use crate::error::{DomainError, DomainResult};
use crate::repository::CustomerRepository;
use async_trait::async_trait;
use std::sync::Mutex;

/// 基于内存的 CustomerRepository 实现
/// - 以 `Mutex<Vec<Customer>>` 独占持有客户集合，并发请求在锁上串行化
/// - 所有操作均为对集合的线性扫描
/// - 锁内不执行任何 `.await`
pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<Customer>>,
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
        }
    }
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以固定的四条种子数据创建仓储（进程启动时装载）
    pub fn seeded() -> Self {
        Self::with_customers(vec![
            Customer {
                id: 1,
                first_name: "Bill".to_string(),
                last_name: "Gates".to_string(),
                revenue: 100_000.0,
            },
            Customer {
                id: 2,
                first_name: "Steve".to_string(),
                last_name: "Ballmer".to_string(),
                revenue: 200_000.0,
            },
            Customer {
                id: 3,
                first_name: "Satya".to_string(),
                last_name: "Nadella".to_string(),
                revenue: 300_000.0,
            },
            Customer {
                id: 4,
                first_name: "David".to_string(),
                last_name: "Giard".to_string(),
                revenue: 400_000.0,
            },
        ])
    }

    /// 以给定客户集合创建仓储
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: Mutex::new(customers),
        }
    }

    // 空集合时 max 为 0，因此首个分配的 id 为 1
    fn next_id(customers: &[Customer]) -> DomainResult<u32> {
        let max = customers.iter().map(|c| c.id).max().unwrap_or(0);
        max.checked_add(1).ok_or(DomainError::InvalidState {
            reason: "customer id space exhausted".to_string(),
        })
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self) -> DomainResult<Vec<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.clone())
    }

    async fn find(&self, id: u32) -> DomainResult<Option<Customer>> {
        let customers = self.customers.lock().unwrap();
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn insert(&self, mut customer: Customer) -> DomainResult<Customer> {
        let mut customers = self.customers.lock().unwrap();
        if customer.is_unassigned() {
            customer.id = Self::next_id(&customers)?;
        }
        customers.push(customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> DomainResult<Option<Customer>> {
        let mut customers = self.customers.lock().unwrap();
        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(stored) => {
                stored.first_name = customer.first_name;
                stored.last_name = customer.last_name;
                stored.revenue = customer.revenue;
                Ok(Some(stored.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, id: u32) -> DomainResult<()> {
        let mut customers = self.customers.lock().unwrap();
        if let Some(pos) = customers.iter().position(|c| c.id == id) {
            customers.remove(pos);
        }
        Ok(())
    }
}
