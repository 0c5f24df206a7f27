use customer_application::Dispatcher;
use customer_domain::CustomerRepository;
use std::sync::Arc;

/// 各路由共享的应用状态
#[derive(Clone)]
pub struct AppState {
    /// 请求分发器（全部处理器已装配完成）
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    /// 以给定仓储装配分发器
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            dispatcher: Arc::new(Dispatcher::new(repository)),
        }
    }
}
