use std::sync::Arc;

use crate::db::Database;
use crate::orders::OrderService;

/// Shared gateway state
#[derive(Clone)]
pub struct AppState {
    /// Order orchestration service
    pub orders: Arc<OrderService>,
    /// Order store handle (health checks)
    pub db: Database,
}

impl AppState {
    pub fn new(orders: Arc<OrderService>, db: Database) -> Self {
        Self { orders, db }
    }
}
