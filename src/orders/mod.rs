pub mod dto;
pub mod error;
pub mod models;
pub mod repository;
pub mod service;

pub use dto::{ChangeOrderStatusRequest, CreateOrderItem, CreateOrderRequest, OrderPaginationQuery};
pub use error::OrderError;
pub use models::{
    EnrichedOrderItem, Order, OrderDetail, OrderItem, OrderStatus, PaginatedOrders, PaginationMeta,
};
pub use repository::{NewOrderItem, OrderRepository};
pub use service::{OrderService, compute_totals, index_products, last_page};
