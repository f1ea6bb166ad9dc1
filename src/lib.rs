//! ordersvc - Order Management Microservice
//!
//! Creates orders against a remote product catalog, snapshotting prices at
//! creation time, and tracks the order lifecycle in PostgreSQL.
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing subscriber / rolling file setup
//! - [`db`] - PostgreSQL connection pool
//! - [`products`] - Remote product validation client
//! - [`orders`] - Order service, repository and models
//! - [`gateway`] - Axum HTTP gateway

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod orders;
pub mod products;

// Convenient re-exports at crate root
pub use db::Database;
pub use orders::{
    Order, OrderDetail, OrderError, OrderItem, OrderService, OrderStatus, PaginatedOrders,
};
pub use products::{HttpProductClient, Product, ProductClientError, ProductValidator};
