//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:3002/docs`
//! - OpenAPI JSON: `http://localhost:3002/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::orders::{
    ChangeOrderStatusRequest, CreateOrderItem, CreateOrderRequest, EnrichedOrderItem, Order,
    OrderDetail, OrderItem, OrderStatus, PaginatedOrders, PaginationMeta,
};
use crate::products::Product;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Order Service API",
        version = "1.0.0",
        description = "Order management microservice: creates orders against a remote product catalog, snapshotting prices at creation time.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3002", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::change_order_status,
    ),
    components(schemas(
        Order,
        OrderItem,
        EnrichedOrderItem,
        OrderDetail,
        OrderStatus,
        PaginatedOrders,
        PaginationMeta,
        CreateOrderRequest,
        CreateOrderItem,
        ChangeOrderStatusRequest,
        Product,
        HealthResponse,
    )),
    tags(
        (name = "Orders", description = "Order lifecycle operations"),
        (name = "Service", description = "Health and metadata")
    )
)]
pub struct ApiDoc;
