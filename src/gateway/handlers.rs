//! Order API handlers

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::orders::{
    ChangeOrderStatusRequest, CreateOrderRequest, OrderDetail, OrderError, OrderPaginationQuery,
    PaginatedOrders,
};

use super::state::AppState;
use super::types::{ApiError, ApiResponse, ApiResult, created, error_codes, ok};

/// Create order endpoint
///
/// POST /api/v1/orders
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderDetail>),
        (status = 400, description = "Invalid payload or unresolvable product")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<OrderDetail> {
    req.validate().map_err(|e| ApiError::bad_request(e.to_string()))?;

    match state.orders.create(req).await {
        Ok(detail) => created(detail),
        Err(e) => {
            let (status, code) = match &e {
                OrderError::UnknownProduct(_) | OrderError::ProductValidation(_) => (
                    StatusCode::BAD_REQUEST,
                    error_codes::PRODUCT_VALIDATION_FAILED,
                ),
                // The original service folds store failures on creation into
                // the same bad-request classification; kept for wire compat.
                OrderError::Database(_) => {
                    (StatusCode::BAD_REQUEST, error_codes::INVALID_PARAMETER)
                }
                OrderError::NotFound(_) => {
                    (StatusCode::NOT_FOUND, error_codes::ORDER_NOT_FOUND)
                }
            };
            tracing::warn!("Create order failed: {}", e);
            Err(ApiError::new(status, code, e.to_string()))
        }
    }
}

/// List orders endpoint (paginated, optional status filter)
///
/// GET /api/v1/orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(OrderPaginationQuery),
    responses(
        (status = 200, description = "One page of orders", body = ApiResponse<PaginatedOrders>),
        (status = 400, description = "Invalid pagination parameters")
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(query): Query<OrderPaginationQuery>,
) -> ApiResult<PaginatedOrders> {
    query
        .validate()
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    match state.orders.find_all(query).await {
        Ok(page) => ok(page),
        Err(e) => {
            tracing::error!("List orders failed: {}", e);
            Err(ApiError::internal(e.to_string()))
        }
    }
}

/// Get order endpoint
///
/// GET /api/v1/orders/{id}
#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = Uuid, Path, description = "Order id")),
    responses(
        (status = 200, description = "Order with enriched items", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order not found"),
        (status = 400, description = "Product enrichment failed")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<OrderDetail> {
    match state.orders.find_one(id).await {
        Ok(detail) => ok(detail),
        Err(e) => Err(order_lookup_error(e)),
    }
}

/// Change order status endpoint
///
/// PATCH /api/v1/orders/{id}/status
#[utoipa::path(
    patch,
    path = "/api/v1/orders/{id}/status",
    params(("id" = Uuid, Path, description = "Order id")),
    request_body = ChangeOrderStatusRequest,
    responses(
        (status = 200, description = "Order with the new status", body = ApiResponse<OrderDetail>),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn change_order_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChangeOrderStatusRequest>,
) -> ApiResult<OrderDetail> {
    match state.orders.change_status(id, req.status).await {
        Ok(detail) => ok(detail),
        Err(e) => Err(order_lookup_error(e)),
    }
}

/// Shared mapping for find_one-backed operations
fn order_lookup_error(e: OrderError) -> ApiError {
    let (status, code) = match &e {
        OrderError::NotFound(_) => (StatusCode::NOT_FOUND, error_codes::ORDER_NOT_FOUND),
        OrderError::UnknownProduct(_) | OrderError::ProductValidation(_) => (
            StatusCode::BAD_REQUEST,
            error_codes::PRODUCT_VALIDATION_FAILED,
        ),
        OrderError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            error_codes::INTERNAL_ERROR,
        ),
    };
    tracing::warn!("Order lookup failed: {}", e);
    ApiError::new(status, code, e.to_string())
}

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Server timestamp in milliseconds
    pub timestamp_ms: i64,
    /// Build revision
    pub version: &'static str,
}

/// Health check endpoint
///
/// Probes the order store; the product service is not part of liveness.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = ApiResponse<HealthResponse>),
        (status = 503, description = "Order store unreachable")
    ),
    tag = "Service"
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> ApiResult<HealthResponse> {
    if let Err(e) = state.db.health_check().await {
        tracing::error!("Health check failed: {}", e);
        return Err(ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            error_codes::SERVICE_UNAVAILABLE,
            "unavailable",
        ));
    }

    ok(HealthResponse {
        timestamp_ms: chrono::Utc::now().timestamp_millis(),
        version: env!("GIT_HASH"),
    })
}
