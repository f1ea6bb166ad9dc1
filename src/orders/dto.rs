//! Request payloads crossing the gateway boundary
//!
//! Declarative validation only; business rules (product resolution, totals)
//! live in the service layer.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::models::OrderStatus;

/// Payload for `POST /api/v1/orders`
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<CreateOrderItem>,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: Uuid,
    #[validate(range(min = 1, message = "Quantity must be a positive integer"))]
    pub quantity: i32,
}

/// Query parameters for `GET /api/v1/orders`
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct OrderPaginationQuery {
    /// Restrict the listing to one status
    pub status: Option<OrderStatus>,
    /// 1-based page number (default 1)
    #[validate(range(min = 1, message = "Page must be positive"))]
    pub page: Option<u32>,
    /// Page size (default 10)
    #[validate(range(min = 1, message = "Limit must be positive"))]
    pub limit: Option<u32>,
}

/// Payload for `PATCH /api/v1/orders/{id}/status`
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChangeOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32) -> CreateOrderItem {
        CreateOrderItem {
            product_id: Uuid::new_v4(),
            quantity,
        }
    }

    #[test]
    fn test_create_request_requires_items() {
        let req = CreateOrderRequest { items: vec![] };
        assert!(req.validate().is_err(), "Empty item list must be rejected");
    }

    #[test]
    fn test_create_request_rejects_non_positive_quantity() {
        let req = CreateOrderRequest {
            items: vec![item(1), item(0)],
        };
        assert!(req.validate().is_err(), "Zero quantity must be rejected");

        let req = CreateOrderRequest {
            items: vec![item(-3)],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_request_accepts_valid_items() {
        let req = CreateOrderRequest {
            items: vec![item(1), item(25)],
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_pagination_defaults_deserialize() {
        let query: OrderPaginationQuery = serde_json::from_str("{}").unwrap();
        assert!(query.status.is_none());
        assert!(query.page.is_none());
        assert!(query.limit.is_none());
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_pagination_rejects_zero_page() {
        let query = OrderPaginationQuery {
            status: None,
            page: Some(0),
            limit: Some(10),
        };
        assert!(query.validate().is_err());
    }
}
