//! Remote product validation client
//!
//! Orders reference products owned by a separate catalog service. Before an
//! order is written, every referenced product id is resolved through a single
//! batched `validate_products` call; the returned name/price are the only
//! product data this service ever sees (prices are snapshotted onto order
//! items, names are attached to responses, nothing is cached).

use crate::config::ProductServiceConfig;
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Product as resolved by the catalog service. Never persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
}

#[derive(Error, Debug)]
pub enum ProductClientError {
    #[error("Product service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Product service rejected the request: {0}")]
    Rejected(String),
}

/// Resolves product ids to current name/price via one batched call.
///
/// The gateway injects the HTTP implementation; tests substitute mocks.
#[async_trait]
pub trait ProductValidator: Send + Sync {
    async fn validate_products(&self, ids: &[Uuid]) -> Result<Vec<Product>, ProductClientError>;
}

/// HTTP client for the product catalog service
pub struct HttpProductClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpProductClient {
    pub fn new(config: &ProductServiceConfig) -> Result<Self, ProductClientError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }
}

#[async_trait]
impl ProductValidator for HttpProductClient {
    async fn validate_products(&self, ids: &[Uuid]) -> Result<Vec<Product>, ProductClientError> {
        let url = format!("{}/products/validate", self.base_url);
        tracing::debug!("Validating {} product id(s) against {}", ids.len(), url);

        let response = self.client.post(&url).json(&ids).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProductClientError::Rejected(format!(
                "{}: {}",
                status, body
            )));
        }

        let products: Vec<Product> = response.json().await?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let json = r#"{"id":"a1a2a3a4-b1b2-c1c2-d1d2-e1e2e3e4e5e6","name":"Keyboard","price":"149.99"}"#;
        let product: Product = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, Decimal::new(14999, 2));
    }

    #[test]
    fn test_base_url_trailing_slash_normalized() {
        let config = ProductServiceConfig {
            base_url: "http://localhost:3001/".to_string(),
            timeout_secs: 10,
        };
        let client = HttpProductClient::new(&config).expect("should build");
        assert_eq!(client.base_url, "http://localhost:3001");
    }
}
