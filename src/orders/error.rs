use thiserror::Error;
use uuid::Uuid;

use crate::products::ProductClientError;

/// Failures surfaced by the order service.
///
/// Callers classify these per operation: `NotFound` maps to 404 everywhere;
/// product and store failures map to the bad-request classification on
/// creation (wire compatibility with the original service).
#[derive(Error, Debug)]
pub enum OrderError {
    #[error("The order with #{0} not found")]
    NotFound(Uuid),

    /// A requested product id was absent from the validator response
    #[error("Product {0} was not returned by the product service")]
    UnknownProduct(Uuid),

    #[error("Product validation failed: {0}")]
    ProductValidation(#[from] ProductClientError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_contains_id() {
        let id = Uuid::new_v4();
        let msg = OrderError::NotFound(id).to_string();
        assert!(msg.contains(&id.to_string()));
        assert!(msg.starts_with("The order with #"));
    }
}
