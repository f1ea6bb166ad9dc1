//! ordersvc entry point
//!
//! ```text
//! ┌──────────┐    ┌───────────────┐    ┌───────────────┐
//! │  Gateway │───▶│ Order Service │───▶│  PostgreSQL   │
//! │  (axum)  │    │ (orchestrate) │    │ (orders/items)│
//! └──────────┘    └───────┬───────┘    └───────────────┘
//!                         │
//!                         ▼
//!                 ┌───────────────┐
//!                 │ Product Svc   │  validate_products
//!                 │ (remote HTTP) │  (name/price lookup)
//!                 └───────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;

use ordersvc::config::AppConfig;
use ordersvc::db::Database;
use ordersvc::products::{HttpProductClient, ProductValidator};
use ordersvc::{gateway, logging};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut config = AppConfig::load(&env);
    if let Some(port) = get_port_override() {
        config.gateway.port = port;
    }

    let _log_guard = logging::init_logging(&config);
    tracing::info!("Starting ordersvc in {} mode (build {})", env, env!("GIT_HASH"));

    let db = Database::connect(&config.postgres_url)
        .await
        .context("Failed to connect to order store")?;
    db.health_check()
        .await
        .context("Order store health check failed")?;

    let products: Arc<dyn ProductValidator> = Arc::new(
        HttpProductClient::new(&config.product_service)
            .context("Failed to build product service client")?,
    );

    gateway::run_server(&config, db, products).await
}
