pub mod client;

pub use client::{HttpProductClient, Product, ProductClientError, ProductValidator};
