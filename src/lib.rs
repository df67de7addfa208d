// @file: src/lib.rs
// @description: Exposes the proxy client, its models and configuration.
// @author: LAS.

pub mod core;
pub mod connectors;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::connectors::kaivest::{join_symbols, ClientSettings, QueryClient};
pub use crate::core::errors::QueryError;
pub use crate::core::interfaces::MarketDataProxy;
