//! Gemini REST API client.
//!
//! This crate provides a typed client for the Gemini REST API with:
//!
//! - **Price feed**: public lookup of the current USD price of an asset
//! - **Balances**: signed account balance snapshot
//! - **Buy orders**: limit buys and emulated market buys
//! - **Error handling**: exchange error bodies surfaced as typed errors
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use common::GeminiEnvironment;
//! use gemini_rest::{GeminiRestClient, OrderKind};
//! use rust_decimal_macros::dec;
//!
//! let credentials = ApiCredentials::new(token, secret);
//! let client = GeminiRestClient::new(credentials, GeminiEnvironment::Sandbox)?;
//!
//! let btc = client.price("btc").await?;
//! let filled = client.buy(OrderKind::Market, "btc", dec!(100)).await?;
//! ```

mod client;
mod error;
mod order;
mod responses;

pub use client::GeminiRestClient;
pub use error::GeminiRestError;
pub use order::{NewOrderRequest, OrderKind, EXCHANGE_LIMIT, IMMEDIATE_OR_CANCEL, MARKET_SLIPPAGE};
pub use responses::{Balance, OrderStatusResponse, PriceFeedEntry};
