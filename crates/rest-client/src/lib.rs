//! Generic REST client infrastructure.
//!
//! A thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - GET and POST with JSON response deserialization
//! - Header injection for authentication
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct PriceEntry {
//!     pair: String,
//!     price: String,
//! }
//!
//! let client = RestClient::with_default_timeout("https://api.sandbox.gemini.com")?;
//! let feed: Vec<PriceEntry> = client.get("/v1/pricefeed", None).await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
