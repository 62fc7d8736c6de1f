//! Exchange operations used by the shell.

use async_trait::async_trait;
use gemini_rest::{Balance, GeminiRestClient, GeminiRestError, OrderKind};
use rust_decimal::Decimal;

/// The exchange operations the shell dispatches to.
#[async_trait]
pub trait Exchange: Send + Sync {
    /// All account balances.
    async fn balances(&self) -> Result<Vec<Balance>, GeminiRestError>;

    /// Current USD price of `symbol`.
    async fn price(&self, symbol: &str) -> Result<Decimal, GeminiRestError>;

    /// Buy `usd_amount` worth of `symbol`; `Ok(false)` if the order did not go through.
    async fn buy(
        &self,
        kind: OrderKind,
        symbol: &str,
        usd_amount: Decimal,
    ) -> Result<bool, GeminiRestError>;
}

#[async_trait]
impl Exchange for GeminiRestClient {
    async fn balances(&self) -> Result<Vec<Balance>, GeminiRestError> {
        GeminiRestClient::balances(self).await
    }

    async fn price(&self, symbol: &str) -> Result<Decimal, GeminiRestError> {
        GeminiRestClient::price(self, symbol).await
    }

    async fn buy(
        &self,
        kind: OrderKind,
        symbol: &str,
        usd_amount: Decimal,
    ) -> Result<bool, GeminiRestError> {
        GeminiRestClient::buy(self, kind, symbol, usd_amount).await
    }
}
