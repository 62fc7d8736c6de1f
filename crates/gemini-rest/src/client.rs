//! Gemini REST API client.

use crate::error::GeminiRestError;
use crate::order::{NewOrderRequest, OrderKind};
use crate::responses::{Balance, OrderStatusResponse, PriceFeedEntry};
use auth::{payload_fields, ApiCredentials, NonceGenerator, RequestSigner};
use common::GeminiEnvironment;
use rest_client::RestClient;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::Map;
use std::collections::HashMap;
use std::time::Duration;

/// Request timeout for Gemini API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const PRICE_FEED: &str = "/v1/pricefeed";
const BALANCES: &str = "/v1/balances";
const NEW_ORDER: &str = "/v1/order/new";

/// Gemini REST API client with payload signing.
pub struct GeminiRestClient {
    client: RestClient,
    credentials: ApiCredentials,
    nonces: NonceGenerator,
}

impl GeminiRestClient {
    /// Create a client for the given environment.
    ///
    /// # Errors
    /// Live trading is not implemented: `Production` is refused with
    /// `GeminiRestError::Unimplemented`. Also fails if the HTTP client
    /// cannot be built.
    pub fn new(
        credentials: ApiCredentials,
        environment: GeminiEnvironment,
    ) -> Result<Self, GeminiRestError> {
        if environment.is_production() {
            tracing::error!("Refusing to run against the production environment");
            return Err(GeminiRestError::Unimplemented("live trading"));
        }

        Self::with_base_url(credentials, environment.rest_base_url())
    }

    /// Create a client against an explicit base URL.
    pub fn with_base_url(
        credentials: ApiCredentials,
        base_url: &str,
    ) -> Result<Self, GeminiRestError> {
        let client = RestClient::new(base_url, REQUEST_TIMEOUT)?;

        Ok(Self {
            client,
            credentials,
            nonces: NonceGenerator::new(),
        })
    }

    /// Get the API key (for logging/debugging).
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Current prices for every listed pair.
    ///
    /// GET /v1/pricefeed (public). Never cached.
    pub async fn price_feed(&self) -> Result<HashMap<String, Decimal>, GeminiRestError> {
        let feed: Vec<PriceFeedEntry> = self
            .client
            .get(PRICE_FEED, None)
            .await
            .map_err(GeminiRestError::from_rest)?;

        tracing::debug!(pairs = feed.len(), "Price feed received");

        Ok(feed
            .into_iter()
            .map(|entry| (entry.pair, entry.price))
            .collect())
    }

    /// Current USD price of `symbol` (case-insensitive, e.g. "btc").
    pub async fn price(&self, symbol: &str) -> Result<Decimal, GeminiRestError> {
        let pair = format!("{}USD", symbol.to_uppercase());
        let feed = self.price_feed().await?;

        feed.get(&pair)
            .copied()
            .ok_or(GeminiRestError::UnknownSymbol(pair))
    }

    // ========================================================================
    // Account
    // ========================================================================

    /// All balances of the account.
    ///
    /// POST /v1/balances
    pub async fn balances(&self) -> Result<Vec<Balance>, GeminiRestError> {
        let balances: Vec<Balance> = self.private_post(BALANCES, Map::new()).await?;

        tracing::debug!(currencies = balances.len(), "Balances received");

        Ok(balances)
    }

    // ========================================================================
    // Order Management
    // ========================================================================

    /// Buy `usd_amount` worth of `symbol`.
    ///
    /// POST /v1/order/new
    ///
    /// Returns `Ok(true)` only when the exchange accepted the order and did
    /// not cancel it. A cancelled immediate-or-cancel order or a non-success
    /// HTTP status yields `Ok(false)`; transport and parse errors propagate.
    pub async fn buy(
        &self,
        kind: OrderKind,
        symbol: &str,
        usd_amount: Decimal,
    ) -> Result<bool, GeminiRestError> {
        let order = match kind {
            OrderKind::Market => {
                let feed_price = self.price(symbol).await?;
                NewOrderRequest::market_buy(symbol, usd_amount, feed_price)?
            }
            OrderKind::Limit { price } => NewOrderRequest::limit_buy(symbol, usd_amount, price)?,
        };

        tracing::info!(
            symbol = %order.symbol,
            amount = %order.amount,
            price = %order.price,
            options = ?order.options,
            "Placing buy order"
        );

        let fields = payload_fields(&order)?;

        match self
            .private_post::<OrderStatusResponse>(NEW_ORDER, fields)
            .await
        {
            Ok(status) => {
                tracing::info!(
                    order_id = ?status.order_id,
                    is_cancelled = status.is_cancelled,
                    executed_amount = ?status.executed_amount,
                    "Order placed"
                );
                Ok(!status.is_cancelled)
            }
            Err(e) if e.is_http_status() => {
                tracing::debug!(error = %e, "Order rejected");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Sell orders are not supported.
    pub async fn sell(&self, symbol: &str, usd_amount: Decimal) -> Result<bool, GeminiRestError> {
        tracing::debug!(symbol = %symbol, usd_amount = %usd_amount, "Sell requested");
        Err(GeminiRestError::Unimplemented("sell orders"))
    }

    /// Signed POST to a private endpoint. A fresh nonce is taken per call.
    async fn private_post<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        fields: Map<String, serde_json::Value>,
    ) -> Result<T, GeminiRestError> {
        let nonce = self.nonces.next()?;
        let signed = RequestSigner::new(&self.credentials).sign_payload(endpoint, nonce, fields);
        let headers = signed.headers(self.credentials.api_key());

        self.client
            .post(endpoint, Some(&headers))
            .await
            .map_err(GeminiRestError::from_rest)
    }
}

impl std::fmt::Debug for GeminiRestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiRestClient")
            .field("base_url", &self.client.base_url())
            .field("api_key", &self.credentials.api_key())
            .finish()
    }
}
