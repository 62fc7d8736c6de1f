//! Buy order construction.
//!
//! Gemini has no market order type for this account class, so every order
//! is sent as an `exchange limit`. A market buy is emulated by pricing the
//! limit above the current feed price and marking it immediate-or-cancel.

use crate::error::GeminiRestError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Multiplier applied to the feed price for emulated market buys.
pub const MARKET_SLIPPAGE: Decimal = dec!(1.05);
/// Order type sent for every order.
pub const EXCHANGE_LIMIT: &str = "exchange limit";
/// Order option that cancels any unfilled remainder at once.
pub const IMMEDIATE_OR_CANCEL: &str = "immediate-or-cancel";

const QUANTITY_DP: u32 = 4;
const PRICE_DP: u32 = 2;

/// How the execution price of a buy is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderKind {
    /// Feed price plus slippage, immediate-or-cancel.
    Market,
    /// Explicit limit price, resting order.
    Limit { price: Decimal },
}

/// Body fields of POST /v1/order/new.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewOrderRequest {
    pub symbol: String,
    #[serde(rename = "type")]
    pub order_type: &'static str,
    pub side: &'static str,
    pub amount: String,
    pub price: String,
    pub options: Vec<&'static str>,
}

impl NewOrderRequest {
    /// Emulated market buy of `usd_amount` worth of `asset` at `feed_price`.
    pub fn market_buy(
        asset: &str,
        usd_amount: Decimal,
        feed_price: Decimal,
    ) -> Result<Self, GeminiRestError> {
        let price = feed_price * MARKET_SLIPPAGE;
        Self::buy(asset, usd_amount, price, vec![IMMEDIATE_OR_CANCEL])
    }

    /// Resting limit buy of `usd_amount` worth of `asset` at `limit_price`.
    pub fn limit_buy(
        asset: &str,
        usd_amount: Decimal,
        limit_price: Decimal,
    ) -> Result<Self, GeminiRestError> {
        let order = Self::buy(asset, usd_amount, limit_price, Vec::new())?;
        Ok(Self {
            price: limit_price.to_string(),
            ..order
        })
    }

    fn buy(
        asset: &str,
        usd_amount: Decimal,
        price: Decimal,
        options: Vec<&'static str>,
    ) -> Result<Self, GeminiRestError> {
        if price <= Decimal::ZERO {
            return Err(GeminiRestError::InvalidOrder(format!(
                "price must be positive, got {}",
                price
            )));
        }
        if usd_amount <= Decimal::ZERO {
            return Err(GeminiRestError::InvalidOrder(format!(
                "amount must be positive, got {}",
                usd_amount
            )));
        }

        let quantity = usd_amount
            .checked_div(price)
            .ok_or_else(|| GeminiRestError::InvalidOrder("quantity overflow".into()))?
            .round_dp(QUANTITY_DP);

        Ok(Self {
            symbol: format!("{}usd", asset.to_lowercase()),
            order_type: EXCHANGE_LIMIT,
            side: "buy",
            amount: quantity.to_string(),
            price: price.round_dp(PRICE_DP).to_string(),
            options,
        })
    }
}
