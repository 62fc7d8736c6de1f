//! Gemini API response types.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One entry of POST /v1/balances.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Balance {
    pub currency: String,
    pub amount: Decimal,
    #[serde(default)]
    pub available: Option<Decimal>,
    #[serde(rename = "availableForWithdrawal", default)]
    pub available_for_withdrawal: Option<Decimal>,
    #[serde(rename = "type", default)]
    pub account_type: Option<String>,
}

/// One entry of GET /v1/pricefeed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PriceFeedEntry {
    pub pair: String,
    pub price: Decimal,
    #[serde(rename = "percentChange24h", default)]
    pub percent_change_24h: Option<Decimal>,
}

/// Order status returned by POST /v1/order/new.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderStatusResponse {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    #[serde(rename = "type", default)]
    pub order_type: Option<String>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub avg_execution_price: Option<Decimal>,
    #[serde(default)]
    pub is_live: bool,
    pub is_cancelled: bool,
    #[serde(default)]
    pub executed_amount: Option<Decimal>,
    #[serde(default)]
    pub remaining_amount: Option<Decimal>,
    #[serde(default)]
    pub original_amount: Option<Decimal>,
    #[serde(default)]
    pub options: Vec<String>,
}
