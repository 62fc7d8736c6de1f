//! Gemini REST API error types.

use auth::AuthError;
use rest_client::RestError;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when interacting with the Gemini REST API.
#[derive(Debug, Error)]
pub enum GeminiRestError {
    /// REST client error (network, timeout, unparsable body, etc.).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Authentication error.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Error object returned by the exchange.
    #[error("Gemini API error {reason}: {message}")]
    ApiError {
        /// HTTP status of the response.
        status: u16,
        /// Machine-readable reason, e.g. `InvalidSignature`.
        reason: String,
        /// Human-readable message.
        message: String,
    },

    /// The price feed has no entry for the requested pair.
    #[error("Unknown trading pair: {0}")]
    UnknownSymbol(String),

    /// Order parameters cannot produce a valid order.
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// Operation intentionally not implemented.
    #[error("Not implemented: {0}")]
    Unimplemented(&'static str),
}

impl GeminiRestError {
    /// Lift a REST error, unpacking Gemini's `{"result":"error",...}` bodies.
    pub fn from_rest(err: RestError) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            reason: String,
            #[serde(default)]
            message: String,
        }

        match err {
            RestError::HttpError { status, message } => {
                match serde_json::from_str::<ErrorBody>(&message) {
                    Ok(body) => Self::ApiError {
                        status,
                        reason: body.reason,
                        message: body.message,
                    },
                    Err(_) => Self::Rest(RestError::HttpError { status, message }),
                }
            }
            other => Self::Rest(other),
        }
    }

    /// True when the exchange answered with a non-success status.
    pub fn is_http_status(&self) -> bool {
        matches!(
            self,
            Self::ApiError { .. } | Self::Rest(RestError::HttpError { .. })
        )
    }
}
