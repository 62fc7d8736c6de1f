//! Authentication and payload signing for the Gemini REST API.
//!
//! # Features
//!
//! - **Secure Credentials**: the shared secret is wrapped in `SecretString` to
//!   prevent accidental logging and is zeroed on drop.
//! - **HMAC-SHA384 Signing**: base64 JSON payloads signed the way Gemini
//!   expects, carried in headers rather than the request body.
//! - **Nonces**: second-resolution millisecond nonces that never go backwards.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, NonceGenerator, RequestSigner};
//!
//! let credentials = ApiCredentials::new("account-key", "account-secret");
//! let nonces = NonceGenerator::new();
//!
//! let signed = RequestSigner::new(&credentials).sign_payload(
//!     "/v1/balances",
//!     nonces.next()?,
//!     serde_json::Map::new(),
//! );
//! let headers = signed.headers(credentials.api_key());
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::ApiCredentials;
pub use error::AuthError;
pub use nonce::NonceGenerator;
pub use signer::{
    payload_fields, RequestSigner, SignedPayload, API_KEY_HEADER, PAYLOAD_HEADER,
    SIGNATURE_HEADER,
};
