//! HMAC-SHA384 payload signing for the Gemini REST API.
//!
//! Gemini authenticates private endpoints by carrying the request as a
//! base64-encoded JSON payload in the `X-GEMINI-PAYLOAD` header, signed with
//! the account secret in `X-GEMINI-SIGNATURE`. The HTTP body stays empty.

use crate::credentials::ApiCredentials;
use crate::error::AuthError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Serialize;
use serde_json::{Map, Value};
use sha2::Sha384;

type HmacSha384 = Hmac<Sha384>;

/// Header carrying the public API key.
pub const API_KEY_HEADER: &str = "X-GEMINI-APIKEY";
/// Header carrying the hex HMAC-SHA384 signature.
pub const SIGNATURE_HEADER: &str = "X-GEMINI-SIGNATURE";
/// Header carrying the base64 JSON payload.
pub const PAYLOAD_HEADER: &str = "X-GEMINI-PAYLOAD";

/// A base64 payload together with its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedPayload {
    /// Base64 of the JSON request payload.
    pub payload: String,
    /// Lowercase hex HMAC-SHA384 of `payload`.
    pub signature: String,
}

impl SignedPayload {
    /// Full authentication header set for a private endpoint call.
    pub fn headers<'a>(&'a self, api_key: &'a str) -> [(&'static str, &'a str); 6] {
        [
            (API_KEY_HEADER, api_key),
            ("Content-Length", "0"),
            (PAYLOAD_HEADER, self.payload.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
            ("Cache-Control", "no-cache"),
            ("Content-Type", "text/plain"),
        ]
    }
}

/// Request signer for authenticated Gemini API calls.
pub struct RequestSigner<'a> {
    credentials: &'a ApiCredentials,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer with the given credentials.
    pub fn new(credentials: &'a ApiCredentials) -> Self {
        Self { credentials }
    }

    /// Sign a message and return the lowercase hex HMAC-SHA384.
    pub fn sign(&self, message: &str) -> String {
        let mut mac = HmacSha384::new_from_slice(self.credentials.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");

        mac.update(message.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Build and sign the payload for `request` (the endpoint path).
    ///
    /// `request` and `nonce` always win over same-named entries in `fields`.
    pub fn sign_payload(
        &self,
        request: &str,
        nonce: u64,
        fields: Map<String, Value>,
    ) -> SignedPayload {
        let mut body = fields;
        body.insert("request".to_string(), Value::String(request.to_string()));
        body.insert("nonce".to_string(), Value::String(nonce.to_string()));

        let payload = STANDARD.encode(Value::Object(body).to_string());
        let signature = self.sign(&payload);

        SignedPayload { payload, signature }
    }
}

/// Convert a serializable request body into payload fields.
pub fn payload_fields<T: Serialize>(fields: &T) -> Result<Map<String, Value>, AuthError> {
    match serde_json::to_value(fields).map_err(|e| AuthError::InvalidFields(e.to_string()))? {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        other => Err(AuthError::InvalidFields(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(payload: &str) -> Value {
        let raw = STANDARD.decode(payload).unwrap();
        serde_json::from_slice(&raw).unwrap()
    }

    #[test]
    fn test_sign_known_vector() {
        let creds = ApiCredentials::new("key", "test-secret");
        let signer = RequestSigner::new(&creds);

        let signature =
            signer.sign("eyJub25jZSI6IjE3MDAwMDAwMDAwMDAiLCJyZXF1ZXN0IjoiL3YxL2JhbGFuY2VzIn0=");

        assert_eq!(
            signature,
            "4205fb83f58418244b36b08174b39d258443127b4554f630a606736f7ee0b2859d4621f5c0eae22254fbf32f92678d2b"
        );
    }

    #[test]
    fn test_payload_has_request_and_nonce_only() {
        let creds = ApiCredentials::new("key", "secret");
        let signer = RequestSigner::new(&creds);

        let signed = signer.sign_payload("/v1/balances", 1_700_000_000_000, Map::new());

        assert_eq!(
            decode(&signed.payload),
            json!({"request": "/v1/balances", "nonce": "1700000000000"})
        );
    }

    #[test]
    fn test_payload_carries_extra_fields() {
        let creds = ApiCredentials::new("key", "secret");
        let signer = RequestSigner::new(&creds);

        let mut fields = Map::new();
        fields.insert("symbol".into(), json!("btcusd"));
        fields.insert("options".into(), json!(["immediate-or-cancel"]));

        let signed = signer.sign_payload("/v1/order/new", 1000, fields);

        assert_eq!(
            decode(&signed.payload),
            json!({
                "request": "/v1/order/new",
                "nonce": "1000",
                "symbol": "btcusd",
                "options": ["immediate-or-cancel"],
            })
        );
    }

    #[test]
    fn test_reserved_fields_cannot_be_overridden() {
        let creds = ApiCredentials::new("key", "secret");
        let signer = RequestSigner::new(&creds);

        let mut fields = Map::new();
        fields.insert("nonce".into(), json!("1"));
        fields.insert("request".into(), json!("/v1/other"));

        let body = decode(&signer.sign_payload("/v1/balances", 2000, fields).payload);
        assert_eq!(body["nonce"], "2000");
        assert_eq!(body["request"], "/v1/balances");
    }

    #[test]
    fn test_signature_covers_payload() {
        let creds = ApiCredentials::new("key", "secret");
        let signer = RequestSigner::new(&creds);

        let signed = signer.sign_payload("/v1/balances", 1000, Map::new());
        assert_eq!(signed.signature, signer.sign(&signed.payload));
        assert_eq!(signed.signature.len(), 96);
    }

    #[test]
    fn test_signature_deterministic_and_tamper_sensitive() {
        let creds = ApiCredentials::new("key", "secret");
        let signer = RequestSigner::new(&creds);

        let a = signer.sign_payload("/v1/balances", 1000, Map::new());
        let b = signer.sign_payload("/v1/balances", 1000, Map::new());
        assert_eq!(a, b);

        let later = signer.sign_payload("/v1/balances", 2000, Map::new());
        assert_ne!(a.signature, later.signature);

        let mut tampered = a.payload.clone().into_bytes();
        tampered[0] ^= 0x01;
        let tampered = String::from_utf8(tampered).unwrap();
        assert_ne!(signer.sign(&tampered), a.signature);
    }

    #[test]
    fn test_signature_depends_on_secret() {
        let first = ApiCredentials::new("key", "secret-one");
        let second = ApiCredentials::new("key", "secret-two");

        assert_ne!(
            RequestSigner::new(&first).sign("payload"),
            RequestSigner::new(&second).sign("payload")
        );
    }

    #[test]
    fn test_headers_layout() {
        let signed = SignedPayload {
            payload: "cGF5bG9hZA==".into(),
            signature: "abc123".into(),
        };

        let headers = signed.headers("my-key");
        assert_eq!(
            headers,
            [
                ("X-GEMINI-APIKEY", "my-key"),
                ("Content-Length", "0"),
                ("X-GEMINI-PAYLOAD", "cGF5bG9hZA=="),
                ("X-GEMINI-SIGNATURE", "abc123"),
                ("Cache-Control", "no-cache"),
                ("Content-Type", "text/plain"),
            ]
        );
    }

    #[test]
    fn test_payload_fields_from_struct() {
        #[derive(Serialize)]
        struct Order {
            symbol: &'static str,
            amount: &'static str,
        }

        let fields = payload_fields(&Order {
            symbol: "ethusd",
            amount: "0.025",
        })
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields["symbol"], "ethusd");
    }

    #[test]
    fn test_payload_fields_rejects_non_object() {
        let result = payload_fields(&vec![1, 2, 3]);
        assert!(matches!(result, Err(AuthError::InvalidFields(_))));
    }
}
