//! Request nonces.
//!
//! Gemini rejects a nonce that is not larger than (or equal to, for second
//! resolution) the last one seen for the same key. Nonces here are whole
//! seconds since the epoch times 1000, so two requests within the same
//! second share a nonce.

use crate::error::AuthError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Issues non-decreasing millisecond nonces with second resolution.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next nonce from the wall clock.
    ///
    /// Never returns less than a previously issued nonce, even if the
    /// system clock steps backwards.
    pub fn next(&self) -> Result<u64, AuthError> {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| AuthError::ClockBeforeEpoch)?
            .as_secs();

        Ok(self.observe(secs * 1000))
    }

    /// Record a candidate nonce and return the value to use.
    fn observe(&self, candidate: u64) -> u64 {
        let previous = self.last.fetch_max(candidate, Ordering::SeqCst);
        previous.max(candidate)
    }
}
