//! Gemini environment configuration.
//!
//! Supports the production and sandbox environments with their REST URLs.

use std::fmt;

/// Gemini environment (production or sandbox).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiEnvironment {
    /// Production environment (real money).
    Production,
    /// Sandbox environment (test funds).
    Sandbox,
}

impl GeminiEnvironment {
    /// Pick the environment from the `--test-mode` flag.
    pub fn from_test_mode(test_mode: bool) -> Self {
        if test_mode {
            Self::Sandbox
        } else {
            Self::Production
        }
    }

    /// REST API base URL.
    pub fn rest_base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.gemini.com",
            Self::Sandbox => "https://api.sandbox.gemini.com",
        }
    }

    /// Returns true if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for GeminiEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "production"),
            Self::Sandbox => write!(f, "sandbox"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_url() {
        let env = GeminiEnvironment::Sandbox;
        assert_eq!(env.rest_base_url(), "https://api.sandbox.gemini.com");
        assert!(!env.is_production());
    }

    #[test]
    fn test_production_url() {
        let env = GeminiEnvironment::Production;
        assert_eq!(env.rest_base_url(), "https://api.gemini.com");
        assert!(env.is_production());
    }

    #[test]
    fn test_from_test_mode() {
        assert_eq!(
            GeminiEnvironment::from_test_mode(true),
            GeminiEnvironment::Sandbox
        );
        assert_eq!(
            GeminiEnvironment::from_test_mode(false),
            GeminiEnvironment::Production
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(GeminiEnvironment::Production.to_string(), "production");
        assert_eq!(GeminiEnvironment::Sandbox.to_string(), "sandbox");
    }
}
