use anyhow::{Context, Result};
use thiserror::Error;

/// Environment variable holding the Gemini API credential.
pub const GOOGLE_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Application configuration loaded from environment variables.
///
/// Only malformed values fail startup. A missing `GOOGLE_API_KEY` is tolerated:
/// template rendering and record editing keep working, generative operations
/// report a `ConfigurationError` instead.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub google_api_key: Option<String>,
    /// Per-request timeout for calls to the text generation service.
    pub llm_timeout_secs: u64,
    /// Sessions idle for longer than this are dropped with their artifacts.
    pub session_ttl_secs: u64,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("{key} is not set; AI generation is unavailable until the credential is configured")]
    MissingCredential { key: &'static str },
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any variable source.
    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Config {
            port: var("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            google_api_key: var(GOOGLE_API_KEY_VAR)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            llm_timeout_secs: var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|| "60".to_string())
                .parse::<u64>()
                .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?,
            session_ttl_secs: var("SESSION_TTL_SECS")
                .unwrap_or_else(|| "3600".to_string())
                .parse::<u64>()
                .context("SESSION_TTL_SECS must be a whole number of seconds")?,
        })
    }

    /// Returns the generation credential, or the error shown to users when it is absent.
    pub fn generative_credential(&self) -> Result<&str, ConfigurationError> {
        self.google_api_key
            .as_deref()
            .ok_or(ConfigurationError::MissingCredential {
                key: GOOGLE_API_KEY_VAR,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.google_api_key, None);
        assert_eq!(config.llm_timeout_secs, 60);
        assert_eq!(config.session_ttl_secs, 3600);
    }

    #[test]
    fn test_malformed_port_fails_startup() {
        let err = load(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(load(&[("PORT", "70000")]).is_err());
    }

    #[test]
    fn test_malformed_timeouts_fail_startup() {
        let err = load(&[("LLM_TIMEOUT_SECS", "1m")]).unwrap_err();
        assert!(err.to_string().contains("LLM_TIMEOUT_SECS"));
        let err = load(&[("SESSION_TTL_SECS", "-5")]).unwrap_err();
        assert!(err.to_string().contains("SESSION_TTL_SECS"));
    }

    #[test]
    fn test_blank_key_counts_as_missing() {
        let config = load(&[(GOOGLE_API_KEY_VAR, "   ")]).unwrap();
        assert!(config.generative_credential().is_err());
    }

    #[test]
    fn test_generative_credential_present() {
        let config = load(&[(GOOGLE_API_KEY_VAR, " abc123 ")]).unwrap();
        assert_eq!(config.generative_credential(), Ok("abc123"));
    }

    #[test]
    fn test_generative_credential_missing_names_the_variable() {
        let err = load(&[]).unwrap().generative_credential().unwrap_err();
        assert!(err.to_string().contains("GOOGLE_API_KEY"));
    }
}
