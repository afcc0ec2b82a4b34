use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use crate::models::envelope::MerchantIdentity;

pub const DEFAULT_BASE_URL: &str = "https://sandbox.waafipay.net/asm";
pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(String),
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub base_url: Url,
    pub merchant: MerchantIdentity,
    pub gateway_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let merchant = MerchantIdentity {
            merchant_uid: required("MERCHANT_UID")?,
            store_id: required("STORE_ID")?,
            hpp_key: required("HPP_KEY")?,
        };

        let raw_url = lookup("BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(&raw_url).map_err(|_| ConfigError::InvalidBaseUrl(raw_url))?;

        Ok(Self {
            server_port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            base_url,
            merchant,
            gateway_timeout: lookup("GATEWAY_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const CREDS: [(&str, &str); 3] = [
        ("MERCHANT_UID", "M0910291"),
        ("STORE_ID", "1000297"),
        ("HPP_KEY", "HPP-KEY"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&CREDS)).unwrap();
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.server_port, DEFAULT_PORT);
        assert_eq!(config.merchant.merchant_uid, "M0910291");
        assert!(config.gateway_timeout.is_none());
    }

    #[test]
    fn test_missing_credentials() {
        let err = Config::from_lookup(lookup_from(&CREDS[..2])).unwrap_err();
        assert_eq!(err, ConfigError::Missing("HPP_KEY"));
    }

    #[test]
    fn test_overrides_and_bad_url() {
        let mut pairs = CREDS.to_vec();
        pairs.extend([
            ("PORT", "9090"),
            ("GATEWAY_TIMEOUT_SECS", "15"),
            ("BASE_URL", "http://gateway.local/asm"),
        ]);
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.server_port, 9090);
        assert_eq!(config.gateway_timeout, Some(Duration::from_secs(15)));
        assert_eq!(config.base_url.as_str(), "http://gateway.local/asm");

        let mut pairs = CREDS.to_vec();
        pairs.push(("BASE_URL", "not a url"));
        assert!(matches!(
            Config::from_lookup(lookup_from(&pairs)),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }
}
