// API client module: a small blocking HTTP client that fetches the latest
// rate table from the exchange rates API. One request per call, no retry
// and no caching between calls.

use crate::currency::Currency;
use crate::error::FetchError;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Rates of every currency relative to `base`, as returned by the API.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RateTable {
    pub base: String,
    pub rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: impl Into<String>, rates: HashMap<String, f64>) -> Self {
        RateTable {
            base: base.into(),
            rates,
        }
    }

    /// Rate of `currency` relative to the base, if the table has one.
    pub fn rate(&self, currency: Currency) -> Option<f64> {
        self.rates.get(currency.code()).copied()
    }
}

/// Error envelope the API sends with non-2xx responses.
#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    error: bool,
    status: Option<u16>,
    message: Option<String>,
    description: Option<String>,
}

/// Anything that can hand the session a fresh rate table.
pub trait RateSource {
    fn latest(&self) -> std::result::Result<RateTable, FetchError>;
}

/// Blocking client bound to one fully-formed request URL (endpoint plus
/// `app_id` query).
#[derive(Clone)]
pub struct RateClient {
    client: Client,
    url: String,
}

impl RateClient {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(RateClient {
            client,
            url: url.into(),
        })
    }

    /// Request URL without its query string, safe to log.
    fn endpoint(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }
}

impl RateSource for RateClient {
    fn latest(&self) -> std::result::Result<RateTable, FetchError> {
        debug!("GET {}", self.endpoint());
        // `without_url` keeps the access key out of diagnostics.
        let res = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FetchError::Network(e.without_url()))?;
        let status = res.status();
        let body = res.text().map_err(|e| FetchError::Network(e.without_url()))?;

        if !status.is_success() {
            if let Ok(envelope) = serde_json::from_str::<ApiErrorBody>(&body) {
                if envelope.error {
                    return Err(FetchError::Api {
                        status: envelope.status.unwrap_or(status.as_u16()),
                        description: envelope
                            .description
                            .or(envelope.message)
                            .unwrap_or_else(|| "unknown error".into()),
                    });
                }
            }
            warn!("rates API answered {} without an error envelope", status);
        }

        let table: RateTable = serde_json::from_str(&body)?;
        info!("fetched {} rates (base {})", table.rates.len(), table.base);
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_latest_payload() {
        let body = r#"{
            "disclaimer": "Usage subject to terms",
            "timestamp": 1700000000,
            "base": "USD",
            "rates": {"USD": 1, "EUR": 0.85, "NGN": 1580.5}
        }"#;
        let table: RateTable = serde_json::from_str(body).unwrap();
        assert_eq!(table.base, "USD");
        assert_eq!(table.rate(Currency::Usd), Some(1.0));
        assert_eq!(table.rate(Currency::Ngn), Some(1580.5));
        assert_eq!(table.rate(Currency::Gbp), None);
    }

    #[test]
    fn zero_rate_is_present_not_missing() {
        let table = RateTable::new("USD", HashMap::from([("EUR".to_string(), 0.0)]));
        assert_eq!(table.rate(Currency::Eur), Some(0.0));
    }

    #[test]
    fn endpoint_drops_query() {
        let client = RateClient::new("https://example.test/api/latest.json?app_id=secret").unwrap();
        assert_eq!(client.endpoint(), "https://example.test/api/latest.json");
    }
}
