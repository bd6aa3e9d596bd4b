//! Error types for the converter.

use crate::currency::Currency;
use thiserror::Error;

/// Startup configuration errors. Always fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `KEY` is unset or blank after loading the env file
    #[error("no key")]
    MissingKey,
}

/// Inline amount validation failure. Shown by the form, never propagated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please enter a valid number")]
pub struct ValidationError;

/// Failure to obtain a rate table.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not complete (connect, TLS, body read)
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The API answered with its error envelope
    #[error("API returned {status}: {description}")]
    Api { status: u16, description: String },

    /// The body was not a rate table
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One or both requested currencies are absent from the rate table.
/// Recoverable: the session re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("One or both currencies not found in API response (missing: {})", codes(.missing))]
pub struct LookupMiss {
    pub missing: Vec<Currency>,
}

fn codes(missing: &[Currency]) -> String {
    missing
        .iter()
        .map(|c| c.code())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Why a request could not be resolved against a rate table. Both kinds
/// send the session back to the form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error(transparent)]
    Missing(#[from] LookupMiss),

    /// The converted value does not fit in an `f64`
    #[error("Converted amount is out of range for {from} to {to}, try a smaller amount")]
    OutOfRange { from: Currency, to: Currency },
}

/// Errors that end a session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The conversion form itself failed (not a validation failure)
    #[error("Error running form: {0}")]
    Form(#[source] std::io::Error),

    /// The continue confirmation failed
    #[error("Error running continue form: {0}")]
    Confirm(#[source] std::io::Error),

    #[error("Error fetching exchange rates: {0}")]
    Fetch(#[from] FetchError),

    /// Writing results to the console failed
    #[error("Error writing output: {0}")]
    Output(#[source] std::io::Error),
}

/// Process exit codes, one per fatal error kind.
pub mod exit_code {
    pub const INTERNAL: u8 = 1;
    pub const STARTUP: u8 = 2;
    pub const FORM: u8 = 3;
    pub const FETCH: u8 = 4;
    pub const OUTPUT: u8 = 5;
}

impl ConfigError {
    pub fn exit_code(&self) -> u8 {
        exit_code::STARTUP
    }
}

impl SessionError {
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionError::Form(_) | SessionError::Confirm(_) => exit_code::FORM,
            SessionError::Fetch(_) => exit_code::FETCH,
            SessionError::Output(_) => exit_code::OUTPUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_miss_lists_missing_codes() {
        let miss = LookupMiss {
            missing: vec![Currency::Gbp, Currency::Ngn],
        };
        assert_eq!(
            miss.to_string(),
            "One or both currencies not found in API response (missing: GBP, NGN)"
        );
    }

    #[test]
    fn fatal_kinds_map_to_distinct_exit_codes() {
        let io = || std::io::Error::new(std::io::ErrorKind::Interrupted, "interrupted");
        let api = FetchError::Api {
            status: 401,
            description: "bad key".into(),
        };
        let codes = [
            ConfigError::MissingKey.exit_code(),
            SessionError::Form(io()).exit_code(),
            SessionError::Fetch(api).exit_code(),
            SessionError::Output(io()).exit_code(),
        ];
        assert_eq!(codes, [2, 3, 4, 5]);
        assert_eq!(SessionError::Confirm(io()).exit_code(), exit_code::FORM);
    }

    #[test]
    fn diagnostics_match_console_wording() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stdin closed");
        assert_eq!(
            SessionError::Form(io).to_string(),
            "Error running form: stdin closed"
        );
        assert_eq!(ConfigError::MissingKey.to_string(), "no key");
        assert_eq!(ValidationError.to_string(), "Please enter a valid number");
    }
}
