//! Error types for godaddy-ddns.

use crate::config::RecordType;
use thiserror::Error;

/// Result type alias for godaddy-ddns.
pub type Result<T> = std::result::Result<T, DdnsError>;

/// DDNS error types.
#[derive(Error, Debug)]
pub enum DdnsError {
    /// The hostname has fewer than two labels.
    #[error("Hostname \"{0}\" is not a fully-qualified host name of form \"HOST.DOMAIN.TOP\".")]
    InvalidHostname(String),

    /// The public IP echo service could not be reached or refused.
    #[error("Unable to automatically obtain IP address from {url}: {reason}")]
    IpLookupFailed { url: String, reason: String },

    /// An address is not valid for the requested record type.
    #[error("\"{address}\" is not a valid {record_type} record.")]
    InvalidAddress {
        address: String,
        record_type: RecordType,
    },

    /// The pre-check lookup failed with something other than "name not found".
    #[error("DNS lookup of \"{hostname}\" failed: {reason}")]
    DnsPrecheck { hostname: String, reason: String },

    /// The provider rejected the update.
    #[error("Unable to set IP address: {message}")]
    ProviderUpdateFailed { status: u16, message: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error.
    #[error("Network error: {0}")]
    Network(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl DdnsError {
    /// Process exit status for this error.
    ///
    /// A failed pre-check lookup stops the run but is reported as a clean exit,
    /// unlike every other failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            DdnsError::DnsPrecheck { .. } => 0,
            _ => 1,
        }
    }
}

impl From<reqwest::Error> for DdnsError {
    fn from(e: reqwest::Error) -> Self {
        DdnsError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for DdnsError {
    fn from(e: serde_json::Error) -> Self {
        DdnsError::Serialization(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precheck_exits_cleanly() {
        let err = DdnsError::DnsPrecheck {
            hostname: "home.example.com".to_string(),
            reason: "temporary failure".to_string(),
        };
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn test_provider_failure_exits_nonzero() {
        let err = DdnsError::ProviderUpdateFailed {
            status: 429,
            message: "too many requests".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Unable to set IP address: too many requests");
    }

    #[test]
    fn test_invalid_address_message() {
        let err = DdnsError::InvalidAddress {
            address: "1.2.3".to_string(),
            record_type: RecordType::A,
        };
        assert_eq!(err.to_string(), "\"1.2.3\" is not a valid A record.");
    }
}
