//! Public IP detection.

use crate::config::{RecordType, DEFAULT_IPV4_LOOKUP_URL, DEFAULT_IPV6_LOOKUP_URL};
use crate::error::{DdnsError, Result};

/// Asks a public IP echo service for the caller's address.
pub struct IpDetector {
    client: reqwest::Client,
    ipv4_url: String,
    ipv6_url: String,
}

impl IpDetector {
    /// Create a new IP detector using icanhazip.
    pub fn new() -> Result<Self> {
        Self::with_endpoints(
            DEFAULT_IPV4_LOOKUP_URL.to_string(),
            DEFAULT_IPV6_LOOKUP_URL.to_string(),
        )
    }

    /// Create a new IP detector with custom endpoints.
    pub fn with_endpoints(ipv4_url: String, ipv6_url: String) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            ipv4_url,
            ipv6_url,
        })
    }

    /// Endpoint queried for `record_type`.
    pub fn endpoint(&self, record_type: RecordType) -> &str {
        match record_type {
            RecordType::A => &self.ipv4_url,
            RecordType::Aaaa => &self.ipv6_url,
        }
    }

    /// Fetch the public address for `record_type`.
    ///
    /// The trimmed response body is returned unparsed; validation is left to
    /// the caller so a bogus answer is reported like any other bad address.
    pub async fn detect(&self, record_type: RecordType) -> Result<String> {
        let url = self.endpoint(record_type);
        let lookup_failed = |reason: String| DdnsError::IpLookupFailed {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| lookup_failed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(lookup_failed(format!("HTTP {}", response.status())));
        }

        let text = response
            .text()
            .await
            .map_err(|e| lookup_failed(e.to_string()))?;
        let address = text.trim().to_string();

        tracing::debug!("Detected {} address {} from {}", record_type, address, url);
        Ok(address)
    }
}
