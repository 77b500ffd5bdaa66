//! GoDaddy DNS provider.

use super::{DnsProvider, RecordUpdate};
use crate::config::{Credentials, RecordType, DEFAULT_API_URL};
use crate::error::{DdnsError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

const KEYS_HINT: &str = "Correct values can be obtained from https://developer.godaddy.com/keys/ \
                         and are ideally placed in a % file.";

/// GoDaddy DNS provider.
pub struct GoDaddyProvider {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl GoDaddyProvider {
    /// Create a new GoDaddy provider against the production API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, DEFAULT_API_URL.to_string())
    }

    /// Create with custom base URL (OTE environment or testing).
    pub fn with_base_url(credentials: Credentials, base_url: String) -> Result<Self> {
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            credentials,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn records_url(&self, update: &RecordUpdate) -> String {
        format!(
            "{}/v1/domains/{}/records/{}/{}",
            self.base_url,
            update.hostname.zone(),
            update.record_type,
            update.hostname.record_name()
        )
    }
}

/// Explain a rejected update.
pub(crate) fn failure_message(
    status: StatusCode,
    url: &str,
    hostname: &str,
    record_type: RecordType,
    credentials_supplied: bool,
) -> String {
    match status.as_u16() {
        400 => format!("GoDaddy API URL ({}) was malformed.", url),
        401 if credentials_supplied => {
            format!("--key or --secret option incorrect. {}", KEYS_HINT)
        }
        401 => format!("--key or --secret option missing. {}", KEYS_HINT),
        403 => format!(
            "customer identified by --key and --secret options denied permission. {}",
            KEYS_HINT
        ),
        404 => format!("{} not found at GoDaddy.", hostname),
        422 => format!(
            "\"{}\" has invalid domain or lacks {} record.",
            hostname, record_type
        ),
        429 => "too many requests to GoDaddy within brief period.".to_string(),
        503 => format!("\"{}\" is unavailable.", hostname),
        code => format!("GoDaddy API failure because \"{}\".", code),
    }
}

#[async_trait]
impl DnsProvider for GoDaddyProvider {
    fn name(&self) -> &'static str {
        "godaddy"
    }

    async fn replace_records(&self, update: &RecordUpdate) -> Result<()> {
        let url = self.records_url(update);
        let body = serde_json::to_string(&update.records)?;
        tracing::debug!("PUT {} ({} records)", url, update.records.len());

        let response = self
            .client
            .put(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, self.credentials.auth_header())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        tracing::debug!("GoDaddy rejected update with HTTP {}", status);
        Err(DdnsError::ProviderUpdateFailed {
            status: status.as_u16(),
            message: failure_message(
                status,
                response.url().as_str(),
                update.hostname.fqdn(),
                update.record_type,
                self.credentials.is_complete(),
            ),
        })
    }
}
