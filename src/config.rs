//! Run configuration for godaddy-ddns.
//!
//! Everything the workflow needs is gathered once into an [`UpdateConfig`]
//! and handed to the [`Updater`](crate::updater::Updater) by value.

use crate::error::{DdnsError, Result};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// GoDaddy production API.
pub const DEFAULT_API_URL: &str = "https://api.godaddy.com";

/// Public IPv4 echo service.
pub const DEFAULT_IPV4_LOOKUP_URL: &str = "https://ipv4.icanhazip.com/";

/// Public IPv6 echo service.
pub const DEFAULT_IPV6_LOOKUP_URL: &str = "https://ipv6.icanhazip.com/";

/// Default record TTL in seconds.
pub const DEFAULT_TTL: u32 = 3600;

/// Arguments starting with this character name a response file.
pub const RESPONSE_FILE_PREFIX: char = '%';

const MAX_RESPONSE_FILE_DEPTH: usize = 16;

/// DNS record type being managed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
pub enum RecordType {
    /// IPv4 address record.
    #[value(name = "A")]
    #[serde(rename = "A")]
    A,
    /// IPv6 address record.
    #[value(name = "AAAA")]
    #[serde(rename = "AAAA")]
    Aaaa,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::Aaaa => "AAAA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// GoDaddy API key and secret.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    key: String,
    secret: String,
}

impl Credentials {
    /// Create credentials, expanding `$VAR` references from the environment.
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            key: resolve_env(key),
            secret: resolve_env(secret),
        }
    }

    /// Whether both the key and the secret were supplied.
    pub fn is_complete(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }

    /// Value of the `Authorization` header.
    pub fn auth_header(&self) -> String {
        format!("sso-key {}:{}", self.key, self.secret)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &redact(&self.key))
            .field("secret", &redact(&self.secret))
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<empty>"
    } else {
        "<redacted>"
    }
}

/// Immutable settings for a single run.
#[derive(Debug, Clone)]
pub struct UpdateConfig {
    /// Fully-qualified hostname to update.
    pub hostname: String,
    /// Explicit comma-separated address list (`--ip`).
    pub addresses: Option<String>,
    /// Record type to update.
    pub record_type: RecordType,
    /// Provider credentials.
    pub credentials: Credentials,
    /// Record TTL in seconds.
    pub ttl: u32,
    /// Skip the pre-check lookup.
    pub force: bool,
    /// Provider API base URL.
    pub api_url: String,
    pub ipv4_lookup_url: String,
    pub ipv6_lookup_url: String,
}

impl UpdateConfig {
    /// Configuration for `hostname` with every other setting at its default.
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            addresses: None,
            record_type: RecordType::A,
            credentials: Credentials::default(),
            ttl: DEFAULT_TTL,
            force: false,
            api_url: DEFAULT_API_URL.to_string(),
            ipv4_lookup_url: DEFAULT_IPV4_LOOKUP_URL.to_string(),
            ipv6_lookup_url: DEFAULT_IPV6_LOOKUP_URL.to_string(),
        }
    }

    /// IP echo endpoint matching the record type.
    pub fn lookup_url(&self) -> &str {
        match self.record_type {
            RecordType::A => &self.ipv4_lookup_url,
            RecordType::Aaaa => &self.ipv6_lookup_url,
        }
    }
}

/// Replace every `%FILE` argument with the lines of `FILE`, one argument per line.
///
/// Blank lines are skipped. Response files may themselves reference other
/// response files.
pub fn expand_response_files<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut expanded = Vec::new();
    for arg in args {
        expand_arg(arg, &mut expanded, 0)?;
    }
    Ok(expanded)
}

fn expand_arg(arg: String, out: &mut Vec<String>, depth: usize) -> Result<()> {
    let path = match arg.strip_prefix(RESPONSE_FILE_PREFIX) {
        Some(path) if !path.is_empty() => path,
        _ => {
            out.push(arg);
            return Ok(());
        }
    };

    if depth >= MAX_RESPONSE_FILE_DEPTH {
        return Err(DdnsError::Config(format!(
            "Argument file \"{}\" is nested too deeply",
            path
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        DdnsError::Config(format!("Unable to read argument file \"{}\": {}", path, e))
    })?;
    tracing::debug!("Expanding arguments from {}", path);

    for line in content.lines() {
        if line.trim().is_empty() {
            continue;
        }
        expand_arg(line.to_string(), out, depth + 1)?;
    }

    Ok(())
}

/// Resolve environment variable references (values starting with $).
pub(crate) fn resolve_env(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        std::env::var(var_name).unwrap_or_else(|_| {
            tracing::warn!("Environment variable {} not set", var_name);
            value.to_string()
        })
    } else {
        value.to_string()
    }
}
