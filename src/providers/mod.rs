//! DNS provider implementations.

mod godaddy;

#[cfg(test)]
mod tests;

pub use godaddy::GoDaddyProvider;

use crate::config::RecordType;
use crate::error::Result;
use crate::hostname::Hostname;
use async_trait::async_trait;
use serde::Serialize;
use std::net::IpAddr;

/// One entry of a record set replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DnsRecord {
    pub data: String,
    pub ttl: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
}

/// Replace the `record_type` records of `hostname` with `records`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub hostname: Hostname,
    pub record_type: RecordType,
    pub records: Vec<DnsRecord>,
}

impl RecordUpdate {
    /// Build an update with one record per address, in order.
    pub fn new(
        hostname: Hostname,
        record_type: RecordType,
        addresses: &[IpAddr],
        ttl: u32,
    ) -> Self {
        let records = addresses
            .iter()
            .map(|ip| DnsRecord {
                data: ip.to_string(),
                ttl,
                name: hostname.record_name().to_string(),
                record_type,
            })
            .collect();

        Self {
            hostname,
            record_type,
            records,
        }
    }
}

/// Trait for DNS providers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &'static str;

    /// Replace the record set described by `update`.
    async fn replace_records(&self, update: &RecordUpdate) -> Result<()>;
}
