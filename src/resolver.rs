//! Pre-update DNS lookup.
//!
//! Before sending an update the current record is looked up through the
//! system resolver. An unknown name means the record is unset and the update
//! goes ahead; any other resolver failure stops the run.

use crate::config::RecordType;
use crate::error::{DdnsError, Result};
use crate::hostname::Hostname;
use async_trait::async_trait;
use dns_lookup::LookupErrorKind;
use std::net::IpAddr;

/// Why a lookup produced no address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    /// The name has no address of the requested family.
    NotFound,
    /// Any other resolver error.
    Other(String),
}

/// Forward lookup of a hostname.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DnsResolver: Send + Sync {
    /// First address of `hostname` matching `record_type`.
    async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> std::result::Result<IpAddr, LookupFailure>;
}

/// Resolver backed by the operating system's `getaddrinfo`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemResolver;

#[async_trait]
impl DnsResolver for SystemResolver {
    async fn lookup(
        &self,
        hostname: &str,
        record_type: RecordType,
    ) -> std::result::Result<IpAddr, LookupFailure> {
        let host = hostname.to_string();
        let addresses = tokio::task::spawn_blocking(move || {
            dns_lookup::getaddrinfo(Some(host.as_str()), None, None).map(|iter| {
                iter.filter_map(|info| info.ok())
                    .map(|info| info.sockaddr.ip())
                    .collect::<Vec<_>>()
            })
        })
        .await
        .map_err(|e| LookupFailure::Other(e.to_string()))?;

        let addresses = match addresses {
            Ok(addresses) => addresses,
            Err(e) => {
                return match e.kind() {
                    LookupErrorKind::NoName | LookupErrorKind::NoData => {
                        Err(LookupFailure::NotFound)
                    }
                    _ => Err(LookupFailure::Other(std::io::Error::from(e).to_string())),
                }
            }
        };

        addresses
            .into_iter()
            .find(|ip| match record_type {
                RecordType::A => ip.is_ipv4(),
                RecordType::Aaaa => ip.is_ipv6(),
            })
            .ok_or(LookupFailure::NotFound)
    }
}

/// Result of comparing the published record with the target address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precheck {
    /// The record is missing or differs; send the update.
    Proceed,
    /// The record already holds the target address.
    AlreadyCurrent(IpAddr),
}

/// Look up `hostname` and compare it with `target`.
pub async fn precheck(
    resolver: &dyn DnsResolver,
    hostname: &Hostname,
    record_type: RecordType,
    target: IpAddr,
) -> Result<Precheck> {
    match resolver.lookup(hostname.fqdn(), record_type).await {
        Ok(current) if current == target => Ok(Precheck::AlreadyCurrent(current)),
        Ok(current) => {
            tracing::info!("{} currently resolves to {}", hostname, current);
            Ok(Precheck::Proceed)
        }
        Err(LookupFailure::NotFound) => {
            tracing::info!("{} has no {} record yet", hostname, record_type);
            Ok(Precheck::Proceed)
        }
        Err(LookupFailure::Other(reason)) => Err(DdnsError::DnsPrecheck {
            hostname: hostname.fqdn().to_string(),
            reason,
        }),
    }
}
