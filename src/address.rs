//! Target address parsing and validation.

use crate::config::RecordType;
use crate::error::{DdnsError, Result};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Split a comma-separated `--ip` value into its entries.
pub fn split_addresses(value: &str) -> Vec<String> {
    value.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parse a single address for `record_type`.
pub fn parse_address(address: &str, record_type: RecordType) -> Result<IpAddr> {
    let parsed = match record_type {
        RecordType::A => address.parse::<Ipv4Addr>().map(IpAddr::V4).ok(),
        RecordType::Aaaa => address.parse::<Ipv6Addr>().map(IpAddr::V6).ok(),
    };

    parsed.ok_or_else(|| DdnsError::InvalidAddress {
        address: address.to_string(),
        record_type,
    })
}

/// Validate every address; the first invalid entry fails the whole set.
pub fn validate_addresses<S: AsRef<str>>(
    addresses: &[S],
    record_type: RecordType,
) -> Result<Vec<IpAddr>> {
    addresses
        .iter()
        .map(|a| parse_address(a.as_ref(), record_type))
        .collect()
}

/// Render an address set the way it is reported to the user.
pub fn join_addresses(addresses: &[IpAddr]) -> String {
    addresses
        .iter()
        .map(|ip| ip.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
