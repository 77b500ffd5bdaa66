//! Hostname parsing into record name and zone.

use crate::error::{DdnsError, Result};
use std::fmt;

/// Record name used for the zone apex.
pub const APEX: &str = "@";

/// A hostname split into the record being managed and the zone it lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostname {
    fqdn: String,
    record_name: String,
    zone: String,
}

impl Hostname {
    /// Parse a fully-qualified hostname.
    ///
    /// `home.example.com` becomes record `home` in zone `example.com`. A bare
    /// `example.com` addresses the apex record `@`.
    pub fn parse(hostname: &str) -> Result<Self> {
        let labels: Vec<&str> = hostname.split('.').collect();

        let (record_name, zone) = match labels.as_slice() {
            [] | [_] => return Err(DdnsError::InvalidHostname(hostname.to_string())),
            [_, _] => (APEX.to_string(), labels.join(".")),
            [first, rest @ ..] => (first.to_string(), rest.join(".")),
        };

        Ok(Self {
            fqdn: hostname.to_string(),
            record_name,
            zone,
        })
    }

    /// The hostname as given.
    pub fn fqdn(&self) -> &str {
        &self.fqdn
    }

    pub fn record_name(&self) -> &str {
        &self.record_name
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fqdn)
    }
}
