//! The update workflow.

use crate::address::{join_addresses, split_addresses, validate_addresses};
use crate::config::UpdateConfig;
use crate::detector::IpDetector;
use crate::error::Result;
use crate::hostname::Hostname;
use crate::providers::{DnsProvider, GoDaddyProvider, RecordUpdate};
use crate::resolver::{precheck, DnsResolver, Precheck, SystemResolver};
use std::fmt;
use std::net::IpAddr;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The provider accepted the new record set.
    Updated {
        hostname: String,
        addresses: Vec<IpAddr>,
    },
    /// DNS already publishes the target address; nothing was sent.
    Unchanged { hostname: String, address: IpAddr },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Updated {
                hostname,
                addresses,
            } => write!(
                f,
                "IP address for \"{}\" set to \"{}\".",
                hostname,
                join_addresses(addresses)
            ),
            Outcome::Unchanged { hostname, address } => {
                write!(f, "\"{}\" already has IP address \"{}\".", hostname, address)
            }
        }
    }
}

/// Runs one update of one hostname.
pub struct Updater {
    config: UpdateConfig,
    detector: IpDetector,
    resolver: Box<dyn DnsResolver>,
    provider: Box<dyn DnsProvider>,
}

impl Updater {
    /// Wire up the system resolver and the GoDaddy API for `config`.
    pub fn new(config: UpdateConfig) -> Result<Self> {
        let detector = IpDetector::with_endpoints(
            config.ipv4_lookup_url.clone(),
            config.ipv6_lookup_url.clone(),
        )?;
        let provider =
            GoDaddyProvider::with_base_url(config.credentials.clone(), config.api_url.clone())?;

        Ok(Self::with_components(
            config,
            detector,
            Box::new(SystemResolver),
            Box::new(provider),
        ))
    }

    /// Create with explicit collaborators.
    pub fn with_components(
        config: UpdateConfig,
        detector: IpDetector,
        resolver: Box<dyn DnsResolver>,
        provider: Box<dyn DnsProvider>,
    ) -> Self {
        Self {
            config,
            detector,
            resolver,
            provider,
        }
    }

    /// Execute the workflow: parse, resolve, validate, pre-check, update.
    pub async fn run(&self) -> Result<Outcome> {
        let config = &self.config;
        let hostname = Hostname::parse(&config.hostname)?;

        let candidates = match &config.addresses {
            Some(explicit) => split_addresses(explicit),
            None => {
                let detected = self.detector.detect(config.record_type).await?;
                println!("Automatically obtained IP address \"{}\".", detected);
                vec![detected]
            }
        };

        let addresses = validate_addresses(&candidates, config.record_type)?;

        if let (false, [target]) = (config.force, addresses.as_slice()) {
            let check = precheck(
                self.resolver.as_ref(),
                &hostname,
                config.record_type,
                *target,
            )
            .await?;

            if let Precheck::AlreadyCurrent(address) = check {
                return Ok(Outcome::Unchanged {
                    hostname: hostname.fqdn().to_string(),
                    address,
                });
            }
        } else {
            tracing::debug!("Skipping pre-check lookup of {}", hostname);
        }

        let update = RecordUpdate::new(
            hostname.clone(),
            config.record_type,
            &addresses,
            config.ttl,
        );
        self.provider.replace_records(&update).await?;
        tracing::info!(
            "{} accepted {} {} record(s) for {}",
            self.provider.name(),
            addresses.len(),
            config.record_type,
            hostname
        );

        Ok(Outcome::Updated {
            hostname: hostname.fqdn().to_string(),
            addresses,
        })
    }
}
