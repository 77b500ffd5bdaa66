//! # godaddy-ddns
//!
//! Keep a GoDaddy DNS `A` or `AAAA` record pointed at the current public IP
//! address. Meant to be run periodically from cron or a systemd timer.
//!
//! ## Workflow
//!
//! - Split the hostname into record name and zone (`example.com` updates `@`)
//! - Use the `--ip` addresses, or ask icanhazip for the public address
//! - Validate every address against the record type
//! - Skip the update when DNS already returns the address (unless `--force`)
//! - PUT the record set to the GoDaddy API
//!
//! ## Usage
//!
//! ```bash
//! # Update home.example.com with the detected IPv4 address
//! godaddy-ddns home.example.com --key KEY --secret SECRET
//!
//! # Update the apex AAAA record with explicit addresses
//! godaddy-ddns example.com --type AAAA --ip 2001:db8::1,2001:db8::2
//!
//! # Read arguments from a file, one per line
//! godaddy-ddns %godaddy-ddns.config
//! ```

pub mod address;
pub mod config;
pub mod detector;
pub mod error;
pub mod hostname;
pub mod providers;
pub mod resolver;
pub mod updater;

pub use config::{Credentials, RecordType, UpdateConfig};
pub use detector::IpDetector;
pub use error::{DdnsError, Result};
pub use hostname::Hostname;
pub use updater::{Outcome, Updater};
