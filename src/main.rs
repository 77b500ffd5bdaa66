//! godaddy-ddns - update a GoDaddy DNS A/AAAA record.

use clap::{ArgAction, Parser};
use godaddy_ddns::config::{
    expand_response_files, Credentials, RecordType, UpdateConfig, DEFAULT_API_URL, DEFAULT_TTL,
};
use godaddy_ddns::{Outcome, Updater};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "godaddy-ddns")]
#[command(about = "Update GoDaddy DNS \"A/AAAA\" Record.")]
#[command(after_help = "GoDaddy customers can obtain values for the KEY and SECRET arguments by \
creating a production key at https://developer.godaddy.com/keys/.\n\n\
Arguments may be read from a FILE, one per line, by giving the argument \"%FILE\". \
It is recommended to supply KEY and SECRET this way rather than on the command line.")]
#[command(version)]
struct Cli {
    /// DNS fully-qualified host name with an A or AAAA record. A bare domain
    /// name (one period) updates the record for @.
    hostname: String,

    /// DNS address(es), comma separated (defaults to the public WAN address)
    #[arg(long)]
    ip: Option<String>,

    /// DNS record type: A for IPv4, AAAA for IPv6
    #[arg(long = "type", value_enum, default_value_t = RecordType::A)]
    record_type: RecordType,

    /// GoDaddy production key ($NAME reads environment variable NAME)
    #[arg(long, default_value = "")]
    key: String,

    /// GoDaddy production secret ($NAME reads environment variable NAME)
    #[arg(long, default_value = "")]
    secret: String,

    /// DNS TTL in seconds
    #[arg(long, default_value_t = DEFAULT_TTL, value_parser = clap::value_parser!(u32).range(1..))]
    ttl: u32,

    /// Update even if DNS already returns the address
    #[arg(long)]
    force: bool,

    /// GoDaddy API base URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> UpdateConfig {
        let mut config = UpdateConfig::new(self.hostname);
        config.addresses = self.ip;
        config.record_type = self.record_type;
        config.credentials = Credentials::new(&self.key, &self.secret);
        config.ttl = self.ttl;
        config.force = self.force;
        config.api_url = self.api_url;
        config
    }
}

fn init_logging(verbose: u8) -> anyhow::Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match expand_response_files(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let cli = Cli::parse_from(args);

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let config = cli.into_config();
    tracing::debug!("Running with {:?}", config);

    match run(config).await {
        Ok(outcome) => {
            println!("{}", outcome);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(config: UpdateConfig) -> godaddy_ddns::Result<Outcome> {
    let updater = Updater::new(config)?;
    updater.run().await
}
