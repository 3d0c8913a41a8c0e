//! Splice sync tool
//!
//! Talks to Candlepin on behalf of Katello and translates records between
//! Candlepin, Katello, Spacewalk and RCS.
//!
//! Usage:
//!   splice-tool --config /etc/splice/splice-tool.toml pools
//!   splice-tool rcs-usage katello-consumers.json
//!
//! Results are printed to stdout as JSON; records that could not be
//! translated are logged and skipped.

use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use splice_candlepin::CandlepinClient;
use splice_tool::{
    consumers_from_file, entitlements_for_rcs, rcs_usage_from_file, report_rejected,
    to_pretty_json, ToolConfig,
};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "splice-tool")]
#[command(about = "Candlepin to Katello/RCS synchronization tool")]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "/etc/splice/splice-tool.toml")]
    config: PathBuf,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List Candlepin owners
    Owners,
    /// Fetch and translate products
    Products,
    /// Fetch and translate pools
    Pools,
    /// Fetch the rules script
    Rules,
    /// List consumers
    Consumers {
        /// Only consumers of this owner
        #[arg(long)]
        owner: Option<String>,
    },
    /// List a consumer's entitlements as RCS records
    Entitlements {
        uuid: String,
    },
    /// Translate a file of Katello consumers into RCS usage records
    RcsUsage {
        file: PathBuf,
    },
    /// Translate a file of Spacewalk system details into consumers
    Systems {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let config = ToolConfig::load(&args.config).context("Failed to load configuration")?;

    let output = match args.command {
        Command::RcsUsage { file } => {
            let batch = rcs_usage_from_file(&config, &file)
                .with_context(|| format!("Failed to translate {:?}", file))?;
            report_rejected(&batch.rejected);
            to_pretty_json(&batch.records)?
        }
        Command::Systems { file } => {
            let batch = consumers_from_file(&config, &file)
                .with_context(|| format!("Failed to translate {:?}", file))?;
            report_rejected(&batch.rejected);
            to_pretty_json(&batch.records)?
        }
        Command::Owners => {
            let owners = connect(&config)?.get_owners().await.context("Failed to list owners")?;
            to_pretty_json(&owners)?
        }
        Command::Products => {
            let batch = connect(&config)?
                .get_products()
                .await
                .context("Failed to fetch products")?;
            to_pretty_json(&batch.records)?
        }
        Command::Pools => {
            let batch = connect(&config)?.get_pools().await.context("Failed to fetch pools")?;
            to_pretty_json(&batch.records)?
        }
        Command::Rules => {
            let rules = connect(&config)?.get_rules().await.context("Failed to fetch rules")?;
            info!("Rules version {} ({} bytes)", rules.version, rules.data.len());
            String::from_utf8_lossy(&rules.data).into_owned()
        }
        Command::Consumers { owner } => {
            let consumers = connect(&config)?
                .get_consumers(owner.as_deref())
                .await
                .context("Failed to list consumers")?;
            to_pretty_json(&consumers)?
        }
        Command::Entitlements { uuid } => {
            let entitlements = connect(&config)?
                .get_entitlements(&uuid)
                .await
                .with_context(|| format!("Failed to list entitlements for {uuid}"))?;
            let batch = entitlements_for_rcs(&entitlements);
            report_rejected(&batch.rejected);
            to_pretty_json(&batch.records)?
        }
    };

    println!("{output}");
    Ok(())
}

fn connect(config: &ToolConfig) -> Result<CandlepinClient> {
    let client = CandlepinClient::new(config.candlepin.clone())
        .context("Failed to build Candlepin client")?;
    info!("Using Candlepin at {}", client.config().base_url);
    Ok(client)
}
