//! # metacrawl-cli
//!
//! Command-line front end for the instance-metadata harvester.
//!
//! Wires a transport and a loot directory together, runs the harvest, and
//! reports where the artifact landed.
//!
//! ## Usage
//!
//! ```bash
//! # Crawl the default EC2 endpoint via curl on the local shell
//! metacrawl
//!
//! # Speak HTTP directly and dump the collected document
//! metacrawl --transport http --verbose
//!
//! # Store artifacts somewhere other than the working directory
//! metacrawl --loot-dir /tmp/loot
//! ```

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use metacrawl_crawler::{harvest, HarvestOptions, DEFAULT_TARGET_URI};
use metacrawl_loot::DiskLootStore;
use metacrawl_transport::{CurlFetcher, HttpFetcher, ShellRunner};

/// How to reach the metadata endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// Shell out to `curl` (works through a captured shell)
    Curl,
    /// Speak HTTP directly from this process
    Http,
}

/// Crawl an instance-metadata service and store the result as loot.
#[derive(Parser, Debug)]
#[command(name = "metacrawl")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Root metadata URI to crawl
    #[arg(long, default_value = DEFAULT_TARGET_URI)]
    pub target_uri: String,

    /// Directory artifacts are stored under
    #[arg(long, default_value = ".")]
    pub loot_dir: PathBuf,

    /// Transport used to reach the endpoint
    #[arg(long, value_enum, default_value_t = Transport::Curl)]
    pub transport: Transport,

    /// Dump the collected document to stdout
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Harvest(#[from] metacrawl_crawler::Error),

    #[error("loot error: {0}")]
    Loot(#[from] metacrawl_loot::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn run(args: Args) -> Result<(), Error> {
    init_logging(args.verbose);

    let mut loot = DiskLootStore::new(args.loot_dir.clone())?;
    let options = HarvestOptions {
        target_uri: args.target_uri.clone(),
    };

    let outcome = match args.transport {
        Transport::Curl => harvest(&mut CurlFetcher::new(ShellRunner), &mut loot, &options)?,
        Transport::Http => harvest(&mut HttpFetcher::new(), &mut loot, &options)?,
    };

    if args.verbose {
        println!("{}", outcome.tree.to_json_pretty()?);
    }
    println!(
        "Saved AWS EC2 instance metadata to {}",
        outcome.artifact.display()
    );

    Ok(())
}

fn init_logging(verbose: bool) {
    // Verbose raises the default so per-fetch debug lines are visible;
    // RUST_LOG still wins when set.
    let default_filter = if verbose { "debug" } else { "info" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    let _ = env_logger::Builder::from_env(env).try_init();
}
