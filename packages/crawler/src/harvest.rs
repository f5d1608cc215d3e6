//! Orchestration: preflight gates, enumeration, artifact persistence.

use std::path::PathBuf;

use metacrawl_loot::LootStore;
use metacrawl_transport::Fetch;
use url::Url;

use crate::error::Error;
use crate::listing;
use crate::tree::MetadataNode;
use crate::walk::enumerate;

/// Well-known EC2 instance-metadata base.
pub const DEFAULT_TARGET_URI: &str = "http://169.254.169.254/latest/meta-data/";

// Artifact naming, kept stable so downstream tooling can find the loot.
const LOOT_TYPE: &str = "aws.ec2.instance.metadata";
const LOOT_FILENAME: &str = "aws_ec2_instance_metadata.json";
const LOOT_INFO: &str = "AWS EC2 Instance Metadata";

/// Options for a harvest run.
#[derive(Debug, Clone)]
pub struct HarvestOptions {
    /// Root metadata URI to crawl.
    pub target_uri: String,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            target_uri: DEFAULT_TARGET_URI.to_string(),
        }
    }
}

/// A completed harvest: the enumerated tree and where it was stored.
#[derive(Debug)]
pub struct Harvest {
    pub tree: MetadataNode,
    pub artifact: PathBuf,
}

/// Crawl the metadata service and persist the result.
///
/// Three gates run before any enumeration, each fatal with no retry:
///
/// 1. the transport must pass its preflight;
/// 2. the target URI must parse;
/// 3. the root listing must contain a line starting with `instance-id`,
///    or the host is not on the expected cloud platform.
///
/// The root listing fetched by the identity gate doubles as the
/// enumeration input, so validation costs exactly one request. No
/// artifact is produced unless the run completes.
pub fn harvest<F: Fetch, L: LootStore>(
    fetcher: &mut F,
    loot: &mut L,
    options: &HarvestOptions,
) -> Result<Harvest, Error> {
    fetcher.preflight().map_err(|err| Error::Config {
        message: err.to_string(),
    })?;

    let base = Url::parse(&options.target_uri).map_err(|err| Error::Config {
        message: format!("invalid target URI {:?}: {}", options.target_uri, err),
    })?;

    let root_listing = fetcher.fetch(&base).map_err(|err| Error::Config {
        message: format!("root fetch of {} failed: {}", base, err),
    })?;
    if !listing::lines(&root_listing).any(|line| line.starts_with("instance-id")) {
        return Err(Error::EnvironmentMismatch {
            message: "host does not appear to be an AWS EC2 instance".to_string(),
        });
    }

    let tree = enumerate(fetcher, &base, &root_listing);
    let document = tree.to_json_pretty()?;

    let artifact = loot.store(LOOT_TYPE, &document, LOOT_FILENAME, LOOT_INFO)?;
    log::info!("Saved {} to {}", LOOT_INFO, artifact.display());

    Ok(Harvest { tree, artifact })
}
