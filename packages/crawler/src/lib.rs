//! Recursive enumeration of an instance-metadata tree.
//!
//! Cloud instance-metadata services expose host configuration as a
//! pseudo-filesystem of newline-delimited listings and plain-text leaves.
//! This crate walks that hierarchy depth-first and mirrors it as a
//! [`MetadataNode`] tree:
//!
//! - a listing line ending in `/` is a directory, fetched and recursed
//!   into;
//! - a `<digits>=<name>` line under `public-keys/` is the one endpoint
//!   shape where the listing embeds both an index and a display name, and
//!   only the index resolves as a child path;
//! - every other line is a leaf whose value is the literal response body.
//!
//! [`harvest`] wraps the walk with the preflight gates and persists the
//! collected tree as a JSON artifact through a
//! [`LootStore`](metacrawl_loot::LootStore).

mod error;
mod harvest;
mod listing;
mod tree;
mod walk;

pub use error::Error;
pub use harvest::{harvest, Harvest, HarvestOptions, DEFAULT_TARGET_URI};
pub use listing::{classify, lines, ListingEntry};
pub use tree::MetadataNode;
pub use walk::enumerate;
