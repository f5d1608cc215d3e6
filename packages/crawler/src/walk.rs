//! Depth-first walk of the metadata hierarchy.

use std::collections::BTreeMap;

use metacrawl_transport::Fetch;
use url::Url;

use crate::listing::{classify, lines, ListingEntry};
use crate::tree::MetadataNode;

/// Recursively enumerate the tree rooted at `base`, whose listing body is
/// already in hand.
///
/// Child fetches are best-effort: a child that cannot be retrieved is
/// recorded as an empty leaf and the walk continues, so partial metadata
/// still produces an artifact. Entries are inserted in listing order;
/// duplicate keys overwrite.
///
/// Termination relies on the service exposing a finite, acyclic path
/// hierarchy; a self-referential listing would recurse until the stack
/// runs out.
pub fn enumerate<F: Fetch>(fetcher: &mut F, base: &Url, listing: &str) -> MetadataNode {
    let mut entries = BTreeMap::new();

    for line in lines(listing) {
        let child = match base.join(&format!("./{}", line)) {
            Ok(child) => child,
            Err(err) => {
                log::warn!("Unresolvable entry {:?} under {}: {}", line, base, err);
                entries.insert(line.to_string(), MetadataNode::Leaf(String::new()));
                continue;
            }
        };

        match classify(line, &child) {
            ListingEntry::Directory { name } => {
                let body = fetch_best_effort(fetcher, &child);
                entries.insert(name, enumerate(fetcher, &child, &body));
            }
            ListingEntry::KeyPair { key_id } => match child.join(&format!("./{}/", key_id)) {
                Ok(key_url) => {
                    let body = fetch_best_effort(fetcher, &key_url);
                    entries.insert(key_id, enumerate(fetcher, &key_url, &body));
                }
                Err(err) => {
                    log::warn!("Unresolvable key-pair entry {:?} under {}: {}", line, base, err);
                    entries.insert(key_id, MetadataNode::empty());
                }
            },
            ListingEntry::Leaf { name } => {
                let body = fetch_best_effort(fetcher, &child);
                entries.insert(name, MetadataNode::Leaf(body));
            }
        }
    }

    MetadataNode::Directory(entries)
}

fn fetch_best_effort<F: Fetch>(fetcher: &mut F, url: &Url) -> String {
    match fetcher.fetch(url) {
        Ok(body) => body,
        Err(err) => {
            log::warn!("Fetch of {} failed: {}", url, err);
            String::new()
        }
    }
}
