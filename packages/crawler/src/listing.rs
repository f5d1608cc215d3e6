//! Listing parsing and line classification.

use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

lazy_static! {
    /// `<key-id>=<key-name>` lines in a public-keys listing.
    static ref KEY_PAIR_LINE: Regex = Regex::new(r"^(\d+)=").unwrap();
}

/// The classification of one listing line.
///
/// Each line is classified exactly once before the walker dispatches on
/// it, which keeps the three shapes testable without any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEntry {
    /// Line ends in `/`: fetch the child listing and recurse. `name` has
    /// the trailing separator stripped.
    Directory { name: String },
    /// `<digits>=` line under `public-keys/`: the listing embeds an index
    /// and a display name, but only the index resolves as a child path.
    KeyPair { key_id: String },
    /// Anything else: the child body is a terminal value.
    Leaf { name: String },
}

/// Split a listing body into entry lines.
///
/// Boundaries are CRLF or bare LF. Lines empty after the split carry no
/// entry and are dropped; whitespace-only lines are kept verbatim, since
/// trimming would silently change recorded keys.
pub fn lines(listing: &str) -> impl Iterator<Item = &str> {
    listing.lines().filter(|line| !line.is_empty())
}

/// Classify one listing line against its resolved child URI.
pub fn classify(line: &str, child: &Url) -> ListingEntry {
    if let Some(name) = line.strip_suffix('/') {
        return ListingEntry::Directory {
            name: name.to_string(),
        };
    }

    if child.path().contains("public-keys/") {
        if let Some(captures) = KEY_PAIR_LINE.captures(line) {
            return ListingEntry::KeyPair {
                key_id: captures[1].to_string(),
            };
        }
    }

    ListingEntry::Leaf {
        name: line.to_string(),
    }
}
