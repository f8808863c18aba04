//! # Link Store Module
//!
//! In-memory accumulator of accepted invite links. The store enforces the
//! dedup invariant (one entry per normalized url across the whole session)
//! and renders the plain-text export artifact. Nothing here is persisted;
//! entries live until the process exits or the operator clears the store.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::debug;

use crate::link_extraction::{ExtractedLink, LinkKind};

/// An accepted invite link plus its acceptance timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredLink {
    /// The raw matched url, original spelling preserved
    pub url: String,
    /// Public/private classification at extraction time
    pub kind: LinkKind,
    /// When the dispatcher accepted the link
    pub accepted_at: DateTime<Utc>,
}

/// Session-lifetime accumulator of previously accepted links
#[derive(Debug, Default)]
pub struct LinkStore {
    entries: Vec<StoredLink>,
    seen_keys: HashSet<String>,
}

impl LinkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a dedup key is already present
    pub fn contains(&self, key: &str) -> bool {
        self.seen_keys.contains(key)
    }

    /// Insert a link stamped with the current time.
    ///
    /// Returns `false` and leaves the store unchanged when an entry with the
    /// same dedup key was already accepted earlier in the session.
    pub fn insert(&mut self, link: ExtractedLink) -> bool {
        let key = link.dedup_key();
        if !self.seen_keys.insert(key) {
            debug!(url = %link.url, "Duplicate link skipped");
            return false;
        }

        self.entries.push(StoredLink {
            url: link.url,
            kind: link.kind,
            accepted_at: Utc::now(),
        });
        true
    }

    /// Accepted links in insertion order
    pub fn entries(&self) -> &[StoredLink] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every accepted link (operator-initiated, not part of the pipeline)
    pub fn clear(&mut self) {
        self.entries.clear();
        self.seen_keys.clear();
    }

    /// Render the accumulated links as the plain-text export artifact,
    /// one `[TYPE] url` line per entry in insertion order.
    pub fn render_export(&self) -> String {
        let mut result = String::new();

        for entry in &self.entries {
            result.push_str(&format!("[{}] {}\n", entry.kind.label(), entry.url));
        }

        result
    }
}
