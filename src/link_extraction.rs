//! # Link Extraction Module
//!
//! This module provides the text processing core of the bot: scanning message
//! text for Telegram invite links and classifying each match.
//!
//! ## Features
//!
//! - Public chat links (`t.me/username`) detected via a username pattern
//! - Private invite links (`t.me/+hash`, `t.me/joinchat/hash`) detected via a
//!   separate pattern
//! - Two independent scan passes: all public matches are returned first, then
//!   all private matches, each group in left-to-right order
//! - Case/whitespace-normalized dedup keys for prior-seen comparison

use log::{debug, trace};
use regex::Regex;

use crate::link_patterns::{PRIVATE_LINK_REGEX, PUBLIC_LINK_REGEX};

/// Classification of a detected invite link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// Public chat or channel reachable by username
    Public,
    /// Private chat reachable only through an invite hash
    Private,
}

impl LinkKind {
    /// Uppercase tag used in the export rendering
    pub fn label(&self) -> &'static str {
        match self {
            LinkKind::Public => "PUBLIC",
            LinkKind::Private => "PRIVATE",
        }
    }
}

/// Represents a detected invite link in text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedLink {
    /// The raw matched substring, not normalized (e.g., "t.me/somechat")
    pub url: String,
    /// Whether the link points at a public or private chat
    pub kind: LinkKind,
}

impl ExtractedLink {
    /// Normalized form of the url used for prior-seen membership tests.
    ///
    /// Trimmed and lowercased, so `T.me/Chat` and `t.me/chat` collapse to the
    /// same key while the stored url keeps its original spelling.
    pub fn dedup_key(&self) -> String {
        normalize_dedup_key(&self.url)
    }
}

/// Normalize a raw url into its dedup key
pub fn normalize_dedup_key(url: &str) -> String {
    url.trim().to_lowercase()
}

/// Invite link detector wrapping the compiled public/private patterns
pub struct LinkExtractor {
    public_pattern: Regex,
    private_pattern: Regex,
}

impl LinkExtractor {
    /// Create a new extractor with the default patterns
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invitelinks::link_extraction::LinkExtractor;
    ///
    /// let extractor = LinkExtractor::new();
    /// assert!(extractor.has_links("join t.me/somechat now"));
    /// ```
    pub fn new() -> Self {
        Self {
            public_pattern: PUBLIC_LINK_REGEX.clone(),
            private_pattern: PRIVATE_LINK_REGEX.clone(),
        }
    }

    /// Create an extractor with custom public/private patterns
    ///
    /// # Arguments
    ///
    /// * `public` - Regex for the public username link form
    /// * `private` - Regex for the private invite link form
    pub fn with_patterns(public: &str, private: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            public_pattern: Regex::new(public)?,
            private_pattern: Regex::new(private)?,
        })
    }

    /// Find all invite links in the given text
    ///
    /// Runs the public pass first and the private pass second; the returned
    /// list is public-matches-first then private-matches-first, each group in
    /// left-to-right order. It is NOT globally sorted by position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use invitelinks::link_extraction::{LinkExtractor, LinkKind};
    ///
    /// let extractor = LinkExtractor::new();
    /// let links = extractor.extract("join t.me/abcde now");
    ///
    /// assert_eq!(links.len(), 1);
    /// assert_eq!(links[0].url, "t.me/abcde");
    /// assert_eq!(links[0].kind, LinkKind::Public);
    /// ```
    pub fn extract(&self, text: &str) -> Vec<ExtractedLink> {
        let mut links = Vec::new();

        for m in self.public_pattern.find_iter(text) {
            // A username directly followed by `/` or `+` is a message link or
            // a private invite, not a public chat link.
            let rest = &text[m.end()..];
            if rest.starts_with('/') || rest.starts_with('+') {
                trace!("Skipping public candidate '{}' (trailing '/' or '+')", m.as_str());
                continue;
            }
            links.push(ExtractedLink {
                url: m.as_str().to_string(),
                kind: LinkKind::Public,
            });
        }

        for m in self.private_pattern.find_iter(text) {
            links.push(ExtractedLink {
                url: m.as_str().to_string(),
                kind: LinkKind::Private,
            });
        }

        debug!("Found {} invite links in text", links.len());
        links
    }

    /// Check if the given text contains any invite links
    pub fn has_links(&self, text: &str) -> bool {
        !self.extract(text).is_empty()
    }
}

impl Default for LinkExtractor {
    fn default() -> Self {
        Self::new()
    }
}
