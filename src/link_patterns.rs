//! # Link Patterns Module
//!
//! This module contains the regex patterns and constants used for invite-link detection.

use lazy_static::lazy_static;
use regex::Regex;

// Public chat links: optional scheme, a known short-link host, then a 5-32
// character username.
// The regex crate has no lookahead, so the "not followed by `/` or `+`" rule is
// enforced in code after matching (see link_extraction).
pub const PUBLIC_LINK_PATTERN: &str =
    r"(?i)\b(?:https?://)?(?:t\.me|telegram\.me|telegram\.dog)/[A-Za-z0-9_]{5,32}";

// Private invite links: same scheme/host prefix, then `+` or `joinchat/` and an
// invite hash of one or more characters.
pub const PRIVATE_LINK_PATTERN: &str =
    r"(?i)\b(?:https?://)?(?:t\.me|telegram\.me|telegram\.dog)/(?:\+|joinchat/)[A-Za-z0-9_-]+";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref PUBLIC_LINK_REGEX: Regex =
        Regex::new(PUBLIC_LINK_PATTERN).expect("Public link pattern should be valid");
    pub static ref PRIVATE_LINK_REGEX: Regex =
        Regex::new(PRIVATE_LINK_PATTERN).expect("Private link pattern should be valid");
}
