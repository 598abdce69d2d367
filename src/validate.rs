// src/validate.rs
//! Heuristic filter deciding whether a split token looks like a class name.
//!
//! This is deliberately loose: it only rejects template syntax and stray
//! punctuation, and lets anything else through.

use regex::Regex;
use std::sync::LazyLock;

/// Tokens matching any of these (anchored at the start) are template noise.
const REJECT_PATTERNS: &[&str] = &[
    r"^[!=<>]+$",           // comparison operators: !=, ==, <, >
    r"^\{[%{]",             // interpolation / control opener: {{, {%
    r"^if$|^else$|^endif$", // template keywords
    r"^\([^)]*$",           // unclosed paren group
    r"^lang_$",             // truncated variable prefix
    r"^\s*$",               // blank
];

static REJECT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    REJECT_PATTERNS
        .iter()
        .map(|p| Regex::new(p).unwrap_or_else(|_| panic!("Invalid Regex")))
        .collect()
});

static HAS_ALNUM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9]").unwrap_or_else(|_| panic!("Invalid Regex")));

// text-sm, -translate-x-1/2, hover:text-white, w-1/2, !important
static LEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9!-]").unwrap_or_else(|_| panic!("Invalid Regex")));

/// Returns true if `token` should be kept as a class name.
#[must_use]
pub fn is_valid_class(token: &str) -> bool {
    if REJECT_RES.iter().any(|re| re.is_match(token)) {
        return false;
    }
    HAS_ALNUM_RE.is_match(token) && LEADING_RE.is_match(token)
}
