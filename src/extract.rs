// src/extract.rs
//! Pulls class-name tokens out of raw template text.
//!
//! Two contexts are recognised:
//! - `class="..."` / `class='...'` attributes, with `{{ ... }}` and
//!   `{% ... %}` spans blanked out first
//! - `classList.add(...)`, `classList.remove(...)`, `classList.toggle(...)`
//!   called with a single quoted string

use crate::error::{Result, SafelistError};
use crate::validate::is_valid_class;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

const CLASS_ATTR_PATTERN: &str = r#"class\s*=\s*["']([^"']*)["']"#;
const INTERPOLATION_PATTERN: &str = r"\{\{[^}]+\}\}";
const CONTROL_PATTERN: &str = r"\{%[^%]+%\}";
const CLASS_LIST_PATTERN: &str = r#"classList\.(add|remove|toggle)\(["']([^"']+)["']\)"#;

static CLASS_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLASS_ATTR_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static INTERPOLATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INTERPOLATION_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static CONTROL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CONTROL_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));
static CLASS_LIST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CLASS_LIST_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Extracts every valid class token from `content`.
#[must_use]
pub fn extract_classes(content: &str) -> BTreeSet<String> {
    let mut classes = BTreeSet::new();
    collect_valid(&mut classes, class_attr_candidates(content));
    collect_valid(&mut classes, class_list_candidates(content));
    classes
}

/// Reads a template as UTF-8 and extracts its class tokens.
///
/// # Errors
/// Returns `SafelistError::Io` (carrying `path`) if the file cannot be read
/// or is not valid UTF-8.
pub fn extract_file(path: &Path) -> Result<BTreeSet<String>> {
    let content = fs::read_to_string(path).map_err(|source| SafelistError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(extract_classes(&content))
}

fn collect_valid<I>(into: &mut BTreeSet<String>, candidates: I)
where
    I: IntoIterator<Item = String>,
{
    into.extend(candidates.into_iter().filter(|c| is_valid_class(c)));
}

fn class_attr_candidates(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for caps in CLASS_ATTR_RE.captures_iter(content) {
        let Some(value) = caps.get(1) else { continue };
        let stripped = strip_template_spans(value.as_str());
        out.extend(stripped.split_whitespace().map(str::to_string));
    }
    out
}

fn class_list_candidates(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    for caps in CLASS_LIST_RE.captures_iter(content) {
        let Some(arg) = caps.get(2) else { continue };
        out.extend(arg.as_str().split_whitespace().map(str::to_string));
    }
    out
}

/// Replaces interpolation and control spans with a single space.
fn strip_template_spans(value: &str) -> String {
    let without_vars = INTERPOLATION_RE.replace_all(value, " ");
    CONTROL_RE.replace_all(&without_vars, " ").into_owned()
}
