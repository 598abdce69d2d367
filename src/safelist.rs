// src/safelist.rs
use std::collections::BTreeSet;
use std::fmt::Write;

/// Rendering of an empty class set.
pub const EMPTY_SAFELIST: &str = "safelist: []";

/// Renders the class set as a `safelist: [...]` block for `tailwind.config.js`.
///
/// `BTreeSet` iterates in byte order, which for UTF-8 is code-point order, so
/// the output is identical no matter which file contributed a token first.
#[must_use]
pub fn format_safelist(classes: &BTreeSet<String>) -> String {
    if classes.is_empty() {
        return EMPTY_SAFELIST.to_string();
    }

    let mut out = String::from("safelist: [\n");
    for class in classes {
        let _ = writeln!(out, "    '{class}',");
    }
    out.push(']');
    out
}
