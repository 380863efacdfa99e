//! Extraction of exported function names from C source text.
//!
//! This is a regex scan over raw text, not a parser: occurrences inside
//! comments and string literals are extracted too. The downstream build at
//! worst over-exports a symbol, which is harmless.

use std::collections::HashSet;
use std::sync::LazyLock;

use anyhow::Result;
use fancy_regex::Regex;

/// Exported entry points: `GAME_` followed by lowercase letters, digits, or
/// underscores, immediately before an opening paren. The paren is a
/// lookahead boundary, not part of the match.
static EXPORT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GAME_[a-z0-9_]+(?=\()").unwrap());

/// Scan `source` left to right and return each distinct exported name in
/// first-occurrence order.
pub fn exported_names(source: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    // fancy_regex::find_iter yields Result items (match-time errors such as
    // the backtracking limit).
    for mat in EXPORT_RE.find_iter(source) {
        let name = mat?.as_str().to_string();
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }
    Ok(names)
}
