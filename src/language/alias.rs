//! Language alias normalization.
//!
//! Hosts report language identifiers in different spellings. This module maps
//! the common short forms onto the canonical identifiers used by the dispatch
//! table.

/// Normalize common language aliases to canonical language identifiers.
///
/// # Examples
/// - `ts` -> `typescript`
/// - `jsx` -> `javascriptreact`
/// - `mjs` -> `javascript`
///
/// Non-alias identifiers return `None` to indicate no normalization needed.
pub fn normalize_alias(identifier: &str) -> Option<&'static str> {
    match identifier {
        "ts" | "mts" | "cts" => Some("typescript"),
        "tsx" => Some("typescriptreact"),
        "js" | "mjs" | "cjs" => Some("javascript"),
        "jsx" => Some("javascriptreact"),
        _ => None,
    }
}
