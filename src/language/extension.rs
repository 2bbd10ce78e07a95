//! Extension-based language detection.
//!
//! Used by hosts that only know a file path. The extension is extracted and
//! passed through the alias table, so `.mjs` resolves the same way as a `mjs`
//! language identifier would.

use std::path::Path;

/// Extract the extension from a path, without the leading dot.
///
/// Hidden files without an extension (e.g. `.eslintrc`) yield `None`.
pub fn detect_from_extension(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let dot_pos = file_name.rfind('.')?;
    if dot_pos == 0 {
        return None;
    }
    let ext = &file_name[dot_pos + 1..];
    (!ext.is_empty()).then(|| ext.to_ascii_lowercase())
}
