//! User configuration location for syntax-select.
//!
//! User config location: $XDG_CONFIG_HOME/syntax-select/syntax-select.toml
//! Fallback: the platform config directory reported by `dirs`.

use std::path::PathBuf;

const APP_DIR: &str = "syntax-select";
const CONFIG_FILE: &str = "syntax-select.toml";

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/syntax-select/syntax-select.toml
/// 2. Otherwise: `dirs::config_dir()`/syntax-select/syntax-select.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return Some(PathBuf::from(xdg_config).join(APP_DIR).join(CONFIG_FILE));
    }

    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}
