pub mod settings;
pub mod user;

pub use settings::{LanguageSettings, SelectSettings};
pub use user::user_config_path;

use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::analysis::StrategyOptions;
use crate::error::{SelectError, SelectResult};
use crate::language::SupportedLanguage;

impl SelectSettings {
    /// Resolve the strategy switches for `language`.
    ///
    /// Per-language values win over global ones; anything unset is off.
    pub fn options_for(&self, language: SupportedLanguage) -> StrategyOptions {
        let overrides = self.languages.get(language.id());
        let pick = |specific: Option<bool>, global: Option<bool>| {
            specific.or(global).unwrap_or(false)
        };
        StrategyOptions {
            expand_whitespace: pick(
                overrides.and_then(|o| o.expand_whitespace),
                self.expand_whitespace,
            ),
            exclude_brackets: pick(
                overrides.and_then(|o| o.exclude_brackets),
                self.exclude_brackets,
            ),
        }
    }
}

/// Parse settings from TOML text
pub fn parse_settings(text: &str) -> SelectResult<SelectSettings> {
    toml::from_str(text).map_err(|e| SelectError::config(e.to_string()))
}

/// Load settings from a TOML file
pub fn load_settings(path: &Path) -> SelectResult<SelectSettings> {
    let text = std::fs::read_to_string(path)?;
    parse_settings(&text)
}

/// Load the user-wide settings file, if there is one.
///
/// A missing file is not an error. A broken file is logged and ignored so
/// that selection keeps working with defaults.
pub fn load_user_settings() -> Option<SelectSettings> {
    let path = user_config_path()?;
    if !path.exists() {
        debug!(target: "syntax_select::config", "No user config at {}", path.display());
        return None;
    }
    match load_settings(&path) {
        Ok(settings) => Some(settings),
        Err(e) => {
            warn!(
                target: "syntax_select::config",
                "Ignoring user config {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

/// Merge two SelectSettings, preferring values from `primary` over `fallback`
pub fn merge_settings(
    fallback: Option<SelectSettings>,
    primary: Option<SelectSettings>,
) -> Option<SelectSettings> {
    match (fallback, primary) {
        (None, None) => None,
        (Some(settings), None) => Some(settings),
        (None, Some(settings)) => Some(settings),
        (Some(fallback), Some(primary)) => Some(SelectSettings {
            expand_whitespace: primary.expand_whitespace.or(fallback.expand_whitespace),
            exclude_brackets: primary.exclude_brackets.or(fallback.exclude_brackets),
            languages: merge_languages(fallback.languages, primary.languages),
        }),
    }
}

fn merge_languages(
    mut fallback: HashMap<String, LanguageSettings>,
    primary: HashMap<String, LanguageSettings>,
) -> HashMap<String, LanguageSettings> {
    for (lang, primary_settings) in primary {
        fallback
            .entry(lang)
            .and_modify(|fallback_settings| {
                if primary_settings.expand_whitespace.is_some() {
                    fallback_settings.expand_whitespace = primary_settings.expand_whitespace;
                }
                if primary_settings.exclude_brackets.is_some() {
                    fallback_settings.exclude_brackets = primary_settings.exclude_brackets;
                }
            })
            .or_insert(primary_settings);
    }
    fallback
}
