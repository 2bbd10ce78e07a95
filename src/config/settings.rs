use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-language overrides of the global switches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct LanguageSettings {
    pub expand_whitespace: Option<bool>,
    pub exclude_brackets: Option<bool>,
}

/// Settings as read from `syntax-select.toml`.
///
/// ```toml
/// exclude_brackets = true
///
/// [languages.json]
/// exclude_brackets = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectSettings {
    pub expand_whitespace: Option<bool>,
    pub exclude_brackets: Option<bool>,
    #[serde(default)]
    pub languages: HashMap<String, LanguageSettings>,
}
