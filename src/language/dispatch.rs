//! Language identifier to strategy dispatch.

use std::collections::HashMap;

use log::debug;

use super::SupportedLanguage;
use crate::analysis::TreeSitterStrategy;
use crate::config::SelectSettings;

/// Outcome of looking up a strategy for a language identifier.
#[derive(Clone, Copy, Debug)]
pub enum Dispatch<'a> {
    /// A syntax-aware strategy exists for the language.
    Smart(&'a TreeSitterStrategy),
    /// No strategy; the host's native selection commands must be used.
    Native,
}

/// One strategy per supported language, configured once from settings.
#[derive(Clone, Debug)]
pub struct StrategyTable {
    strategies: HashMap<SupportedLanguage, TreeSitterStrategy>,
}

impl StrategyTable {
    pub fn new(settings: &SelectSettings) -> Self {
        let strategies = SupportedLanguage::ALL
            .into_iter()
            .map(|language| {
                let strategy = TreeSitterStrategy::new(language, settings.options_for(language));
                (language, strategy)
            })
            .collect();
        Self { strategies }
    }

    /// Pick the strategy for `language_id`.
    pub fn dispatch(&self, language_id: &str) -> Dispatch<'_> {
        match SupportedLanguage::from_language_id(language_id)
            .and_then(|language| self.strategies.get(&language))
        {
            Some(strategy) => Dispatch::Smart(strategy),
            None => {
                debug!(
                    target: "syntax_select::dispatch",
                    "No smart strategy for language '{}', using native selection",
                    language_id
                );
                Dispatch::Native
            }
        }
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::new(&SelectSettings::default())
    }
}
