//! Supported languages and their tree-sitter grammars.

pub mod alias;
pub mod dispatch;
pub mod extension;
pub mod parser;

pub use alias::normalize_alias;
pub use dispatch::{Dispatch, StrategyTable};
pub use extension::detect_from_extension;
pub use parser::ParserFactory;

use std::path::Path;

use crate::syntax::NodeKind;

/// The closed set of languages with a smart selection strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SupportedLanguage {
    TypeScript,
    Tsx,
    JavaScript,
    Json,
}

impl SupportedLanguage {
    pub const ALL: [SupportedLanguage; 4] = [
        SupportedLanguage::TypeScript,
        SupportedLanguage::Tsx,
        SupportedLanguage::JavaScript,
        SupportedLanguage::Json,
    ];

    /// Resolve a host language identifier, accepting common aliases.
    pub fn from_language_id(language_id: &str) -> Option<Self> {
        let language_id = normalize_alias(language_id).unwrap_or(language_id);
        match language_id {
            "typescript" => Some(SupportedLanguage::TypeScript),
            "typescriptreact" => Some(SupportedLanguage::Tsx),
            // The JavaScript grammar parses JSX natively
            "javascript" | "javascriptreact" => Some(SupportedLanguage::JavaScript),
            "json" => Some(SupportedLanguage::Json),
            _ => None,
        }
    }

    /// Resolve the language of a file from its extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = detect_from_extension(path)?;
        Self::from_language_id(&extension)
    }

    /// Canonical identifier, also used as the key for per-language settings.
    pub fn id(self) -> &'static str {
        match self {
            SupportedLanguage::TypeScript => "typescript",
            SupportedLanguage::Tsx => "typescriptreact",
            SupportedLanguage::JavaScript => "javascript",
            SupportedLanguage::Json => "json",
        }
    }

    pub fn grammar(self) -> tree_sitter::Language {
        match self {
            SupportedLanguage::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            SupportedLanguage::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            SupportedLanguage::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            SupportedLanguage::Json => tree_sitter_json::LANGUAGE.into(),
        }
    }

    /// Map a grammar node kind onto the engine's coarse classification.
    pub fn classify(self, kind: &str) -> NodeKind {
        match (self, kind) {
            (SupportedLanguage::Json, "object") => NodeKind::ObjectLiteral,
            (SupportedLanguage::Json, _) => NodeKind::Other,
            // The literal text after `}` is a sibling string_fragment here,
            // so only the closing brace needs trimming.
            (_, "template_substitution") => NodeKind::TemplateSpan { closing_width: 1 },
            (_, "statement_block") => NodeKind::Block,
            (_, "object") => NodeKind::ObjectLiteral,
            (_, "object_pattern") => NodeKind::ObjectPattern,
            _ => NodeKind::Other,
        }
    }
}
