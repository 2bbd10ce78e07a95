use tree_sitter::Parser;

use super::SupportedLanguage;
use crate::error::{SelectError, SelectResult};

/// Factory for creating Tree-sitter parsers with proper language configuration
pub struct ParserFactory;

impl ParserFactory {
    /// Create a new parser for the specified language
    pub fn create(language: SupportedLanguage) -> SelectResult<Parser> {
        let mut parser = Parser::new();
        parser
            .set_language(&language.grammar())
            .map_err(|e| SelectError::parser_load(language.id(), e.to_string()))?;
        Ok(parser)
    }
}
