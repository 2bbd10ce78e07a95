pub mod analysis;
pub mod config;
pub mod domain;
pub mod error;
pub mod language;
pub mod syntax;
pub mod text;
pub mod workspace;

// Re-export the main entry points
pub use analysis::{SelectionStrategy, StrategyOptions, TreeSitterStrategy};
pub use config::SelectSettings;
pub use domain::Range;
pub use error::{SelectError, SelectResult};
pub use language::{Dispatch, StrategyTable, SupportedLanguage};
pub use workspace::{
    CommandOutcome, EditorHost, HistoryStore, MemoryHost, SelectionHistory, SmartSelect,
};
