//! Grow and shrink commands over a host editor.

pub mod history;
pub mod host;
pub mod store;

pub use history::SelectionHistory;
pub use host::{EditorHost, MemoryHost};
pub use store::HistoryStore;

use log::debug;

use crate::analysis::SelectionStrategy;
use crate::config::SelectSettings;
use crate::domain::Range;
use crate::language::{Dispatch, StrategyTable};

/// What a grow or shrink command ended up doing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The engine wrote a new selection.
    Applied,
    /// The host's native command was invoked instead.
    Native,
    /// No selection could grow; nothing was written.
    Unchanged,
    /// No active document or no selection.
    NoActiveDocument,
}

/// The two externally invocable commands, `grow` and `shrink`.
///
/// Holds no per-buffer state; every call receives the history of the buffer
/// it acts on. Strategies are built once, when the commands are created.
#[derive(Debug, Default, Clone)]
pub struct SmartSelect {
    settings: SelectSettings,
    strategies: StrategyTable,
}

impl SmartSelect {
    pub fn new(settings: SelectSettings) -> Self {
        let strategies = StrategyTable::new(&settings);
        Self {
            settings,
            strategies,
        }
    }

    pub fn settings(&self) -> &SelectSettings {
        &self.settings
    }

    /// Grow every selection of the active document to its next enclosing unit.
    pub fn grow<H: EditorHost>(
        &self,
        host: &mut H,
        history: &mut SelectionHistory,
    ) -> CommandOutcome {
        let prior = host.selections();
        let (Some(text), Some(language_id)) = (host.text(), host.language_id()) else {
            return CommandOutcome::NoActiveDocument;
        };
        if prior.is_empty() {
            return CommandOutcome::NoActiveDocument;
        }
        discard_if_stale(history, &prior);

        let strategy = match self.strategies.dispatch(language_id) {
            Dispatch::Smart(strategy) => strategy,
            Dispatch::Native => {
                history.clear();
                host.native_grow();
                return CommandOutcome::Native;
            }
        };

        let grown = strategy.grow(text, &prior);
        let next = merge_grown(&prior, &grown);
        if next == prior {
            return CommandOutcome::Unchanged;
        }

        history.record_grow(prior);
        history.mark_written(next.clone());
        host.set_selections(next);
        CommandOutcome::Applied
    }

    /// Restore the selection that preceded the most recent grow.
    ///
    /// Falls back to the host's native shrink once the history is exhausted.
    pub fn shrink<H: EditorHost>(
        &self,
        host: &mut H,
        history: &mut SelectionHistory,
    ) -> CommandOutcome {
        if host.text().is_none() {
            return CommandOutcome::NoActiveDocument;
        }
        let live = host.selections();
        if live.is_empty() {
            return CommandOutcome::NoActiveDocument;
        }

        discard_if_stale(history, &live);
        match history.pop() {
            Some(previous) => {
                history.mark_written(previous.clone());
                host.set_selections(previous);
                CommandOutcome::Applied
            }
            None => {
                history.clear();
                host.native_shrink();
                CommandOutcome::Native
            }
        }
    }

    /// Feed a selection-changed notification from the host.
    ///
    /// Returns `true` when the change was caused by this engine.
    pub fn selection_changed(&self, observed: &[Range], history: &mut SelectionHistory) -> bool {
        history.observe(observed)
    }
}

/// Combine per-selection results with the prior selections.
///
/// Selections without a result keep their prior range.
fn merge_grown(prior: &[Range], grown: &[Option<Range>]) -> Vec<Range> {
    prior
        .iter()
        .enumerate()
        .map(|(i, old)| grown.get(i).copied().flatten().unwrap_or(*old))
        .collect()
}

/// Clear the history when the live selection is not what the engine last
/// wrote, covering hosts that dropped a change notification.
fn discard_if_stale(history: &mut SelectionHistory, live: &[Range]) {
    if history.last_written().is_some_and(|written| written != live) {
        debug!(
            target: "syntax_select::history",
            "Live selection differs from last write, history discarded"
        );
        history.clear();
    }
}
