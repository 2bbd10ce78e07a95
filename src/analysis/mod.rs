pub mod selection;

pub use selection::{
    SelectionStrategy, StrategyOptions, TreeSitterStrategy, exclude_brackets, expand_selection,
    is_strict_growth, node_to_range,
};
