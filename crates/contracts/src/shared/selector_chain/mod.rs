//! Cascading country → state → city → area selection.

pub mod chain;
pub mod selector;

pub use chain::{OptionsFetch, OptionsState, SelectorChain};
pub use selector::{DependentSelector, OptionSource, SelectionOutcome};
