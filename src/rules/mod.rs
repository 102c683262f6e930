//! Dice-selection rules.
//!
//! - `engine`: the pure `evaluate(category, selection)` decision
//! - `selection`: a selection builder that consults the engine on every add

pub mod engine;
pub mod selection;

pub use engine::{evaluate, DiceRules};
pub use selection::Selection;
