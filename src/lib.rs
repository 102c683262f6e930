//! # yatzy-rules
//!
//! Dice-selection rule engine for a Yatzy-style scoring game, plus the
//! player store that records confirmed scores.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: `evaluate(category, selection)` has no state and no
//!    side effects. Callers re-run it after every change to the selection.
//!
//! 2. **Closed categories**: `Category` is an enum matched exhaustively.
//!    Unknown category names fail at parse time instead of falling back to
//!    a permissive rule.
//!
//! 3. **Valid by construction**: `Face` only holds 1..=6, and a `Selection`
//!    only accepts faces the engine admits.
//!
//! ## Modules
//!
//! - `core`: Faces, face counts and sets, categories
//! - `rules`: The rule engine and the selection builder
//! - `store`: Players, scores and snapshot persistence
//! - `error`: Crate error type
//!
//! ## Example
//!
//! ```
//! use yatzy_rules::{Category, Face, Selection};
//!
//! let mut selection = Selection::new(Category::FullHouse);
//! for face in [Face::FOUR, Face::FOUR, Face::FOUR] {
//!     selection.add(face).unwrap();
//! }
//!
//! let rules = selection.rules();
//! assert!(rules.is_disabled(Face::FOUR));
//! assert!(rules.is_admitted(Face::SIX));
//! ```

pub mod core;
pub mod error;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{Category, Face, FaceCounts, FaceSet, Shape};

pub use crate::error::{Error, Result};

pub use crate::rules::{evaluate, DiceRules, Selection};

pub use crate::store::{
    Bonus, FileStorage, GameState, GameStore, MemoryStorage, Player, Score, Storage, StoreConfig,
};
