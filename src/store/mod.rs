//! Player and game store.
//!
//! Holds the players of the current game with their recorded scores and
//! persists the whole state as JSON after every mutation. The rule engine
//! never reads or writes the store.

pub mod config;
pub mod game;
pub mod player;
pub mod storage;

pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use game::{GameState, GameStore};
pub use player::{Bonus, Player, Score};
pub use storage::{FileStorage, MemoryStorage, Storage};
