//! The game store: players and their scorecards, persisted on every change.
//!
//! ## Persistence
//!
//! `open` loads the snapshot stored under the configured key (or starts
//! empty) and writes it straight back. Every mutation builds the next state
//! on an O(1) clone of the current one, saves it, and only then swaps it in,
//! so a failed save leaves the store unchanged.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::config::StoreConfig;
use super::player::{Bonus, Player, Score};
use super::storage::Storage;
use crate::core::Category;
use crate::error::{Error, Result};

/// Persisted game state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub players: Vector<Player>,
}

/// Player list backed by a [`Storage`].
pub struct GameStore<S: Storage> {
    storage: S,
    config: StoreConfig,
    state: GameState,
}

impl<S: Storage> GameStore<S> {
    /// Open the store, loading any saved game.
    pub fn open(storage: S, config: StoreConfig) -> Result<Self> {
        let state = match storage.load(&config.storage_key)? {
            Some(json) => serde_json::from_str(&json)?,
            None => GameState::default(),
        };
        debug!(
            key = %config.storage_key,
            players = state.players.len(),
            "game store opened"
        );

        let mut store = Self {
            storage,
            config,
            state: GameState::default(),
        };
        store.commit(state)?;
        Ok(store)
    }

    /// Whether any players are registered.
    #[must_use]
    pub fn has_players(&self) -> bool {
        !self.state.players.is_empty()
    }

    /// All players in join order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.state.players
    }

    /// Player at `index`, if present.
    #[must_use]
    pub fn player(&self, index: usize) -> Option<&Player> {
        self.state.players.get(index)
    }

    /// Read-only copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Configuration the store was opened with.
    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Append a player.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        let mut next = self.state.clone();
        next.players.push_back(player);
        self.commit(next)
    }

    /// Remove all players.
    pub fn clear_game(&mut self) -> Result<()> {
        self.commit(GameState::default())
    }

    /// Record a category score for a player.
    pub fn record_score(&mut self, index: usize, category: Category, score: Score) -> Result<()> {
        self.update_player(index, |p| p.set_score(category, score))
    }

    /// Strike a category for a player.
    pub fn strike(&mut self, index: usize, category: Category) -> Result<()> {
        self.update_player(index, |p| p.strike(category))
    }

    /// Record whether a player achieved a bonus category.
    pub fn set_bonus(&mut self, index: usize, bonus: Bonus, achieved: bool) -> Result<()> {
        self.update_player(index, |p| p.set_bonus(bonus, achieved))
    }

    fn update_player(&mut self, index: usize, f: impl FnOnce(&mut Player)) -> Result<()> {
        let mut next = self.state.clone();
        let player = next
            .players
            .get_mut(index)
            .ok_or(Error::UnknownPlayer(index))?;
        f(player);
        self.commit(next)
    }

    fn commit(&mut self, next: GameState) -> Result<()> {
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&next)?
        } else {
            serde_json::to_string(&next)?
        };
        self.storage.save(&self.config.storage_key, &json)?;
        debug!(
            key = %self.config.storage_key,
            players = next.players.len(),
            bytes = json.len(),
            "game snapshot saved"
        );
        self.state = next;
        Ok(())
    }
}
