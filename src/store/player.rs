//! Player records.
//!
//! A player holds an optional score per category, the three categories that
//! are only ever achieved or not ([`Bonus`]), and the set of struck
//! categories. The serialized form keeps category scores as top-level
//! camelCase keys next to `name`:
//!
//! ```json
//! { "name": "Ada", "pair": [3, 3], "chance": 21, "yahtzee": true,
//!   "struck": { "fullHouse": true } }
//! ```

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::core::{Category, Face};

/// A recorded category score.
///
/// Either a plain number of points or the dice that made it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Points(u32),
    Dice(Vec<Face>),
}

impl Score {
    /// Point value of this entry.
    #[must_use]
    pub fn points(&self) -> u32 {
        match self {
            Score::Points(p) => *p,
            Score::Dice(dice) => dice.iter().map(|f| u32::from(f.value())).sum(),
        }
    }
}

/// Categories scored as achieved or not, without a dice selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bonus {
    SmallStraight,
    LargeStraight,
    Yahtzee,
}

/// A player and their scorecard entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,

    #[serde(flatten)]
    pub scores: OrdMap<Category, Score>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small_straight: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large_straight: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yahtzee: Option<bool>,

    #[serde(default, skip_serializing_if = "OrdMap::is_empty")]
    pub struck: OrdMap<Category, bool>,
}

impl Player {
    /// Create a player with an empty scorecard.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Recorded score for a category, if any.
    #[must_use]
    pub fn score(&self, category: Category) -> Option<&Score> {
        self.scores.get(&category)
    }

    /// Whether the category has been struck.
    #[must_use]
    pub fn is_struck(&self, category: Category) -> bool {
        self.struck.get(&category).copied().unwrap_or(false)
    }

    /// Whether the category has either a score or a strike.
    #[must_use]
    pub fn is_filled(&self, category: Category) -> bool {
        self.scores.contains_key(&category) || self.is_struck(category)
    }

    /// Record a score, lifting any strike on the category.
    pub fn set_score(&mut self, category: Category, score: Score) {
        self.struck.remove(&category);
        self.scores.insert(category, score);
    }

    /// Strike a category, dropping any score on it.
    pub fn strike(&mut self, category: Category) {
        self.scores.remove(&category);
        self.struck.insert(category, true);
    }

    /// Achieved state of a bonus category, `None` until decided.
    #[must_use]
    pub fn bonus(&self, bonus: Bonus) -> Option<bool> {
        *self.bonus_slot(bonus)
    }

    /// Mark a bonus category as achieved or missed.
    pub fn set_bonus(&mut self, bonus: Bonus, achieved: bool) {
        *self.bonus_slot_mut(bonus) = Some(achieved);
    }

    fn bonus_slot(&self, bonus: Bonus) -> &Option<bool> {
        match bonus {
            Bonus::SmallStraight => &self.small_straight,
            Bonus::LargeStraight => &self.large_straight,
            Bonus::Yahtzee => &self.yahtzee,
        }
    }

    fn bonus_slot_mut(&mut self, bonus: Bonus) -> &mut Option<bool> {
        match bonus {
            Bonus::SmallStraight => &mut self.small_straight,
            Bonus::LargeStraight => &mut self.large_straight,
            Bonus::Yahtzee => &mut self.yahtzee,
        }
    }
}
