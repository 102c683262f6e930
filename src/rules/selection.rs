//! Incrementally built dice selection.
//!
//! A [`Selection`] is the tentative set of dice a player assigns to a
//! category before confirming a score. Every `add` is checked against the
//! rule engine, so a selection can only ever hold a combination that still
//! fits the category.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{trace, warn};

use super::engine::{evaluate, DiceRules};
use crate::core::{Category, Face};
use crate::error::{Error, Result};
use crate::store::Score;

/// Dice tentatively assigned to a category.
///
/// Deserializing replays the stored dice through [`Selection::add`], so a
/// stored selection the category does not admit fails to load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSelection")]
pub struct Selection {
    category: Category,
    /// At most five dice for any category, so this never spills to the heap.
    faces: SmallVec<[Face; 5]>,
}

/// Unchecked wire form of a [`Selection`].
#[derive(Deserialize)]
struct RawSelection {
    category: Category,
    faces: Vec<Face>,
}

impl TryFrom<RawSelection> for Selection {
    type Error = Error;

    fn try_from(raw: RawSelection) -> Result<Self> {
        let mut selection = Selection::new(raw.category);
        for face in raw.faces {
            selection.add(face)?;
        }
        Ok(selection)
    }
}

impl Selection {
    /// Start an empty selection for a category.
    #[must_use]
    pub fn new(category: Category) -> Self {
        Self {
            category,
            faces: SmallVec::new(),
        }
    }

    /// Category the dice are assigned to.
    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Switch category. The dice are cleared.
    pub fn set_category(&mut self, category: Category) {
        trace!(from = %self.category, to = %category, "selection category changed");
        self.category = category;
        self.faces.clear();
    }

    /// Current engine decision for this selection.
    #[must_use]
    pub fn rules(&self) -> DiceRules {
        evaluate(self.category, &self.faces)
    }

    /// Add one die if the category admits it.
    pub fn add(&mut self, face: Face) -> Result<()> {
        if self.rules().is_disabled(face) {
            warn!(%face, category = %self.category, "face refused");
            return Err(Error::FaceNotAdmitted {
                face,
                category: self.category,
            });
        }
        self.faces.push(face);
        trace!(%face, len = self.faces.len(), "face added");
        Ok(())
    }

    /// Remove one occurrence of `face`. Returns false if it was not selected.
    pub fn remove(&mut self, face: Face) -> bool {
        match self.faces.iter().rposition(|&f| f == face) {
            Some(pos) => {
                self.faces.remove(pos);
                trace!(%face, len = self.faces.len(), "face removed");
                true
            }
            None => false,
        }
    }

    /// Remove every die, keeping the category.
    pub fn clear(&mut self) {
        self.faces.clear();
    }

    /// Selected dice in the order they were added.
    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Number of selected dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether no dice are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Whether the category's dice cap has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.faces.len() >= self.category.max_dice()
    }

    /// Sum of pips.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.faces.iter().map(|f| u32::from(f.value())).sum()
    }

    /// The selected dice as a score entry.
    #[must_use]
    pub fn to_score(&self) -> Score {
        Score::Dice(self.faces.to_vec())
    }
}
