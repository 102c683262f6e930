//! Face-eligibility decisions for a tentative dice selection.
//!
//! [`evaluate`] is a pure function of `(category, selection)`. Each of the
//! six faces is decided independently from the selection's counts:
//!
//! - `Target(t)`: only `t`, while below the dice cap
//! - `Any`: every face, while below the dice cap
//! - `Groups { groups, per_face }`: below the dice cap, below the per-face
//!   cap, and either a new group may still start or the face is already
//!   committed

use serde::{Deserialize, Serialize};

use crate::core::{Category, Face, FaceCounts, FaceSet, Shape};

/// Result of evaluating a selection against a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiceRules {
    /// Faces that must not be added next.
    pub disabled: FaceSet,
    /// Maximum number of dice the category accepts.
    pub max_dice: usize,
}

impl DiceRules {
    /// Whether `face` must not be added next.
    #[must_use]
    pub fn is_disabled(&self, face: Face) -> bool {
        self.disabled.contains(face)
    }

    /// Whether `face` may be added next.
    #[must_use]
    pub fn is_admitted(&self, face: Face) -> bool {
        !self.is_disabled(face)
    }

    /// Faces that may be added next.
    #[must_use]
    pub fn admitted(&self) -> FaceSet {
        self.disabled.complement()
    }
}

/// Decide which faces can be added to `selection` for `category`.
///
/// ```
/// use yatzy_rules::core::{Category, Face};
/// use yatzy_rules::rules::evaluate;
///
/// let rules = evaluate(Category::Pair, &[Face::THREE]);
/// assert_eq!(rules.max_dice, 2);
/// assert!(rules.is_admitted(Face::THREE));
/// assert!(rules.is_disabled(Face::FOUR));
/// ```
#[must_use]
pub fn evaluate(category: Category, selection: &[Face]) -> DiceRules {
    let counts = FaceCounts::of(selection);
    let max_dice = category.max_dice();
    let shape = category.shape();

    let disabled = Face::ALL
        .into_iter()
        .filter(|&face| !admits(shape, max_dice, &counts, face))
        .collect();

    DiceRules { disabled, max_dice }
}

fn admits(shape: Shape, max_dice: usize, counts: &FaceCounts, face: Face) -> bool {
    if counts.total() >= max_dice {
        return false;
    }

    match shape {
        Shape::Target(target) => face == target,
        Shape::Any => true,
        Shape::Groups { groups, per_face } => {
            let committed = counts.committed();
            committed.len() <= groups
                && counts.count(face) < per_face
                && (committed.len() < groups || committed.contains(face))
        }
    }
}
