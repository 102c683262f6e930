//! Scoring categories.
//!
//! The category set is closed: twelve variants, each with a fixed dice cap
//! and a [`Shape`] describing which selections can still grow into a valid
//! score. Adding a category means adding a variant here, and the exhaustive
//! matches below refuse to compile until it has a cap and a shape.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::face::Face;
use crate::error::Error;

/// A scoring category a selection is built toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    Aces,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    Pair,
    TwoPairs,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    Chance,
}

/// Structural rule a category imposes on its selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    /// Only one fixed face counts (aces..sixes).
    Target(Face),
    /// Any face, up to the dice cap.
    Any,
    /// Up to `groups` distinct faces, each repeated at most `per_face` times.
    ///
    /// Once `groups` distinct faces are committed, only those faces may be
    /// added.
    Groups { groups: usize, per_face: u8 },
}

impl Category {
    /// All categories in scorecard order.
    pub const ALL: [Category; 12] = [
        Category::Aces,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::Pair,
        Category::TwoPairs,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Chance,
    ];

    /// Maximum number of dice the category accepts.
    #[must_use]
    pub const fn max_dice(self) -> usize {
        match self {
            Category::Pair => 2,
            Category::ThreeOfAKind => 3,
            Category::TwoPairs | Category::FourOfAKind => 4,
            Category::Aces
            | Category::Twos
            | Category::Threes
            | Category::Fours
            | Category::Fives
            | Category::Sixes
            | Category::FullHouse
            | Category::Chance => 5,
        }
    }

    #[must_use]
    pub const fn shape(self) -> Shape {
        match self {
            Category::Aces => Shape::Target(Face::ONE),
            Category::Twos => Shape::Target(Face::TWO),
            Category::Threes => Shape::Target(Face::THREE),
            Category::Fours => Shape::Target(Face::FOUR),
            Category::Fives => Shape::Target(Face::FIVE),
            Category::Sixes => Shape::Target(Face::SIX),
            Category::Chance => Shape::Any,
            Category::Pair => Shape::Groups { groups: 1, per_face: 2 },
            Category::ThreeOfAKind => Shape::Groups { groups: 1, per_face: 3 },
            Category::FourOfAKind => Shape::Groups { groups: 1, per_face: 4 },
            Category::TwoPairs => Shape::Groups { groups: 2, per_face: 2 },
            Category::FullHouse => Shape::Groups { groups: 2, per_face: 3 },
        }
    }

    /// Target face for the single-number categories.
    #[must_use]
    pub const fn target_face(self) -> Option<Face> {
        match self.shape() {
            Shape::Target(face) => Some(face),
            _ => None,
        }
    }

    /// Whether this is one of aces..sixes.
    #[must_use]
    pub const fn is_upper(self) -> bool {
        self.target_face().is_some()
    }

    /// Camel-case name, as used in persisted player records.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Aces => "aces",
            Category::Twos => "twos",
            Category::Threes => "threes",
            Category::Fours => "fours",
            Category::Fives => "fives",
            Category::Sixes => "sixes",
            Category::Pair => "pair",
            Category::TwoPairs => "twoPairs",
            Category::ThreeOfAKind => "threeOfAKind",
            Category::FourOfAKind => "fourOfAKind",
            Category::FullHouse => "fullHouse",
            Category::Chance => "chance",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| Error::UnknownCategory(s.to_string()))
    }
}
