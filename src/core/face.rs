//! Die faces and the derived views the rule engine works on.
//!
//! ## Face
//!
//! Validated die value in 1..=6. Out-of-range values are rejected at
//! construction, so everything downstream can index by face without checks.
//!
//! ## FaceCounts
//!
//! Occurrences per face in a selection, plus the total and the number of
//! distinct committed faces.
//!
//! ## FaceSet
//!
//! Compact set of faces stored as a 6-bit mask.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single die face, 1 through 6.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Face(u8);

impl Face {
    pub const ONE: Face = Face(1);
    pub const TWO: Face = Face(2);
    pub const THREE: Face = Face(3);
    pub const FOUR: Face = Face(4);
    pub const FIVE: Face = Face(5);
    pub const SIX: Face = Face(6);

    /// All six faces in ascending order.
    pub const ALL: [Face; 6] = [
        Face::ONE,
        Face::TWO,
        Face::THREE,
        Face::FOUR,
        Face::FIVE,
        Face::SIX,
    ];

    /// Create a face, rejecting values outside 1..=6.
    pub fn new(value: u8) -> Result<Self> {
        if (1..=6).contains(&value) {
            Ok(Self(value))
        } else {
            Err(Error::InvalidFace(value))
        }
    }

    /// Get the pip value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Zero-based index (face 1 -> 0).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Parse a whole slice of raw values.
    ///
    /// ```
    /// use yatzy_rules::core::Face;
    ///
    /// let dice = Face::from_values(&[2, 2, 5]).unwrap();
    /// assert_eq!(dice, vec![Face::TWO, Face::TWO, Face::FIVE]);
    /// assert!(Face::from_values(&[2, 7]).is_err());
    /// ```
    pub fn from_values(values: &[u8]) -> Result<Vec<Face>> {
        values.iter().map(|&v| Face::new(v)).collect()
    }
}

impl TryFrom<u8> for Face {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Face::new(value)
    }
}

impl From<Face> for u8 {
    fn from(face: Face) -> u8 {
        face.0
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-face occurrence counts of a selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceCounts {
    counts: [u8; 6],
    total: usize,
}

impl FaceCounts {
    /// Count the faces of a selection.
    #[must_use]
    pub fn of(selection: &[Face]) -> Self {
        let mut counts = [0u8; 6];
        for face in selection {
            counts[face.index()] = counts[face.index()].saturating_add(1);
        }
        Self {
            counts,
            total: selection.len(),
        }
    }

    /// Occurrences of one face.
    #[must_use]
    pub fn count(&self, face: Face) -> u8 {
        self.counts[face.index()]
    }

    /// Total number of dice.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct faces present.
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Faces present at least once.
    #[must_use]
    pub fn committed(&self) -> FaceSet {
        Face::ALL
            .into_iter()
            .filter(|&face| self.count(face) > 0)
            .collect()
    }
}

/// A set of die faces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FaceSet(u8);

impl FaceSet {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every face.
    #[must_use]
    pub const fn all() -> Self {
        Self(0b11_1111)
    }

    #[must_use]
    pub fn contains(self, face: Face) -> bool {
        self.0 & (1 << face.index()) != 0
    }

    pub fn insert(&mut self, face: Face) {
        self.0 |= 1 << face.index();
    }

    pub fn remove(&mut self, face: Face) {
        self.0 &= !(1 << face.index());
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Faces not in this set.
    #[must_use]
    pub fn complement(self) -> Self {
        Self(!self.0 & Self::all().0)
    }

    /// Iterate faces in ascending order.
    pub fn iter(self) -> impl Iterator<Item = Face> {
        Face::ALL.into_iter().filter(move |&face| self.contains(face))
    }
}

impl FromIterator<Face> for FaceSet {
    fn from_iter<I: IntoIterator<Item = Face>>(iter: I) -> Self {
        let mut set = FaceSet::empty();
        for face in iter {
            set.insert(face);
        }
        set
    }
}

impl Serialize for FaceSet {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for FaceSet {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let faces = Vec::<Face>::deserialize(deserializer)?;
        Ok(faces.into_iter().collect())
    }
}
