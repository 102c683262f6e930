//! Error types for the rule engine and the game store.

use thiserror::Error;

use crate::core::{Category, Face};

/// Errors produced by this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A die value outside 1..=6.
    #[error("invalid die face: {0} (expected 1-6)")]
    InvalidFace(u8),

    /// A category name that is not one of the twelve scoring categories.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// The face is disabled for the category given the current selection.
    #[error("face {face} cannot be added to {category} selection")]
    FaceNotAdmitted { face: Face, category: Category },

    /// Player index not present in the store.
    #[error("no player at index {0}")]
    UnknownPlayer(usize),

    /// Storage key that cannot be used as a file name.
    #[error("invalid storage key: {0:?}")]
    InvalidStorageKey(String),

    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
