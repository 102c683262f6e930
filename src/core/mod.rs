//! Core types: die faces and scoring categories.

pub mod face;
pub mod category;

pub use face::{Face, FaceCounts, FaceSet};
pub use category::{Category, Shape};
