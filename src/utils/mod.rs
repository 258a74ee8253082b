//! Utility modules

pub mod fuzzy;

pub use fuzzy::{best_match, find_matches, similarity, FuzzyMatch};
