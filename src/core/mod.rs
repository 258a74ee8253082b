//! Core processing modules
//!
//! The per-utterance text stages: normalization, segmentation, correction
//! and categorization.

pub mod categorizer;
pub mod corrector;
pub mod segmenter;
pub mod text_normalizer;

pub use categorizer::Categorizer;
pub use corrector::{Confidence, ConversionType, Correction, Corrector};
pub use segmenter::{Segmenter, SeparatorMode};
pub use text_normalizer::TextNormalizer;
