//! PantryVoice Library
//!
//! Turns spoken or typed grocery requests into categorized list items.

pub mod config;
pub mod core;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod review;
pub mod session;
pub mod speech;
pub mod store;
pub mod utils;
