//! Character-level Markov text generation library.
//!
//! This crate provides a fixed-order Markov model including:
//! - Sliding-window training over a character stream
//! - Probability and cumulative-probability computation per window
//! - Weighted random generation with an injectable random source
//! - Corpus file loading and TOML generation settings

/// Error types for training, I/O and configuration.
pub mod error;

/// Generation settings (window length, seed, corpus, lengths).
pub mod config;

/// Core model types and generation logic.
pub mod model;

/// Corpus file loading.
pub mod io;

pub use config::GenerationConfig;
pub use error::{ConfigError, ModelError, Result};
pub use model::language_model::LanguageModel;
pub use model::random::RandomSource;
pub use model::tally::CharTally;
pub use model::transitions::TransitionList;
