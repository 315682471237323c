//! Character-level Markov model.
//!
//! This module provides:
//! - Per-character occurrence tallies (`CharTally`)
//! - Insertion-ordered transition lists for one window (`TransitionList`)
//! - The trainable, generating model (`LanguageModel`)
//! - The injectable source of randomness (`RandomSource`)

/// Fixed-order model: window table, training and generation.
pub mod language_model;

/// Uniform random draws used for sampling.
pub mod random;

/// Occurrence counter and probabilities for one character.
pub mod tally;

/// Ordered tallies for one window, with probability computation and
/// weighted sampling.
pub mod transitions;
