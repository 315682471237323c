use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or training a `LanguageModel`.
#[derive(Debug, Error)]
pub enum ModelError {
	/// The window length must hold at least one character.
	#[error("window length must be at least 1, got {0}")]
	InvalidWindowLength(usize),

	/// The corpus could not be opened or read.
	#[error("IO error: {context}")]
	Io {
		context: String,
		#[source]
		source: io::Error,
	},
}

/// Errors raised while loading or validating a `GenerationConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read config file {}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("failed to parse config: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("invalid config: {0}")]
	Invalid(String),
}

/// Result alias used across the model API.
pub type Result<T> = std::result::Result<T, ModelError>;
