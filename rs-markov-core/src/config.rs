//! Generation settings, loaded from a TOML file or assembled by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::model::language_model::LanguageModel;

/// Everything needed to train a model and generate one text.
///
/// ```toml
/// window_length = 7
/// seed = 20
/// corpus = "originofspecies.txt"
/// initial_text = "Natural"
/// text_length = 500
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
	/// Number of characters in a window
	#[serde(default = "default_window_length")]
	pub window_length: usize,

	/// Fixed seed for reproducible output; a random seed is used when absent
	#[serde(default)]
	pub seed: Option<u64>,

	/// Text file the model is trained on
	#[serde(default)]
	pub corpus: PathBuf,

	/// Text the generation starts from
	#[serde(default)]
	pub initial_text: String,

	/// Length, in characters, of the generated text (initial text included)
	#[serde(default = "default_text_length")]
	pub text_length: usize,
}

fn default_window_length() -> usize {
	3
}

fn default_text_length() -> usize {
	1000
}

impl Default for GenerationConfig {
	fn default() -> Self {
		Self {
			window_length: default_window_length(),
			seed: None,
			corpus: PathBuf::new(),
			initial_text: String::new(),
			text_length: default_text_length(),
		}
	}
}

impl GenerationConfig {
	/// Loads a configuration from a TOML file.
	///
	/// Missing keys take their default value.
	pub fn from_file<P: AsRef<Path>>(path: P) -> std::result::Result<Self, ConfigError> {
		let path = path.as_ref();
		let contents = fs::read_to_string(path)
			.map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
		debug!("loaded config from {}", path.display());
		Self::from_toml_str(&contents)
	}

	pub fn from_toml_str(contents: &str) -> std::result::Result<Self, ConfigError> {
		Ok(toml::from_str(contents)?)
	}

	/// Checks the values a model cannot be built or trained with.
	///
	/// # Errors
	/// - `window_length` is 0
	/// - `corpus` is empty
	pub fn validate(&self) -> std::result::Result<(), ConfigError> {
		if self.window_length == 0 {
			return Err(ConfigError::Invalid("window_length must be at least 1".to_owned()));
		}
		if self.corpus.as_os_str().is_empty() {
			return Err(ConfigError::Invalid("corpus path is required".to_owned()));
		}
		Ok(())
	}

	/// Builds an untrained model: seeded when `seed` is set, random otherwise.
	pub fn build_model(&self) -> Result<LanguageModel> {
		match self.seed {
			Some(seed) => LanguageModel::with_seed(self.window_length, seed),
			None => LanguageModel::new(self.window_length),
		}
	}

	/// Trains a model on `corpus` and generates one text from `initial_text`.
	pub fn run(&self) -> Result<String> {
		let mut model = self.build_model()?;
		model.train_file(&self.corpus)?;
		Ok(model.generate(&self.initial_text, self.text_length))
	}
}
