use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::io;
use std::path::Path;

use log::{debug, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::random::RandomSource;
use super::transitions::TransitionList;
use crate::error::{ModelError, Result};
use crate::io::read_corpus;

/// Fixed-order character-level Markov model.
///
/// The `LanguageModel` maps every window of `window_length` characters seen
/// in the corpus to the characters that followed it, and generates text by
/// repeatedly sampling the character that follows the trailing window.
///
/// # Responsibilities
/// - Build the window table from a corpus in a single pass
/// - Convert occurrence counts into sampling probabilities
/// - Generate text from an initial seed text
///
/// # Invariants
/// - `window_length` is always >= 1
/// - Every key in `windows` is exactly `window_length` characters long
/// - Once training returns `Ok`, every list has its probabilities computed
#[derive(Clone, Debug)]
pub struct LanguageModel<R = StdRng> {
	/// Number of characters in a window (the order of the model)
	window_length: usize,

	/// Mapping from a window to the characters observed right after it
	windows: HashMap<String, TransitionList>,

	/// Source of every random draw made during generation
	source: R,
}

impl LanguageModel<StdRng> {
	/// Creates an untrained model seeded from the operating system.
	///
	/// Generating from this model several times produces different texts.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn new(window_length: usize) -> Result<Self> {
		Self::with_source(window_length, StdRng::from_os_rng())
	}

	/// Creates an untrained model with a fixed seed.
	///
	/// Two models built with the same seed and trained on the same corpus
	/// generate the same texts.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_seed(window_length: usize, seed: u64) -> Result<Self> {
		Self::with_source(window_length, StdRng::seed_from_u64(seed))
	}
}

impl<R: RandomSource> LanguageModel<R> {
	/// Creates an untrained model drawing from the given random source.
	///
	/// # Errors
	/// Returns an error if `window_length` is 0.
	pub fn with_source(window_length: usize, source: R) -> Result<Self> {
		if window_length == 0 {
			return Err(ModelError::InvalidWindowLength(window_length));
		}
		Ok(Self { window_length, windows: HashMap::new(), source })
	}

	pub fn window_length(&self) -> usize {
		self.window_length
	}

	/// Number of distinct windows learned.
	pub fn len(&self) -> usize {
		self.windows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.windows.is_empty()
	}

	/// Returns the characters observed after `window`, if any.
	pub fn transitions(&self, window: &str) -> Option<&TransitionList> {
		self.windows.get(window)
	}

	/// Iterates over every learned window, in no particular order.
	pub fn windows(&self) -> impl Iterator<Item = &str> {
		self.windows.keys().map(String::as_str)
	}

	/// Builds the model from a stream of characters (the corpus).
	///
	/// # Behavior
	/// - Any previously learned table is discarded first.
	/// - The first `window_length` characters form the initial window. If the
	///   corpus is shorter than that, the model stays empty.
	/// - Every following character is recorded against the current window,
	///   then the window slides by one character.
	/// - Probabilities are computed once the whole corpus has been read.
	///
	/// # Errors
	/// Returns `ModelError::Io` if the stream yields a read error. The model
	/// is left empty in that case.
	pub fn train<I>(&mut self, corpus: I) -> Result<()>
	where
		I: IntoIterator<Item = io::Result<char>>,
	{
		self.windows.clear();

		let mut corpus = corpus.into_iter();
		let mut window: VecDeque<char> = VecDeque::with_capacity(self.window_length);
		while window.len() < self.window_length {
			match corpus.next() {
				Some(c) => window.push_back(read_char(c)?),
				None => {
					warn!(
						"corpus holds {} characters, fewer than the window length {}; model left empty",
						window.len(),
						self.window_length
					);
					return Ok(());
				}
			}
		}

		let mut windows: HashMap<String, TransitionList> = HashMap::new();
		let mut consumed = self.window_length;
		for c in corpus {
			let c = read_char(c)?;
			let key: String = window.iter().collect();
			windows.entry(key).or_default().update(c);

			window.pop_front();
			window.push_back(c);
			consumed += 1;
		}

		for transitions in windows.values_mut() {
			transitions.compute_probabilities();
		}

		debug!("trained on {} characters, {} windows learned", consumed, windows.len());
		self.windows = windows;
		Ok(())
	}

	/// Builds the model from an in-memory text.
	pub fn train_str(&mut self, text: &str) -> Result<()> {
		self.train(text.chars().map(Ok))
	}

	/// Builds the model from the text file at `path`.
	///
	/// # Errors
	/// Returns `ModelError::Io` if the file cannot be opened or is not
	/// valid UTF-8.
	pub fn train_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
		let corpus = read_corpus(&path)?;
		debug!("training on {}", path.as_ref().display());
		self.train(corpus)
	}

	/// Picks a random character from `transitions` using this model's source.
	///
	/// Returns `None` if `transitions` is empty.
	pub fn sample_character(&mut self, transitions: &TransitionList) -> Option<char> {
		transitions.sample(&mut self.source)
	}

	/// Generates text based on the probabilities learned during training.
	///
	/// # Parameters
	/// - `initial_text`: Text to start with. Its last `window_length`
	///   characters form the first window.
	/// - `target_length`: Length, in characters, of the text to produce
	///   (initial text included).
	///
	/// # Returns
	/// - `initial_text` unchanged if it is shorter than the window.
	/// - Otherwise the initial text extended one character at a time until it
	///   reaches `target_length`, or until the trailing window was never seen
	///   during training, whichever comes first.
	pub fn generate(&mut self, initial_text: &str, target_length: usize) -> String {
		let mut generated: Vec<char> = initial_text.chars().collect();
		if generated.len() < self.window_length {
			debug!(
				"initial text holds {} characters, fewer than the window length {}",
				generated.len(),
				self.window_length
			);
			return initial_text.to_owned();
		}

		while generated.len() < target_length {
			let window: String = generated[generated.len() - self.window_length..].iter().collect();

			let Some(transitions) = self.windows.get(&window) else {
				debug!("window {window:?} never seen during training, stopping at {} characters", generated.len());
				break;
			};
			let Some(next_char) = transitions.sample(&mut self.source) else {
				break;
			};

			trace!("{window:?} -> {next_char:?}");
			generated.push(next_char);
		}

		generated.into_iter().collect()
	}
}

fn read_char(c: io::Result<char>) -> Result<char> {
	c.map_err(|source| ModelError::Io { context: "failed to read corpus".to_owned(), source })
}

impl<R> fmt::Display for LanguageModel<R> {
	/// One line per window: `<window> : <transitions>`.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (window, transitions) in &self.windows {
			writeln!(f, "{window} : {transitions}")?;
		}
		Ok(())
	}
}
