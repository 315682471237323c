use std::path::PathBuf;

use clap::Parser;
use log::info;

use rs_markov_core::GenerationConfig;

/// Trains a character-level Markov model on a corpus and prints generated text.
#[derive(Parser, Debug)]
#[command(name = "rs-markov", version)]
struct Cli {
	/// TOML file with default settings (explicit flags take precedence)
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Text file to train on
	#[arg(long)]
	corpus: Option<PathBuf>,

	/// Number of characters in a window
	#[arg(short, long)]
	window_length: Option<usize>,

	/// Text the generation starts from
	#[arg(short, long)]
	initial_text: Option<String>,

	/// Length of the generated text, initial text included
	#[arg(short = 'n', long)]
	length: Option<usize>,

	/// Fixed seed for reproducible output (random when omitted)
	#[arg(short, long)]
	seed: Option<u64>,

	/// Print the learned window table instead of generating
	#[arg(long)]
	dump: bool,

	/// Log at debug level unless RUST_LOG says otherwise
	#[arg(short, long)]
	verbose: bool,
}

impl Cli {
	/// Builds the effective configuration: file values, then flag overrides.
	fn resolve_config(&self) -> Result<GenerationConfig, Box<dyn std::error::Error>> {
		let mut config = match &self.config {
			Some(path) => GenerationConfig::from_file(path)?,
			None => GenerationConfig::default(),
		};

		if let Some(corpus) = &self.corpus {
			config.corpus = corpus.clone();
		}
		if let Some(window_length) = self.window_length {
			config.window_length = window_length;
		}
		if let Some(initial_text) = &self.initial_text {
			config.initial_text = initial_text.clone();
		}
		if let Some(length) = self.length {
			config.text_length = length;
		}
		if self.seed.is_some() {
			config.seed = self.seed;
		}

		config.validate()?;
		Ok(config)
	}
}

fn init_logging(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	let config = cli.resolve_config()?;
	info!(
		"window length {}, seed {:?}, corpus {}",
		config.window_length,
		config.seed,
		config.corpus.display()
	);

	let mut model = config.build_model()?;
	model.train_file(&config.corpus)?;

	if cli.dump {
		print!("{model}");
	} else {
		println!("{}", model.generate(&config.initial_text, config.text_length));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::fs;

	use super::*;

	#[test]
	fn flags_build_a_config() {
		let cli = Cli::try_parse_from([
			"rs-markov", "--corpus", "shakespeare.txt", "-w", "5", "-i", "ROMEO", "-n", "200", "-s", "7",
		])
		.unwrap();
		let config = cli.resolve_config().unwrap();

		assert_eq!(config.corpus, PathBuf::from("shakespeare.txt"));
		assert_eq!(config.window_length, 5);
		assert_eq!(config.initial_text, "ROMEO");
		assert_eq!(config.text_length, 200);
		assert_eq!(config.seed, Some(7));
		assert!(!cli.dump);
	}

	#[test]
	fn flags_override_config_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("markov.toml");
		fs::write(&path, "window_length = 7\nseed = 20\ncorpus = \"origin.txt\"\ntext_length = 50\n").unwrap();

		let cli = Cli::try_parse_from([
			"rs-markov",
			"--config",
			path.to_str().unwrap(),
			"--window-length",
			"4",
		])
		.unwrap();
		let config = cli.resolve_config().unwrap();

		assert_eq!(config.window_length, 4);
		assert_eq!(config.seed, Some(20));
		assert_eq!(config.corpus, PathBuf::from("origin.txt"));
		assert_eq!(config.text_length, 50);
	}

	#[test]
	fn missing_corpus_is_rejected() {
		let cli = Cli::try_parse_from(["rs-markov", "-w", "3"]).unwrap();
		assert!(cli.resolve_config().is_err());
	}

	#[test]
	fn zero_window_length_is_rejected() {
		let cli = Cli::try_parse_from(["rs-markov", "--corpus", "a.txt", "-w", "0"]).unwrap();
		assert!(cli.resolve_config().is_err());
	}
}
