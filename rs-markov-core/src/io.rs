use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use std::vec;

use crate::error::{ModelError, Result};

/// Characters of a corpus file, yielded one at a time.
///
/// Produced by `read_corpus` and consumed by `LanguageModel::train`.
#[derive(Debug)]
pub struct CorpusChars {
	chars: vec::IntoIter<char>,
}

impl Iterator for CorpusChars {
	type Item = io::Result<char>;

	fn next(&mut self) -> Option<Self::Item> {
		self.chars.next().map(Ok)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.chars.size_hint()
	}
}

/// Reads a UTF-8 text file and returns its characters.
///
/// - Reads the entire file into memory
/// - Line endings are kept as-is (`\r\n` stays two characters)
///
/// # Errors
/// Returns `ModelError::Io` if the file cannot be opened or read, or if it
/// is not valid UTF-8.
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> Result<CorpusChars> {
	let path = filename.as_ref();
	let mut contents = String::new();
	File::open(path)
		.and_then(|mut file| file.read_to_string(&mut contents))
		.map_err(|source| ModelError::Io {
			context: format!("failed to read corpus {}", path.display()),
			source,
		})?;

	let chars: Vec<char> = contents.chars().collect();
	Ok(CorpusChars { chars: chars.into_iter() })
}
