use std::fmt;

/// Occurrence counter for one character observed after a given window.
///
/// `probability` and `cumulative_probability` stay at `0.0` until the owning
/// `TransitionList` computes them once its counts are final.
#[derive(Clone, Debug, PartialEq)]
pub struct CharTally {
	character: char,
	count: u64,
	probability: f64,
	cumulative_probability: f64,
}

impl CharTally {
	/// Creates a tally for a first observation of `character`.
	pub(crate) fn new(character: char) -> Self {
		Self {
			character,
			count: 1,
			probability: 0.0,
			cumulative_probability: 0.0,
		}
	}

	pub fn character(&self) -> char {
		self.character
	}

	/// Number of times the character followed the window.
	pub fn count(&self) -> u64 {
		self.count
	}

	/// `count / total` for the owning window.
	pub fn probability(&self) -> f64 {
		self.probability
	}

	/// Sum of the probabilities of every tally up to and including this one.
	pub fn cumulative_probability(&self) -> f64 {
		self.cumulative_probability
	}

	pub(crate) fn increment(&mut self) {
		self.count += 1;
	}

	pub(crate) fn set_probabilities(&mut self, probability: f64, cumulative_probability: f64) {
		self.probability = probability;
		self.cumulative_probability = cumulative_probability;
	}
}

impl fmt::Display for CharTally {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"({} {} {} {})",
			self.character, self.count, self.probability, self.cumulative_probability
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_tally_counts_one_observation() {
		let tally = CharTally::new('x');
		assert_eq!(tally.character(), 'x');
		assert_eq!(tally.count(), 1);
		assert_eq!(tally.probability(), 0.0);
		assert_eq!(tally.cumulative_probability(), 0.0);
	}

	#[test]
	fn increment_and_display() {
		let mut tally = CharTally::new('e');
		tally.increment();
		tally.increment();
		tally.set_probabilities(0.75, 1.0);
		assert_eq!(tally.count(), 3);
		assert_eq!(tally.to_string(), "(e 3 0.75 1)");
	}
}
