use std::fmt;
use std::slice;

use super::random::RandomSource;
use super::tally::CharTally;

/// All characters observed after one window, in first-observation order.
///
/// Conceptually, this is the set of outgoing edges of one node in a Markov
/// chain, weighted by how many times each edge was observed.
///
/// ## Responsibilities:
/// - Accumulate character occurrences during training
/// - Turn occurrence counts into probabilities and cumulative probabilities
/// - Pick the next character by weighted random sampling
///
/// ## Invariants
/// - At most one tally per distinct character
/// - Tallies keep the order in which their character was first seen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransitionList {
	tallies: Vec<CharTally>,
}

impl TransitionList {
	/// Creates an empty list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Records one occurrence of `character`.
	///
	/// - If a tally for `character` exists, its count is increased.
	/// - Otherwise, a new tally with a count of 1 is appended.
	pub fn update(&mut self, character: char) {
		match self.tallies.iter_mut().find(|tally| tally.character() == character) {
			Some(tally) => tally.increment(),
			None => self.tallies.push(CharTally::new(character)),
		}
	}

	/// Number of distinct characters in the list.
	pub fn len(&self) -> usize {
		self.tallies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.tallies.is_empty()
	}

	/// Returns the tally at `index`, in insertion order.
	///
	/// # Panics
	/// Panics if `index >= self.len()`.
	pub fn get(&self, index: usize) -> &CharTally {
		&self.tallies[index]
	}

	/// Returns the tally at `index`, or `None` if out of range.
	pub fn try_get(&self, index: usize) -> Option<&CharTally> {
		self.tallies.get(index)
	}

	pub fn iter(&self) -> slice::Iter<'_, CharTally> {
		self.tallies.iter()
	}

	/// Sum of all occurrence counts.
	pub fn total_count(&self) -> u64 {
		self.tallies.iter().map(CharTally::count).sum()
	}

	/// Sets `probability` and `cumulative_probability` on every tally.
	///
	/// Tallies are visited in stored order; each cumulative value is the
	/// running sum of probabilities after adding the current one. No
	/// renormalization is applied, so the last cumulative value may land a
	/// rounding error away from 1.0 (see `sample`).
	///
	/// Does nothing on an empty list.
	pub fn compute_probabilities(&mut self) {
		let total = self.total_count();
		if total == 0 {
			return;
		}

		let total = total as f64;
		let mut cumulative = 0.0;
		for tally in &mut self.tallies {
			let probability = tally.count() as f64 / total;
			cumulative += probability;
			tally.set_probabilities(probability, cumulative);
		}
	}

	/// Picks a character using the cumulative probabilities.
	///
	/// Draws `r` in `[0, 1)` from `source` and returns the first character
	/// whose cumulative probability is strictly greater than `r`. When the
	/// scan runs off the end (cumulative sum rounded just under `r`), the last
	/// character is returned.
	///
	/// Returns `None` if the list is empty. No draw is consumed in that case.
	pub fn sample<R: RandomSource + ?Sized>(&self, source: &mut R) -> Option<char> {
		let last = self.tallies.last()?;
		let r = source.next_unit();

		for tally in &self.tallies {
			if r < tally.cumulative_probability() {
				return Some(tally.character());
			}
		}

		Some(last.character())
	}
}

impl<'a> IntoIterator for &'a TransitionList {
	type Item = &'a CharTally;
	type IntoIter = slice::Iter<'a, CharTally>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl fmt::Display for TransitionList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("(")?;
		for (index, tally) in self.tallies.iter().enumerate() {
			if index > 0 {
				f.write_str(" ")?;
			}
			write!(f, "{tally}")?;
		}
		f.write_str(")")
	}
}
