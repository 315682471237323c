use proptest::prelude::*;
use rs_markov_core::{LanguageModel, TransitionList};

const TOLERANCE: f64 = 1e-9;

fn list_from(chars: &[char], repeat: usize) -> TransitionList {
	let mut list = TransitionList::new();
	for &c in chars {
		for _ in 0..repeat {
			list.update(c);
		}
	}
	list.compute_probabilities();
	list
}

proptest! {
	#[test]
	fn probabilities_sum_to_one(corpus in "[a-e ]{0,300}", window_length in 1usize..5) {
		let mut model = LanguageModel::with_seed(window_length, 0).unwrap();
		model.train_str(&corpus).unwrap();

		for window in model.windows() {
			let transitions = model.transitions(window).unwrap();
			let sum: f64 = transitions.iter().map(|tally| tally.probability()).sum();
			prop_assert!((sum - 1.0).abs() < TOLERANCE, "{window:?}: sum = {sum}");
		}
	}

	#[test]
	fn cumulative_is_monotonic_and_ends_at_one(corpus in ".{0,200}", window_length in 1usize..4) {
		let mut model = LanguageModel::with_seed(window_length, 0).unwrap();
		model.train_str(&corpus).unwrap();

		for window in model.windows() {
			prop_assert_eq!(window.chars().count(), window_length);

			let transitions = model.transitions(window).unwrap();
			let cumulative: Vec<f64> = transitions.iter().map(|tally| tally.cumulative_probability()).collect();
			prop_assert!(cumulative.windows(2).all(|pair| pair[0] <= pair[1]));
			let last = cumulative.last().copied().unwrap_or_default();
			prop_assert!((last - 1.0).abs() < TOLERANCE, "{window:?}: last = {last}");
		}
	}

	#[test]
	fn same_seed_same_output(
		corpus in "[a-d]{10,200}",
		seed in any::<u64>(),
		window_length in 1usize..4,
		target_length in 0usize..150,
	) {
		let mut first = LanguageModel::with_seed(window_length, seed).unwrap();
		let mut second = LanguageModel::with_seed(window_length, seed).unwrap();
		first.train_str(&corpus).unwrap();
		second.train_str(&corpus).unwrap();

		let initial: String = corpus.chars().take(window_length).collect();
		prop_assert_eq!(first.generate(&initial, target_length), second.generate(&initial, target_length));
	}

	#[test]
	fn short_initial_text_is_returned_unchanged(
		corpus in "[a-z]{0,100}",
		initial in "[a-z]{0,4}",
		target_length in 0usize..50,
	) {
		let mut model = LanguageModel::with_seed(5, 3).unwrap();
		model.train_str(&corpus).unwrap();
		prop_assert_eq!(model.generate(&initial, target_length), initial);
	}

	#[test]
	fn output_never_exceeds_target(corpus in "[ab]{5,100}", target_length in 0usize..80) {
		let mut model = LanguageModel::with_seed(2, 8).unwrap();
		model.train_str(&corpus).unwrap();

		let initial: String = corpus.chars().take(2).collect();
		let generated = model.generate(&initial, target_length);
		prop_assert!(generated.starts_with(&initial));
		prop_assert!(generated.chars().count() <= target_length.max(2));
	}

	#[test]
	fn scaling_counts_keeps_probabilities(
		chars in prop::collection::vec(prop::char::range('a', 'h'), 1..40),
		factor in 2usize..6,
	) {
		let unscaled = list_from(&chars, 1);
		let scaled = list_from(&chars, factor);

		prop_assert_eq!(unscaled.len(), scaled.len());
		for (a, b) in unscaled.iter().zip(scaled.iter()) {
			prop_assert_eq!(a.character(), b.character());
			prop_assert_eq!(a.count() * factor as u64, b.count());
			prop_assert!((a.probability() - b.probability()).abs() < TOLERANCE);
			prop_assert!((a.cumulative_probability() - b.cumulative_probability()).abs() < TOLERANCE);
		}
	}
}
