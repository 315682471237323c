use rand::Rng;
use rand::rngs::{SmallRng, StdRng, ThreadRng};

/// Source of uniform draws used to pick the next character.
///
/// The model never reaches for a global generator: every draw goes through
/// the source it was built with, so a seeded source reproduces the same text
/// and a scripted source can drive sampling step by step in tests.
pub trait RandomSource {
	/// Returns a value uniformly distributed in `[0, 1)`.
	fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
	fn next_unit(&mut self) -> f64 {
		self.random::<f64>()
	}
}

impl RandomSource for SmallRng {
	fn next_unit(&mut self) -> f64 {
		self.random::<f64>()
	}
}

impl RandomSource for ThreadRng {
	fn next_unit(&mut self) -> f64 {
		self.random::<f64>()
	}
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn next_unit(&mut self) -> f64 {
		(**self).next_unit()
	}
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
	fn next_unit(&mut self) -> f64 {
		(**self).next_unit()
	}
}
