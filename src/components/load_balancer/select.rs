use rand::{Rng, RngCore};

/// Picks the worker that receives the next particle.
pub trait NodeSelector {
	/// Returns an index into `loads`, or `None` when there is nothing to pick.
	fn select(&mut self, loads: &[f64], rng: &mut dyn RngCore) -> Option<usize>;
}

/// Prefer the least loaded workers, breaking near-ties uniformly at random so
/// equal workers do not fall into lockstep.
#[derive(Clone, Copy, Debug)]
pub struct LeastLoaded {
	pub tolerance: f64,
}

impl LeastLoaded {
	pub fn new(tolerance: f64) -> Self {
		Self { tolerance }
	}

	/// Indices whose load is at most `min + tolerance`.
	pub fn candidates(&self, loads: &[f64]) -> Vec<usize> {
		let min = loads.iter().copied().fold(f64::INFINITY, f64::min);
		loads
			.iter()
			.enumerate()
			.filter(|&(_, &load)| load <= min + self.tolerance)
			.map(|(i, _)| i)
			.collect()
	}
}

impl NodeSelector for LeastLoaded {
	fn select(&mut self, loads: &[f64], rng: &mut dyn RngCore) -> Option<usize> {
		let candidates = self.candidates(loads);
		if candidates.is_empty() {
			return None;
		}
		Some(candidates[rng.gen_range(0..candidates.len())])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;
	use rand::rngs::SmallRng;

	#[test]
	fn candidates_are_the_near_minimum_nodes() {
		let selector = LeastLoaded::new(15.0);
		assert_eq!(selector.candidates(&[10.0, 10.0, 30.0, 50.0]), vec![0, 1]);
	}

	#[test]
	fn tolerance_edge_is_inclusive() {
		let selector = LeastLoaded::new(15.0);
		assert_eq!(selector.candidates(&[10.0, 25.0, 25.5]), vec![0, 1]);
	}

	#[test]
	fn selection_stays_within_candidates() {
		let mut selector = LeastLoaded::new(15.0);
		let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
		let loads = [10.0, 10.0, 30.0, 50.0];
		let mut seen = [false; 4];

		for _ in 0..500 {
			let idx = selector.select(&loads, &mut rng).unwrap();
			assert!(idx < 2, "picked overloaded node {}", idx);
			seen[idx] = true;
		}
		// Both tied nodes get traffic.
		assert!(seen[0] && seen[1]);
	}

	#[test]
	fn empty_topology_selects_nothing() {
		let mut selector = LeastLoaded::new(15.0);
		let mut rng = SmallRng::seed_from_u64(1);
		assert_eq!(selector.select(&[], &mut rng), None);
	}
}
