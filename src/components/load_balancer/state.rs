use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, RngCore};

use super::select::{LeastLoaded, NodeSelector};
use super::types::{Particle, Phase, Point, SimParams, WorkerNode};
use crate::theme::{NEON_AMBER, NEON_BLUE, NEON_GREEN, NEON_PURPLE};

pub const WORKER_COLORS: &[&str] = &[NEON_GREEN, NEON_BLUE, NEON_AMBER, NEON_PURPLE];

/// Drawing surface size in CSS pixels plus the device pixel ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
	pub width: f64,
	pub height: f64,
	pub dpr: f64,
}

pub struct LoadBalancerSim<R: RngCore = SmallRng> {
	pub params: SimParams,
	pub surface: Surface,
	pub workers: Vec<WorkerNode>,
	pub particles: Vec<Particle>,
	frame_count: u64,
	visible: bool,
	selector: Box<dyn NodeSelector>,
	rng: R,
}

impl<R: RngCore> LoadBalancerSim<R> {
	pub fn new(params: SimParams, surface: Surface, rng: R) -> Self {
		let selector = LeastLoaded::new(params.tolerance);
		Self::with_selector(params, surface, rng, selector)
	}

	pub fn with_selector(
		params: SimParams,
		surface: Surface,
		rng: R,
		selector: impl NodeSelector + 'static,
	) -> Self {
		let mut sim = Self {
			params,
			surface,
			workers: Vec::new(),
			particles: Vec::new(),
			frame_count: 0,
			visible: false,
			selector: Box::new(selector),
			rng,
		};
		sim.layout_workers();
		sim
	}

	/// Rebuild the worker row for a new surface size. Loads start over; the
	/// particles in flight are kept.
	pub fn resize(&mut self, surface: Surface) {
		self.surface = surface;
		self.layout_workers();
	}

	fn layout_workers(&mut self) {
		let Surface { width, height, .. } = self.surface;
		let n = self.params.worker_count;
		let cx = width / 2.0;
		let spacing = (width * 0.18).min(140.0);
		let y = height * 0.78;
		let first = cx - (n.saturating_sub(1) as f64 / 2.0) * spacing;

		self.workers = (0..n)
			.map(|i| WorkerNode {
				pos: Point::new(first + i as f64 * spacing, y),
				label: format!("srv-{}", i),
				load: 0.0,
				max_load: self.params.max_load,
				color: WORKER_COLORS[i % WORKER_COLORS.len()],
			})
			.collect();
	}

	pub fn balancer(&self) -> Point {
		Point::new(self.surface.width / 2.0, self.surface.height * 0.38)
	}

	pub fn source(&self) -> Point {
		Point::new(self.surface.width / 2.0, self.surface.height * 0.05)
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}

	pub fn set_visible(&mut self, visible: bool) {
		self.visible = visible;
	}

	/// Advance one frame if the surface is on screen. Returns whether a step ran.
	pub fn frame(&mut self) -> bool {
		if !self.visible {
			return false;
		}
		self.step();
		true
	}

	pub fn step(&mut self) {
		let decay = self.params.decay;
		for worker in &mut self.workers {
			worker.decay(decay);
		}

		let (cap, threshold, fade) = (
			self.params.trail_cap,
			self.params.arrive_threshold,
			self.params.fade_step,
		);
		let workers = &self.workers;
		self.particles.retain_mut(|p| {
			p.push_trail(cap);

			let dist = p.pos.distance(p.target);
			if dist >= threshold {
				p.pos.x += (p.target.x - p.pos.x) / dist * p.speed;
				p.pos.y += (p.target.y - p.pos.y) / dist * p.speed;
				return true;
			}

			match (p.phase, workers.get(p.worker)) {
				(Phase::ToBalancer, Some(worker)) => {
					p.target = worker.pos;
					p.phase = Phase::ToServer;
					p.trail.clear();
					true
				}
				_ => {
					p.phase = Phase::Done;
					p.opacity -= fade;
					p.opacity > 0.0
				}
			}
		});

		self.frame_count += 1;
		if self.params.spawn_interval > 0 && self.frame_count % self.params.spawn_interval == 0 {
			self.spawn();
		}
	}

	/// Route one new particle through the balancer to a selected worker.
	pub fn spawn(&mut self) -> Option<usize> {
		let loads: Vec<f64> = self.workers.iter().map(|w| w.load).collect();
		let idx = self.selector.select(&loads, &mut self.rng)?;

		let jitter = (self.rng.gen_range(0.0..1.0) - 0.5) * self.params.source_jitter;
		let source = self.source();
		let speed = self.params.min_speed + self.rng.gen_range(0.0..1.0) * self.params.speed_spread;
		let radius = self.params.min_radius + self.rng.gen_range(0.0..1.0) * self.params.radius_spread;

		self.particles.push(Particle {
			pos: Point::new(source.x + jitter, source.y),
			target: self.balancer(),
			speed,
			phase: Phase::ToBalancer,
			worker: idx,
			radius,
			opacity: self.params.initial_opacity,
			trail: VecDeque::with_capacity(self.params.trail_cap + 1),
		});
		self.workers[idx].add_load(self.params.load_increment);
		Some(idx)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;
	use rand::SeedableRng;

	fn surface() -> Surface {
		Surface {
			width: 800.0,
			height: 400.0,
			dpr: 1.0,
		}
	}

	fn sim(seed: u64) -> LoadBalancerSim {
		let mut sim = LoadBalancerSim::new(SimParams::default(), surface(), SmallRng::seed_from_u64(seed));
		sim.set_visible(true);
		sim
	}

	fn routed_to(worker: usize) -> LoadBalancerSim {
		let mut sim = LoadBalancerSim::with_selector(
			SimParams::default(),
			surface(),
			SmallRng::seed_from_u64(worker as u64),
			Fixed(worker),
		);
		sim.set_visible(true);
		sim
	}

	/// Always routes to a fixed worker.
	struct Fixed(usize);

	impl NodeSelector for Fixed {
		fn select(&mut self, loads: &[f64], _: &mut dyn RngCore) -> Option<usize> {
			(self.0 < loads.len()).then_some(self.0)
		}
	}

	#[test]
	fn workers_are_evenly_spaced_and_centred() {
		let sim = sim(1);
		assert_eq!(sim.workers.len(), 4);

		// min(800 * 0.18, 140) = 140
		let xs: Vec<f64> = sim.workers.iter().map(|w| w.pos.x).collect();
		assert_relative_eq!(xs[0], 400.0 - 1.5 * 140.0);
		for pair in xs.windows(2) {
			assert_relative_eq!(pair[1] - pair[0], 140.0);
		}
		assert_relative_eq!((xs[0] + xs[3]) / 2.0, 400.0);
		for w in &sim.workers {
			assert_relative_eq!(w.pos.y, 400.0 * 0.78);
			assert_eq!(w.load, 0.0);
		}
		assert_eq!(sim.workers[2].label, "srv-2");
	}

	#[test]
	fn narrow_surfaces_shrink_spacing() {
		let mut sim = sim(1);
		sim.resize(Surface {
			width: 500.0,
			height: 300.0,
			dpr: 2.0,
		});
		assert_relative_eq!(sim.workers[1].pos.x - sim.workers[0].pos.x, 90.0);
	}

	#[test]
	fn load_stays_within_bounds_over_long_runs() {
		let mut sim = sim(7);
		for _ in 0..20_000 {
			sim.step();
			for w in &sim.workers {
				assert!(w.load >= 0.0 && w.load <= w.max_load, "load out of range: {}", w.load);
			}
		}
	}

	#[test]
	fn saturated_worker_clamps_at_max_load() {
		let mut sim = routed_to(0);
		for _ in 0..50 {
			sim.spawn();
		}
		assert_relative_eq!(sim.workers[0].load, 100.0);
	}

	#[test]
	fn spawns_add_increment_per_worker_without_decay() {
		let mut sim = sim(11);
		let n = 40;
		for _ in 0..n {
			sim.spawn();
		}
		let total: f64 = sim.workers.iter().map(|w| w.load).sum();
		// 40 * 8 = 320 spread over four workers, none of which reaches 100.
		assert_relative_eq!(total, n as f64 * 8.0);
		assert_eq!(sim.particles.len(), n);
	}

	#[test]
	fn spawn_routes_to_least_loaded_candidates() {
		let mut sim = sim(5);
		for (w, load) in sim.workers.iter_mut().zip([10.0, 10.0, 30.0, 50.0]) {
			w.load = load;
		}
		let idx = sim.spawn().unwrap();
		assert!(idx < 2);
		assert_relative_eq!(sim.workers[idx].load, 18.0);
	}

	#[test]
	fn new_particles_start_near_source_heading_to_balancer() {
		let mut sim = sim(9);
		sim.spawn();
		let p = &sim.particles[0];
		assert_eq!(p.phase, Phase::ToBalancer);
		assert_eq!(p.target, sim.balancer());
		assert!((p.pos.x - 400.0).abs() <= 30.0);
		assert_relative_eq!(p.pos.y, 20.0);
		assert!(p.speed >= 1.5 && p.speed < 3.0);
		assert!(p.radius >= 2.0 && p.radius < 4.0);
		assert_relative_eq!(p.opacity, 0.9);
	}

	#[test]
	fn spawns_follow_the_frame_interval() {
		let mut sim = sim(2);
		for _ in 0..17 {
			sim.step();
		}
		assert!(sim.particles.is_empty());
		sim.step();
		assert_eq!(sim.particles.len(), 1);
		assert_eq!(sim.frame_count, 18);
	}

	#[test]
	fn phases_only_move_forward_and_faded_particles_are_removed() {
		let mut sim = sim(13);
		sim.spawn();
		let mut last = Phase::ToBalancer;
		let mut saw_server = false;
		let mut saw_done = false;

		// Only follow the first particle; later spawns are ignored.
		for _ in 0..2_000 {
			sim.params.spawn_interval = 0;
			sim.step();
			let Some(p) = sim.particles.first() else {
				break;
			};
			assert!(p.phase >= last, "phase went from {:?} to {:?}", last, p.phase);
			if p.phase == Phase::Done {
				assert!(p.opacity > 0.0);
				saw_done = true;
			}
			saw_server |= p.phase == Phase::ToServer;
			last = p.phase;
		}
		assert!(saw_server && saw_done);
		assert!(sim.particles.is_empty());
	}

	#[test]
	fn handoff_at_balancer_clears_trail_and_retargets() {
		let mut sim = routed_to(3);
		sim.spawn();
		let balancer = sim.balancer();
		sim.particles[0].pos = Point::new(balancer.x + 1.0, balancer.y);
		sim.particles[0].trail.push_back(Point::default());

		sim.params.spawn_interval = 0;
		sim.step();

		let p = &sim.particles[0];
		assert_eq!(p.phase, Phase::ToServer);
		assert_eq!(p.target, sim.workers[3].pos);
		assert!(p.trail.is_empty());
	}

	#[test]
	fn trail_never_exceeds_cap() {
		let mut sim = sim(21);
		for _ in 0..5_000 {
			sim.step();
			for p in &sim.particles {
				assert!(p.trail.len() <= 12);
			}
		}
	}

	#[test]
	fn motion_moves_speed_units_toward_target() {
		let mut sim = sim(8);
		sim.spawn();
		sim.params.spawn_interval = 0;
		let before = sim.particles[0].clone();
		sim.step();
		let after = &sim.particles[0];
		assert_relative_eq!(before.pos.distance(after.pos), before.speed, epsilon = 1e-9);
		assert!(after.pos.distance(after.target) < before.pos.distance(before.target));
	}

	#[test]
	fn resize_resets_workers_but_keeps_particles() {
		let mut sim = sim(6);
		for _ in 0..5 {
			sim.spawn();
		}
		let in_flight = sim.particles.len();

		sim.resize(Surface {
			width: 1200.0,
			height: 600.0,
			dpr: 2.0,
		});

		assert_eq!(sim.particles.len(), in_flight);
		assert_eq!(sim.surface.dpr, 2.0);
		for (i, w) in sim.workers.iter().enumerate() {
			assert_eq!(w.load, 0.0);
			assert_relative_eq!(w.pos.x, 600.0 - 1.5 * 140.0 + i as f64 * 140.0);
			assert_relative_eq!(w.pos.y, 600.0 * 0.78);
		}
	}

	#[test]
	fn hidden_surface_freezes_state() {
		let mut sim = sim(10);
		for _ in 0..40 {
			sim.frame();
		}
		sim.set_visible(false);

		let loads: Vec<f64> = sim.workers.iter().map(|w| w.load).collect();
		let positions: Vec<Point> = sim.particles.iter().map(|p| p.pos).collect();
		let frames = sim.frame_count;

		for _ in 0..100 {
			assert!(!sim.frame());
		}
		assert_eq!(sim.frame_count, frames);
		assert_eq!(sim.workers.iter().map(|w| w.load).collect::<Vec<_>>(), loads);
		assert_eq!(sim.particles.iter().map(|p| p.pos).collect::<Vec<_>>(), positions);

		sim.set_visible(true);
		assert!(sim.frame());
		assert_eq!(sim.frame_count, frames + 1);
	}

	#[test]
	fn particles_bound_to_missing_workers_fade_out() {
		let mut sim = routed_to(3);
		sim.spawn();
		sim.params.worker_count = 2;
		sim.resize(surface());
		let balancer = sim.balancer();
		sim.particles[0].pos = balancer;

		sim.params.spawn_interval = 0;
		sim.step();
		assert_eq!(sim.particles[0].phase, Phase::Done);
	}
}
