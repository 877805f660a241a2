use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Leg of the journey a particle is on. Ordered: a particle only moves forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
	ToBalancer,
	ToServer,
	Done,
}

#[derive(Clone, Debug)]
pub struct WorkerNode {
	pub pos: Point,
	pub label: String,
	pub load: f64,
	pub max_load: f64,
	pub color: &'static str,
}

impl WorkerNode {
	pub fn load_fraction(&self) -> f64 {
		if self.max_load <= 0.0 {
			0.0
		} else {
			(self.load / self.max_load).clamp(0.0, 1.0)
		}
	}

	pub fn add_load(&mut self, amount: f64) {
		self.load = (self.load + amount).clamp(0.0, self.max_load);
	}

	pub fn decay(&mut self, amount: f64) {
		self.load = (self.load - amount).max(0.0);
	}
}

#[derive(Clone, Debug)]
pub struct Particle {
	pub pos: Point,
	pub target: Point,
	pub speed: f64,
	pub phase: Phase,
	pub worker: usize,
	pub radius: f64,
	pub opacity: f64,
	pub trail: VecDeque<Point>,
}

impl Particle {
	pub fn push_trail(&mut self, cap: usize) {
		self.trail.push_back(self.pos);
		while self.trail.len() > cap {
			self.trail.pop_front();
		}
	}
}

/// Tunables for the load balancer simulation. `Default` gives the stock look.
#[derive(Clone, Debug, PartialEq)]
pub struct SimParams {
	pub worker_count: usize,
	/// Frames between spawns.
	pub spawn_interval: u64,
	/// Workers within this much of the minimum load are equally eligible.
	pub tolerance: f64,
	pub load_increment: f64,
	pub max_load: f64,
	/// Load shed by every worker per frame.
	pub decay: f64,
	pub trail_cap: usize,
	pub arrive_threshold: f64,
	pub fade_step: f64,
	pub min_speed: f64,
	pub speed_spread: f64,
	pub min_radius: f64,
	pub radius_spread: f64,
	/// Total width of the horizontal jitter applied at the source.
	pub source_jitter: f64,
	pub initial_opacity: f64,
}

impl Default for SimParams {
	fn default() -> Self {
		Self {
			worker_count: 4,
			spawn_interval: 18,
			tolerance: 15.0,
			load_increment: 8.0,
			max_load: 100.0,
			decay: 0.15,
			trail_cap: 12,
			arrive_threshold: 4.0,
			fade_step: 0.1,
			min_speed: 1.5,
			speed_spread: 1.5,
			min_radius: 2.0,
			radius_spread: 2.0,
			source_jitter: 60.0,
			initial_opacity: 0.9,
		}
	}
}
