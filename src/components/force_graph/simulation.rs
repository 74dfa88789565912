//! Force-directed layout with link, many-body, centering and collision forces.
//!
//! Positions live in a flat `Vec<SimNode>`; everything else (edges, draw
//! code, hit testing) refers to nodes by index. The simulation is the only
//! writer of positions. Pins (`fx`/`fy`) are how callers override a node.

use std::f64::consts::PI;

/// Tunable constants for every force and for the cooling schedule.
#[derive(Clone, Debug, PartialEq)]
pub struct ForceParameters {
	/// Link rest length is `link_base_distance + (4 - strength) * link_distance_step`.
	pub link_base_distance: f64,
	pub link_distance_step: f64,
	/// Link spring constant is `strength * link_strength_scale`.
	pub link_strength_scale: f64,
	/// Negative values repel.
	pub charge_strength: f64,
	pub charge_distance_min: f64,
	pub charge_distance_max: f64,
	pub center_strength: f64,
	pub collide_radius: f64,
	pub collide_strength: f64,
	pub alpha_min: f64,
	pub alpha_decay: f64,
	pub velocity_decay: f64,
}

impl Default for ForceParameters {
	fn default() -> Self {
		let alpha_min = 0.001;
		Self {
			link_base_distance: 50.0,
			link_distance_step: 20.0,
			link_strength_scale: 0.3,
			charge_strength: -300.0,
			charge_distance_min: 1.0,
			charge_distance_max: 200.0,
			center_strength: 1.0,
			collide_radius: 15.0,
			collide_strength: 1.0,
			alpha_min,
			// Reaches alpha_min from 1.0 in 300 ticks.
			alpha_decay: 1.0 - alpha_min.powf(1.0 / 300.0),
			velocity_decay: 0.4,
		}
	}
}

impl ForceParameters {
	pub fn link_distance(&self, strength: f64) -> f64 {
		self.link_base_distance + (4.0 - strength) * self.link_distance_step
	}

	pub fn link_strength(&self, strength: f64) -> f64 {
		strength * self.link_strength_scale
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimNode {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub fx: Option<f64>,
	pub fy: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimLink {
	pub source: usize,
	pub target: usize,
	pub distance: f64,
	pub strength: f64,
	/// Share of the correction applied to the target; weighted by degree so hubs move less.
	bias: f64,
}

/// Linear congruential generator used only to break exact coincidences.
#[derive(Clone, Debug)]
struct Lcg(u64);

impl Lcg {
	const A: u64 = 1_664_525;
	const C: u64 = 1_013_904_223;
	const M: u64 = 4_294_967_296;

	fn next(&mut self) -> f64 {
		self.0 = (Self::A * self.0 + Self::C) % Self::M;
		self.0 as f64 / Self::M as f64
	}

	fn jiggle(&mut self) -> f64 {
		(self.next() - 0.5) * 1e-6
	}
}

pub struct Simulation {
	params: ForceParameters,
	nodes: Vec<SimNode>,
	links: Vec<SimLink>,
	center: (f64, f64),
	alpha: f64,
	alpha_target: f64,
	running: bool,
	rng: Lcg,
}

impl Simulation {
	/// Seeds `node_count` nodes on a phyllotaxis spiral around `center`.
	///
	/// `links` yields `(source, target, strength)` triples over node indices;
	/// out-of-range indices must already have been filtered by the caller.
	pub fn new(
		node_count: usize,
		links: impl IntoIterator<Item = (usize, usize, f64)>,
		center: (f64, f64),
		params: ForceParameters,
	) -> Self {
		let initial_angle = PI * (3.0 - 5.0_f64.sqrt());
		let nodes = (0..node_count)
			.map(|i| {
				let radius = 10.0 * (0.5 + i as f64).sqrt();
				let angle = i as f64 * initial_angle;
				SimNode {
					x: center.0 + radius * angle.cos(),
					y: center.1 + radius * angle.sin(),
					..SimNode::default()
				}
			})
			.collect();

		let raw: Vec<(usize, usize, f64)> = links.into_iter().collect();
		let mut count = vec![0usize; node_count];
		for &(source, target, _) in &raw {
			count[source] += 1;
			count[target] += 1;
		}
		let links = raw
			.into_iter()
			.map(|(source, target, strength)| SimLink {
				source,
				target,
				distance: params.link_distance(strength),
				strength: params.link_strength(strength),
				bias: count[source] as f64 / (count[source] + count[target]) as f64,
			})
			.collect();

		Self {
			params,
			nodes,
			links,
			center,
			alpha: 1.0,
			alpha_target: 0.0,
			running: true,
			rng: Lcg(1),
		}
	}

	pub fn nodes(&self) -> &[SimNode] {
		&self.nodes
	}

	pub fn position(&self, idx: usize) -> (f64, f64) {
		let node = &self.nodes[idx];
		(node.x, node.y)
	}

	pub fn is_running(&self) -> bool {
		self.running
	}

	pub fn set_alpha_target(&mut self, target: f64) {
		self.alpha_target = target;
	}

	/// Resumes ticking without resetting alpha.
	pub fn restart(&mut self) {
		self.running = true;
	}

	pub fn pin(&mut self, idx: usize, x: f64, y: f64) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = Some(x);
			node.fy = Some(y);
		}
	}

	pub fn unpin(&mut self, idx: usize) {
		if let Some(node) = self.nodes.get_mut(idx) {
			node.fx = None;
			node.fy = None;
		}
	}

	/// Advances one tick if the simulation is still hot. Returns whether it ticked.
	pub fn step(&mut self) -> bool {
		if !self.running {
			return false;
		}
		self.tick();
		if self.alpha < self.params.alpha_min {
			self.running = false;
		}
		true
	}

	pub fn tick(&mut self) {
		self.alpha += (self.alpha_target - self.alpha) * self.params.alpha_decay;

		self.apply_links();
		self.apply_charge();
		self.apply_center();
		self.apply_collide();

		let keep = 1.0 - self.params.velocity_decay;
		for node in &mut self.nodes {
			match node.fx {
				Some(fx) => {
					node.x = fx;
					node.vx = 0.0;
				}
				None => {
					node.vx *= keep;
					node.x += node.vx;
				}
			}
			match node.fy {
				Some(fy) => {
					node.y = fy;
					node.vy = 0.0;
				}
				None => {
					node.vy *= keep;
					node.y += node.vy;
				}
			}
		}
	}

	fn apply_links(&mut self) {
		for i in 0..self.links.len() {
			let link = self.links[i];
			let (s, t) = (self.nodes[link.source], self.nodes[link.target]);
			let mut x = t.x + t.vx - s.x - s.vx;
			let mut y = t.y + t.vy - s.y - s.vy;
			if x == 0.0 {
				x = self.rng.jiggle();
			}
			if y == 0.0 {
				y = self.rng.jiggle();
			}
			let mut l = (x * x + y * y).sqrt();
			l = (l - link.distance) / l * self.alpha * link.strength;
			x *= l;
			y *= l;

			let target = &mut self.nodes[link.target];
			target.vx -= x * link.bias;
			target.vy -= y * link.bias;
			let source = &mut self.nodes[link.source];
			source.vx += x * (1.0 - link.bias);
			source.vy += y * (1.0 - link.bias);
		}
	}

	fn apply_charge(&mut self) {
		let strength = self.params.charge_strength * self.alpha;
		let min2 = self.params.charge_distance_min.powi(2);
		let max2 = self.params.charge_distance_max.powi(2);
		let positions: Vec<(f64, f64)> = self.nodes.iter().map(|n| (n.x, n.y)).collect();

		for (i, &(xi, yi)) in positions.iter().enumerate() {
			for (j, &(xj, yj)) in positions.iter().enumerate() {
				if i == j {
					continue;
				}
				let (mut x, mut y) = (xj - xi, yj - yi);
				let mut l = x * x + y * y;
				if l >= max2 {
					continue;
				}
				if x == 0.0 {
					x = self.rng.jiggle();
					l += x * x;
				}
				if y == 0.0 {
					y = self.rng.jiggle();
					l += y * y;
				}
				if l < min2 {
					l = (min2 * l).sqrt();
				}
				let node = &mut self.nodes[i];
				node.vx += x * strength / l;
				node.vy += y * strength / l;
			}
		}
	}

	fn apply_center(&mut self) {
		if self.nodes.is_empty() {
			return;
		}
		let n = self.nodes.len() as f64;
		let (sx, sy) = self
			.nodes
			.iter()
			.fold((0.0, 0.0), |(sx, sy), node| (sx + node.x, sy + node.y));
		let shift_x = (sx / n - self.center.0) * self.params.center_strength;
		let shift_y = (sy / n - self.center.1) * self.params.center_strength;
		for node in &mut self.nodes {
			node.x -= shift_x;
			node.y -= shift_y;
		}
	}

	fn apply_collide(&mut self) {
		let radius = self.params.collide_radius;
		let reach = radius + radius;
		let strength = self.params.collide_strength;
		// Equal radii split every correction evenly.
		let share = radius * radius / (radius * radius + radius * radius);

		for i in 0..self.nodes.len() {
			let node = self.nodes[i];
			let (xi, yi) = (node.x + node.vx, node.y + node.vy);
			for j in (i + 1)..self.nodes.len() {
				let other = self.nodes[j];
				let mut x = xi - other.x - other.vx;
				let mut y = yi - other.y - other.vy;
				let mut l = x * x + y * y;
				if l >= reach * reach {
					continue;
				}
				if x == 0.0 {
					x = self.rng.jiggle();
					l += x * x;
				}
				if y == 0.0 {
					y = self.rng.jiggle();
					l += y * y;
				}
				let l = l.sqrt();
				let l = (reach - l) / l * strength;
				x *= l;
				y *= l;

				self.nodes[i].vx += x * share;
				self.nodes[i].vy += y * share;
				self.nodes[j].vx -= x * (1.0 - share);
				self.nodes[j].vy -= y * (1.0 - share);
			}
		}
	}
}
