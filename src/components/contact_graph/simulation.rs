//! Per-frame force layout.
//!
//! One call to [`Simulation::step`] is one rendered frame. There is no time
//! step: forces are added straight onto velocity, so the layout settles faster
//! on faster displays. That coupling is accepted here; the goal is a stable,
//! legible clustering, not physical accuracy.
//!
//! Repulsion is all-pairs and therefore O(n²) per frame, fine for the low
//! hundreds of nodes a contact network produces.

use super::config::{ScaleTargets, SimulationParameters};
use super::highlight::Highlight;
use super::types::GraphNode;

#[derive(Debug, Default)]
pub struct Simulation {
	pub params: SimulationParameters,
	pub scale_targets: ScaleTargets,
	// Reused force accumulator, one entry per node.
	forces: Vec<(f64, f64)>,
}

impl Simulation {
	pub fn new(params: SimulationParameters, scale_targets: ScaleTargets) -> Self {
		Self {
			params,
			scale_targets,
			forces: Vec::new(),
		}
	}

	/// Advances every node by one frame. Forces are read from the positions
	/// at entry, so the result does not depend on node order.
	pub fn step(
		&mut self,
		nodes: &mut [GraphNode],
		links: &[(usize, usize)],
		highlight: &Highlight,
		center: (f64, f64),
	) {
		let p = self.params;
		self.forces.clear();
		self.forces.resize(nodes.len(), (0.0, 0.0));

		self.accumulate_repulsion(nodes);

		for &(a, b) in links {
			let (dx, dy) = (nodes[b].x - nodes[a].x, nodes[b].y - nodes[a].y);
			let (fx, fy) = (dx * p.force_spring, dy * p.force_spring);
			self.forces[a].0 += fx;
			self.forces[a].1 += fy;
			self.forces[b].0 -= fx;
			self.forces[b].1 -= fy;
		}

		for (idx, (node, force)) in nodes.iter_mut().zip(&self.forces).enumerate() {
			let fx = force.0 + (center.0 - node.x) * p.force_center;
			let fy = force.1 + (center.1 - node.y) * p.force_center;
			node.vx += fx;
			node.vy += fy;
			node.x += node.vx;
			node.y += node.vy;
			node.vx *= p.damping_factor;
			node.vy *= p.damping_factor;

			let target = self.scale_target(highlight, idx);
			node.scale += (target - node.scale) * p.scale_smoothing;
		}
	}

	fn accumulate_repulsion(&mut self, nodes: &[GraphNode]) {
		let (charge, eps) = (self.params.force_charge, self.params.epsilon);
		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let (dx, dy) = (nodes[i].x - nodes[j].x, nodes[i].y - nodes[j].y);
				let dist_sq = dx * dx + dy * dy + eps;
				let dist = dist_sq.sqrt();
				let force = charge / dist_sq;
				let (fx, fy) = (dx / dist * force, dy / dist * force);
				self.forces[i].0 += fx;
				self.forces[i].1 += fy;
				self.forces[j].0 -= fx;
				self.forces[j].1 -= fy;
			}
		}
	}

	fn scale_target(&self, highlight: &Highlight, idx: usize) -> f64 {
		if highlight.is_hovered(idx) {
			self.scale_targets.hovered
		} else if highlight.is_neighbor(idx) {
			self.scale_targets.neighbor
		} else {
			self.scale_targets.base
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::contact_graph::builder::build_graph_with_rng;
	use crate::components::contact_graph::config::GraphConfig;
	use crate::components::contact_graph::types::{Contact, NodeKind};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	const CENTER: (f64, f64) = (600.0, 325.0);

	fn node_at(x: f64, y: f64) -> GraphNode {
		GraphNode {
			id: format!("{x},{y}"),
			label: String::new(),
			kind: NodeKind::Person,
			x,
			y,
			vx: 0.0,
			vy: 0.0,
			scale: 1.0,
			origin: String::new(),
		}
	}

	fn distance(a: &GraphNode, b: &GraphNode) -> f64 {
		((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
	}

	#[test]
	fn repulsion_pushes_close_nodes_apart() {
		let mut sim = Simulation::default();
		let mut nodes = vec![node_at(598.0, 325.0), node_at(602.0, 325.0)];
		sim.step(&mut nodes, &[], &Highlight::default(), CENTER);
		assert!(distance(&nodes[0], &nodes[1]) > 4.0);
	}

	#[test]
	fn spring_pulls_linked_nodes_together() {
		let mut sim = Simulation::default();
		let mut nodes = vec![node_at(200.0, 325.0), node_at(1000.0, 325.0)];
		sim.step(&mut nodes, &[(0, 1)], &Highlight::default(), CENTER);
		assert!(distance(&nodes[0], &nodes[1]) < 800.0);
	}

	#[test]
	fn centering_pulls_a_lone_node_inwards() {
		let mut sim = Simulation::default();
		let mut nodes = vec![node_at(1100.0, 600.0)];
		sim.step(&mut nodes, &[], &Highlight::default(), CENTER);
		assert!(nodes[0].x < 1100.0 && nodes[0].y < 600.0);
	}

	#[test]
	fn coincident_nodes_stay_finite() {
		let mut sim = Simulation::default();
		let mut nodes = vec![node_at(300.0, 300.0), node_at(300.0, 300.0)];
		for _ in 0..10 {
			sim.step(&mut nodes, &[(0, 1)], &Highlight::default(), CENTER);
		}
		assert!(nodes.iter().all(|n| n.x.is_finite() && n.y.is_finite()));
	}

	#[test]
	fn velocity_is_damped_after_integration() {
		let mut sim = Simulation::default();
		let mut nodes = vec![node_at(600.0, 325.0)];
		nodes[0].vx = 10.0;
		sim.step(&mut nodes, &[], &Highlight::default(), CENTER);
		assert_eq!(nodes[0].x, 610.0);
		assert!((nodes[0].vx - 8.0).abs() < 1e-12);
	}

	#[test]
	fn scale_eases_towards_role_targets() {
		let mut sim = Simulation::default();
		let mut nodes = vec![node_at(100.0, 100.0), node_at(500.0, 100.0), node_at(900.0, 500.0)];
		let links = [(0, 1)];
		let highlight = Highlight::propagate(Some(0), &links);

		sim.step(&mut nodes, &links, &highlight, CENTER);
		assert!((nodes[0].scale - 1.15).abs() < 1e-12);
		assert!((nodes[1].scale - 1.06).abs() < 1e-12);
		assert_eq!(nodes[2].scale, 1.0);

		for _ in 0..200 {
			sim.step(&mut nodes, &links, &highlight, CENTER);
		}
		assert!((nodes[0].scale - 2.0).abs() < 1e-6);
		assert!((nodes[1].scale - 1.4).abs() < 1e-6);
	}

	#[test]
	fn long_runs_stay_finite_and_bounded() {
		let contacts: Vec<_> = (0..60)
			.map(|i| {
				let tags = [["alpha", "beta", "gamma", "delta"][i % 4], ["x", "y"][i % 2]];
				Contact::new(i.to_string(), format!("C{i}"), &tags)
			})
			.collect();
		let config = GraphConfig::default();
		let mut data = build_graph_with_rng(&contacts, &config, &mut StdRng::seed_from_u64(42));
		let index: std::collections::HashMap<_, _> = data
			.nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();
		let links: Vec<_> = data
			.edges
			.iter()
			.map(|e| (index[&e.source], index[&e.target]))
			.collect();

		let mut sim = Simulation::default();
		let highlight = Highlight::propagate(Some(1), &links);
		for _ in 0..2000 {
			sim.step(&mut data.nodes, &links, &highlight, config.center());
		}
		for node in &data.nodes {
			assert!(node.x.is_finite() && node.y.is_finite());
			assert!(node.vx.is_finite() && node.vy.is_finite());
			assert!(node.x.abs() < 1e5 && node.y.abs() < 1e5);
		}
	}
}
