use std::collections::HashMap;

use log::debug;

use super::builder::build_graph;
use super::config::GraphConfig;
use super::highlight::Highlight;
use super::hit;
use super::scale::SurfaceScale;
use super::simulation::Simulation;
use super::types::{Contact, GraphData, GraphNode, NodeKind};
use super::viewport::Viewport;

/// A pointer sample in displayed-box coordinates, as read off a DOM event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
	pub x: f64,
	pub y: f64,
	pub movement_x: f64,
	pub movement_y: f64,
	pub primary_down: bool,
}

/// Everything that lives for one build of the graph while the view is active.
pub struct GraphState {
	pub nodes: Vec<GraphNode>,
	pub viewport: Viewport,
	pub highlight: Highlight,
	pub surface: SurfaceScale,
	/// Case-insensitive label search; empty means no filter.
	pub filter: String,
	links: Vec<(usize, usize)>,
	index: HashMap<String, usize>,
	simulation: Simulation,
	config: GraphConfig,
}

impl GraphState {
	pub fn new(data: GraphData, config: GraphConfig) -> Self {
		let mut state = Self {
			nodes: Vec::new(),
			viewport: Viewport::new(config.width, config.height),
			highlight: Highlight::default(),
			surface: SurfaceScale::default(),
			filter: String::new(),
			links: Vec::new(),
			index: HashMap::new(),
			simulation: Simulation::new(config.simulation, config.scale_targets),
			config,
		};
		state.replace_graph(data);
		state
	}

	pub fn from_contacts(contacts: &[Contact], config: GraphConfig) -> Self {
		let data = build_graph(contacts, &config);
		Self::new(data, config)
	}

	/// Swaps in a freshly built graph. The viewport is kept; hover is not,
	/// since node indices no longer mean the same thing.
	pub fn replace_graph(&mut self, data: GraphData) {
		let GraphData { nodes, edges } = data;
		self.index = nodes
			.iter()
			.enumerate()
			.map(|(i, n)| (n.id.clone(), i))
			.collect();
		self.links = edges
			.iter()
			.filter_map(|e| Some((*self.index.get(&e.source)?, *self.index.get(&e.target)?)))
			.collect();
		self.nodes = nodes;
		self.highlight = Highlight::default();
		debug!(
			"graph rebuilt: {} nodes, {} edges",
			self.nodes.len(),
			self.links.len()
		);
	}

	pub fn links(&self) -> &[(usize, usize)] {
		&self.links
	}

	pub fn node_index(&self, id: &str) -> Option<usize> {
		self.index.get(id).copied()
	}

	pub fn hovered_node(&self) -> Option<&GraphNode> {
		self.highlight.hovered.map(|i| &self.nodes[i])
	}

	pub fn matches_filter(&self, node: &GraphNode) -> bool {
		!self.filter.is_empty() && node.label.to_lowercase().contains(&self.filter.to_lowercase())
	}

	pub fn tick(&mut self) {
		let center = self.config.center();
		self.simulation
			.step(&mut self.nodes, &self.links, &self.highlight, center);
	}

	pub fn set_hover(&mut self, node: Option<usize>) {
		if self.highlight.hovered == node {
			return;
		}
		self.highlight = Highlight::propagate(node, &self.links);
	}

	/// Node under a backing-pixel screen position.
	pub fn node_at_screen(&self, sx: f64, sy: f64) -> Option<usize> {
		let (wx, wy) = self.viewport.screen_to_world(sx, sy);
		hit::node_at(&self.nodes, wx, wy, self.viewport.zoom, &self.config)
	}

	/// Updates hover and, with the primary button held over empty space,
	/// pans by the pointer movement.
	pub fn pointer_move(&mut self, sample: PointerSample) {
		let (sx, sy) = self.surface.to_backing(sample.x, sample.y);
		let found = self.node_at_screen(sx, sy);
		self.set_hover(found);
		if sample.primary_down && found.is_none() {
			let (dx, dy) = self.surface.to_backing(sample.movement_x, sample.movement_y);
			self.viewport.pan(dx, dy);
		}
	}

	pub fn pointer_leave(&mut self) {
		self.set_hover(None);
	}

	pub fn wheel(&mut self, delta_y: f64) {
		self.viewport.wheel(delta_y);
	}

	/// Contact id of the person node under the click, if any.
	pub fn click(&self, x: f64, y: f64) -> Option<String> {
		let (sx, sy) = self.surface.to_backing(x, y);
		let node = &self.nodes[self.node_at_screen(sx, sy)?];
		(node.kind == NodeKind::Person).then(|| node.origin.clone())
	}
}
