use super::config::GraphConfig;
use super::types::{GraphNode, NodeKind};

fn hit_radius(kind: NodeKind, config: &GraphConfig) -> f64 {
	match kind {
		NodeKind::Tag => config.tag_hit_radius,
		NodeKind::Person => config.person_hit_radius,
	}
}

/// Index of the first node within its kind's radius of the world point.
/// Radii are screen sized, so they shrink in world space as zoom grows.
/// Overlaps resolve by list order.
pub fn node_at(
	nodes: &[GraphNode],
	wx: f64,
	wy: f64,
	zoom: f64,
	config: &GraphConfig,
) -> Option<usize> {
	nodes.iter().position(|node| {
		let (dx, dy) = (node.x - wx, node.y - wy);
		(dx * dx + dy * dy).sqrt() < hit_radius(node.kind, config) / zoom
	})
}
