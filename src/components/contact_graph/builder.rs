use std::collections::{HashMap, HashSet};

use log::warn;
use rand::Rng;

use super::config::GraphConfig;
use super::types::{Contact, GraphData, GraphEdge, GraphNode, NodeKind};

pub fn person_node_id(contact_id: &str) -> String {
	format!("p-{contact_id}")
}

pub fn tag_node_id(tag: &str) -> String {
	format!("t-{tag}")
}

/// Builds the person/tag graph with positions drawn from the thread RNG.
pub fn build_graph(contacts: &[Contact], config: &GraphConfig) -> GraphData {
	build_graph_with_rng(contacts, config, &mut rand::thread_rng())
}

pub fn build_graph_with_rng<R: Rng + ?Sized>(
	contacts: &[Contact],
	config: &GraphConfig,
	rng: &mut R,
) -> GraphData {
	let mut nodes = Vec::new();
	let mut edges = Vec::new();
	let mut tag_ids: HashMap<&str, String> = HashMap::new();
	let mut seen_contacts = HashSet::new();

	for contact in contacts {
		if !seen_contacts.insert(contact.id.as_str()) {
			warn!("skipping duplicate contact id {:?}", contact.id);
			continue;
		}
		let person_id = person_node_id(&contact.id);
		nodes.push(seed_node(
			person_id.clone(),
			contact.name.clone(),
			NodeKind::Person,
			contact.id.clone(),
			config,
			rng,
		));

		let mut linked = HashSet::new();
		for tag in &contact.tags {
			if !linked.insert(tag.as_str()) {
				continue;
			}
			let tag_id = match tag_ids.get(tag.as_str()) {
				Some(id) => id.clone(),
				None => {
					let id = tag_node_id(tag);
					nodes.push(seed_node(
						id.clone(),
						tag.clone(),
						NodeKind::Tag,
						tag.clone(),
						config,
						rng,
					));
					tag_ids.insert(tag.as_str(), id.clone());
					id
				}
			};
			edges.push(GraphEdge {
				source: person_id.clone(),
				target: tag_id,
			});
		}
	}

	GraphData { nodes, edges }
}

fn seed_node<R: Rng + ?Sized>(
	id: String,
	label: String,
	kind: NodeKind,
	origin: String,
	config: &GraphConfig,
	rng: &mut R,
) -> GraphNode {
	let (min_x, min_y, max_x, max_y) = config.spawn;
	GraphNode {
		id,
		label,
		kind,
		x: rng.gen_range(min_x..max_x),
		y: rng.gen_range(min_y..max_y),
		vx: 0.0,
		vy: 0.0,
		scale: 1.0,
		origin,
	}
}
