/// A contact record as supplied by the surrounding application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contact {
	pub id: String,
	pub name: String,
	pub tags: Vec<String>,
}

impl Contact {
	pub fn new(id: impl Into<String>, name: impl Into<String>, tags: &[&str]) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			tags: tags.iter().map(|t| (*t).to_string()).collect(),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
	Person,
	Tag,
}

#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub label: String,
	pub kind: NodeKind,
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	/// Smoothed display size multiplier.
	pub scale: f64,
	/// Contact id for person nodes, tag value for tag nodes.
	pub origin: String,
}

/// Undirected person-tag membership, stored once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}
