use super::draw_list::{DrawCommand, DrawList, Font, FontWeight, Rgba};
use super::state::GraphState;
use super::types::{GraphNode, NodeKind};

const ACCENT: Rgba = Rgba::opaque(79, 70, 229);
const INK: Rgba = Rgba::opaque(15, 23, 42);
const SLATE_800: Rgba = Rgba::opaque(30, 41, 59);
const SLATE_600: Rgba = Rgba::opaque(71, 85, 105);
const SLATE_400: Rgba = Rgba::opaque(148, 163, 184);

/// Per-node emphasis derived from hover state and the label filter.
#[derive(Clone, Copy, Debug)]
struct Emphasis {
	hovered: bool,
	highlighted: bool,
	matched: bool,
}

/// Records one frame: clear, viewport transform, every edge, then every node.
pub fn render(state: &GraphState, list: &mut DrawList) {
	let vp = &state.viewport;
	list.clear();
	list.push(DrawCommand::Clear {
		width: vp.width,
		height: vp.height,
	});
	list.push(DrawCommand::PushTransform {
		cx: vp.width / 2.0,
		cy: vp.height / 2.0,
		zoom: vp.zoom,
		dx: vp.offset_x,
		dy: vp.offset_y,
	});
	draw_edges(state, list);
	draw_nodes(state, list);
	list.push(DrawCommand::PopTransform);
}

fn draw_edges(state: &GraphState, list: &mut DrawList) {
	let k = state.viewport.zoom;
	for &(a, b) in state.links() {
		let (s, t) = (&state.nodes[a], &state.nodes[b]);
		let related = state.highlight.touches(a, b);
		let (alpha, width) = if related { (0.4, 1.5 / k) } else { (0.06, 1.0 / k) };
		list.push(DrawCommand::Line {
			from: (s.x, s.y),
			to: (t.x, t.y),
			color: ACCENT.with_alpha(alpha),
			width,
		});
	}
}

fn draw_nodes(state: &GraphState, list: &mut DrawList) {
	for (idx, node) in state.nodes.iter().enumerate() {
		let emphasis = Emphasis {
			hovered: state.highlight.is_hovered(idx),
			highlighted: state.highlight.is_highlighted(idx),
			matched: state.matches_filter(node),
		};
		match node.kind {
			NodeKind::Tag => draw_tag(node, emphasis, list),
			NodeKind::Person => draw_person(node, emphasis, list),
		}
	}
}

fn draw_tag(node: &GraphNode, e: Emphasis, list: &mut DrawList) {
	let (x, y, s) = (node.x, node.y, node.scale);
	let halo = if e.hovered {
		20.0
	} else if e.highlighted {
		15.0
	} else {
		12.0
	};
	list.push(DrawCommand::Halo {
		center: (x, y),
		radius: halo * s,
		inner: ACCENT.with_alpha(if e.highlighted { 0.3 } else { 0.15 }),
	});

	let lit = e.highlighted || e.matched;
	list.push(DrawCommand::Circle {
		center: (x, y),
		radius: (if e.highlighted { 7.0 } else { 6.0 }) * s,
		fill: if lit { ACCENT } else { SLATE_800 },
	});
	list.push(DrawCommand::Text {
		at: (x, y - 14.0 * s),
		text: format!("#{}", node.label),
		font: Font {
			weight: if e.highlighted {
				FontWeight::Bold
			} else {
				FontWeight::SemiBold
			},
			size: if e.hovered {
				14.0
			} else if e.highlighted {
				12.0
			} else {
				10.0
			},
		},
		color: if lit { ACCENT } else { SLATE_600 },
	});
}

fn draw_person(node: &GraphNode, e: Emphasis, list: &mut DrawList) {
	let (x, y, s) = (node.x, node.y, node.scale);
	let (rx, ry) = if e.highlighted { (5.0, 4.0) } else { (4.0, 3.0) };
	list.push(DrawCommand::Ellipse {
		center: (x, y),
		rx: rx * s,
		ry: ry * s,
		fill: if e.highlighted || e.matched { ACCENT } else { INK },
	});
	list.push(DrawCommand::Text {
		at: (x, y + 18.0 * s),
		text: node.label.clone(),
		font: Font {
			weight: if e.highlighted {
				FontWeight::SemiBold
			} else {
				FontWeight::Medium
			},
			size: if e.hovered {
				12.0
			} else if e.highlighted {
				10.0
			} else {
				9.0
			},
		},
		color: if e.hovered || e.highlighted { SLATE_800 } else { SLATE_400 },
	});
}
