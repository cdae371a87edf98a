//! Owner of the animation loop and of all per-activation graph state.
//!
//! The loop is a chain of one-shot frame requests: every executed frame asks
//! for the next one. The controller keeps the handle of the pending request
//! and is the only thing that can cancel it, so [`GraphController::deactivate`]
//! is enough to stop all background work.

use log::debug;

use super::builder::build_graph;
use super::config::GraphConfig;
use super::draw_list::DrawList;
use super::render;
use super::scale::SurfaceScale;
use super::state::{GraphState, PointerSample};
use super::types::Contact;

/// Source of one-shot frame callbacks, e.g. `requestAnimationFrame`.
pub trait FrameScheduler {
	type Handle: Copy + std::fmt::Debug;

	/// Requests a single future frame. `None` if the host refused.
	fn request(&mut self) -> Option<Self::Handle>;

	fn cancel(&mut self, handle: Self::Handle);
}

/// Immediate-mode backend that can replay a draw list.
pub trait Surface {
	fn paint(&mut self, list: &DrawList);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase<H> {
	Idle,
	Running { pending: Option<H> },
}

pub struct GraphController<S: FrameScheduler> {
	scheduler: S,
	phase: Phase<S::Handle>,
	graph: Option<GraphState>,
	config: GraphConfig,
	draw_list: DrawList,
}

impl<S: FrameScheduler> GraphController<S> {
	pub fn new(scheduler: S, config: GraphConfig) -> Self {
		Self {
			scheduler,
			phase: Phase::Idle,
			graph: None,
			config,
			draw_list: DrawList::new(),
		}
	}

	pub fn is_running(&self) -> bool {
		matches!(self.phase, Phase::Running { .. })
	}

	/// Idle -> Running with freshly seeded positions and no carried-over
	/// hover, pan or zoom. Re-activating a running controller restarts it.
	pub fn activate(&mut self, contacts: &[Contact]) {
		if self.is_running() {
			self.deactivate();
		}
		self.graph = Some(GraphState::from_contacts(contacts, self.config.clone()));
		self.phase = Phase::Running { pending: None };
		self.schedule_next();
		debug!("graph view activated");
	}

	/// Running -> Idle. Cancels the pending frame and drops all graph state.
	pub fn deactivate(&mut self) {
		if let Phase::Running {
			pending: Some(handle),
		} = self.phase
		{
			self.scheduler.cancel(handle);
		}
		self.phase = Phase::Idle;
		self.graph = None;
		self.draw_list.clear();
		debug!("graph view deactivated");
	}

	/// Rebuilds the graph from scratch for new source data. Ignored while idle;
	/// the next activation builds from whatever it is given.
	pub fn set_contacts(&mut self, contacts: &[Contact]) {
		if let Some(graph) = self.graph.as_mut() {
			graph.replace_graph(build_graph(contacts, &self.config));
		}
	}

	/// Runs one frame: simulate, draw, then request the next frame. Drawing
	/// is skipped when no surface is available; the simulation still runs.
	pub fn frame(&mut self, surface: Option<&mut dyn Surface>) {
		let Phase::Running { pending } = &mut self.phase else {
			return;
		};
		*pending = None;

		if let Some(graph) = self.graph.as_mut() {
			graph.tick();
			if let Some(surface) = surface {
				render::render(graph, &mut self.draw_list);
				surface.paint(&self.draw_list);
			}
		}
		self.schedule_next();
	}

	fn schedule_next(&mut self) {
		if let Phase::Running { pending } = &mut self.phase {
			if pending.is_none() {
				*pending = self.scheduler.request();
			}
		}
	}

	pub fn set_surface_scale(&mut self, scale: SurfaceScale) {
		if let Some(graph) = self.graph.as_mut() {
			graph.surface = scale;
		}
	}

	pub fn set_filter(&mut self, filter: &str) {
		if let Some(graph) = self.graph.as_mut() {
			graph.filter = filter.trim().to_string();
		}
	}

	pub fn pointer_move(&mut self, sample: PointerSample) {
		if let Some(graph) = self.graph.as_mut() {
			graph.pointer_move(sample);
		}
	}

	pub fn pointer_leave(&mut self) {
		if let Some(graph) = self.graph.as_mut() {
			graph.pointer_leave();
		}
	}

	pub fn wheel(&mut self, delta_y: f64) {
		if let Some(graph) = self.graph.as_mut() {
			graph.wheel(delta_y);
		}
	}

	/// Contact id to report as selected, if the click landed on a person.
	pub fn click(&self, x: f64, y: f64) -> Option<String> {
		self.graph.as_ref()?.click(x, y)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::contact_graph::draw_list::DrawCommand;

	#[derive(Debug, Default)]
	struct ManualFrames {
		next: u32,
		pending: Vec<u32>,
		cancelled: Vec<u32>,
		refuse: bool,
	}

	impl FrameScheduler for ManualFrames {
		type Handle = u32;

		fn request(&mut self) -> Option<u32> {
			if self.refuse {
				return None;
			}
			self.next += 1;
			self.pending.push(self.next);
			Some(self.next)
		}

		fn cancel(&mut self, handle: u32) {
			self.pending.retain(|&h| h != handle);
			self.cancelled.push(handle);
		}
	}

	#[derive(Default)]
	struct Recorder {
		frames: Vec<Vec<DrawCommand>>,
	}

	impl Surface for Recorder {
		fn paint(&mut self, list: &DrawList) {
			self.frames.push(list.commands().to_vec());
		}
	}

	fn contacts() -> Vec<Contact> {
		vec![
			Contact::new("1", "Ada", &["seed"]),
			Contact::new("2", "Bo", &["seed", "alpha"]),
		]
	}

	/// Fires the oldest pending frame, as the host would.
	fn fire(c: &mut GraphController<ManualFrames>, surface: Option<&mut dyn Surface>) {
		assert!(!c.scheduler.pending.is_empty(), "no frame pending");
		c.scheduler.pending.remove(0);
		c.frame(surface);
	}

	fn place(c: &mut GraphController<ManualFrames>, id: &str, x: f64, y: f64) {
		let graph = c.graph.as_mut().unwrap();
		let idx = graph.node_index(id).unwrap();
		graph.nodes[idx].x = x;
		graph.nodes[idx].y = y;
	}

	#[test]
	fn starts_idle_without_scheduling() {
		let c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		assert!(!c.is_running());
		assert!(c.graph.is_none());
		assert!(c.scheduler.pending.is_empty());
	}

	#[test]
	fn each_frame_schedules_exactly_one_successor() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		assert_eq!(c.scheduler.pending, [1]);

		let mut rec = Recorder::default();
		for _ in 0..5 {
			fire(&mut c, Some(&mut rec));
			assert_eq!(c.scheduler.pending.len(), 1);
		}
		assert_eq!(rec.frames.len(), 5);
		assert_eq!(c.scheduler.pending, [6]);
	}

	#[test]
	fn deactivate_cancels_pending_frame_and_drops_state() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		fire(&mut c, None);
		c.deactivate();

		assert!(!c.is_running());
		assert!(c.graph.is_none());
		assert_eq!(c.scheduler.cancelled, [2]);
		assert!(c.scheduler.pending.is_empty());

		// A stray callback after teardown does nothing and schedules nothing.
		c.frame(None);
		assert!(c.scheduler.pending.is_empty());
	}

	#[test]
	fn missing_surface_skips_drawing_but_keeps_simulating() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		place(&mut c, "p-1", 100.0, 100.0);
		fire(&mut c, None);
		let graph = c.graph.as_ref().unwrap();
		let moved = &graph.nodes[graph.node_index("p-1").unwrap()];
		assert!(moved.x != 100.0 || moved.y != 100.0);

		let mut rec = Recorder::default();
		fire(&mut c, Some(&mut rec));
		assert_eq!(rec.frames.len(), 1);
		assert!(matches!(rec.frames[0][0], DrawCommand::Clear { .. }));
	}

	#[test]
	fn refused_request_leaves_loop_stopped_but_running() {
		let mut c = GraphController::new(
			ManualFrames {
				refuse: true,
				..Default::default()
			},
			GraphConfig::default(),
		);
		c.activate(&contacts());
		assert!(c.is_running());
		assert!(c.scheduler.pending.is_empty());
		c.deactivate();
		assert!(c.scheduler.cancelled.is_empty());
	}

	#[test]
	fn click_on_person_selects_contact_and_empty_space_does_not() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		place(&mut c, "p-1", 300.0, 300.0);
		place(&mut c, "t-seed", 600.0, 300.0);
		place(&mut c, "p-2", 800.0, 500.0);
		place(&mut c, "t-alpha", 900.0, 100.0);
		c.wheel(-1.0);
		c.wheel(-1.0);

		let graph = c.graph.as_ref().unwrap();
		let (sx, sy) = graph.viewport.world_to_screen(300.0, 300.0);
		assert_eq!(c.click(sx + 3.0, sy - 3.0), Some("1".to_string()));

		let (tx, ty) = graph.viewport.world_to_screen(600.0, 300.0);
		assert_eq!(c.click(tx, ty), None);
		assert_eq!(c.click(1190.0, 640.0), None);
	}

	#[test]
	fn hover_reaches_renderer_on_next_frame() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		place(&mut c, "t-seed", 600.0, 325.0);
		place(&mut c, "p-1", 200.0, 100.0);
		place(&mut c, "p-2", 1000.0, 100.0);
		place(&mut c, "t-alpha", 1000.0, 600.0);
		c.pointer_move(PointerSample {
			x: 600.0,
			y: 325.0,
			..Default::default()
		});
		let graph = c.graph.as_ref().unwrap();
		let mut lit: Vec<_> = graph
			.highlight
			.members
			.iter()
			.map(|&i| graph.nodes[i].label.as_str())
			.collect();
		lit.sort_unstable();
		assert_eq!(lit, ["Ada", "Bo", "seed"]);

		let mut rec = Recorder::default();
		fire(&mut c, Some(&mut rec));
		let strong = rec.frames[0]
			.iter()
			.filter(|cmd| matches!(cmd, DrawCommand::Line { color, .. } if color.a == 0.4))
			.count();
		assert_eq!(strong, 2);
	}

	#[test]
	fn reactivation_resets_interaction_state() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		c.wheel(1.0);
		c.set_filter(" ada ");
		c.pointer_move(PointerSample {
			x: 10.0,
			y: 10.0,
			movement_x: 5.0,
			movement_y: 5.0,
			primary_down: true,
		});
		c.graph.as_mut().unwrap().set_hover(Some(0));
		assert_eq!(c.graph.as_ref().unwrap().filter, "ada");

		c.deactivate();
		c.activate(&contacts());
		let graph = c.graph.as_ref().unwrap();
		assert_eq!(graph.viewport.zoom, 1.0);
		assert_eq!((graph.viewport.offset_x, graph.viewport.offset_y), (0.0, 0.0));
		assert!(!graph.highlight.hovered.is_some());
		assert!(graph.filter.is_empty());
		assert_eq!(c.scheduler.pending.len(), 1);
	}

	#[test]
	fn data_change_rebuilds_while_running() {
		let mut c = GraphController::new(ManualFrames::default(), GraphConfig::default());
		c.activate(&contacts());
		c.graph.as_mut().unwrap().set_hover(Some(1));
		c.set_contacts(&[Contact::new("3", "Cy", &["gamma"])]);
		let graph = c.graph.as_ref().unwrap();
		assert_eq!(graph.nodes.len(), 2);
		assert!(graph.node_index("p-3").is_some());
		assert!(!graph.highlight.hovered.is_some());
		assert!(c.is_running());
	}
}
