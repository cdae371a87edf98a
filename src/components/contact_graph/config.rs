use super::scale::{SURFACE_HEIGHT, SURFACE_WIDTH};

/// Force constants applied once per rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
	/// Numerator of the pairwise inverse-square repulsion.
	pub force_charge: f64,
	/// Added to the squared distance so coincident nodes stay finite.
	pub epsilon: f64,
	pub force_spring: f64,
	pub force_center: f64,
	/// Multiplicative velocity decay applied after integration.
	pub damping_factor: f64,
	/// Exponential smoothing factor for display scale.
	pub scale_smoothing: f64,
}

impl Default for SimulationParameters {
	fn default() -> Self {
		Self {
			force_charge: 1800.0,
			epsilon: 1.0,
			force_spring: 0.05,
			force_center: 0.005,
			damping_factor: 0.8,
			scale_smoothing: 0.15,
		}
	}
}

/// Display scale targets by highlight role.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTargets {
	pub hovered: f64,
	pub neighbor: f64,
	pub base: f64,
}

impl Default for ScaleTargets {
	fn default() -> Self {
		Self {
			hovered: 2.0,
			neighbor: 1.4,
			base: 1.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct GraphConfig {
	pub simulation: SimulationParameters,
	pub scale_targets: ScaleTargets,
	/// Logical size of the drawing surface.
	pub width: f64,
	pub height: f64,
	/// Hit radii in screen pixels; divided by zoom when testing.
	pub tag_hit_radius: f64,
	pub person_hit_radius: f64,
	/// Spawn rectangle as (min_x, min_y, max_x, max_y).
	pub spawn: (f64, f64, f64, f64),
}

impl Default for GraphConfig {
	fn default() -> Self {
		Self {
			simulation: SimulationParameters::default(),
			scale_targets: ScaleTargets::default(),
			width: SURFACE_WIDTH,
			height: SURFACE_HEIGHT,
			tag_hit_radius: 30.0,
			person_hit_radius: 20.0,
			spawn: (200.0, 100.0, 1000.0, 500.0),
		}
	}
}

impl GraphConfig {
	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}
}
