//! Mapping between the canvas backing buffer and its displayed CSS box.

pub const SURFACE_WIDTH: f64 = 1200.0;
pub const SURFACE_HEIGHT: f64 = 650.0;

/// Backing-buffer pixels per displayed pixel on each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceScale {
	pub x: f64,
	pub y: f64,
}

impl Default for SurfaceScale {
	fn default() -> Self {
		Self { x: 1.0, y: 1.0 }
	}
}

impl SurfaceScale {
	/// Ratio of the backing size to the displayed size. A collapsed box
	/// (zero or negative extent) falls back to 1:1 on that axis.
	pub fn new(backing_w: f64, backing_h: f64, displayed_w: f64, displayed_h: f64) -> Self {
		let ratio = |backing: f64, displayed: f64| {
			if displayed > 0.0 && displayed.is_finite() {
				backing / displayed
			} else {
				1.0
			}
		};
		Self {
			x: ratio(backing_w, displayed_w),
			y: ratio(backing_h, displayed_h),
		}
	}

	/// Converts a pointer offset inside the displayed box to backing pixels.
	pub fn to_backing(&self, px: f64, py: f64) -> (f64, f64) {
		(px * self.x, py * self.y)
	}
}
