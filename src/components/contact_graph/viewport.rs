pub const MIN_ZOOM: f64 = 0.2;
pub const MAX_ZOOM: f64 = 5.0;
const ZOOM_IN: f64 = 1.1;
const ZOOM_OUT: f64 = 0.9;

/// Zoom about the surface center followed by a pixel offset.
///
/// `screen = (world - center) * zoom + center + offset`
#[derive(Clone, Debug, PartialEq)]
pub struct Viewport {
	pub zoom: f64,
	pub offset_x: f64,
	pub offset_y: f64,
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			zoom: 1.0,
			offset_x: 0.0,
			offset_y: 0.0,
			width,
			height,
		}
	}

	fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	pub fn screen_to_world(&self, sx: f64, sy: f64) -> (f64, f64) {
		let (cx, cy) = self.center();
		(
			(sx - cx - self.offset_x) / self.zoom + cx,
			(sy - cy - self.offset_y) / self.zoom + cy,
		)
	}

	#[allow(dead_code)]
	pub fn world_to_screen(&self, wx: f64, wy: f64) -> (f64, f64) {
		let (cx, cy) = self.center();
		(
			(wx - cx) * self.zoom + cx + self.offset_x,
			(wy - cy) * self.zoom + cy + self.offset_y,
		)
	}

	/// One wheel notch: positive `delta_y` zooms out, anything else zooms in.
	pub fn wheel(&mut self, delta_y: f64) {
		let factor = if delta_y > 0.0 { ZOOM_OUT } else { ZOOM_IN };
		self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
	}

	/// Moves the view by a delta already converted to backing pixels.
	pub fn pan(&mut self, dx: f64, dy: f64) {
		self.offset_x += dx;
		self.offset_y += dy;
	}
}
