//! Backend-independent drawing primitives.
//!
//! The renderer only ever appends to a [`DrawList`]; a backend replays it in
//! order onto a concrete immediate-mode surface.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Rgba {
	pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
		Self::new(r, g, b, 1.0)
	}

	pub const fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn css(&self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontWeight {
	Medium,
	SemiBold,
	Bold,
}

impl FontWeight {
	fn css(self) -> &'static str {
		match self {
			FontWeight::Medium => "500",
			FontWeight::SemiBold => "600",
			FontWeight::Bold => "bold",
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
	pub weight: FontWeight,
	pub size: f64,
}

impl Font {
	pub fn css(&self) -> String {
		format!("{} {}px Plus Jakarta Sans, sans-serif", self.weight.css(), self.size)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
	Clear {
		width: f64,
		height: f64,
	},
	/// Zoom about `(cx, cy)` then shift by `(dx, dy)`; stays in effect until
	/// the matching [`DrawCommand::PopTransform`].
	PushTransform {
		cx: f64,
		cy: f64,
		zoom: f64,
		dx: f64,
		dy: f64,
	},
	PopTransform,
	Line {
		from: (f64, f64),
		to: (f64, f64),
		color: Rgba,
		width: f64,
	},
	Circle {
		center: (f64, f64),
		radius: f64,
		fill: Rgba,
	},
	Ellipse {
		center: (f64, f64),
		rx: f64,
		ry: f64,
		fill: Rgba,
	},
	/// Radial gradient from `inner` at the center to transparent at `radius`.
	Halo {
		center: (f64, f64),
		radius: f64,
		inner: Rgba,
	},
	/// Horizontally centered text.
	Text {
		at: (f64, f64),
		text: String,
		font: Font,
		color: Rgba,
	},
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
	commands: Vec<DrawCommand>,
}

impl DrawList {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn clear(&mut self) {
		self.commands.clear();
	}

	pub fn push(&mut self, command: DrawCommand) {
		self.commands.push(command);
	}

	pub fn commands(&self) -> &[DrawCommand] {
		&self.commands
	}
}
