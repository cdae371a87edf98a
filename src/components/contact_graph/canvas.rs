use std::f64::consts::PI;

use thiserror::Error;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::controller::Surface;
use super::draw_list::{DrawCommand, DrawList};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SurfaceError {
	#[error("canvas has no 2d context")]
	ContextUnavailable,
	#[error("canvas context is not a CanvasRenderingContext2d")]
	NotCanvas2d,
}

/// Replays draw lists onto a 2d canvas context.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn from_canvas(canvas: &HtmlCanvasElement) -> Result<Self, SurfaceError> {
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.ok_or(SurfaceError::ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| SurfaceError::NotCanvas2d)?;
		Ok(Self { ctx })
	}
}

impl Surface for CanvasSurface {
	fn paint(&mut self, list: &DrawList) {
		for command in list.commands() {
			paint_command(&self.ctx, command);
		}
	}
}

fn paint_command(ctx: &CanvasRenderingContext2d, command: &DrawCommand) {
	match command {
		DrawCommand::Clear { width, height } => {
			ctx.clear_rect(0.0, 0.0, *width, *height);
			let _ = ctx.set_line_dash(&js_sys::Array::new());
		}
		DrawCommand::PushTransform {
			cx,
			cy,
			zoom,
			dx,
			dy,
		} => {
			ctx.save();
			let _ = ctx.translate(cx + dx, cy + dy);
			let _ = ctx.scale(*zoom, *zoom);
			let _ = ctx.translate(-cx, -cy);
		}
		DrawCommand::PopTransform => ctx.restore(),
		DrawCommand::Line {
			from,
			to,
			color,
			width,
		} => {
			ctx.begin_path();
			ctx.move_to(from.0, from.1);
			ctx.line_to(to.0, to.1);
			ctx.set_stroke_style_str(&color.css());
			ctx.set_line_width(*width);
			ctx.stroke();
		}
		DrawCommand::Circle {
			center,
			radius,
			fill,
		} => {
			ctx.begin_path();
			let _ = ctx.arc(center.0, center.1, *radius, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&fill.css());
			ctx.fill();
		}
		DrawCommand::Ellipse {
			center,
			rx,
			ry,
			fill,
		} => {
			ctx.begin_path();
			let _ = ctx.ellipse(center.0, center.1, *rx, *ry, 0.0, 0.0, 2.0 * PI);
			ctx.set_fill_style_str(&fill.css());
			ctx.fill();
		}
		DrawCommand::Halo {
			center,
			radius,
			inner,
		} => {
			let (x, y) = *center;
			let Ok(gradient) = ctx.create_radial_gradient(x, y, 0.0, x, y, *radius) else {
				return;
			};
			let _ = gradient.add_color_stop(0.0, &inner.css());
			let _ = gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)");
			ctx.begin_path();
			let _ = ctx.arc(x, y, *radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
		DrawCommand::Text {
			at,
			text,
			font,
			color,
		} => {
			ctx.set_font(&font.css());
			ctx.set_text_align("center");
			ctx.set_fill_style_str(&color.css());
			let _ = ctx.fill_text(text, at.0, at.1);
		}
	}
}
