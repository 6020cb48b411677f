//! The drawing primitives the particle renderer needs.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// A 2D surface sized to the viewport.
pub trait DrawSurface {
	/// Wipe the `width` x `height` region starting at the origin.
	fn clear(&self, width: f64, height: f64);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color);
	fn line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn clear(&self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, TAU);
		self.set_fill_style_str(&color.to_css());
		self.fill();
	}

	fn line(&self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.stroke();
	}
}
