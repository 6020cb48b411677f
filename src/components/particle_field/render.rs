//! Per-frame drawing of the particle network.
//!
//! Rendering clears the surface, draws every particle as a filled circle,
//! then draws one line per linked pair. The field must already have been
//! advanced for the frame.

use super::state::ParticleField;
use super::surface::DrawSurface;
use super::theme::FieldTheme;

/// Draws the complete field onto `surface`.
pub fn render<S: DrawSurface + ?Sized>(field: &ParticleField, surface: &S, theme: &FieldTheme) {
	surface.clear(field.width, field.height);

	for p in &field.particles {
		surface.fill_circle(p.x, p.y, p.radius, p.color);
	}

	for link in field.links() {
		let (a, b) = (&field.particles[link.a], &field.particles[link.b]);
		let color = theme.link_color.with_alpha(theme.link_color.a * link.opacity);
		surface.line((a.x, a.y), (b.x, b.y), color, theme.link_width);
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use rand::SeedableRng;
	use rand_chacha::ChaCha8Rng;

	use super::*;
	use crate::components::particle_field::theme::Color;
	use crate::config::ParticleSettings;

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear(f64, f64),
		Circle(f64, f64, f64),
		Line((f64, f64), (f64, f64), f64),
	}

	#[derive(Default)]
	struct Recorder {
		ops: RefCell<Vec<Op>>,
	}

	impl DrawSurface for Recorder {
		fn clear(&self, width: f64, height: f64) {
			self.ops.borrow_mut().push(Op::Clear(width, height));
		}

		fn fill_circle(&self, x: f64, y: f64, radius: f64, _color: Color) {
			self.ops.borrow_mut().push(Op::Circle(x, y, radius));
		}

		fn line(&self, from: (f64, f64), to: (f64, f64), color: Color, _width: f64) {
			self.ops.borrow_mut().push(Op::Line(from, to, color.a));
		}
	}

	fn field_with(points: &[(f64, f64)]) -> ParticleField {
		let settings = ParticleSettings {
			count: points.len(),
			..ParticleSettings::default()
		};
		let mut field = ParticleField::with_rng(
			&settings,
			&FieldTheme::default(),
			500.0,
			400.0,
			ChaCha8Rng::seed_from_u64(1),
		);
		for (p, &(x, y)) in field.particles.iter_mut().zip(points) {
			p.x = x;
			p.y = y;
			p.radius = 2.0;
		}
		field
	}

	#[test]
	fn clears_before_drawing_particles_then_links() {
		let field = field_with(&[(10.0, 10.0), (40.0, 50.0), (400.0, 300.0)]);
		let recorder = Recorder::default();
		render(&field, &recorder, &FieldTheme::default());

		let ops = recorder.ops.into_inner();
		assert_eq!(
			ops,
			vec![
				Op::Clear(500.0, 400.0),
				Op::Circle(10.0, 10.0, 2.0),
				Op::Circle(40.0, 50.0, 2.0),
				Op::Circle(400.0, 300.0, 2.0),
				Op::Line((10.0, 10.0), (40.0, 50.0), 1.0 - 50.0 / 150.0),
			]
		);
	}

	#[test]
	fn link_alpha_scales_theme_alpha() {
		let field = field_with(&[(0.0, 0.0), (75.0, 0.0)]);
		let theme = FieldTheme {
			link_color: Color::rgba(0, 242, 255, 0.4),
			..FieldTheme::default()
		};
		let recorder = Recorder::default();
		render(&field, &recorder, &theme);

		let alphas: Vec<f64> = recorder
			.ops
			.borrow()
			.iter()
			.filter_map(|op| match op {
				Op::Line(_, _, a) => Some(*a),
				_ => None,
			})
			.collect();
		assert_eq!(alphas.len(), 1);
		assert!((alphas[0] - 0.2).abs() < 1e-12);
	}

	#[test]
	fn lone_particle_draws_no_lines() {
		let field = field_with(&[(250.0, 200.0)]);
		let recorder = Recorder::default();
		render(&field, &recorder, &FieldTheme::default());
		assert_eq!(recorder.ops.borrow().len(), 2);
	}
}
