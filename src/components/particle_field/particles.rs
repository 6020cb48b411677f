//! A single point of the particle network and the per-particle motion rules.

use rand::Rng;

use super::theme::Color;
use crate::config::ParticleSettings;

/// One animated point.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub radius: f64,
	pub color: Color,
}

impl Particle {
	/// Create a particle at a uniformly random spot of a `width` x `height`
	/// surface. Velocity components fall in `[-max_speed, max_speed)`, the
	/// radius in `[radius_min, radius_max)`, and the color is one palette entry.
	pub fn spawn<R: Rng>(
		rng: &mut R,
		width: f64,
		height: f64,
		settings: &ParticleSettings,
		palette: &[Color; 2],
	) -> Self {
		let spread = |rng: &mut R| (rng.random::<f64>() * 2.0 - 1.0) * settings.max_speed;
		let x = rng.random::<f64>() * width.max(0.0);
		let y = rng.random::<f64>() * height.max(0.0);
		let vx = spread(rng);
		let vy = spread(rng);
		let radius =
			settings.radius_min + rng.random::<f64>() * (settings.radius_max - settings.radius_min);
		let color = palette[rng.random_range(0..palette.len())];

		Self {
			x,
			y,
			vx,
			vy,
			radius,
			color,
		}
	}

	/// Advance one frame and bounce off the surface edges.
	///
	/// Overshoot is not corrected; the velocity component is only flipped when
	/// it still points outward, so a particle shoved outside heads back in.
	pub fn step(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;

		if (self.x < 0.0 && self.vx < 0.0) || (self.x > width && self.vx > 0.0) {
			self.vx = -self.vx;
		}
		if (self.y < 0.0 && self.vy < 0.0) || (self.y > height && self.vy > 0.0) {
			self.vy = -self.vy;
		}
	}

	/// Shove the particle straight away from `(px, py)`.
	///
	/// The displacement is `strength * (radius - d) / radius` along the unit
	/// vector from the pointer, zero at or beyond `radius`. A particle sitting
	/// exactly on the pointer is pushed along +x. Returns whether it moved.
	pub fn push_away(&mut self, px: f64, py: f64, radius: f64, strength: f64) -> bool {
		let (dx, dy) = (self.x - px, self.y - py);
		let distance = (dx * dx + dy * dy).sqrt();
		if distance >= radius {
			return false;
		}

		let force = (radius - distance) / radius;
		let (ux, uy) = if distance > 0.0 {
			(dx / distance, dy / distance)
		} else {
			(1.0, 0.0)
		};
		self.x += ux * force * strength;
		self.y += uy * force * strength;
		true
	}

	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Opacity of the line between two particles `distance` apart, or `None`
/// when they are too far apart to be linked.
pub fn link_opacity(distance: f64, threshold: f64) -> Option<f64> {
	(distance < threshold).then(|| 1.0 - distance / threshold)
}
