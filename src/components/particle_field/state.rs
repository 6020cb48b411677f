//! Simulation state for the particle network.
//!
//! [`ParticleField`] owns every particle, the surface bounds and the last
//! known pointer position. The animation loop drives it once per frame with
//! [`ParticleField::advance`] and then hands it to the renderer, so all
//! positions are settled before any link distance is measured.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::particles::{Particle, link_opacity};
use super::theme::{Color, FieldTheme};
use crate::config::ParticleSettings;

/// A line between two particles close enough to be linked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle; always lower than `b`.
	pub a: usize,
	pub b: usize,
	pub distance: f64,
	/// 1.0 when touching, falling linearly to 0.0 at the link distance.
	pub opacity: f64,
}

/// The full set of particles on one surface.
///
/// The particle count never changes during the life of a field; a resize
/// throws the whole batch away and spawns a fresh one.
pub struct ParticleField {
	pub particles: Vec<Particle>,
	pub width: f64,
	pub height: f64,
	pointer: Option<(f64, f64)>,
	settings: ParticleSettings,
	palette: [Color; 2],
	rng: ChaCha8Rng,
}

impl ParticleField {
	/// Create a field seeded from the platform entropy source.
	pub fn new(settings: &ParticleSettings, theme: &FieldTheme, width: f64, height: f64) -> Self {
		Self::with_rng(settings, theme, width, height, ChaCha8Rng::from_os_rng())
	}

	/// Create a field drawing all randomness from `rng`.
	pub fn with_rng(
		settings: &ParticleSettings,
		theme: &FieldTheme,
		width: f64,
		height: f64,
		rng: ChaCha8Rng,
	) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(settings.count),
			width,
			height,
			pointer: None,
			settings: settings.clone(),
			palette: theme.palette,
			rng,
		};
		field.populate();
		field
	}

	fn populate(&mut self) {
		self.particles.clear();
		for _ in 0..self.settings.count {
			let particle = Particle::spawn(
				&mut self.rng,
				self.width,
				self.height,
				&self.settings,
				&self.palette,
			);
			self.particles.push(particle);
		}
	}

	/// Discard every particle and respawn the batch over the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.populate();
	}

	/// Record the pointer in surface coordinates, or `None` once it has left.
	pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
		self.pointer = pointer;
	}

	pub fn pointer(&self) -> Option<(f64, f64)> {
		self.pointer
	}

	pub fn settings(&self) -> &ParticleSettings {
		&self.settings
	}

	/// Move every particle by its velocity, bouncing off the edges.
	pub fn step(&mut self) {
		let (width, height) = (self.width, self.height);
		for p in &mut self.particles {
			p.step(width, height);
		}
	}

	/// Push particles within the influence radius away from the pointer.
	/// Returns how many particles moved.
	pub fn apply_pointer_force(&mut self) -> usize {
		let Some((px, py)) = self.pointer else {
			return 0;
		};
		let (radius, strength) = (self.settings.pointer_radius, self.settings.pointer_force);
		self.particles
			.iter_mut()
			.map(|p| p.push_away(px, py, radius, strength))
			.filter(|&moved| moved)
			.count()
	}

	/// Run the simulation part of one frame.
	pub fn advance(&mut self) {
		self.step();
		self.apply_pointer_force();
	}

	/// Every unordered pair closer than the link distance, each reported once.
	pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
		let threshold = self.settings.link_distance;
		self.particles.iter().enumerate().flat_map(move |(a, pa)| {
			self.particles[a + 1..]
				.iter()
				.enumerate()
				.filter_map(move |(offset, pb)| {
					let distance = pa.distance_to(pb);
					link_opacity(distance, threshold).map(|opacity| Link {
						a,
						b: a + 1 + offset,
						distance,
						opacity,
					})
				})
		})
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	fn field(seed: u64, width: f64, height: f64) -> ParticleField {
		ParticleField::with_rng(
			&ParticleSettings::default(),
			&FieldTheme::default(),
			width,
			height,
			ChaCha8Rng::seed_from_u64(seed),
		)
	}

	fn place(field: &mut ParticleField, points: &[(f64, f64)]) {
		field.particles.truncate(points.len());
		for (p, &(x, y)) in field.particles.iter_mut().zip(points) {
			p.x = x;
			p.y = y;
			p.vx = 0.0;
			p.vy = 0.0;
		}
	}

	#[test]
	fn initial_batch_has_configured_count() {
		let f = field(1, 1280.0, 720.0);
		assert_eq!(f.particles.len(), 80);
		assert_eq!(f.pointer(), None);
	}

	#[test]
	fn particles_stay_within_one_step_of_the_bounds() {
		let mut f = field(2, 300.0, 200.0);
		let eps = f.settings().max_speed;
		for _ in 0..20_000 {
			f.step();
			for p in &f.particles {
				assert!(p.x >= -eps && p.x <= 300.0 + eps, "x = {}", p.x);
				assert!(p.y >= -eps && p.y <= 200.0 + eps, "y = {}", p.y);
			}
		}
	}

	#[test]
	fn step_keeps_speed() {
		let mut f = field(3, 300.0, 200.0);
		let speeds: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.vx.abs(), p.vy.abs())).collect();
		for _ in 0..5_000 {
			f.step();
		}
		let after: Vec<(f64, f64)> = f.particles.iter().map(|p| (p.vx.abs(), p.vy.abs())).collect();
		assert_eq!(speeds, after);
	}

	#[test]
	fn resize_respawns_same_count_inside_new_bounds() {
		let mut f = field(4, 1280.0, 720.0);
		let before = f.particles.clone();
		f.resize(400.0, 300.0);
		assert_eq!(f.particles.len(), 80);
		assert_ne!(before, f.particles);
		assert!(f.particles.iter().all(|p| p.x < 400.0 && p.y < 300.0));
	}

	#[test]
	fn repeated_resize_rerandomizes() {
		let mut f = field(5, 500.0, 500.0);
		f.resize(500.0, 500.0);
		let first = f.particles.clone();
		f.resize(500.0, 500.0);
		assert_eq!(first.len(), f.particles.len());
		assert_ne!(first, f.particles);
	}

	#[test]
	fn same_seed_gives_same_field() {
		assert_eq!(field(9, 640.0, 480.0).particles, field(9, 640.0, 480.0).particles);
	}

	#[test]
	fn links_follow_threshold() {
		let mut f = field(6, 1000.0, 1000.0);
		place(&mut f, &[(0.0, 0.0), (100.0, 0.0), (0.0, 149.0), (400.0, 400.0)]);
		let links: Vec<Link> = f.links().collect();
		let pairs: HashSet<(usize, usize)> = links.iter().map(|l| (l.a, l.b)).collect();
		assert_eq!(pairs, HashSet::from([(0, 1), (0, 2)]));
		let l01 = links.iter().find(|l| (l.a, l.b) == (0, 1)).unwrap();
		assert!((l01.opacity - (1.0 - 100.0 / 150.0)).abs() < 1e-12);
	}

	#[test]
	fn links_are_unique_and_symmetric() {
		let f = field(7, 600.0, 400.0);
		let links: Vec<Link> = f.links().collect();
		let mut seen = HashSet::new();
		for link in &links {
			assert!(link.a < link.b);
			assert!(seen.insert((link.a, link.b)), "duplicate link");
			let (pa, pb) = (&f.particles[link.a], &f.particles[link.b]);
			assert_eq!(pa.distance_to(pb), pb.distance_to(pa));
			assert!(link.distance < 150.0);
		}

		let n = f.particles.len();
		let expected = (0..n)
			.flat_map(|i| (i + 1..n).map(move |j| (i, j)))
			.filter(|&(i, j)| f.particles[i].distance_to(&f.particles[j]) < 150.0)
			.count();
		assert_eq!(links.len(), expected);
	}

	#[test]
	fn pointer_force_only_inside_radius() {
		let mut f = field(8, 1000.0, 1000.0);
		place(&mut f, &[(500.0, 500.0), (500.0, 700.0), (500.0, 550.0)]);
		assert_eq!(f.apply_pointer_force(), 0, "no pointer, no force");

		f.set_pointer(Some((500.0, 500.0)));
		assert_eq!(f.apply_pointer_force(), 2);
		assert_eq!((f.particles[0].x, f.particles[0].y), (503.0, 500.0));
		assert_eq!((f.particles[1].x, f.particles[1].y), (500.0, 700.0));
		assert!((f.particles[2].y - (550.0 + 3.0 * 150.0 / 200.0)).abs() < 1e-12);

		f.set_pointer(None);
		assert_eq!(f.apply_pointer_force(), 0);
	}

	#[test]
	fn pushed_out_particle_returns_once_pointer_leaves() {
		let mut f = field(10, 200.0, 200.0);
		place(&mut f, &[(1.0, 100.0)]);
		f.particles[0].vx = -0.2;
		f.set_pointer(Some((5.0, 100.0)));
		for _ in 0..30 {
			f.advance();
		}
		assert!(f.particles[0].x < 0.0);

		f.set_pointer(None);
		for _ in 0..2_000 {
			f.advance();
		}
		assert!(f.particles[0].x > -0.25);
	}
}
