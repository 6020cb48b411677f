//! Page-level configuration.
//!
//! The page may embed a `<script id="fx-config" type="application/json">`
//! element to tune the effects. Every field is optional; anything left out
//! falls back to the defaults below.

use serde::Deserialize;

use crate::components::marquee::MarqueeDirection;
use crate::components::particle_field::ThemeName;

/// Id of the script element holding the JSON configuration.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

/// Complete configuration for every effect on the page.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FxConfig {
	pub particles: ParticleSettings,
	pub marquee: MarqueeSettings,
	pub typewriter: TypewriterSettings,
	pub reveal: RevealSettings,
	pub tilt: TiltSettings,
	pub nav: NavSettings,
}

impl FxConfig {
	/// Parse a JSON document, keeping defaults for missing fields.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Particle network parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ParticleSettings {
	/// Selector of the element the canvas is mounted into. Should name a
	/// container, not a `<canvas>`.
	pub host: String,
	/// Color preset for particles and links.
	pub theme: ThemeName,
	/// Number of particles per field.
	pub count: usize,
	/// Pairs closer than this are linked by a line.
	pub link_distance: f64,
	/// Pointer influence radius.
	pub pointer_radius: f64,
	/// Displacement applied at zero distance from the pointer.
	pub pointer_force: f64,
	/// Upper bound for each velocity component (symmetric).
	pub max_speed: f64,
	pub radius_min: f64,
	pub radius_max: f64,
}

impl Default for ParticleSettings {
	fn default() -> Self {
		Self {
			host: "#hero-particles".into(),
			theme: ThemeName::Neon,
			count: 80,
			link_distance: 150.0,
			pointer_radius: 200.0,
			pointer_force: 3.0,
			max_speed: 0.25,
			radius_min: 1.0,
			radius_max: 3.0,
		}
	}
}

/// Marquee defaults, overridable per track with `data-speed` and `data-direction`.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct MarqueeSettings {
	pub selector: String,
	/// Seconds per 1000px of total track width.
	pub speed: f64,
	pub direction: MarqueeDirection,
}

impl Default for MarqueeSettings {
	fn default() -> Self {
		Self {
			selector: ".marquee-track".into(),
			speed: 40.0,
			direction: MarqueeDirection::Left,
		}
	}
}

/// Typewriter timings, in milliseconds.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
	pub selector: String,
	pub type_ms: u32,
	pub delete_ms: u32,
	/// Pause once a word is fully typed.
	pub hold_ms: u32,
	/// Pause once a word is fully deleted.
	pub gap_ms: u32,
}

impl Default for TypewriterSettings {
	fn default() -> Self {
		Self {
			selector: ".typewriter".into(),
			type_ms: 100,
			delete_ms: 50,
			hold_ms: 2000,
			gap_ms: 500,
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealSettings {
	pub selector: String,
	pub visible_class: String,
	/// Visible fraction that counts as "in view".
	pub threshold: f64,
}

impl Default for RevealSettings {
	fn default() -> Self {
		Self {
			selector: ".reveal".into(),
			visible_class: "visible".into(),
			threshold: 0.1,
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
	pub selector: String,
	/// Pixels of pointer offset per degree of rotation.
	pub divisor: f64,
	/// CSS perspective distance in pixels.
	pub perspective: f64,
	/// Scale applied while hovered.
	pub scale: f64,
}

impl Default for TiltSettings {
	fn default() -> Self {
		Self {
			selector: ".tilt-card".into(),
			divisor: 10.0,
			perspective: 1000.0,
			scale: 1.02,
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct NavSettings {
	/// Hamburger button.
	pub toggle: String,
	/// Container whose class is toggled.
	pub links: String,
	pub active_class: String,
	/// Height of the fixed header subtracted from anchor scroll targets.
	pub header_offset: f64,
}

impl Default for NavSettings {
	fn default() -> Self {
		Self {
			toggle: ".hamburger".into(),
			links: ".nav-links".into(),
			active_class: "active".into(),
			header_offset: 80.0,
		}
	}
}
