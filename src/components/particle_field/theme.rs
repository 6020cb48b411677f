//! Colors and line styling for the particle network.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Visual style of the particle network.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Each particle picks one of these at creation.
	pub palette: [Color; 2],
	/// Link color at full opacity; its alpha is scaled by proximity.
	pub link_color: Color,
	pub link_width: f64,
}

impl FieldTheme {
	/// Cyan and violet on a dark hero section (default)
	pub fn neon() -> Self {
		Self {
			palette: [Color::rgb(0, 242, 255), Color::rgb(112, 0, 255)],
			link_color: Color::rgb(0, 242, 255),
			link_width: 0.5,
		}
	}

	/// Muted slate tones for light backgrounds
	pub fn slate() -> Self {
		Self {
			palette: [Color::rgb(94, 129, 172), Color::rgb(136, 160, 175)],
			link_color: Color::rgb(94, 129, 172),
			link_width: 0.5,
		}
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::neon()
	}
}

/// Preset selectable from the page configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	#[default]
	Neon,
	Slate,
}

impl From<ThemeName> for FieldTheme {
	fn from(name: ThemeName) -> Self {
		match name {
			ThemeName::Neon => Self::neon(),
			ThemeName::Slate => Self::slate(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_use_hex() {
		assert_eq!(Color::rgb(0, 242, 255).to_css(), "#00f2ff");
	}

	#[test]
	fn presets_resolve_by_name() {
		assert_eq!(FieldTheme::from(ThemeName::default()).palette, FieldTheme::neon().palette);
		let slate = FieldTheme::from(ThemeName::Slate);
		assert_eq!(slate.palette, FieldTheme::slate().palette);
		assert_ne!(slate.palette, FieldTheme::neon().palette);
	}

	#[test]
	fn translucent_colors_use_rgba() {
		assert_eq!(
			Color::rgb(112, 0, 255).with_alpha(0.25).to_css(),
			"rgba(112, 0, 255, 0.250)"
		);
	}
}
