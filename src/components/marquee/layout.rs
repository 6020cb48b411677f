//! Width and timing math for seamless marquees.

use serde::Deserialize;

use crate::error::{FxError, FxResult};

/// Which way the content travels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarqueeDirection {
	#[default]
	Left,
	Right,
}

impl MarqueeDirection {
	/// Parse a `data-direction` attribute value.
	pub fn parse(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"left" => Some(Self::Left),
			"right" => Some(Self::Right),
			_ => None,
		}
	}

	/// Name of the CSS keyframes moving content this way.
	pub fn keyframes(self) -> &'static str {
		match self {
			Self::Left => "marquee-left",
			Self::Right => "marquee-right",
		}
	}
}

/// Number of full copies of the original items to append so the track
/// covers a whole viewport plus one extra copy for fractional alignment.
pub fn clone_count(content_width: f64, viewport_width: f64) -> FxResult<usize> {
	if !content_width.is_finite() || content_width <= 0.0 {
		return Err(FxError::EmptyTrack);
	}
	Ok((viewport_width.max(0.0) / content_width).ceil() as usize + 1)
}

/// Width of one run of items laid out side by side, counting the gap that
/// follows each item so consecutive copies tile without a seam.
pub fn sequence_width(item_widths: &[f64], gap: f64) -> f64 {
	item_widths.iter().sum::<f64>() + gap.max(0.0) * item_widths.len() as f64
}

/// Parse a computed CSS length such as `"24px"`. `"normal"` and other
/// non-pixel values give `None`.
pub fn parse_px(value: &str) -> Option<f64> {
	value
		.trim()
		.strip_suffix("px")
		.and_then(|n| n.trim().parse::<f64>().ok())
		.filter(|n| n.is_finite())
}

/// Seconds for one loop: `speed` seconds per 1000px of total width.
pub fn loop_duration(total_width: f64, speed: f64) -> f64 {
	total_width * speed / 1000.0
}

/// A linear, endlessly repeating translation bound to a track.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeAnimation {
	pub direction: MarqueeDirection,
	pub duration_secs: f64,
}

impl MarqueeAnimation {
	pub fn new(direction: MarqueeDirection, total_width: f64, speed: f64) -> Self {
		Self {
			direction,
			duration_secs: loop_duration(total_width, speed),
		}
	}

	/// `(property, value)` pairs to set on the track's inline style.
	pub fn style_properties(&self) -> [(&'static str, String); 4] {
		[
			("animation-name", self.direction.keyframes().to_string()),
			("animation-duration", format!("{}s", self.duration_secs)),
			("animation-timing-function", "linear".to_string()),
			("animation-iteration-count", "infinite".to_string()),
		]
	}
}
