//! Binding marquee tracks in the page to their clones and animation.

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Node, Window};

use super::layout::{
	MarqueeAnimation, MarqueeDirection, clone_count, parse_px, sequence_width,
};
use crate::config::MarqueeSettings;
use crate::error::{FxError, FxResult};

/// Outcome of [`prepare`]: the width of one run of the original items and
/// how many copies of that run were appended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreparedTrack {
	pub content_width: f64,
	pub copies: usize,
}

impl PreparedTrack {
	/// Width of the originals plus every appended copy.
	pub fn total_width(&self) -> f64 {
		self.content_width * (1 + self.copies) as f64
	}
}

fn child_elements(track: &HtmlElement) -> Vec<Element> {
	let children = track.children();
	(0..children.length())
		.filter_map(|i| children.item(i))
		.collect()
}

/// Flex/grid gap between items; zero when the track has none.
fn item_gap(window: &Window, track: &HtmlElement) -> f64 {
	window
		.get_computed_style(track)
		.ok()
		.flatten()
		.and_then(|style| style.get_property_value("column-gap").ok())
		.and_then(|value| parse_px(&value))
		.unwrap_or(0.0)
}

/// Laid-out width of `items`. The container itself is never measured, since
/// a full-width track would report the viewport instead of its content.
fn items_width(window: &Window, track: &HtmlElement, items: &[Element]) -> f64 {
	let widths: Vec<f64> = items
		.iter()
		.map(|el| el.get_bounding_client_rect().width())
		.collect();
	sequence_width(&widths, item_gap(window, track))
}

/// Append enough deep copies of the track's items to span the viewport.
pub fn prepare(
	window: &Window,
	track: &HtmlElement,
	viewport_width: f64,
) -> FxResult<PreparedTrack> {
	let originals = child_elements(track);
	let content_width = items_width(window, track, &originals);
	let copies = clone_count(content_width, viewport_width)?;

	for _ in 0..copies {
		for item in &originals {
			let copy: Node = item.clone_node_with_deep(true)?;
			if let Some(el) = copy.dyn_ref::<Element>() {
				el.set_attribute("aria-hidden", "true")?;
			}
			track.append_child(&copy)?;
		}
	}

	debug!(
		"folio-fx: marquee content {}px, viewport {}px, {} copies",
		content_width, viewport_width, copies
	);
	Ok(PreparedTrack {
		content_width,
		copies,
	})
}

/// Measure the extended track and start its looping translation.
pub fn activate(
	window: &Window,
	track: &HtmlElement,
	direction: MarqueeDirection,
	speed: f64,
) -> FxResult<MarqueeAnimation> {
	let total_width = items_width(window, track, &child_elements(track));
	let animation = MarqueeAnimation::new(direction, total_width, speed);
	let style = track.style();
	for (property, value) in animation.style_properties() {
		style.set_property(property, &value)?;
	}
	Ok(animation)
}

fn track_direction(track: &HtmlElement, fallback: MarqueeDirection) -> MarqueeDirection {
	track
		.get_attribute("data-direction")
		.and_then(|v| MarqueeDirection::parse(&v))
		.unwrap_or(fallback)
}

fn track_speed(track: &HtmlElement, fallback: f64) -> f64 {
	track
		.get_attribute("data-speed")
		.and_then(|v| v.trim().parse::<f64>().ok())
		.filter(|s| s.is_finite() && *s > 0.0)
		.unwrap_or(fallback)
}

/// Prepare and activate every track matching `settings.selector`.
/// Returns how many tracks were animated.
pub fn init_marquees(
	window: &Window,
	document: &Document,
	settings: &MarqueeSettings,
) -> FxResult<usize> {
	let viewport_width = window.inner_width()?.as_f64().unwrap_or(0.0);
	let tracks = document.query_selector_all(&settings.selector)?;
	if tracks.length() == 0 {
		return Err(FxError::MissingElement(settings.selector.clone()));
	}

	let mut started = 0;
	for i in 0..tracks.length() {
		let Some(track) = tracks
			.item(i)
			.and_then(|node| node.dyn_into::<HtmlElement>().ok())
		else {
			continue;
		};

		let direction = track_direction(&track, settings.direction);
		let speed = track_speed(&track, settings.speed);
		let result = prepare(window, &track, viewport_width)
			.and_then(|_| activate(window, &track, direction, speed));
		match result {
			Ok(animation) => {
				debug!(
					"folio-fx: marquee {} running {:?} over {}s",
					i, animation.direction, animation.duration_secs
				);
				started += 1;
			}
			Err(e) => warn!("folio-fx: marquee {} left static: {}", i, e),
		}
	}

	info!("folio-fx: {} marquee track(s) animated", started);
	Ok(started)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
	use wasm_bindgen_test::wasm_bindgen_test;

	use super::*;

	fn document() -> Document {
		web_sys::window().unwrap().document().unwrap()
	}

	/// A full-width, overflow-hidden flex track holding `labels` as fixed
	/// 100px items, attached to the body so it is laid out.
	fn track(labels: &[&str], gap_px: u32) -> HtmlElement {
		let doc = document();
		let track: HtmlElement = doc.create_element("div").unwrap().dyn_into().unwrap();
		track
			.set_attribute(
				"style",
				&format!("display: flex; overflow: hidden; width: 1200px; gap: {gap_px}px;"),
			)
			.unwrap();
		for label in labels {
			let item = doc.create_element("span").unwrap();
			item.set_attribute("style", "flex: none; display: block; width: 100px;")
				.unwrap();
			item.set_text_content(Some(label));
			track.append_child(&item).unwrap();
		}
		doc.body().unwrap().append_child(&track).unwrap();
		track
	}

	fn texts(track: &HtmlElement) -> Vec<String> {
		child_elements(track)
			.iter()
			.map(|el| el.text_content().unwrap_or_default())
			.collect()
	}

	#[wasm_bindgen_test]
	fn prepare_measures_items_not_the_full_width_container() {
		let window = web_sys::window().unwrap();
		let track = track(&["a", "b", "c"], 0);
		let prepared = prepare(&window, &track, 1200.0).unwrap();

		assert_eq!(prepared.content_width, 300.0);
		assert_eq!(prepared.copies, 5);
		assert!(prepared.total_width() >= 1200.0);
		track.remove();
	}

	#[wasm_bindgen_test]
	fn prepare_appends_copies_in_order() {
		let window = web_sys::window().unwrap();
		let track = track(&["a", "b", "c"], 0);
		let prepared = prepare(&window, &track, 1200.0).unwrap();

		let children = child_elements(&track);
		assert_eq!(children.len(), 3 * (1 + prepared.copies));
		assert_eq!(
			texts(&track),
			["a", "b", "c"].repeat(1 + prepared.copies)
		);
		assert!(children[..3].iter().all(|el| el.get_attribute("aria-hidden").is_none()));
		assert!(
			children[3..]
				.iter()
				.all(|el| el.get_attribute("aria-hidden").as_deref() == Some("true"))
		);
		track.remove();
	}

	#[wasm_bindgen_test]
	fn prepare_counts_the_gap() {
		let window = web_sys::window().unwrap();
		let track = track(&["a", "b", "c"], 20);
		let prepared = prepare(&window, &track, 1200.0).unwrap();
		assert_eq!(prepared.content_width, 360.0);
		assert_eq!(prepared.copies, 5);
		track.remove();
	}

	#[wasm_bindgen_test]
	fn prepare_rejects_empty_track() {
		let window = web_sys::window().unwrap();
		let track = track(&[], 0);
		assert!(matches!(
			prepare(&window, &track, 1200.0),
			Err(FxError::EmptyTrack)
		));
		assert_eq!(track.child_element_count(), 0);
		track.remove();
	}

	#[wasm_bindgen_test]
	fn activate_sets_animation_properties() {
		let window = web_sys::window().unwrap();
		let track = track(&["a", "b", "c"], 0);
		let prepared = prepare(&window, &track, 1200.0).unwrap();
		let animation = activate(&window, &track, MarqueeDirection::Right, 40.0).unwrap();

		assert_eq!(prepared.total_width(), 1800.0);
		assert_eq!(animation.duration_secs, 72.0);
		let style = track.style();
		assert_eq!(style.get_property_value("animation-name").unwrap(), "marquee-right");
		assert_eq!(style.get_property_value("animation-duration").unwrap(), "72s");
		assert_eq!(
			style.get_property_value("animation-timing-function").unwrap(),
			"linear"
		);
		assert_eq!(
			style.get_property_value("animation-iteration-count").unwrap(),
			"infinite"
		);
		track.remove();
	}
}
