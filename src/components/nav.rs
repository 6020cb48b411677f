//! Mobile menu toggle and in-page anchor scrolling.

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config::NavSettings;
use crate::error::FxResult;

/// Vertical scroll position that lands a section just below the fixed header.
pub fn scroll_target_top(offset_top: f64, header_offset: f64) -> f64 {
	(offset_top - header_offset).max(0.0)
}

/// Wire the hamburger toggle and smooth scrolling for `a[href^="#"]` links.
///
/// A missing hamburger or links container only disables the toggle. Returns
/// the number of anchors bound.
pub fn init_nav(window: &Window, document: &Document, settings: &NavSettings) -> FxResult<usize> {
	let links = document.query_selector(&settings.links)?;

	if let (Some(toggle), Some(links)) = (document.query_selector(&settings.toggle)?, &links) {
		let (links, class) = (links.clone(), settings.active_class.clone());
		let on_click = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			let _ = links.class_list().toggle(&class);
		});
		toggle.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
	}

	let anchors = document.query_selector_all("a[href^=\"#\"]")?;
	let mut bound = 0;
	for i in 0..anchors.length() {
		let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let on_click = anchor_handler(
			window.clone(),
			document.clone(),
			anchor.clone(),
			links.clone(),
			settings,
		);
		anchor.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
		on_click.forget();
		bound += 1;
	}

	info!("folio-fx: navigation bound to {} anchor(s)", bound);
	Ok(bound)
}

fn anchor_handler(
	window: Window,
	document: Document,
	anchor: Element,
	links: Option<Element>,
	settings: &NavSettings,
) -> Closure<dyn FnMut(MouseEvent)> {
	let (header_offset, class) = (settings.header_offset, settings.active_class.clone());
	Closure::new(move |ev: MouseEvent| {
		ev.prevent_default();
		let Some(href) = anchor.get_attribute("href") else {
			return;
		};
		// A bare "#" is not a valid selector and simply has no target.
		let Some(target) = document
			.query_selector(&href)
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
		else {
			return;
		};

		let options = ScrollToOptions::new();
		options.set_top(scroll_target_top(target.offset_top() as f64, header_offset));
		options.set_behavior(ScrollBehavior::Smooth);
		window.scroll_to_with_scroll_to_options(&options);

		if let Some(ref links) = links {
			let _ = links.class_list().remove_1(&class);
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn target_sits_below_header() {
		assert_eq!(scroll_target_top(900.0, 80.0), 820.0);
	}

	#[test]
	fn target_near_top_clamps_to_zero() {
		assert_eq!(scroll_target_top(40.0, 80.0), 0.0);
	}
}
