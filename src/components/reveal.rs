//! Scroll-triggered reveal: elements gain a class the first time they enter
//! the viewport.

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{
	Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::config::RevealSettings;
use crate::error::{FxError, FxResult};

/// Observe every element matching `settings.selector`. Returns how many.
pub fn init_reveal(document: &Document, settings: &RevealSettings) -> FxResult<usize> {
	let elements = document.query_selector_all(&settings.selector)?;
	if elements.length() == 0 {
		return Err(FxError::MissingElement(settings.selector.clone()));
	}

	let class = settings.visible_class.clone();
	let on_intersect = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
		move |entries: js_sys::Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				if !entry.is_intersecting() {
					continue;
				}
				let target = entry.target();
				let _ = target.class_list().add_1(&class);
				observer.unobserve(&target);
			}
		},
	);

	let options = IntersectionObserverInit::new();
	options.set_threshold(&JsValue::from_f64(settings.threshold.clamp(0.0, 1.0)));
	let observer =
		IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
	on_intersect.forget();

	let mut observed = 0;
	for i in 0..elements.length() {
		if let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			observer.observe(&element);
			observed += 1;
		}
	}

	info!("folio-fx: {} element(s) waiting to reveal", observed);
	Ok(observed)
}
