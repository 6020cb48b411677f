//! folio-fx: client-side effects for a static portfolio page.
//!
//! This crate compiles to WASM and enhances markup that is already on the page:
//! an animated particle network behind the hero, seamless logo marquees, a
//! typewriter headline, scroll reveals, tilting cards and the mobile menu.
//! Each effect starts independently; one that cannot find its elements is
//! skipped without affecting the others.

use getrandom as _;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

pub mod components;
pub mod config;
pub mod error;

pub use components::particle_field::{ParticleField, ParticleFieldCanvas};
pub use config::FxConfig;
pub use error::{FxError, FxResult};

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

use components::{marquee, nav, particle_field, reveal, tilt, typewriter};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("folio-fx: logging initialized");
}

/// Load configuration from a script element with id="fx-config".
/// Falls back to defaults when the element is absent or malformed.
pub fn load_config(document: &Document) -> FxConfig {
	let Some(text) = document
		.get_element_by_id(config::CONFIG_ELEMENT_ID)
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return FxConfig::default();
	};

	match FxConfig::from_json(&text) {
		Ok(config) => {
			info!("folio-fx: loaded page configuration");
			config
		}
		Err(e) => {
			warn!("folio-fx: failed to parse configuration, using defaults: {}", e);
			FxConfig::default()
		}
	}
}

fn report<T>(effect: &str, result: FxResult<T>) {
	if let Err(e) = result {
		warn!("folio-fx: {} skipped: {}", effect, e);
	}
}

/// Start every effect on the current page.
pub fn enhance_page() {
	let Some(window) = web_sys::window() else {
		warn!("folio-fx: no window, nothing to enhance");
		return;
	};
	let Some(document) = window.document() else {
		warn!("folio-fx: no document, nothing to enhance");
		return;
	};
	let config = load_config(&document);

	report("navigation", nav::init_nav(&window, &document, &config.nav));
	report(
		"particle field",
		particle_field::mount(&document, config.particles.clone()),
	);
	report(
		"marquee",
		marquee::init_marquees(&window, &document, &config.marquee),
	);
	report(
		"typewriter",
		typewriter::init_typewriters(&document, &config.typewriter),
	);
	report("reveal", reveal::init_reveal(&document, &config.reveal));
	report("tilt", tilt::init_tilt(&document, &config.tilt));
}
