//! Animated particle network for the hero background.
//!
//! A fixed batch of particles drifts across a canvas, bouncing off its edges.
//! Pairs closer than the link distance are joined by a line that fades with
//! distance, and particles near the pointer are pushed away from it.
//!
//! # Example
//!
//! ```ignore
//! use folio_fx::components::particle_field::ParticleFieldCanvas;
//! use folio_fx::config::ParticleSettings;
//!
//! view! { <ParticleFieldCanvas settings=ParticleSettings::default() /> }
//! ```

mod component;
mod particles;
mod render;
mod state;
mod surface;
pub mod theme;

use leptos::prelude::*;
use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, HtmlElement};

pub use component::ParticleFieldCanvas;
pub use particles::{Particle, link_opacity};
pub use render::render;
pub use state::{Link, ParticleField};
pub use surface::DrawSurface;
pub use theme::{Color, FieldTheme, ThemeName};

use crate::config::ParticleSettings;
use crate::error::{FxError, FxResult};

/// Find the element the canvas goes into. A host that is itself a `<canvas>`
/// would swallow ours as fallback content, so its parent is used instead.
pub fn resolve_host(document: &Document, selector: &str) -> FxResult<HtmlElement> {
	let element = document
		.query_selector(selector)?
		.ok_or_else(|| FxError::MissingElement(selector.to_string()))?;

	if element.is_instance_of::<HtmlCanvasElement>() {
		warn!(
			"folio-fx: {} is a <canvas>, mounting particle field beside it",
			selector
		);
		return element
			.parent_element()
			.and_then(|parent| parent.dyn_into::<HtmlElement>().ok())
			.ok_or_else(|| FxError::MissingElement(selector.to_string()));
	}

	element
		.dyn_into()
		.map_err(|_| FxError::MissingElement(selector.to_string()))
}

/// Mount a [`ParticleFieldCanvas`] into the element matching `settings.host`.
pub fn mount(document: &Document, settings: ParticleSettings) -> FxResult<()> {
	let host = resolve_host(document, &settings.host)?;
	let theme = FieldTheme::from(settings.theme);

	debug!("folio-fx: mounting particle field into {}", settings.host);
	leptos::mount::mount_to(host, move || {
		view! { <ParticleFieldCanvas settings=settings theme=theme /> }
	})
	.forget();
	Ok(())
}
