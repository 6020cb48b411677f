//! Pointer-driven 3D tilt for cards.

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::config::TiltSettings;
use crate::error::{FxError, FxResult};

/// Card rotation in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
	pub rotate_x: f64,
	pub rotate_y: f64,
}

impl Tilt {
	/// Rotation for a pointer at `(x, y)` inside a `width` x `height` card.
	/// The card leans toward the pointer; the center gives no rotation.
	pub fn from_pointer(x: f64, y: f64, width: f64, height: f64, divisor: f64) -> Self {
		Self {
			rotate_x: (y - height / 2.0) / divisor,
			rotate_y: (width / 2.0 - x) / divisor,
		}
	}

	pub fn to_css(self, settings: &TiltSettings) -> String {
		format!(
			"perspective({}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({})",
			settings.perspective, self.rotate_x, self.rotate_y, settings.scale
		)
	}
}

/// Transform restoring a card to rest.
pub fn rest_css(settings: &TiltSettings) -> String {
	format!(
		"perspective({}px) rotateX(0deg) rotateY(0deg) scale(1)",
		settings.perspective
	)
}

/// Bind tilt handlers to every card matching `settings.selector`.
pub fn init_tilt(document: &Document, settings: &TiltSettings) -> FxResult<usize> {
	let cards = document.query_selector_all(&settings.selector)?;
	if cards.length() == 0 {
		return Err(FxError::MissingElement(settings.selector.clone()));
	}

	let mut bound = 0;
	for i in 0..cards.length() {
		let Some(card) = cards.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
			continue;
		};

		let (card_move, settings_move) = (card.clone(), settings.clone());
		let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let rect = card_move.get_bounding_client_rect();
			let tilt = Tilt::from_pointer(
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
				rect.width(),
				rect.height(),
				settings_move.divisor,
			);
			let _ = card_move
				.style()
				.set_property("transform", &tilt.to_css(&settings_move));
		});

		let (card_leave, rest) = (card.clone(), rest_css(settings));
		let on_mouseleave = Closure::<dyn FnMut(MouseEvent)>::new(move |_: MouseEvent| {
			let _ = card_leave.style().set_property("transform", &rest);
		});

		card.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref())?;
		card.add_event_listener_with_callback(
			"mouseleave",
			on_mouseleave.as_ref().unchecked_ref(),
		)?;
		on_mousemove.forget();
		on_mouseleave.forget();
		bound += 1;
	}

	info!("folio-fx: tilt bound to {} card(s)", bound);
	Ok(bound)
}
