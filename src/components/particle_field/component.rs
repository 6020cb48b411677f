//! Leptos component wrapping the particle network canvas.
//!
//! The component creates a canvas sized to its host (or the viewport), tracks
//! the pointer at window level so the canvas can sit behind page content, and
//! drives the simulation and renderer from a `requestAnimationFrame` loop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::ParticleField;
use super::theme::FieldTheme;
use crate::config::ParticleSettings;

/// Bundles the simulation with its visual configuration.
struct FieldContext {
	field: ParticleField,
	theme: FieldTheme,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Size of the drawing surface: the viewport when `fullscreen`, otherwise
/// the canvas' parent element.
fn surface_size(window: &Window, canvas: &HtmlCanvasElement, fullscreen: bool) -> (f64, f64) {
	if fullscreen {
		(
			window
				.inner_width()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(800.0),
			window
				.inner_height()
				.ok()
				.and_then(|v| v.as_f64())
				.unwrap_or(600.0),
		)
	} else {
		canvas
			.parent_element()
			.map(|p| (p.client_width() as f64, p.client_height() as f64))
			.unwrap_or((800.0, 600.0))
	}
}

/// Renders the animated particle network on a canvas element.
///
/// The canvas fills its parent by default; set `fullscreen = true` to size it
/// to the viewport instead. Either way, a window resize respawns the field at
/// the new size. If the browser refuses a 2D context the canvas stays blank
/// and nothing else happens.
#[component]
pub fn ParticleFieldCanvas(
	settings: ParticleSettings,
	#[prop(default = FieldTheme::default())] theme: FieldTheme,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let resize_cb: FrameCallback = Rc::new(RefCell::new(None));
	let pointer_cbs: Rc<RefCell<Vec<Closure<dyn FnMut(MouseEvent)>>>> =
		Rc::new(RefCell::new(Vec::new()));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if context.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};

		let ctx: CanvasRenderingContext2d = match canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into().ok())
		{
			Some(ctx) => ctx,
			None => {
				warn!("folio-fx: 2d context unavailable, particle field disabled");
				return;
			}
		};

		let (w, h) = surface_size(&window, &canvas, fullscreen);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		*context.borrow_mut() = Some(FieldContext {
			field: ParticleField::new(&settings, &theme, w, h),
			theme: theme.clone(),
		});
		info!(
			"folio-fx: particle field started with {} particles on {}x{}",
			settings.count, w, h
		);

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = surface_size(&win, &canvas_resize, fullscreen);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (context_move, canvas_move) = (context.clone(), canvas.clone());
		let on_mousemove = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			let rect = canvas_move.get_bounding_client_rect();
			let point = (
				ev.client_x() as f64 - rect.left(),
				ev.client_y() as f64 - rect.top(),
			);
			if let Some(ref mut c) = *context_move.borrow_mut() {
				c.field.set_pointer(Some(point));
			}
		});

		// `mouseout` with no related target means the pointer left the window.
		let context_out = context.clone();
		let on_mouseout = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			if ev.related_target().is_some() {
				return;
			}
			if let Some(ref mut c) = *context_out.borrow_mut() {
				c.field.set_pointer(None);
			}
		});

		for (event, cb) in [("mousemove", &on_mousemove), ("mouseout", &on_mouseout)] {
			let _ = window.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref());
		}
		pointer_cbs.borrow_mut().extend([on_mousemove, on_mouseout]);

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.advance();
				render::render(&c.field, &ctx, &c.theme);
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particle-field-canvas"
			aria-hidden="true"
			style="display: block; width: 100%; height: 100%; pointer-events: none;"
		/>
	}
}
