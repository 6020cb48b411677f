//! Typewriter effect cycling through a list of words.
//!
//! The element carries its words as a JSON array in `data-words`. Each word is
//! typed one character at a time, held, erased, and followed by the next word.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::TypewriterSettings;
use crate::error::{FxError, FxResult};

/// Parse a `data-words` attribute, dropping empty entries.
pub fn parse_words(json: &str) -> FxResult<Vec<String>> {
	let words: Vec<String> = serde_json::from_str(json)?;
	let words: Vec<String> = words.into_iter().filter(|w| !w.is_empty()).collect();
	if words.is_empty() {
		return Err(FxError::EmptyWordList);
	}
	Ok(words)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
	Typing,
	Deleting,
}

/// What to display now and how long to wait before the next tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
	pub text: String,
	pub delay_ms: u32,
}

/// Pure typing state machine; the caller owns the timer.
#[derive(Clone, Debug)]
pub struct Typewriter {
	words: Vec<Vec<char>>,
	word: usize,
	shown: usize,
	phase: Phase,
	timing: TypewriterSettings,
}

impl Typewriter {
	/// Returns `None` when no word has any character.
	pub fn new(words: &[String], timing: &TypewriterSettings) -> Option<Self> {
		let words: Vec<Vec<char>> = words
			.iter()
			.map(|w| w.chars().collect::<Vec<_>>())
			.filter(|w| !w.is_empty())
			.collect();
		(!words.is_empty()).then(|| Self {
			words,
			word: 0,
			shown: 0,
			phase: Phase::Typing,
			timing: timing.clone(),
		})
	}

	pub fn tick(&mut self) -> Frame {
		let len = self.words[self.word].len();
		let delay_ms = match self.phase {
			Phase::Typing => {
				self.shown += 1;
				if self.shown >= len {
					self.phase = Phase::Deleting;
					self.timing.hold_ms
				} else {
					self.timing.type_ms
				}
			}
			Phase::Deleting => {
				self.shown = self.shown.saturating_sub(1);
				if self.shown == 0 {
					self.word = (self.word + 1) % self.words.len();
					self.phase = Phase::Typing;
					self.timing.gap_ms
				} else {
					self.timing.delete_ms
				}
			}
		};

		Frame {
			text: self.text(),
			delay_ms,
		}
	}

	/// The currently visible prefix.
	pub fn text(&self) -> String {
		let word = &self.words[self.word];
		word[..self.shown.min(word.len())].iter().collect()
	}
}

/// Build the state machine for an element's `data-words` attribute.
fn machine_for(words: Option<String>, settings: &TypewriterSettings) -> FxResult<Typewriter> {
	let words = parse_words(&words.ok_or(FxError::EmptyWordList)?)?;
	Typewriter::new(&words, settings).ok_or(FxError::EmptyWordList)
}

/// Start a typewriter on every element matching `settings.selector`.
pub fn init_typewriters(document: &Document, settings: &TypewriterSettings) -> FxResult<usize> {
	let elements = document.query_selector_all(&settings.selector)?;
	if elements.length() == 0 {
		return Err(FxError::MissingElement(settings.selector.clone()));
	}

	let mut started = 0;
	for i in 0..elements.length() {
		let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
			continue;
		};
		let machine = match machine_for(element.get_attribute("data-words"), settings) {
			Ok(machine) => machine,
			Err(e) => {
				warn!("folio-fx: typewriter {} skipped: {}", i, e);
				continue;
			}
		};
		run(element, machine)?;
		started += 1;
	}

	info!("folio-fx: {} typewriter(s) running", started);
	Ok(started)
}

/// Drive `machine` with a self-rescheduling `setTimeout`.
fn run(element: Element, mut machine: Typewriter) -> FxResult<()> {
	let window = web_sys::window().ok_or_else(|| FxError::MissingElement("window".into()))?;
	let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let tick_inner = tick.clone();

	*tick.borrow_mut() = Some(Closure::new(move || {
		let frame = machine.tick();
		element.set_text_content(Some(&frame.text));
		if let (Some(cb), Some(win)) = (&*tick_inner.borrow(), web_sys::window()) {
			let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
				cb.as_ref().unchecked_ref(),
				frame.delay_ms as i32,
			);
		}
	}));

	if let Some(ref cb) = *tick.borrow() {
		window.set_timeout_with_callback_and_timeout_and_arguments_0(
			cb.as_ref().unchecked_ref(),
			0,
		)?;
	}
	Ok(())
}
