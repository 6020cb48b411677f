//! Error type shared by the DOM-binding layer.
//!
//! None of these errors reach the user: the page composer logs them and moves
//! on, so a broken component leaves the rest of the page working.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Reasons a component declined to start.
#[derive(Debug, Error)]
pub enum FxError {
	/// No element matched the selector (or the window/document is absent).
	#[error("no element matches `{0}`")]
	MissingElement(String),
	/// The canvas did not hand out a 2D context.
	#[error("2d rendering context unavailable")]
	ContextUnavailable,
	/// A marquee track measured zero width, so no clone count exists.
	#[error("marquee track has no measurable width")]
	EmptyTrack,
	/// The typewriter word list held no non-empty word.
	#[error("word list is empty")]
	EmptyWordList,
	/// The typewriter word list was not a JSON array of strings.
	#[error("invalid word list: {0}")]
	InvalidWords(#[from] serde_json::Error),
	/// A browser API call threw.
	#[error("browser error: {0}")]
	Js(String),
}

impl From<JsValue> for FxError {
	fn from(value: JsValue) -> Self {
		FxError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Shorthand used by every component entrypoint.
pub type FxResult<T> = Result<T, FxError>;
