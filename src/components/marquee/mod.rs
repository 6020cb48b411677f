//! Infinitely scrolling logo / tech-stream marquees.
//!
//! Each track is extended with copies of its own items until it is wider
//! than the viewport, then handed to a CSS keyframe animation whose
//! duration grows with the track width. Tracks are measured once; a later
//! viewport resize does not re-clone.
//!
//! The page stylesheet supplies the `marquee-left` / `marquee-right`
//! keyframes.

mod layout;
mod track;

pub use layout::{
	MarqueeAnimation, MarqueeDirection, clone_count, loop_duration, parse_px, sequence_width,
};
pub use track::{PreparedTrack, activate, init_marquees, prepare};
