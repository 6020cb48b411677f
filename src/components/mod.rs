//! Page effects, one module per behavior.

pub mod marquee;
pub mod nav;
pub mod particle_field;
pub mod reveal;
pub mod tilt;
pub mod typewriter;
