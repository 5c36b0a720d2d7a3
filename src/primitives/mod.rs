//! Floating-point geometric primitives.

mod flat;
mod vec2;

pub use vec2::Vec2;
