// mod.rs       Color model module.
//
//! Color types shared by the rest of the crate: an 8-bit [`Rgba`] pixel as
//! produced by the PNG codec boundary, and the perceptual [`Hsla`] pixel the
//! compression engine actually operates on.
mod hsla;
mod rgba;

pub use hsla::{Hsla, DEFAULT_SIMILARITY_EPSILON};
pub use rgba::Rgba;
