// rgba.rs      8-bit RGBA pixel format.
//
//! Plain 8-bit RGBA pixel, as decoded from (and re-encoded to) a PNG file.
//! This is the boundary format; the engine converts every `Rgba` to [`super::Hsla`]
//! on the way in and back on the way out.
use crate::color::Hsla;

/// An 8-bit-per-channel red/green/blue/alpha pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgba {
    /// Red channel, 0..=255.
    pub r: u8,
    /// Green channel, 0..=255.
    pub g: u8,
    /// Blue channel, 0..=255.
    pub b: u8,
    /// Alpha channel, 0..=255.
    pub a: u8,
}

impl Rgba {
    /// Build a color from its four channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba { r, g, b, a }
    }

    /// Convert to the perceptual [`Hsla`] representation.
    pub fn to_hsla(self) -> Hsla {
        Hsla::from_rgba(self)
    }
}

impl From<Hsla> for Rgba {
    fn from(hsla: Hsla) -> Self {
        hsla.to_rgba()
    }
}
