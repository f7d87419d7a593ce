// lib.rs      Rasterblock crate.
//
//! Content-aware lossy raster compression: images are decomposed into an
//! adaptive binary partition tree whose leaves are flat-filled rectangles,
//! merged wherever the result still looks like the source within a
//! quality-controlled tolerance.
#[macro_use]
extern crate log;

pub mod color;
pub mod compress;
pub mod error;
pub mod grid;
pub mod png_io;
pub mod quality;
pub mod rect;
pub mod stats;
pub mod tree;

pub use crate::color::{Hsla, Rgba};
pub use crate::compress::{compress, CompressionResult};
pub use crate::error::{Error, Result};
pub use crate::grid::PixelGrid;
pub use crate::quality::{Quality, QualityLevel};
pub use crate::rect::Rect;
pub use crate::stats::IntegralStats;
pub use crate::tree::Node;
