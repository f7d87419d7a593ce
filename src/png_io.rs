// png_io.rs    PNG codec adapter.
//
//! Thin boundary between [`crate::grid::PixelGrid`] and PNG files on disk,
//! built on the `image` crate so this crate never has to own a decoder.
use std::path::Path;

use crate::color::{Hsla, Rgba};
use crate::error::{Error, Result};
use crate::grid::PixelGrid;

/// Decode a PNG (or any format `image` recognizes) at `path` into a
/// [`PixelGrid`].
pub fn decode(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path).map_err(|source| Error::Decode { path: path.to_path_buf(), source })?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let pixels: Vec<Hsla> = rgba
        .pixels()
        .map(|p| Rgba::new(p[0], p[1], p[2], p[3]).to_hsla())
        .collect();

    Ok(PixelGrid::with_pixels(width, height, pixels))
}

/// Encode `grid` as a PNG at `path`, creating or truncating the file.
pub fn encode(path: &Path, grid: &PixelGrid) -> Result<()> {
    let width = grid.width();
    let height = grid.height();
    let mut buf = image::RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let p = grid.pixel(x, y).expect("in-bounds access").to_rgba();
            buf.put_pixel(x, y, image::Rgba([p.r, p.g, p.b, p.a]));
        }
    }

    buf.save(path).map_err(|source| Error::Encode { path: path.to_path_buf(), source })
}
