// compress.rs  Compression facade.
//
//! The single entry point tying the rest of the engine together: build
//! integral statistics, build the partition tree, prune it per the
//! resolved [`Quality`], render back to a grid, and report metrics.
use std::time::Instant;

use crate::error::{Error, Result};
use crate::grid::PixelGrid;
use crate::quality::Quality;
use crate::rect::Rect;
use crate::stats::IntegralStats;
use crate::tree::Node;

/// The reconstructed grid plus the metrics describing how much it was
/// compressed.
#[derive(Debug)]
pub struct CompressionResult {
    /// The reconstructed pixel grid, same dimensions as the input.
    pub grid: PixelGrid,
    /// `compressed_regions as f64 / original_pixels as f64` (`0.0` for an
    /// empty image). Smaller is more compressed.
    pub compression_ratio: f64,
    /// Total pixel count of the input (`width * height`).
    pub original_pixels: u64,
    /// Number of leaves remaining in the pruned tree.
    pub compressed_regions: u64,
    /// Wall-clock seconds from the start of the statistics build to the end
    /// of rendering.
    pub processing_time_seconds: f64,
}

/// Build statistics, build the tree, prune per `quality`, render, and report
/// metrics for `grid`.
///
/// Returns [`Error::EmptyImage`] if `grid` has zero width or height.
pub fn compress(grid: &PixelGrid, quality: Quality) -> Result<CompressionResult> {
    if grid.is_empty() {
        return Err(Error::EmptyImage);
    }

    let start = Instant::now();

    let stats = IntegralStats::build(grid);
    let root_rect = Rect::new(0, 0, grid.width() - 1, grid.height() - 1);
    let mut tree = Node::build(&stats, root_rect);

    let cfg = quality.resolve();
    log::debug!(
        "pruning with similarity >= {:.4}, tolerance <= {:.4}",
        cfg.minimum_similarity_percentage,
        cfg.color_tolerance_threshold
    );
    tree.prune(&cfg);

    let mut out = PixelGrid::new(grid.width(), grid.height());
    tree.render(&mut out);

    let processing_time_seconds = start.elapsed().as_secs_f64();
    let original_pixels = grid.width() as u64 * grid.height() as u64;
    let compressed_regions = tree.count_leaves();
    let compression_ratio = compressed_regions as f64 / original_pixels as f64;

    log::info!(
        "compressed {}x{} image to {} region(s) (ratio {:.4}) in {:.3}s",
        grid.width(),
        grid.height(),
        compressed_regions,
        compression_ratio,
        processing_time_seconds
    );

    Ok(CompressionResult {
        grid: out,
        compression_ratio,
        original_pixels,
        compressed_regions,
        processing_time_seconds,
    })
}
