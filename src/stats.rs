// stats.rs     Integral (summed-area) statistics over a pixel grid.
//
//! A one-time, row-major sweep over a [`PixelGrid`] that builds five
//! prefix-sum tables — saturation-weighted hue-x, hue-y, saturation,
//! luminance, and a 36-bin hue histogram — enabling O(1) mean-color and
//! entropy queries over any axis-aligned [`Rect`].
//!
//! The structure is immutable once built; queries are pure and may run on
//! any number of threads concurrently.
use crate::color::Hsla;
use crate::grid::PixelGrid;
use crate::rect::Rect;

/// Number of hue bins in the histogram (`360 / 10`).
pub const HUE_BINS: usize = 36;

/// Pre-computed prefix-sum tables over a [`PixelGrid`].
pub struct IntegralStats {
    width: u32,
    height: u32,
    hue_x: Vec<f64>,
    hue_y: Vec<f64>,
    saturation: Vec<f64>,
    luminance: Vec<f64>,
    histogram: Vec<[u32; HUE_BINS]>,
}

/// Index of the hue bin a pixel with hue `h` (degrees) falls into.
fn hue_bin(h: f64) -> usize {
    ((h / 10.0).floor() as usize).min(HUE_BINS - 1)
}

impl IntegralStats {
    /// Build the prefix-sum tables for `grid` in a single row-major sweep.
    pub fn build(grid: &PixelGrid) -> Self {
        let width = grid.width();
        let height = grid.height();
        let len = (width as usize) * (height as usize);

        let mut hue_x = vec![0.0; len];
        let mut hue_y = vec![0.0; len];
        let mut saturation = vec![0.0; len];
        let mut luminance = vec![0.0; len];
        let mut histogram = vec![[0u32; HUE_BINS]; len];

        for y in 0..height {
            for x in 0..width {
                let idx = (y * width + x) as usize;
                let p = grid.pixel(x, y).expect("in-bounds access");
                let rad = p.hue.to_radians();
                let own_hx = p.saturation * rad.cos();
                let own_hy = p.saturation * rad.sin();

                let left = idx.checked_sub(1).filter(|_| x > 0);
                let top = if y > 0 { Some(idx - width as usize) } else { None };
                let top_left =
                    if x > 0 && y > 0 { Some(idx - width as usize - 1) } else { None };

                let sum4 = |cur: f64,
                            table: &[f64],
                            left: Option<usize>,
                            top: Option<usize>,
                            top_left: Option<usize>|
                 -> f64 {
                    cur + left.map_or(0.0, |i| table[i])
                        + top.map_or(0.0, |i| table[i])
                        - top_left.map_or(0.0, |i| table[i])
                };

                hue_x[idx] = sum4(own_hx, &hue_x, left, top, top_left);
                hue_y[idx] = sum4(own_hy, &hue_y, left, top, top_left);
                saturation[idx] = sum4(p.saturation, &saturation, left, top, top_left);
                luminance[idx] = sum4(p.luminance, &luminance, left, top, top_left);

                let mut bins = [0u32; HUE_BINS];
                for b in 0..HUE_BINS {
                    let l = left.map_or(0, |i| histogram[i][b]);
                    let t = top.map_or(0, |i| histogram[i][b]);
                    let tl = top_left.map_or(0, |i| histogram[i][b]);
                    bins[b] = l + t - tl;
                }
                bins[hue_bin(p.hue)] += 1;
                histogram[idx] = bins;
            }
        }

        IntegralStats { width, height, hue_x, hue_y, saturation, luminance, histogram }
    }

    fn value_at(&self, table: &[f64], x: i64, y: i64) -> f64 {
        if x < 0 || y < 0 {
            0.0
        } else {
            table[(y as u32 * self.width + x as u32) as usize]
        }
    }

    fn hist_at(&self, x: i64, y: i64) -> [u32; HUE_BINS] {
        if x < 0 || y < 0 {
            [0u32; HUE_BINS]
        } else {
            self.histogram[(y as u32 * self.width + x as u32) as usize]
        }
    }

    /// Rectangle sum of a scalar prefix-sum table, via inclusion-exclusion.
    fn rect_sum(&self, table: &[f64], rect: &Rect) -> f64 {
        debug_assert!(rect.lr_x < self.width && rect.lr_y < self.height);
        let (ux, uy) = (rect.ul_x as i64 - 1, rect.ul_y as i64 - 1);
        let (lx, ly) = (rect.lr_x as i64, rect.lr_y as i64);
        self.value_at(table, lx, ly) - self.value_at(table, ux, ly)
            - self.value_at(table, lx, uy)
            + self.value_at(table, ux, uy)
    }

    /// Number of pixels in `rect`.
    pub fn area(&self, rect: &Rect) -> u64 {
        rect.area()
    }

    /// Mean color over `rect`: saturation-weighted unit-vector average of
    /// hue (recovered via `atan2`, never naive angle averaging), plain
    /// averages of saturation and luminance, alpha fixed at `1.0`.
    pub fn mean_color(&self, rect: &Rect) -> Hsla {
        let n = rect.area() as f64;
        let hx = self.rect_sum(&self.hue_x, rect) / n;
        let hy = self.rect_sum(&self.hue_y, rect) / n;
        let s = self.rect_sum(&self.saturation, rect) / n;
        let l = self.rect_sum(&self.luminance, rect) / n;

        let mut hue = hy.atan2(hx).to_degrees();
        if hue < 0.0 {
            hue += 360.0;
        }
        Hsla::new(hue, s, l, 1.0)
    }

    /// Per-bin pixel counts over `rect`.
    pub fn hue_histogram(&self, rect: &Rect) -> [u32; HUE_BINS] {
        debug_assert!(rect.lr_x < self.width && rect.lr_y < self.height);
        let (ux, uy) = (rect.ul_x as i64 - 1, rect.ul_y as i64 - 1);
        let (lx, ly) = (rect.lr_x as i64, rect.lr_y as i64);
        let lr = self.hist_at(lx, ly);
        let ul = self.hist_at(ux, ly);
        let ur = self.hist_at(lx, uy);
        let uu = self.hist_at(ux, uy);
        let mut out = [0u32; HUE_BINS];
        for b in 0..HUE_BINS {
            out[b] = lr[b] + uu[b] - ul[b] - ur[b];
        }
        out
    }

    /// Shannon entropy (bits) of `rect`'s hue-bin distribution. `0` for an
    /// empty rectangle.
    pub fn entropy(&self, rect: &Rect) -> f64 {
        let n = rect.area();
        if n == 0 {
            return 0.0;
        }
        let n = n as f64;
        let hist = self.hue_histogram(rect);
        hist.iter()
            .filter(|&&c| c > 0)
            .map(|&c| {
                let p = c as f64 / n;
                -p * p.log2()
            })
            .sum()
    }
}
