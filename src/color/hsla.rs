// hsla.rs      HSLA color model.
//
//! Hue/saturation/luminance/alpha pixel, and the two distance metrics used
//! elsewhere in the crate: [`Hsla::pixel_distance`] (cone-projection,
//! used for pixel equality) and [`Hsla::prune_color_distance`] (plain
//! HSL-component difference, used while pruning the partition tree). They
//! are deliberately not interchangeable — see the module-level remarks on
//! each.
use crate::color::Rgba;

/// Epsilon below which a hue/saturation delta is treated as zero (avoids
/// dividing by ~0 in the RGB <-> HSL conversions).
const EPSILON: f64 = 1e-10;

/// Default similarity threshold for [`Hsla`] equality (`PartialEq`).
pub const DEFAULT_SIMILARITY_EPSILON: f64 = 0.007;

/// A hue/saturation/luminance/alpha pixel.
///
/// `hue` is in degrees `[0, 360)`, the rest are fractions in `[0, 1]`. When
/// `saturation` is zero, `hue` is meaningless and stored as `0` by
/// convention.
#[derive(Clone, Copy, Debug)]
pub struct Hsla {
    /// Hue, in degrees, `[0, 360)`.
    pub hue: f64,
    /// Saturation, `[0, 1]`.
    pub saturation: f64,
    /// Luminance, `[0, 1]`.
    pub luminance: f64,
    /// Alpha, `[0, 1]`.
    pub alpha: f64,
}

impl Hsla {
    /// Build a pixel from its four components, unnormalized.
    pub fn new(hue: f64, saturation: f64, luminance: f64, alpha: f64) -> Self {
        Hsla { hue, saturation, luminance, alpha }
    }

    /// Convert an [`Rgba`] pixel into `Hsla`.
    pub fn from_rgba(p: Rgba) -> Self {
        let r = p.r as f64 / 255.0;
        let g = p.g as f64 / 255.0;
        let b = p.b as f64 / 255.0;
        let a = p.a as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;
        let luminance = (max + min) / 2.0;

        if delta < EPSILON {
            return Hsla { hue: 0.0, saturation: 0.0, luminance, alpha: a };
        }

        let saturation = if luminance < 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        let mut hue = if max == r {
            let h = (g - b) / delta;
            if g < b { h + 6.0 } else { h }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        hue *= 60.0;

        Hsla { hue, saturation, luminance, alpha: a }
    }

    /// Convert back to an 8-bit [`Rgba`] pixel.
    pub fn to_rgba(&self) -> Rgba {
        let a = (self.alpha * 255.0).round().clamp(0.0, 255.0) as u8;

        if self.saturation < EPSILON {
            let v = (self.luminance * 255.0).round().clamp(0.0, 255.0) as u8;
            return Rgba::new(v, v, v, a);
        }

        let l = self.luminance;
        let s = self.saturation;
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = self.hue / 360.0;

        let to_channel = |t: f64| -> u8 {
            (hue_to_rgb(p, q, t) * 255.0).round().clamp(0.0, 255.0) as u8
        };

        let r = to_channel(h + 1.0 / 3.0);
        let g = to_channel(h);
        let b = to_channel(h - 1.0 / 3.0);
        Rgba::new(r, g, b, a)
    }

    /// Reduce `hue` modulo 360 into `[0, 360)` and clamp `saturation`,
    /// `luminance` and `alpha` into `[0, 1]`.
    pub fn normalize(&self) -> Hsla {
        let mut hue = self.hue % 360.0;
        if hue < 0.0 {
            hue += 360.0;
        }
        Hsla {
            hue,
            saturation: self.saturation.clamp(0.0, 1.0),
            luminance: self.luminance.clamp(0.0, 1.0),
            alpha: self.alpha.clamp(0.0, 1.0),
        }
    }

    /// Project onto the bi-cone used for [`pixel_distance`](Self::pixel_distance):
    /// `x = sin(H) S L`, `y = cos(H) S L`, `z = L`.
    fn cone_coords(&self) -> (f64, f64, f64) {
        let rad = self.hue.to_radians();
        let x = rad.sin() * self.saturation * self.luminance;
        let y = rad.cos() * self.saturation * self.luminance;
        (x, y, self.luminance)
    }

    /// Perceptual distance used for pixel equality: Euclidean distance
    /// between the two pixels' cone projections.
    pub fn pixel_distance(&self, other: &Hsla) -> f64 {
        let (x1, y1, z1) = self.cone_coords();
        let (x2, y2, z2) = other.cone_coords();
        ((x1 - x2).powi(2) + (y1 - y2).powi(2) + (z1 - z2).powi(2)).sqrt()
    }

    /// Two pixels are similar at `tau` iff their [`pixel_distance`](Self::pixel_distance)
    /// is strictly less than `tau`.
    pub fn is_similar(&self, other: &Hsla, tau: f64) -> bool {
        self.pixel_distance(other) < tau
    }

    /// Color-distance variant used while pruning the partition tree. Distinct
    /// from [`pixel_distance`](Self::pixel_distance): hue difference is
    /// wrapped and normalized to `[0, 1]` rather than projected into the cone.
    pub fn prune_color_distance(&self, other: &Hsla) -> f64 {
        let mut dh = (self.hue - other.hue).abs();
        if dh > 180.0 {
            dh = 360.0 - dh;
        }
        dh /= 180.0;
        let ds = self.saturation - other.saturation;
        let dl = self.luminance - other.luminance;
        (dh * dh + ds * ds + dl * dl).sqrt()
    }
}

impl Default for Hsla {
    /// Opaque white: `H=0, S=0, L=1, A=1`.
    fn default() -> Self {
        Hsla { hue: 0.0, saturation: 0.0, luminance: 1.0, alpha: 1.0 }
    }
}

/// `PartialEq` is the similarity test at [`DEFAULT_SIMILARITY_EPSILON`]; this
/// is the only equality test used by the tree and the grid.
impl PartialEq for Hsla {
    fn eq(&self, other: &Self) -> bool {
        self.is_similar(other, DEFAULT_SIMILARITY_EPSILON)
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t % 1.0;
    if t < 0.0 {
        t += 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_one(a: u8, b: u8) -> bool {
        (a as i16 - b as i16).abs() <= 1
    }

    fn round_trips(p: Rgba) {
        let back = p.to_hsla().to_rgba();
        assert!(within_one(p.r, back.r), "{:?} -> {:?}", p, back);
        assert!(within_one(p.g, back.g), "{:?} -> {:?}", p, back);
        assert!(within_one(p.b, back.b), "{:?} -> {:?}", p, back);
        assert!(within_one(p.a, back.a), "{:?} -> {:?}", p, back);
    }

    #[test]
    fn round_trip_primaries() {
        round_trips(Rgba::new(255, 0, 0, 255));
        round_trips(Rgba::new(0, 255, 0, 255));
        round_trips(Rgba::new(0, 0, 255, 255));
        round_trips(Rgba::new(255, 255, 0, 128));
        round_trips(Rgba::new(0, 255, 255, 64));
        round_trips(Rgba::new(255, 0, 255, 0));
        round_trips(Rgba::new(128, 128, 128, 255));
        round_trips(Rgba::new(17, 201, 93, 255));
    }

    #[test]
    fn normalize_is_idempotent() {
        let x = Hsla::new(721.5, 1.4, -0.2, 2.0);
        let once = x.normalize();
        let twice = once.normalize();
        assert_eq!(once.hue, twice.hue);
        assert_eq!(once.saturation, twice.saturation);
        assert_eq!(once.luminance, twice.luminance);
        assert_eq!(once.alpha, twice.alpha);
    }

    #[test]
    fn equality_uses_similarity() {
        let a = Hsla::new(0.0, 0.5, 0.5, 1.0);
        let b = Hsla::new(0.0, 0.5002, 0.5, 1.0);
        assert_eq!(a, b);
        let c = Hsla::new(0.0, 0.9, 0.5, 1.0);
        assert_ne!(a, c);
    }

    #[test]
    fn prune_distance_wraps_hue() {
        let a = Hsla::new(350.0, 0.5, 0.5, 1.0);
        let b = Hsla::new(10.0, 0.5, 0.5, 1.0);
        // hue delta wraps to 20 degrees, not 340
        assert!((a.prune_color_distance(&b) - (20.0 / 180.0)).abs() < 1e-9);
    }
}
