// quality.rs   Quality-to-pruning-parameters mapping.
//
//! Translates the user-facing quality knob — a scalar in `[0, 1]`, one of a
//! fixed set of named levels, or an explicit config — into the
//! [`PruneConfig`] that drives [`crate::tree::Node::prune`].
use std::fmt;

/// The two knobs driving pruning.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PruneConfig {
    /// Minimum fraction of a subtree's leaf area that must be similar to its
    /// average color for that subtree to be pruned, `[0, 1]`.
    pub minimum_similarity_percentage: f64,
    /// Color-distance threshold below which a leaf counts as "similar" to
    /// its ancestor's average color, `> 0`.
    pub color_tolerance_threshold: f64,
}

/// A named quality level, mapped to a fixed [`PruneConfig`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityLevel {
    /// Heaviest compression tolerated; largest regions.
    Lowest,
    /// Low quality.
    Low,
    /// Medium quality (default fallback).
    Medium,
    /// High quality.
    High,
    /// Lightest compression; smallest, most detailed regions.
    Highest,
}

impl QualityLevel {
    /// The fixed `(similarity, tolerance)` pair for this level.
    pub fn config(self) -> PruneConfig {
        let (minimum_similarity_percentage, color_tolerance_threshold) = match self {
            QualityLevel::Highest => (0.99, 0.025),
            QualityLevel::High => (0.99, 0.05),
            QualityLevel::Medium => (0.99, 0.1),
            QualityLevel::Low => (0.95, 0.15),
            QualityLevel::Lowest => (0.90, 0.2),
        };
        PruneConfig { minimum_similarity_percentage, color_tolerance_threshold }
    }

    /// Parse a label, case-insensitively. Returns `None` for anything else.
    pub fn parse(label: &str) -> Option<Self> {
        match label.to_ascii_lowercase().as_str() {
            "highest" => Some(QualityLevel::Highest),
            "high" => Some(QualityLevel::High),
            "medium" => Some(QualityLevel::Medium),
            "low" => Some(QualityLevel::Low),
            "lowest" => Some(QualityLevel::Lowest),
            _ => None,
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualityLevel::Highest => "highest",
            QualityLevel::High => "high",
            QualityLevel::Medium => "medium",
            QualityLevel::Low => "low",
            QualityLevel::Lowest => "lowest",
        };
        f.write_str(s)
    }
}

/// The quality knob, in any of the three forms the facade accepts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Quality {
    /// A scalar in `[0, 1]`, mapped via [`config_for`].
    Scalar(f64),
    /// One of the fixed named levels.
    Named(QualityLevel),
    /// A caller-supplied config, used as-is.
    Explicit(PruneConfig),
}

impl Quality {
    /// Resolve to the [`PruneConfig`] that should drive pruning.
    pub fn resolve(self) -> PruneConfig {
        match self {
            Quality::Scalar(q) => config_for(q),
            Quality::Named(level) => level.config(),
            Quality::Explicit(cfg) => cfg,
        }
    }
}

/// Map a scalar quality `q` (clamped to `[0, 1]`) to a [`PruneConfig`].
///
/// `similarity = 0.85 + 0.145 * q^1.5` and
/// `tolerance = max(0.005, 0.30 * (1 - q)^2)`: both chosen so small changes
/// near `q = 1` or `q = 0` have an outsized effect.
pub fn config_for(q: f64) -> PruneConfig {
    let q = q.clamp(0.0, 1.0);
    let minimum_similarity_percentage = 0.85 + 0.145 * q.powf(1.5);
    let color_tolerance_threshold = (0.30 * (1.0 - q).powi(2)).max(0.005);
    PruneConfig { minimum_similarity_percentage, color_tolerance_threshold }
}

/// The named band a scalar quality `q` falls into: `"highest"` (`>= 0.9`),
/// `"high"` (`>= 0.7`), `"medium"` (`>= 0.3`), `"low"` (`>= 0.1`), else
/// `"lowest"`.
pub fn quality_name(q: f64) -> QualityLevel {
    if q >= 0.9 {
        QualityLevel::Highest
    } else if q >= 0.7 {
        QualityLevel::High
    } else if q >= 0.3 {
        QualityLevel::Medium
    } else if q >= 0.1 {
        QualityLevel::Low
    } else {
        QualityLevel::Lowest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_for_endpoints() {
        let lo = config_for(0.0);
        assert!((lo.minimum_similarity_percentage - 0.85).abs() < 1e-9);
        assert!((lo.color_tolerance_threshold - 0.30).abs() < 1e-9);

        let hi = config_for(1.0);
        assert!((hi.minimum_similarity_percentage - 0.995).abs() < 1e-9);
        assert!((hi.color_tolerance_threshold - 0.005).abs() < 1e-9);
    }

    #[test]
    fn config_for_is_monotonic() {
        let samples: Vec<f64> = (0..=20).map(|i| i as f64 / 20.0).collect();
        let mut prev_sim = f64::NEG_INFINITY;
        let mut prev_tol = f64::INFINITY;
        for q in samples {
            let cfg = config_for(q);
            assert!(cfg.minimum_similarity_percentage >= prev_sim);
            assert!(cfg.color_tolerance_threshold <= prev_tol);
            prev_sim = cfg.minimum_similarity_percentage;
            prev_tol = cfg.color_tolerance_threshold;
        }
    }

    #[test]
    fn quality_name_bands() {
        assert_eq!(quality_name(0.0), QualityLevel::Lowest);
        assert_eq!(quality_name(0.15), QualityLevel::Low);
        assert_eq!(quality_name(0.35), QualityLevel::Medium);
        assert_eq!(quality_name(0.75), QualityLevel::High);
        assert_eq!(quality_name(0.95), QualityLevel::Highest);
    }

    #[test]
    fn level_parse_round_trips_display() {
        for level in [
            QualityLevel::Highest,
            QualityLevel::High,
            QualityLevel::Medium,
            QualityLevel::Low,
            QualityLevel::Lowest,
        ] {
            let s = level.to_string();
            assert_eq!(QualityLevel::parse(&s), Some(level));
        }
        assert_eq!(QualityLevel::parse("Highest"), Some(QualityLevel::Highest));
        assert_eq!(QualityLevel::parse("bogus"), None);
    }
}
