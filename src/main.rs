// main.rs      Batch compression CLI.
//
//! Compresses every PNG in a directory and writes the result to another
//! directory, one rayon task per file.
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use rasterblock::quality::{Quality, QualityLevel};
use rasterblock::{compress, png_io};
use rayon::prelude::*;

/// Compress every PNG under `input_dir` into `output_dir`.
#[derive(Debug, Parser)]
#[command(name = "rasterblock", version, about = "Content-aware lossy PNG compression")]
struct Cli {
    /// Directory to read `.png` files from (not recursive).
    input_dir: PathBuf,

    /// Directory to write compressed `.png` files to. Created if missing.
    output_dir: PathBuf,

    /// Quality: a number in `[0, 1]`, or one of `lowest`/`low`/`medium`/`high`/`highest`.
    /// Defaults to `medium`.
    quality: Option<String>,
}

/// Parse the `--quality` flag. Out-of-range or unrecognized values fall back
/// to the scalar default of `0.5`, with a warning. A missing flag defaults to
/// `medium` without a warning, since that's simply the absence of a choice.
fn parse_quality(raw: Option<&str>) -> Quality {
    let Some(raw) = raw else {
        return Quality::Named(QualityLevel::Medium);
    };
    if let Ok(q) = raw.parse::<f64>() {
        if (0.0..=1.0).contains(&q) {
            return Quality::Scalar(q);
        }
    }
    if let Some(level) = QualityLevel::parse(raw) {
        return Quality::Named(level);
    }
    warn!("unrecognized quality '{}', falling back to 0.5", raw);
    Quality::Scalar(0.5)
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()).map_or(false, |e| e.eq_ignore_ascii_case("png"))
}

fn output_path(output_dir: &Path, input: &Path, quality: Quality) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let suffix = match quality {
        Quality::Scalar(q) => format!("{q:.2}"),
        Quality::Named(level) => level.to_string(),
        Quality::Explicit(_) => "custom".to_string(),
    };
    output_dir.join(format!("{stem}_q{suffix}.png"))
}

fn process_one(input: &Path, output_dir: &Path, quality: Quality) -> bool {
    let grid = match png_io::decode(input) {
        Ok(g) => g,
        Err(e) => {
            error!("skipping {}: {e}", input.display());
            return false;
        }
    };

    let result = match compress(&grid, quality) {
        Ok(r) => r,
        Err(e) => {
            error!("skipping {}: {e}", input.display());
            return false;
        }
    };

    let out_path = output_path(output_dir, input, quality);
    if let Err(e) = png_io::encode(&out_path, &result.grid) {
        error!("failed to write {}: {e}", out_path.display());
        return false;
    }

    info!(
        "{} -> {} ({} regions, ratio {:.4})",
        input.display(),
        out_path.display(),
        result.compressed_regions,
        result.compression_ratio
    );
    true
}

fn collect_pngs(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_png(&path) {
            paths.push(path);
        }
    }
    Ok(paths)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let quality = parse_quality(cli.quality.as_deref());

    if let Err(e) = fs::create_dir_all(&cli.output_dir) {
        error!("failed to create {}: {e}", cli.output_dir.display());
        return ExitCode::FAILURE;
    }

    let inputs = match collect_pngs(&cli.input_dir) {
        Ok(paths) => paths,
        Err(e) => {
            error!("failed to read {}: {e}", cli.input_dir.display());
            return ExitCode::FAILURE;
        }
    };

    if inputs.is_empty() {
        warn!("no .png files found in {}", cli.input_dir.display());
        return ExitCode::SUCCESS;
    }

    let results: Vec<bool> = inputs
        .par_iter()
        .map(|input| process_one(input, &cli.output_dir, quality))
        .collect();

    if results.iter().all(|ok| *ok) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_png_is_case_insensitive() {
        assert!(is_png(Path::new("a.png")));
        assert!(is_png(Path::new("a.PNG")));
        assert!(!is_png(Path::new("a.jpg")));
        assert!(!is_png(Path::new("a")));
    }

    #[test]
    fn parse_quality_scalar_named_and_fallback() {
        assert_eq!(parse_quality(Some("0.25")), Quality::Scalar(0.25));
        assert_eq!(parse_quality(Some("HIGH")), Quality::Named(QualityLevel::High));
        assert_eq!(parse_quality(Some("bogus")), Quality::Scalar(0.5));
        assert_eq!(parse_quality(None), Quality::Named(QualityLevel::Medium));
        assert_eq!(parse_quality(Some("2.0")), Quality::Scalar(0.5));
    }

    #[test]
    fn quality_is_parsed_as_a_third_positional_argument() {
        let cli = Cli::try_parse_from(["rasterblock", "in", "out", "0.8"]).unwrap();
        assert_eq!(cli.input_dir, Path::new("in"));
        assert_eq!(cli.output_dir, Path::new("out"));
        assert_eq!(cli.quality.as_deref(), Some("0.8"));

        let cli = Cli::try_parse_from(["rasterblock", "in", "out", "high"]).unwrap();
        assert_eq!(cli.quality.as_deref(), Some("high"));

        let cli = Cli::try_parse_from(["rasterblock", "in", "out"]).unwrap();
        assert_eq!(cli.quality, None);
    }

    #[test]
    fn output_path_embeds_quality_suffix() {
        let out = output_path(Path::new("/out"), Path::new("/in/cat.png"), Quality::Scalar(0.0));
        assert_eq!(out, Path::new("/out/cat_q0.00.png"));

        let out = output_path(Path::new("/out"), Path::new("/in/cat.png"), Quality::Named(QualityLevel::Lowest));
        assert_eq!(out, Path::new("/out/cat_qlowest.png"));
    }
}
