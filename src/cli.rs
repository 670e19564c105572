//! Command-line driver.
//!
//! Selects a region around a seed pixel by hue, extracts its perimeter and
//! a smoothed perimeter, and writes each result as a grayscale image next
//! to the input file (`{stem}_region.{ext}`, `{stem}_perimeter.{ext}`,
//! `{stem}_smooth.{ext}`).

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{info, warn};

use crate::filters::SmoothingKind;
use crate::render::{load_rgb, render_points, save_mask, save_rgb};
use crate::selection::{find_perimeter, find_region, find_smooth_perimeter, Point};

const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;

/// Select an image region by hue similarity and extract its perimeter
#[derive(Parser)]
#[command(name = "huescan")]
#[command(about = "Select an image region by hue similarity and extract its perimeter")]
#[command(version)]
pub struct Cli {
    /// Input image (PNG, JPEG, ...)
    pub image: PathBuf,

    /// Seed pixel column
    pub x: usize,

    /// Seed pixel row
    pub y: usize,

    /// Hue tolerance for region selection (0-255)
    #[arg(short, long, default_value_t = 20)]
    pub distance: u8,

    /// Smoothing filter: box, median, gaussian or bilateral
    #[arg(long, default_value_t = SmoothingKind::Median)]
    pub smoothing: SmoothingKind,

    /// Homogeneity tolerance for the smoothed boundary scan (0-255)
    #[arg(long, default_value_t = 10)]
    pub smooth_distance: u8,

    /// Exclusive upper bound of the odd kernel-size ramp
    #[arg(long, default_value_t = 31)]
    pub max_kernel_length: usize,

    /// Skip the smoothed-perimeter pass
    #[arg(long)]
    pub no_smooth: bool,
}

/// Run the CLI application.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let image = match load_rgb(&cli.image) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("error: failed to load '{}': {}", cli.image.display(), err);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let (rows, cols, _) = image.dim();
    info!("image size {} x {} = {} pixels", rows, cols, rows * cols);

    let selection = find_region(image.view(), cli.x, cli.y, cli.distance);
    match selection.seed_hue {
        Some(hue) => info!(
            "found {} pixels of color {} within range {}, about {:.2}%",
            selection.len(),
            hue,
            cli.distance,
            selection.len() as f64 * 100.0 / (rows * cols) as f64
        ),
        None => warn!(
            "seed ({}, {}) outside the {} x {} image",
            cli.x, cli.y, cols, rows
        ),
    }

    if write_points(&selection.points, &cli.image, "region").is_err() {
        return ExitCode::from(EXIT_ERROR);
    }

    match find_perimeter(&selection.points) {
        Ok(perimeter) => {
            info!("found {} perimeter pixels", perimeter.len());
            if write_points(&perimeter, &cli.image, "perimeter").is_err() {
                return ExitCode::from(EXIT_ERROR);
            }
        }
        Err(err) => warn!("perimeter skipped: {err}"),
    }

    if !cli.no_smooth {
        match find_smooth_perimeter(
            &selection.points,
            cli.smoothing,
            cli.smooth_distance,
            cli.max_kernel_length,
        ) {
            Ok(smoothed) => {
                info!(
                    "found {} smoothed perimeter pixels ({} filter, max kernel {})",
                    smoothed.len(),
                    cli.smoothing,
                    cli.max_kernel_length
                );
                if write_points(&smoothed, &cli.image, "smooth").is_err() {
                    return ExitCode::from(EXIT_ERROR);
                }
            }
            Err(err) => warn!("smoothed perimeter skipped: {err}"),
        }
    }

    // Copy of the decoded input, alongside the masks it produced
    let out_path = output_path(&cli.image, "out");
    if let Err(err) = save_rgb(image.view(), &out_path) {
        eprintln!("error: failed to write '{}': {}", out_path.display(), err);
        return ExitCode::from(EXIT_ERROR);
    }
    info!("wrote {}", out_path.display());

    ExitCode::from(EXIT_SUCCESS)
}

/// Render a point set and save it as `{stem}_{suffix}.{ext}` next to the
/// input. An empty set is logged and skipped, not treated as a failure.
fn write_points(points: &[Point], input: &Path, suffix: &str) -> Result<(), ()> {
    let mask = match render_points(points) {
        Ok(mask) => mask,
        Err(err) => {
            warn!("{suffix} image skipped: {err}");
            return Ok(());
        }
    };

    let path = output_path(input, suffix);
    match save_mask(&mask, &path) {
        Ok(()) => {
            info!("wrote {}", path.display());
            Ok(())
        }
        Err(err) => {
            eprintln!("error: failed to write '{}': {}", path.display(), err);
            Err(())
        }
    }
}

/// Build `{stem}_{suffix}.{ext}` in the input's directory.
fn output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or(input.as_os_str())
        .to_string_lossy();
    let name = match input.extension() {
        Some(ext) => format!("{}_{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}_{}", stem, suffix),
    };
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_output_path_keeps_extension() {
        let path = output_path(Path::new("photos/test1.png"), "region");
        assert_eq!(path, PathBuf::from("photos/test1_region.png"));
    }

    #[test]
    fn test_output_path_without_extension() {
        let path = output_path(Path::new("scan"), "perimeter");
        assert_eq!(path, PathBuf::from("scan_perimeter"));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["huescan", "in.png", "10", "20"]);
        assert_eq!(cli.distance, 20);
        assert_eq!(cli.smoothing, SmoothingKind::Median);
        assert_eq!(cli.smooth_distance, 10);
        assert_eq!(cli.max_kernel_length, 31);
        assert!(!cli.no_smooth);
    }

    #[test]
    fn test_smoothing_argument_parses() {
        let cli = Cli::parse_from(["huescan", "in.png", "1", "2", "--smoothing", "gaussian"]);
        assert_eq!(cli.smoothing, SmoothingKind::Gaussian);
    }
}
