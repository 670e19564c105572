//! Rendering point sets as grayscale images and file I/O helpers.
//!
//! This is the boundary to the image codec: decoding an input file into an
//! RGB array and encoding masks back out. No analysis logic lives here.

use std::path::Path;

use image::{GrayImage, ImageResult, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3, ArrayView3};

use crate::error::AnalysisError;
use crate::selection::{rasterize, region_bounds, Point};

/// Render a point set into a grayscale mask sized to its bounding box.
///
/// This is the image representation of a region or perimeter: members are
/// white on a black background. Fails with [`AnalysisError::EmptyRegion`]
/// for an empty set.
pub fn render_points(points: &[Point]) -> Result<Array2<u8>, AnalysisError> {
    let (rows, cols) = region_bounds(points)?;
    Ok(rasterize(points, rows, cols))
}

/// Convert a mask array to an image buffer.
pub fn mask_to_image(mask: &Array2<u8>) -> GrayImage {
    let (rows, cols) = mask.dim();
    GrayImage::from_fn(cols as u32, rows as u32, |x, y| {
        Luma([mask[[y as usize, x as usize]]])
    })
}

/// Load an image file and decode it to an RGB array (height, width, 3).
pub fn load_rgb(path: &Path) -> ImageResult<Array3<u8>> {
    let rgb = image::open(path)?.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut array = Array3::<u8>::zeros((height as usize, width as usize, 3));
    for (x, y, pixel) in rgb.enumerate_pixels() {
        for c in 0..3 {
            array[[y as usize, x as usize, c]] = pixel[c];
        }
    }
    Ok(array)
}

/// Encode a mask to an image file; the format follows the file extension.
pub fn save_mask(mask: &Array2<u8>, path: &Path) -> ImageResult<()> {
    mask_to_image(mask).save(path)
}

/// Encode an RGB array to an image file.
pub fn save_rgb(image: ArrayView3<u8>, path: &Path) -> ImageResult<()> {
    let (rows, cols, _) = image.dim();
    let buffer = RgbImage::from_fn(cols as u32, rows as u32, |x, y| {
        Rgb([
            image[[y as usize, x as usize, 0]],
            image[[y as usize, x as usize, 1]],
            image[[y as usize, x as usize, 2]],
        ])
    });
    buffer.save(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::mask::MEMBER;

    #[test]
    fn test_render_points_sizes_to_bounds() {
        let points = vec![Point::new(1, 0), Point::new(3, 2)];
        let mask = render_points(&points).unwrap();

        assert_eq!(mask.dim(), (3, 4));
        assert_eq!(mask[[0, 1]], MEMBER);
        assert_eq!(mask[[2, 3]], MEMBER);
        assert_eq!(mask[[0, 0]], 0);
    }

    #[test]
    fn test_render_empty_points() {
        assert_eq!(render_points(&[]), Err(AnalysisError::EmptyRegion));
    }

    #[test]
    fn test_mask_to_image_transposes_axes() {
        // Mask is (rows, cols); the image is width x height
        let mut mask = Array2::<u8>::zeros((2, 3));
        mask[[1, 2]] = 200;

        let img = mask_to_image(&mask);
        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(2, 1)[0], 200);
        assert_eq!(img.get_pixel(0, 0)[0], 0);
    }
}
