//! Blur filter implementations for single-channel masks.
//!
//! Four kernels back the perimeter-smoothing pipeline: box average, median,
//! separable Gaussian and bilateral. They share conventions: odd kernel
//! length, clamp-to-edge sampling, f32 accumulation where precision
//! matters.

use ndarray::Array2;

/// Generate a normalized 1D Gaussian kernel of the given odd length.
///
/// Sigma is derived from the kernel length with the usual rule for
/// "auto" sigma: `0.3 * ((len - 1) * 0.5 - 1) + 0.8`.
fn gaussian_kernel_1d(kernel_length: usize) -> Vec<f32> {
    if kernel_length <= 1 {
        return vec![1.0];
    }

    let sigma = 0.3 * ((kernel_length as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let half = kernel_length / 2;

    let mut kernel: Vec<f32> = (0..kernel_length)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Apply a normalized box average at the given odd kernel length.
pub fn box_blur(mask: &Array2<u8>, kernel_length: usize) -> Array2<u8> {
    let (rows, cols) = mask.dim();
    if kernel_length <= 1 {
        return mask.clone();
    }

    let radius = (kernel_length / 2) as isize;
    let mut result = Array2::<u8>::zeros((rows, cols));

    for y in 0..rows {
        for x in 0..cols {
            let mut sum = 0u32;
            let mut count = 0u32;
            for dy in -radius..=radius {
                let sy = (y as isize + dy).clamp(0, rows as isize - 1) as usize;
                for dx in -radius..=radius {
                    let sx = (x as isize + dx).clamp(0, cols as isize - 1) as usize;
                    sum += mask[[sy, sx]] as u32;
                    count += 1;
                }
            }
            result[[y, x]] = (sum / count) as u8;
        }
    }

    result
}

/// Apply a median filter at the given odd kernel length.
pub fn median_blur(mask: &Array2<u8>, kernel_length: usize) -> Array2<u8> {
    let (rows, cols) = mask.dim();
    if kernel_length <= 1 {
        return mask.clone();
    }

    let radius = (kernel_length / 2) as isize;
    let mut result = Array2::<u8>::zeros((rows, cols));
    let mut window = Vec::with_capacity(kernel_length * kernel_length);

    for y in 0..rows {
        for x in 0..cols {
            window.clear();
            for dy in -radius..=radius {
                let sy = (y as isize + dy).clamp(0, rows as isize - 1) as usize;
                for dx in -radius..=radius {
                    let sx = (x as isize + dx).clamp(0, cols as isize - 1) as usize;
                    window.push(mask[[sy, sx]]);
                }
            }
            window.sort_unstable();
            result[[y, x]] = window[window.len() / 2];
        }
    }

    result
}

/// Apply a separable Gaussian blur at the given odd kernel length.
///
/// Two 1D convolution passes over an f32 working buffer, then conversion
/// back to u8.
pub fn gaussian_blur(mask: &Array2<u8>, kernel_length: usize) -> Array2<u8> {
    let (rows, cols) = mask.dim();
    let kernel = gaussian_kernel_1d(kernel_length);
    let half = kernel.len() / 2;

    let mut temp = Array2::<f32>::zeros((rows, cols));
    let mut result = Array2::<f32>::zeros((rows, cols));

    // Horizontal pass
    for y in 0..rows {
        for x in 0..cols {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sx = (x as isize + ki as isize - half as isize)
                    .clamp(0, cols as isize - 1) as usize;
                sum += mask[[y, sx]] as f32 * kv;
            }
            temp[[y, x]] = sum;
        }
    }

    // Vertical pass
    for y in 0..rows {
        for x in 0..cols {
            let mut sum = 0.0f32;
            for (ki, &kv) in kernel.iter().enumerate() {
                let sy = (y as isize + ki as isize - half as isize)
                    .clamp(0, rows as isize - 1) as usize;
                sum += temp[[sy, x]] * kv;
            }
            result[[y, x]] = sum;
        }
    }

    result.mapv(|v| (v + 0.5).clamp(0.0, 255.0) as u8)
}

/// Apply a bilateral filter with the given odd kernel length and sigmas.
///
/// Weights combine spatial distance (`sigma_space`) and intensity
/// difference (`sigma_color`), so strong edges survive while flat areas
/// are averaged.
pub fn bilateral_filter(
    mask: &Array2<u8>,
    kernel_length: usize,
    sigma_color: f32,
    sigma_space: f32,
) -> Array2<u8> {
    let (rows, cols) = mask.dim();
    if kernel_length <= 1 {
        return mask.clone();
    }

    let radius = (kernel_length / 2) as isize;
    let sigma_color = sigma_color.max(1e-3);
    let sigma_space = sigma_space.max(1e-3);
    let mut result = Array2::<u8>::zeros((rows, cols));

    for y in 0..rows {
        for x in 0..cols {
            let center = mask[[y, x]] as f32;
            let mut sum = 0.0f32;
            let mut weight_sum = 0.0f32;

            for dy in -radius..=radius {
                let sy = (y as isize + dy).clamp(0, rows as isize - 1) as usize;
                for dx in -radius..=radius {
                    let sx = (x as isize + dx).clamp(0, cols as isize - 1) as usize;
                    let value = mask[[sy, sx]] as f32;

                    let spatial_sq = (dy * dy + dx * dx) as f32;
                    let spatial_weight =
                        (-spatial_sq / (2.0 * sigma_space * sigma_space)).exp();
                    let color_diff = value - center;
                    let color_weight =
                        (-color_diff * color_diff / (2.0 * sigma_color * sigma_color)).exp();

                    let weight = spatial_weight * color_weight;
                    sum += value * weight;
                    weight_sum += weight;
                }
            }

            result[[y, x]] = (sum / weight_sum + 0.5).clamp(0.0, 255.0) as u8;
        }
    }

    result
}
