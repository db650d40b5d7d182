//! Gaussian blur, parameterized by kernel size only.
//!
//! The kernel is separable: one normalized 1D Gaussian applied along
//! rows, then along columns. Sigma is derived from the kernel size with
//! `0.3 * ((k - 1) * 0.5 - 1) + 0.8`, so a single slider controls the
//! blur strength. Borders mirror without repeating the edge pixel
//! (reflect-101).

use crate::decode::DecodedImage;

/// Blur an image with a `level x level` Gaussian kernel.
///
/// `level` must be odd; the stage does not validate. Level 1 is the
/// identity kernel and returns a byte-identical copy.
pub fn gaussian_blur(image: &DecodedImage, level: u32) -> DecodedImage {
    if level <= 1 {
        return image.clone();
    }

    let kernel = gaussian_kernel_1d(level as usize, sigma_for_kernel(level as usize));
    let rows = convolve_1d(image, &kernel, Axis::Rows);
    convolve_1d(&rows, &kernel, Axis::Cols)
}

/// Sigma for a kernel of size `k` when no explicit sigma is given.
fn sigma_for_kernel(k: usize) -> f32 {
    0.3 * ((k - 1) as f32 * 0.5 - 1.0) + 0.8
}

/// Create a normalized 1D gaussian blur kernel.
pub fn gaussian_kernel_1d(kernel_size: usize, sigma: f32) -> Vec<f32> {
    let mut kernel = Vec::with_capacity(kernel_size);

    let mean = (kernel_size - 1) as f32 / 2.0;
    let sigma_sq = sigma * sigma;

    // compute the kernel
    for i in 0..kernel_size {
        let x = i as f32 - mean;
        kernel.push((-(x * x) / (2.0 * sigma_sq)).exp());
    }

    // normalize the kernel
    let norm = kernel.iter().sum::<f32>();
    kernel.iter_mut().for_each(|k| *k /= norm);
    kernel
}

#[derive(Clone, Copy)]
enum Axis {
    Rows,
    Cols,
}

/// Mirror an out-of-range coordinate back into `[0, n)` without
/// repeating the edge sample (reflect-101: -1 maps to 1, n maps to n-2).
#[inline]
fn reflect_101(mut i: i64, n: i64) -> i64 {
    if n == 1 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i >= n {
            i = 2 * n - 2 - i;
        } else {
            return i;
        }
    }
}

/// One separable pass along the given axis.
fn convolve_1d(image: &DecodedImage, kernel: &[f32], axis: Axis) -> DecodedImage {
    let (w, h) = (image.width as i64, image.height as i64);
    let radius = (kernel.len() / 2) as i64;

    let mut output = vec![0u8; image.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let mut sum = [0.0f32; 3];

            for (k, &weight) in kernel.iter().enumerate() {
                let offset = k as i64 - radius;
                let (sx, sy) = match axis {
                    Axis::Rows => (reflect_101(x + offset, w), y),
                    Axis::Cols => (x, reflect_101(y + offset, h)),
                };

                let idx = ((sy * w + sx) * 3) as usize;
                sum[0] += image.pixels[idx] as f32 * weight;
                sum[1] += image.pixels[idx + 1] as f32 * weight;
                sum[2] += image.pixels[idx + 2] as f32 * weight;
            }

            let idx = ((y * w + x) * 3) as usize;
            for c in 0..3 {
                output[idx + c] = sum[c].round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        pixels: output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_is_normalized() {
        for (size, sigma) in [(3, 0.8), (5, 1.1), (25, 4.4)] {
            let kernel = gaussian_kernel_1d(size, sigma);
            let sum: f32 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "size {size}: sum {sum}");
        }
    }

    #[test]
    fn test_kernel_is_symmetric() {
        let kernel = gaussian_kernel_1d(7, 1.4);
        for i in 0..7 {
            assert!((kernel[i] - kernel[6 - i]).abs() < 1e-7);
        }
    }

    #[test]
    fn test_kernel_peaks_at_center() {
        let kernel = gaussian_kernel_1d(5, 1.1);
        let center = kernel[2];
        assert!(kernel.iter().all(|&k| k <= center));
    }

    #[test]
    fn test_sigma_grows_with_kernel() {
        assert!(sigma_for_kernel(3) < sigma_for_kernel(9));
        assert!(sigma_for_kernel(9) < sigma_for_kernel(25));
        // k = 3 gives the conventional 0.8
        assert!((sigma_for_kernel(3) - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_level_one_is_identity() {
        let img = DecodedImage::new(3, 2, (0..18).collect());
        let result = gaussian_blur(&img, 1);
        assert_eq!(result.pixels, img.pixels);
    }

    #[test]
    fn test_blur_uniform_image_unchanged() {
        // A constant image blurs to itself regardless of kernel size
        let img = DecodedImage::filled(10, 10, [80, 120, 200]);
        for level in [3, 7, 25] {
            let result = gaussian_blur(&img, level);
            assert_eq!(result.pixels, img.pixels, "level {level}");
        }
    }

    #[test]
    fn test_blur_preserves_dimensions() {
        let img = DecodedImage::filled(12, 5, [1, 2, 3]);
        let result = gaussian_blur(&img, 9);
        assert_eq!((result.width, result.height), (12, 5));
    }

    #[test]
    fn test_blur_spreads_impulse() {
        // Single white pixel on black: blur moves energy to neighbors
        let mut img = DecodedImage::filled(9, 9, [0, 0, 0]);
        let center = ((4 * 9 + 4) * 3) as usize;
        img.pixels[center] = 255;
        img.pixels[center + 1] = 255;
        img.pixels[center + 2] = 255;

        let result = gaussian_blur(&img, 3);

        let at = |x: usize, y: usize| result.pixels[(y * 9 + x) * 3];
        assert!(at(4, 4) < 255, "center attenuates");
        assert!(at(3, 4) > 0, "neighbor gains energy");
        assert!(at(4, 3) > 0);
        assert_eq!(at(0, 0), 0, "far corner untouched by a 3x3 kernel");
    }

    #[test]
    fn test_stronger_level_blurs_more() {
        let mut img = DecodedImage::filled(25, 25, [0, 0, 0]);
        let center = ((12 * 25 + 12) * 3) as usize;
        img.pixels[center] = 255;

        let weak = gaussian_blur(&img, 3);
        let strong = gaussian_blur(&img, 11);

        let peak = |r: &DecodedImage| r.pixels[center];
        assert!(peak(&strong) < peak(&weak), "larger kernel flattens the peak");
    }

    #[test]
    fn test_blur_kernel_larger_than_image() {
        // Reflection handles kernels wider than the image
        let img = DecodedImage::new(2, 2, vec![0, 0, 0, 60, 60, 60, 120, 120, 120, 180, 180, 180]);
        let result = gaussian_blur(&img, 25);
        assert_eq!((result.width, result.height), (2, 2));
        // All mass stays within range
        assert!(result.pixels.iter().all(|&p| p <= 180));
    }

    #[test]
    fn test_reflect_101_mapping() {
        assert_eq!(reflect_101(-1, 5), 1);
        assert_eq!(reflect_101(-2, 5), 2);
        assert_eq!(reflect_101(0, 5), 0);
        assert_eq!(reflect_101(4, 5), 4);
        assert_eq!(reflect_101(5, 5), 3);
        assert_eq!(reflect_101(6, 5), 2);
        // Deep overshoot keeps folding
        assert_eq!(reflect_101(9, 5), 1);
        assert_eq!(reflect_101(0, 1), 0);
        assert_eq!(reflect_101(-3, 1), 0);
    }

    #[test]
    fn test_blur_single_row() {
        let img = DecodedImage::new(5, 1, vec![0, 0, 0, 0, 0, 0, 255, 255, 255, 0, 0, 0, 0, 0, 0]);
        let result = gaussian_blur(&img, 3);
        assert_eq!(result.pixels.len(), 15);
        assert!(result.pixels[6] < 255);
        assert!(result.pixels[3] > 0);
    }
}
