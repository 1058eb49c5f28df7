//! Alpha-masked average gray metric for a single image.

use image::DynamicImage;

/// Compute the average gray value of an image's non-transparent pixels.
///
/// Only pixels with alpha strictly greater than zero participate. The red,
/// green, and blue channel means are computed independently over that
/// selection and then averaged, which is not the same number as averaging a
/// per-pixel luminance. The result lies in `[0, 255]`.
///
/// Returns `None` when the image has no non-transparent pixels at all;
/// that case carries no meaningful average and must stay distinct from 0.
pub fn average_gray(image: &DynamicImage) -> Option<f64> {
    let rgba = image.to_rgba8();

    let mut r_sum: u64 = 0;
    let mut g_sum: u64 = 0;
    let mut b_sum: u64 = 0;
    let mut count: u64 = 0;

    // Raw-buffer walk instead of get_pixel() per coordinate
    for pixel in rgba.as_raw().chunks_exact(4) {
        if pixel[3] > 0 {
            r_sum += pixel[0] as u64;
            g_sum += pixel[1] as u64;
            b_sum += pixel[2] as u64;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let r_avg = r_sum as f64 / count as f64;
    let g_avg = g_sum as f64 / count as f64;
    let b_avg = b_sum as f64 / count as f64;
    Some((r_avg + g_avg + b_avg) / 3.0)
}
