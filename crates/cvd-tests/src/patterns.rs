//! Test pattern generation

use oxcvd_core::SrgbImage;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Generate an image spanning the full RGB range
///
/// The underlying pattern is always 27x27: a 2D unfolding of a 9x9x9
/// sampling of the RGB cube (channel steps of 32, plus 255). Larger
/// dimensions repeat pixels, nearest neighbor.
pub fn rgb_span(width: usize, height: usize) -> SrgbImage {
    const STEPS: [u8; 9] = [0, 32, 64, 96, 128, 160, 192, 224, 255];

    let mut data = vec![0u8; width * height * 3];
    for row in 0..height {
        for col in 0..width {
            let r = (27 * row) / height;
            let c = (27 * col) / width;
            let r_idx = r % 9;
            let g_idx = c % 9;
            let b_idx = (c / 9) + (r / 9) * 3;

            let offset = (row * width + col) * 3;
            data[offset] = STEPS[r_idx];
            data[offset + 1] = STEPS[g_idx];
            data[offset + 2] = STEPS[b_idx];
        }
    }
    SrgbImage::from_raw(width, height, data).expect("sized buffer")
}

/// Generate a random image from a seed
pub fn random_image(width: usize, height: usize, seed: u64) -> SrgbImage {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = vec![0u8; width * height * 3];
    rng.fill_bytes(&mut data);
    SrgbImage::from_raw(width, height, data).expect("sized buffer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_span_covers_extremes() {
        let image = rgb_span(27, 27);
        let data = image.data();
        // Black at the top-left corner, full blue range across tiles
        assert_eq!(&data[0..3], &[0, 0, 0]);
        assert!(data.chunks_exact(3).any(|p| p == [255, 255, 255]));
    }

    #[test]
    fn test_rgb_span_scales_by_repetition() {
        let small = rgb_span(27, 27);
        let large = rgb_span(54, 54);
        // Each pixel doubles in both directions
        let get = |img: &SrgbImage, x: usize, y: usize, w: usize| {
            let o = (y * w + x) * 3;
            [img.data()[o], img.data()[o + 1], img.data()[o + 2]]
        };
        for y in 0..27 {
            for x in 0..27 {
                let expected = get(&small, x, y, 27);
                assert_eq!(get(&large, 2 * x, 2 * y, 54), expected);
                assert_eq!(get(&large, 2 * x + 1, 2 * y + 1, 54), expected);
            }
        }
    }

    #[test]
    fn test_random_image_is_seeded() {
        let a = random_image(16, 16, 42);
        let b = random_image(16, 16, 42);
        let c = random_image(16, 16, 43);
        assert_eq!(a.data(), b.data());
        assert_ne!(a.data(), c.data());
    }
}
