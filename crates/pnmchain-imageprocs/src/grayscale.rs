/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! RGB to grayscale conversion
//!
//! Uses the ITU-R BT.601 luma weights
//!
//! ```text
//! Grayscale = 0.299R + 0.587G + 0.114B
//! ```
//! evaluated in double precision and truncated, not rounded.

/// Luma of a single pixel
#[inline(always)]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    // Order of the additions matters for bit exact results
    let value = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
    value as u8
}

/// Convert interleaved RGB samples to grayscale
///
/// `rgb` holds `[r,g,b,r,g,b...]`, `out` receives one sample per pixel.
/// Conversion stops at whichever of the two runs out first.
pub fn rgb_to_grayscale(rgb: &[u8], out: &mut [u8]) {
    for (pixel, gray) in rgb.chunks_exact(3).zip(out.iter_mut()) {
        *gray = luma(pixel[0], pixel[1], pixel[2]);
    }
}

#[cfg(test)]
mod tests {
    use nanorand::{Rng, WyRand};

    use crate::grayscale::{luma, rgb_to_grayscale};

    #[test]
    fn primaries() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 149);
        assert_eq!(luma(0, 0, 255), 29);
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(255, 255, 255), 255);
    }

    #[test]
    fn truncates_instead_of_rounding() {
        // floating point error lands just under 1.0 here
        assert_eq!(luma(1, 1, 1), 0);
        // 0.299*100 + 0.587*50 = 59.25
        assert_eq!(luma(100, 50, 0), 59);
    }

    #[test]
    fn converts_interleaved_rows() {
        let rgb = [10, 20, 30, 200, 210, 220];
        let mut out = [0; 2];

        rgb_to_grayscale(&rgb, &mut out);

        assert_eq!(out, [luma(10, 20, 30), luma(200, 210, 220)]);
        assert_eq!(out, [18, 208]);
    }

    #[test]
    fn gray_inputs_stay_close() {
        let mut rng = WyRand::new_seed(7);

        for _ in 0..1000 {
            let v = rng.generate::<u8>();
            let gray = luma(v, v, v);
            assert!(gray == v || gray + 1 == v, "{v} became {gray}");
        }
    }
}
