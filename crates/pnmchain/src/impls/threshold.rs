/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::warn;
use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;
use pnmchain_imageprocs::threshold::threshold_to_bits;

use crate::errors::ImageOperationsErrors;
use crate::traits::OperationsTrait;

/// Threshold used when none is given
pub const DEFAULT_THRESHOLD: i32 = 128;

/// Largest accepted threshold, one past the largest sample.
/// Every pixel becomes ink at this value.
pub const MAX_THRESHOLD: i32 = 256;

/// Binarize a grayscale buffer
///
/// Samples below the threshold become `1` (ink), the rest `0`.
/// This is the PBM convention, dark pixels are the foreground.
#[derive(Copy, Clone, Debug)]
pub struct Threshold {
    threshold: i32
}

impl Threshold {
    pub fn new(threshold: i32) -> Threshold {
        Threshold { threshold }
    }

    pub const fn get_threshold(&self) -> i32 {
        self.threshold
    }

    /// Confirm the threshold is within `0..=256`
    pub fn check_threshold(&self) -> Result<(), ImageOperationsErrors> {
        if !(0..=MAX_THRESHOLD).contains(&self.threshold) {
            return Err(ImageOperationsErrors::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Threshold::new(DEFAULT_THRESHOLD)
    }
}

impl OperationsTrait for Threshold {
    fn get_name(&self) -> &'static str {
        "Threshold"
    }

    fn expected_components(&self) -> usize {
        ColorSpace::Luma.num_components()
    }

    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, ImageOperationsErrors> {
        self.check_threshold()?;

        if buffer.colorspace() == ColorSpace::Bilevel {
            warn!("Buffer is already bilevel, results may be something you don't expect");
        }
        let (width, height) = buffer.dimensions();
        let mut out = vec![0; width * height];

        // checked to be in 0..=256 above
        threshold_to_bits(buffer.samples(), &mut out, self.threshold as u16);

        Ok(PixelBuffer::new(width, height, ColorSpace::Bilevel, out)?)
    }
}

/// Binarize a grayscale buffer into a new bilevel buffer
///
/// # Errors
/// - `ChannelCountMismatch` if the buffer has more than one channel
/// - `InvalidThreshold` if `threshold` is outside `0..=256`
pub fn to_binary(buffer: &PixelBuffer, threshold: i32) -> Result<PixelBuffer, ImageOperationsErrors> {
    Threshold::new(threshold).execute(buffer)
}

#[cfg(test)]
mod tests {
    use pnmchain_core::buffer::PixelBuffer;
    use pnmchain_core::colorspace::ColorSpace;

    use crate::errors::ImageOperationsErrors;
    use crate::impls::threshold::{to_binary, DEFAULT_THRESHOLD};

    fn gray(samples: Vec<u8>) -> PixelBuffer {
        PixelBuffer::new(samples.len(), 1, ColorSpace::Luma, samples).unwrap()
    }

    #[test]
    fn default_threshold_scenario() {
        let bits = to_binary(&gray(vec![50, 200]), DEFAULT_THRESHOLD).unwrap();

        assert_eq!(bits.samples(), &[1, 0]);
        assert_eq!(bits.colorspace(), ColorSpace::Bilevel);
        assert_eq!(bits.dimensions(), (2, 1));
    }

    #[test]
    fn extreme_thresholds() {
        let image = gray((0..=255).collect());

        let zeros = to_binary(&image, 0).unwrap();
        assert!(zeros.samples().iter().all(|x| *x == 0));

        let ones = to_binary(&image, 256).unwrap();
        assert!(ones.samples().iter().all(|x| *x == 1));
    }

    #[test]
    fn rejects_out_of_range_thresholds() {
        let image = gray(vec![1]);

        for threshold in [-1, 257, i32::MAX] {
            assert!(matches!(
                to_binary(&image, threshold),
                Err(ImageOperationsErrors::InvalidThreshold(t)) if t == threshold
            ));
        }
    }

    #[test]
    fn rejects_rgb() {
        let image = PixelBuffer::new(1, 1, ColorSpace::RGB, vec![1, 2, 3]).unwrap();

        assert!(matches!(
            to_binary(&image, 128),
            Err(ImageOperationsErrors::ChannelCountMismatch(_, 1, 3))
        ));
    }
}
