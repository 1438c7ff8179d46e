/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;
use pnmchain_imageprocs::grayscale::rgb_to_grayscale;

use crate::errors::ImageOperationsErrors;
use crate::traits::OperationsTrait;

/// Convert RGB data to grayscale
///
/// Formula for RGB to grayscale conversion is given by
///
/// ```text
///Grayscale = 0.299R + 0.587G + 0.114B
/// ```
/// truncated to an integer (see pnmchain-imageprocs/grayscale)
#[derive(Copy, Clone, Debug, Default)]
pub struct RgbToGrayScale;

impl RgbToGrayScale {
    pub fn new() -> RgbToGrayScale {
        RgbToGrayScale
    }
}

impl OperationsTrait for RgbToGrayScale {
    fn get_name(&self) -> &'static str {
        "RGB to Grayscale"
    }

    fn expected_components(&self) -> usize {
        ColorSpace::RGB.num_components()
    }

    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, ImageOperationsErrors> {
        let (width, height) = buffer.dimensions();
        let mut out = vec![0; width * height];

        rgb_to_grayscale(buffer.samples(), &mut out);

        Ok(PixelBuffer::new(width, height, ColorSpace::Luma, out)?)
    }
}

/// Convert an RGB buffer to a new grayscale buffer
///
/// # Errors
/// `ChannelCountMismatch` if the buffer isn't RGB
pub fn to_grayscale(buffer: &PixelBuffer) -> Result<PixelBuffer, ImageOperationsErrors> {
    RgbToGrayScale::new().execute(buffer)
}

#[cfg(test)]
mod tests {
    use pnmchain_core::buffer::PixelBuffer;
    use pnmchain_core::colorspace::ColorSpace;

    use crate::errors::ImageOperationsErrors;
    use crate::impls::grayscale::to_grayscale;

    #[test]
    fn red_is_76() {
        let image = PixelBuffer::new(1, 1, ColorSpace::RGB, vec![255, 0, 0]).unwrap();
        let gray = to_grayscale(&image).unwrap();

        assert_eq!(gray.samples(), &[76]);
        assert_eq!(gray.colorspace(), ColorSpace::Luma);
    }

    #[test]
    fn keeps_dimensions_and_is_deterministic() {
        let samples = (0..5 * 3 * 3).map(|x| (x * 7 % 256) as u8).collect();
        let image = PixelBuffer::new(5, 3, ColorSpace::RGB, samples).unwrap();

        let first = to_grayscale(&image).unwrap();
        let second = to_grayscale(&image).unwrap();

        assert_eq!(first.dimensions(), (5, 3));
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_single_channel() {
        let image = PixelBuffer::new(2, 1, ColorSpace::Luma, vec![1, 2]).unwrap();

        assert!(matches!(
            to_grayscale(&image),
            Err(ImageOperationsErrors::ChannelCountMismatch(_, 3, 1))
        ));
    }
}
