/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! An immutable grid of pixels
//!
//! A [`PixelBuffer`] is the single in-memory representation used between
//! every stage of the conversion chain. It knows nothing about any wire
//! format, decoders produce it and encoders consume it.
//!
//! Samples are stored row-major, and interleaved when the colorspace
//! carries more than one component, i.e an RGB buffer is laid out as
//! `[r,g,b,r,g,b...]`.
use std::fmt::{Debug, Display, Formatter};

use crate::colorspace::ColorSpace;

/// Errors possible when constructing a pixel buffer
pub enum BufferErrors {
    /// Width or height was zero
    ZeroDimensions(usize, usize),
    /// `width*height*components` does not fit in a usize
    TooLargeDimensions(usize, usize),
    /// Sample vector length does not match the dimensions,
    /// (expected, found)
    LengthMismatch(usize, usize),
    /// A sample exceeded the colorspace maximum,
    /// (index, value, maximum)
    SampleOutOfRange(usize, u8, u8)
}

impl Debug for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimensions(width, height) => {
                writeln!(f, "Zero dimensions are not allowed, width={width} height={height}")
            }
            Self::TooLargeDimensions(width, height) => {
                writeln!(f, "Dimensions {width}x{height} overflow the sample count")
            }
            Self::LengthMismatch(expected, found) => {
                writeln!(
                    f,
                    "Sample length mismatch, expected {expected} samples but found {found}"
                )
            }
            Self::SampleOutOfRange(index, value, max) => {
                writeln!(
                    f,
                    "Sample {value} at index {index} is larger than the maximum value {max}"
                )
            }
        }
    }
}

impl Display for BufferErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for BufferErrors {}

/// Number of samples a buffer of the given shape holds, or `None`
/// if it overflows
pub const fn expected_length(width: usize, height: usize, colorspace: ColorSpace) -> Option<usize> {
    match width.checked_mul(height) {
        Some(pixels) => pixels.checked_mul(colorspace.num_components()),
        None => None
    }
}

/// A 2-D grid of 8 bit samples
///
/// The constructor validates the shape and range of the samples, after which
/// the buffer is never mutated. Transforms create a new buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width:      usize,
    height:     usize,
    colorspace: ColorSpace,
    samples:    Vec<u8>
}

impl PixelBuffer {
    /// Create a new pixel buffer
    ///
    /// # Arguments
    /// - width, height: Image dimensions, both must be non-zero
    /// - colorspace: Channel layout of `samples`
    /// - samples: Row-major, channel interleaved samples, exactly
    ///   `width*height*colorspace.num_components()` long
    ///
    /// # Errors
    /// If the dimensions are zero, the length does not match or a sample
    /// is larger than [`ColorSpace::max_value`]
    ///
    /// # Example
    /// ```
    /// use pnmchain_core::buffer::PixelBuffer;
    /// use pnmchain_core::colorspace::ColorSpace;
    ///
    /// let buffer = PixelBuffer::new(1, 2, ColorSpace::Luma, vec![50, 200]).unwrap();
    /// assert_eq!(buffer.dimensions(), (1, 2));
    /// assert!(PixelBuffer::new(1, 2, ColorSpace::Bilevel, vec![0, 2]).is_err());
    /// ```
    pub fn new(
        width: usize, height: usize, colorspace: ColorSpace, samples: Vec<u8>
    ) -> Result<PixelBuffer, BufferErrors> {
        if width == 0 || height == 0 {
            return Err(BufferErrors::ZeroDimensions(width, height));
        }
        let expected = expected_length(width, height, colorspace)
            .ok_or(BufferErrors::TooLargeDimensions(width, height))?;

        if samples.len() != expected {
            return Err(BufferErrors::LengthMismatch(expected, samples.len()));
        }
        let max = colorspace.max_value();

        if max != u8::MAX {
            if let Some(pos) = samples.iter().position(|x| *x > max) {
                return Err(BufferErrors::SampleOutOfRange(pos, samples[pos], max));
            }
        }

        Ok(PixelBuffer {
            width,
            height,
            colorspace,
            samples
        })
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return a tuple of `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Channel layout of the samples
    pub const fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Number of interleaved samples making up a single pixel
    pub const fn num_components(&self) -> usize {
        self.colorspace.num_components()
    }

    /// Largest value any sample in this buffer may hold
    pub const fn max_value(&self) -> u8 {
        self.colorspace.max_value()
    }

    /// Row-major, channel interleaved samples
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the buffer returning the underlying samples
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Number of samples in a single row
    pub const fn row_stride(&self) -> usize {
        self.width * self.num_components()
    }

    /// Iterate over the image one row at a time
    pub fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        self.samples.chunks_exact(self.row_stride())
    }
}

impl Debug for PixelBuffer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // samples can run into the millions, keep the output readable
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("colorspace", &self.colorspace)
            .field("samples", &self.samples.len())
            .finish()
    }
}
