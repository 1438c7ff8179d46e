/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::trace;
use pnmchain_core::buffer::PixelBuffer;

use crate::errors::{ChainErrors, ImageOperationsErrors};
use crate::workflow::Stage;

/// This encapsulates an image operation.
///
/// Operations never touch their input, they return a new buffer.
pub trait OperationsTrait {
    /// Get the name of this operation
    fn get_name(&self) -> &'static str;

    /// Number of channels an input buffer must have
    fn expected_components(&self) -> usize;

    /// Run the operation, the input is already checked
    ///
    /// Prefer [`execute`](OperationsTrait::execute) which carries out
    /// the checks before calling this
    fn execute_impl(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, ImageOperationsErrors>;

    /// Execute the operation on a buffer
    ///
    /// # Errors
    /// `ChannelCountMismatch` if the buffer does not have
    /// [`expected_components`](OperationsTrait::expected_components) channels,
    /// otherwise whatever the operation returns.
    ///
    /// # Example
    /// ```
    /// use pnmchain::impls::grayscale::RgbToGrayScale;
    /// use pnmchain::traits::OperationsTrait;
    /// use pnmchain_core::buffer::PixelBuffer;
    /// use pnmchain_core::colorspace::ColorSpace;
    ///
    /// let image = PixelBuffer::new(1, 1, ColorSpace::RGB, vec![255, 0, 0]).unwrap();
    /// let gray = RgbToGrayScale::new().execute(&image).unwrap();
    ///
    /// assert_eq!(gray.samples(), &[76]);
    /// ```
    fn execute(&self, buffer: &PixelBuffer) -> Result<PixelBuffer, ImageOperationsErrors> {
        let expected = self.expected_components();

        if buffer.num_components() != expected {
            return Err(ImageOperationsErrors::ChannelCountMismatch(
                self.get_name(),
                expected,
                buffer.num_components()
            ));
        }
        trace!("Running {} on {:?}", self.get_name(), buffer);

        self.execute_impl(buffer)
    }
}

/// Something that can produce the chain's source buffer
///
/// The raster codec (png, jpeg...) lives outside of the chain,
/// it implements this to hand over decoded RGB pixels.
pub trait IntoPixelBuffer {
    /// Consume self and return the pixels
    fn into_buffer(self) -> Result<PixelBuffer, ChainErrors>;
}

impl IntoPixelBuffer for PixelBuffer {
    fn into_buffer(self) -> Result<PixelBuffer, ChainErrors> {
        Ok(self)
    }
}

/// Consumer of a finished stage
///
/// Sinks are called in order of registration after each stage,
/// a failing sink aborts the chain.
pub trait StageSink {
    /// Get the name of the sink
    fn get_name(&self) -> &'static str;

    /// Receive a stage's buffer and its Netpbm text
    fn consume(&mut self, stage: Stage, buffer: &PixelBuffer, text: &str)
        -> Result<(), ChainErrors>;
}
