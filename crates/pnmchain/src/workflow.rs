/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The conversion chain
//!
//! A workflow moves a source image through the following states
//!
//! 1. Decode: Ask the source for its RGB pixels
//! 2. Color: Encode as P3 and decode the text back
//! 3. Grayscale: Convert to grayscale, encode as P2 and decode it back
//! 4. Binary: Threshold the grayscale buffer and encode as P1
//! 5. Finish
//!
//! There is no branching and no retrying, the first error stops the chain
//! and is returned as is.
use std::fmt::{Display, Formatter};
use std::time::Instant;

use log::{debug, info};
use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::options::DecoderOptions;
use pnmchain_ppm::{decode_with_options, encode_to_string, PnmVersions};

use crate::errors::ChainErrors;
use crate::impls::grayscale::RgbToGrayScale;
use crate::impls::threshold::{Threshold, DEFAULT_THRESHOLD};
use crate::traits::{IntoPixelBuffer, OperationsTrait, StageSink};

/// Options for a single run of the chain
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ChainOptions {
    threshold:       i32,
    decoder_options: DecoderOptions
}

impl Default for ChainOptions {
    fn default() -> Self {
        ChainOptions {
            threshold:       DEFAULT_THRESHOLD,
            decoder_options: DecoderOptions::default()
        }
    }
}

impl ChainOptions {
    pub const fn get_threshold(&self) -> i32 {
        self.threshold
    }

    pub const fn get_decoder_options(&self) -> DecoderOptions {
        self.decoder_options
    }

    /// Set the binarization threshold, must be within `0..=256`
    pub fn set_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set options used when decoding the intermediate texts
    pub fn set_decoder_options(mut self, options: DecoderOptions) -> Self {
        self.decoder_options = options;
        self
    }
}

/// Stages producing Netpbm text
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Stage {
    Color,
    Grayscale,
    Binary
}

impl Stage {
    /// Netpbm variant this stage is stored as
    pub const fn version(self) -> PnmVersions {
        match self {
            Stage::Color => PnmVersions::P3,
            Stage::Grayscale => PnmVersions::P2,
            Stage::Binary => PnmVersions::P1
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Color => write!(f, "color"),
            Stage::Grayscale => write!(f, "grayscale"),
            Stage::Binary => write!(f, "binary")
        }
    }
}

/// Buffer and text of a finished stage
#[derive(Clone, Debug)]
pub struct StageOutput {
    pub buffer: PixelBuffer,
    pub text:   String
}

/// Everything produced by a finished chain
#[derive(Clone, Debug)]
pub struct ChainOutputs {
    /// Pixels as handed over by the source
    pub original:  PixelBuffer,
    pub grayscale: PixelBuffer,
    pub binary:    PixelBuffer,
    pub ppm:       String,
    pub pgm:       String,
    pub pbm:       String
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum WorkFlowState {
    Initialized,
    Decode,
    Color,
    Grayscale,
    Binary,
    Finished
}

impl WorkFlowState {
    pub fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Initialized => Some(WorkFlowState::Decode),
            WorkFlowState::Decode => Some(WorkFlowState::Color),
            WorkFlowState::Color => Some(WorkFlowState::Grayscale),
            WorkFlowState::Grayscale => Some(WorkFlowState::Binary),
            WorkFlowState::Binary => Some(WorkFlowState::Finished),
            WorkFlowState::Finished => None
        }
    }
}

/// A single run of the conversion chain
pub struct ChainWorkFlow<S: IntoPixelBuffer> {
    state:     Option<WorkFlowState>,
    source:    Option<S>,
    options:   ChainOptions,
    original:  Option<PixelBuffer>,
    color:     Option<StageOutput>,
    grayscale: Option<StageOutput>,
    binary:    Option<StageOutput>,
    sinks:     Vec<Box<dyn StageSink>>
}

impl<S: IntoPixelBuffer> ChainWorkFlow<S> {
    /// Create a new workflow for `source`
    pub fn new(source: S, options: ChainOptions) -> ChainWorkFlow<S> {
        ChainWorkFlow {
            state: Some(WorkFlowState::Initialized),
            source: Some(source),
            options,
            original: None,
            color: None,
            grayscale: None,
            binary: None,
            sinks: vec![]
        }
    }

    /// Add a consumer for finished stages
    ///
    /// One can define multiple sinks, they run in order of definition
    pub fn add_sink(&mut self, sink: Box<dyn StageSink>) {
        self.sinks.push(sink);
    }

    pub fn chain_sink(&mut self, sink: Box<dyn StageSink>) -> &mut ChainWorkFlow<S> {
        self.sinks.push(sink);
        self
    }

    /// Whether every stage has run
    pub fn is_finished(&self) -> bool {
        self.state.is_none()
    }

    pub fn get_original(&self) -> Option<&PixelBuffer> {
        self.original.as_ref()
    }

    /// Output of a stage, none if the stage hasn't run yet
    pub fn get_stage(&self, stage: Stage) -> Option<&StageOutput> {
        match stage {
            Stage::Color => self.color.as_ref(),
            Stage::Grayscale => self.grayscale.as_ref(),
            Stage::Binary => self.binary.as_ref()
        }
    }

    /// Advance the workflow one state forward
    pub fn advance(&mut self) -> Result<(), ChainErrors> {
        let state = match self.state {
            Some(state) => state,
            None => return Ok(())
        };
        info!("Current state: {:?}", state);

        match state {
            WorkFlowState::Initialized => {
                // refuse bad thresholds before anything gets written
                Threshold::new(self.options.threshold).check_threshold()?;
            }
            WorkFlowState::Decode => {
                let start = Instant::now();
                let source = self.source.take().ok_or(ChainErrors::NoSourceImage)?;
                let buffer = source.into_buffer()?;

                info!(
                    "Source image: {}x{} {:?}",
                    buffer.width(),
                    buffer.height(),
                    buffer.colorspace()
                );
                self.original = Some(buffer);

                info!("Finished decoding in {} ms", start.elapsed().as_millis());
            }
            WorkFlowState::Color => {
                let original = self.original.as_ref().ok_or(ChainErrors::NoSourceImage)?;
                let output = self.round_trip(Stage::Color, original)?;

                self.color = Some(self.deliver(Stage::Color, output)?);
            }
            WorkFlowState::Grayscale => {
                let color = self.expect_stage(Stage::Color)?;
                let gray = self.run_operation(&RgbToGrayScale::new(), &color.buffer)?;
                let output = self.round_trip(Stage::Grayscale, &gray)?;

                self.grayscale = Some(self.deliver(Stage::Grayscale, output)?);
            }
            WorkFlowState::Binary => {
                let grayscale = self.expect_stage(Stage::Grayscale)?;
                let threshold = Threshold::new(self.options.threshold);
                let bits = self.run_operation(&threshold, &grayscale.buffer)?;

                let start = Instant::now();
                let text = encode_to_string(&bits, PnmVersions::P1)?;
                debug!("Encoded P1 in {} ms", start.elapsed().as_millis());

                let output = StageOutput { buffer: bits, text };
                self.binary = Some(self.deliver(Stage::Binary, output)?);
            }
            WorkFlowState::Finished => {
                info!("Finished all stages for this workflow");
            }
        }
        self.state = state.next();

        Ok(())
    }

    /// Advance the workflow up until we finish.
    pub fn advance_to_end(&mut self) -> Result<(), ChainErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }

    /// Return the outputs of a finished workflow
    pub fn into_outputs(self) -> Option<ChainOutputs> {
        if !self.is_finished() {
            return None;
        }
        let color = self.color?;
        let grayscale = self.grayscale?;
        let binary = self.binary?;

        Some(ChainOutputs {
            original:  self.original?,
            grayscale: grayscale.buffer,
            binary:    binary.buffer,
            ppm:       color.text,
            pgm:       grayscale.text,
            pbm:       binary.text
        })
    }

    fn expect_stage(&self, stage: Stage) -> Result<&StageOutput, ChainErrors> {
        self.get_stage(stage)
            .ok_or(ChainErrors::GenericStr("Stage ran before its input was ready"))
    }

    fn run_operation(
        &self, operation: &dyn OperationsTrait, buffer: &PixelBuffer
    ) -> Result<PixelBuffer, ChainErrors> {
        let name = operation.get_name();
        let start = Instant::now();

        info!("Running {}", name);
        let result = operation.execute(buffer)?;

        info!("Finished running `{name}` in {} ms", start.elapsed().as_millis());

        Ok(result)
    }

    /// Encode a buffer for its stage then decode the text back
    fn round_trip(&self, stage: Stage, buffer: &PixelBuffer) -> Result<StageOutput, ChainErrors> {
        let version = stage.version();
        let start = Instant::now();

        let text = encode_to_string(buffer, version)?;
        let decoded =
            decode_with_options(text.as_bytes(), version, self.options.decoder_options)?;

        debug!(
            "Round tripped {} through {} bytes of {version} in {} ms",
            stage,
            text.len(),
            start.elapsed().as_millis()
        );
        Ok(StageOutput {
            buffer: decoded,
            text
        })
    }

    fn deliver(&mut self, stage: Stage, output: StageOutput) -> Result<StageOutput, ChainErrors> {
        for sink in self.sinks.iter_mut() {
            let start = Instant::now();

            sink.consume(stage, &output.buffer, &output.text)?;

            info!(
                "Finished running `{}` for the {stage} stage in {} ms",
                sink.get_name(),
                start.elapsed().as_millis()
            );
        }
        Ok(output)
    }
}

/// Run the whole chain on `source`
///
/// # Errors
/// The first error raised by the source or by any stage
pub fn run<S: IntoPixelBuffer>(
    source: S, options: &ChainOptions
) -> Result<ChainOutputs, ChainErrors> {
    let mut workflow = ChainWorkFlow::new(source, *options);

    workflow.advance_to_end()?;

    workflow
        .into_outputs()
        .ok_or(ChainErrors::GenericStr("Workflow finished without outputs"))
}
