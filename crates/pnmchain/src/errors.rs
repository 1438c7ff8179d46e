/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during the conversion chain
use std::fmt::{Debug, Display, Formatter};
use std::io;

use pnmchain_core::buffer::BufferErrors;
use pnmchain_ppm::{PnmDecodeErrors, PnmEncodeErrors};

/// All possible chain errors that can occur.
///
/// Component errors are carried as is, the variant only says which
/// component raised them.
pub enum ChainErrors {
    DecodeErrors(PnmDecodeErrors),
    EncodeErrors(PnmEncodeErrors),
    OperationsError(ImageOperationsErrors),
    BufferErrors(BufferErrors),
    IoErrors(io::Error),
    /// Errors from the external raster codec
    RasterErrors(String),
    NoSourceImage,
    GenericString(String),
    GenericStr(&'static str)
}

/// Errors that may occur during image operations
pub enum ImageOperationsErrors {
    /// Wrong number of components,
    /// (operation, expected, found)
    ChannelCountMismatch(&'static str, usize, usize),
    /// Threshold outside of 0..=256
    InvalidThreshold(i32),
    BufferErrors(BufferErrors)
}

impl Debug for ChainErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeErrors(ref error) => {
                writeln!(f, "Netpbm decoding failed: {error:?}")
            }
            Self::EncodeErrors(ref error) => {
                writeln!(f, "Netpbm encoding failed: {error:?}")
            }
            Self::OperationsError(ref error) => writeln!(f, "{error:?}"),
            Self::BufferErrors(ref error) => writeln!(f, "{error:?}"),
            Self::IoErrors(ref error) => writeln!(f, "I/O error: {error}"),
            Self::RasterErrors(ref error) => {
                writeln!(f, "Raster codec failed: {error}")
            }
            Self::NoSourceImage => {
                writeln!(f, "No source image found for which we can run the chain")
            }
            Self::GenericString(err) => writeln!(f, "{err}"),
            Self::GenericStr(err) => writeln!(f, "{err}")
        }
    }
}

impl Debug for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ChannelCountMismatch(operation, expected, found) => {
                writeln!(
                    f,
                    "Channel count mismatch for `{operation}`, expected {expected} channels but found {found}"
                )
            }
            Self::InvalidThreshold(threshold) => {
                writeln!(
                    f,
                    "Invalid threshold {threshold}, expected a value between 0 and 256"
                )
            }
            Self::BufferErrors(ref error) => writeln!(f, "{error:?}")
        }
    }
}

impl Display for ChainErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Display for ImageOperationsErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ChainErrors {}

impl std::error::Error for ImageOperationsErrors {}

impl From<PnmDecodeErrors> for ChainErrors {
    fn from(from: PnmDecodeErrors) -> Self {
        ChainErrors::DecodeErrors(from)
    }
}

impl From<PnmEncodeErrors> for ChainErrors {
    fn from(from: PnmEncodeErrors) -> Self {
        ChainErrors::EncodeErrors(from)
    }
}

impl From<ImageOperationsErrors> for ChainErrors {
    fn from(from: ImageOperationsErrors) -> Self {
        ChainErrors::OperationsError(from)
    }
}

impl From<BufferErrors> for ChainErrors {
    fn from(from: BufferErrors) -> Self {
        ChainErrors::BufferErrors(from)
    }
}

impl From<io::Error> for ChainErrors {
    fn from(from: io::Error) -> Self {
        ChainErrors::IoErrors(from)
    }
}

impl From<String> for ChainErrors {
    fn from(from: String) -> Self {
        ChainErrors::GenericString(from)
    }
}

impl From<BufferErrors> for ImageOperationsErrors {
    fn from(from: BufferErrors) -> Self {
        ImageOperationsErrors::BufferErrors(from)
    }
}
