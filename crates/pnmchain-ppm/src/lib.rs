/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A plain text Netpbm decoder and encoder
//!
//! This crate reads and writes the ASCII members of the Netpbm family
//!
//! - P1: Portable bitmap, one bit per pixel, no maximum value line
//! - P2: Portable graymap, one 8 bit channel
//! - P3: Portable pixmap, three interleaved 8 bit channels
//!
//! Binary variants (P4 to P7) and header comments are not supported.
//!
//! The decoder never guesses the format of its input, callers state which
//! variant they expect and a different magic line is an error.
//!
//! # Example
//! ```
//! use pnmchain_ppm::{decode, encode_to_string, PnmVersions};
//!
//! let buffer = decode(b"P2\n1 2\n255\n50\n200\n", PnmVersions::P2).unwrap();
//! assert_eq!(buffer.samples(), &[50, 200]);
//!
//! let text = encode_to_string(&buffer, PnmVersions::P2).unwrap();
//! assert_eq!(text, "P2\n1 2\n255\n50\n200\n");
//! ```
use std::fmt::{Display, Formatter};

pub use decoder::*;
pub use encoder::*;
use pnmchain_core::colorspace::ColorSpace;

mod decoder;
mod encoder;

/// Plain text Netpbm variants
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PnmVersions {
    /// Bitmap, values 0 and 1
    P1,
    /// Grayscale
    P2,
    /// RGB
    P3
}

impl PnmVersions {
    /// The literal expected on the first line of a file
    pub const fn magic(self) -> &'static str {
        match self {
            Self::P1 => "P1",
            Self::P2 => "P2",
            Self::P3 => "P3"
        }
    }

    /// Colorspace of buffers produced when decoding this variant
    pub const fn colorspace(self) -> ColorSpace {
        match self {
            Self::P1 => ColorSpace::Bilevel,
            Self::P2 => ColorSpace::Luma,
            Self::P3 => ColorSpace::RGB
        }
    }

    /// Whether the header carries a maximum value line
    pub const fn has_max_value(self) -> bool {
        !matches!(self, Self::P1)
    }
}

impl Display for PnmVersions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.magic())
    }
}
