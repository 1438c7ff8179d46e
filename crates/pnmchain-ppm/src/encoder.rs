/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;
use std::io::Write;

use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;

use crate::PnmVersions;

/// Errors occurring during encoding
pub enum PnmEncodeErrors {
    /// The buffer's layout cannot be stored in the requested variant
    FormatMismatch(PnmVersions, ColorSpace),
    IOErrors(io::Error)
}

impl From<io::Error> for PnmEncodeErrors {
    fn from(err: io::Error) -> Self {
        PnmEncodeErrors::IOErrors(err)
    }
}

impl Debug for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PnmEncodeErrors::FormatMismatch(version, colorspace) => {
                writeln!(f, "Cannot encode a {colorspace:?} buffer as {version}")
            }
            PnmEncodeErrors::IOErrors(ref err) => {
                writeln!(f, "{err}")
            }
        }
    }
}

impl Display for PnmEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmEncodeErrors {}

/// A plain text Netpbm encoder
///
/// Rows are formatted one at a time and handed to the writer,
/// so the whole text never needs to live in memory.
pub struct PnmEncoder<'a, W: Write> {
    writer: &'a mut W
}

impl<'a, W: Write> PnmEncoder<'a, W> {
    /// Create a new encoder that writes to `writer`
    pub fn new(writer: &'a mut W) -> PnmEncoder<'a, W> {
        Self { writer }
    }

    fn write_headers(
        &mut self, version: PnmVersions, width: usize, height: usize
    ) -> Result<(), PnmEncodeErrors> {
        let header = if version.has_max_value() {
            format!("{version}\n{width} {height}\n255\n")
        } else {
            format!("{version}\n{width} {height}\n")
        };
        self.writer.write_all(header.as_bytes())?;

        Ok(())
    }

    /// Encode `buffer` as the given variant
    ///
    /// Each image row lands on its own line with samples separated
    /// by a single space.
    ///
    /// # Errors
    /// - `FormatMismatch`: P3 needs an RGB buffer, P2 a single channel buffer
    ///   and P1 a single channel buffer whose samples are all 0 or 1
    ///
    /// A `Luma` buffer written as P1 decodes back as `Bilevel`, the samples
    /// are kept but the colorspace is not.
    /// - `IOErrors`: The writer failed
    pub fn encode(
        &mut self, buffer: &PixelBuffer, version: PnmVersions
    ) -> Result<(), PnmEncodeErrors> {
        check_compatible(buffer, version)?;

        let (width, height) = buffer.dimensions();
        self.write_headers(version, width, height)?;

        // widest sample is three digits plus the separator
        let mut line = Vec::with_capacity(buffer.row_stride() * 4);

        for row in buffer.rows() {
            line.clear();

            for (pos, sample) in row.iter().enumerate() {
                if pos != 0 {
                    line.push(b' ');
                }
                write!(line, "{sample}")?;
            }
            line.push(b'\n');

            self.writer.write_all(&line)?;
        }
        self.writer.flush()?;

        Ok(())
    }
}

/// Encode `buffer` into an in-memory string
///
/// # Example
/// ```
/// use pnmchain_core::buffer::PixelBuffer;
/// use pnmchain_core::colorspace::ColorSpace;
/// use pnmchain_ppm::{encode_to_string, PnmVersions};
///
/// let buffer = PixelBuffer::new(2, 1, ColorSpace::RGB, vec![10, 20, 30, 200, 210, 220]).unwrap();
/// let text = encode_to_string(&buffer, PnmVersions::P3).unwrap();
///
/// assert_eq!(text, "P3\n2 1\n255\n10 20 30 200 210 220\n");
/// ```
pub fn encode_to_string(
    buffer: &PixelBuffer, version: PnmVersions
) -> Result<String, PnmEncodeErrors> {
    let mut out = Vec::new();
    PnmEncoder::new(&mut out).encode(buffer, version)?;
    // the encoder only emits ascii
    Ok(String::from_utf8_lossy(&out).into_owned())
}

/// Return the variant a buffer would naturally be stored as
pub fn version_for_colorspace(colorspace: ColorSpace) -> PnmVersions {
    match colorspace {
        ColorSpace::RGB => PnmVersions::P3,
        ColorSpace::Luma => PnmVersions::P2,
        ColorSpace::Bilevel => PnmVersions::P1
    }
}

fn check_compatible(buffer: &PixelBuffer, version: PnmVersions) -> Result<(), PnmEncodeErrors> {
    let colorspace = buffer.colorspace();
    let expected_components = version.colorspace().num_components();

    if buffer.num_components() != expected_components {
        return Err(PnmEncodeErrors::FormatMismatch(version, colorspace));
    }
    if version == PnmVersions::P1
        && colorspace != ColorSpace::Bilevel
        && buffer.samples().iter().any(|x| *x > 1)
    {
        return Err(PnmEncodeErrors::FormatMismatch(version, colorspace));
    }
    Ok(())
}
