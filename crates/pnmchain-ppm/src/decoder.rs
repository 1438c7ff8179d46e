/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};

use log::{info, warn};
use pnmchain_core::buffer::{expected_length, BufferErrors, PixelBuffer};
use pnmchain_core::colorspace::ColorSpace;
use pnmchain_core::options::DecoderOptions;

use crate::PnmVersions;

/// Largest maximum value a header may declare
const MAX_DECLARED_VALUE: usize = 65535;

/// Errors possible during decoding
pub enum PnmDecodeErrors {
    /// The magic line did not match the expected variant,
    /// (expected, found)
    HeaderMismatch(PnmVersions, String),
    /// Dimensions or maximum value line could not be parsed
    MalformedHeader(String),
    /// A pixel token is not a valid sample, or the token count
    /// does not make up whole pixels
    MalformedPixelData(String),
    /// Number of samples differs from what the header declares,
    /// (expected, found)
    PixelCountMismatch(usize, usize),
    /// Dimensions above the configured limit,
    /// (limit, found)
    LargeDimensions(usize, usize),
    BufferErrors(BufferErrors)
}

impl Debug for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HeaderMismatch(expected, found) => {
                writeln!(f, "Header mismatch, expected `{expected}` but found `{found}`")
            }
            Self::MalformedHeader(reason) => {
                writeln!(f, "Malformed header, reason: {reason}")
            }
            Self::MalformedPixelData(reason) => {
                writeln!(f, "Malformed pixel data, reason: {reason}")
            }
            Self::PixelCountMismatch(expected, found) => {
                writeln!(
                    f,
                    "Pixel count mismatch, header declares {expected} samples but found {found}"
                )
            }
            Self::LargeDimensions(expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions, expected a value less than {expected} but found {found}"
                )
            }
            Self::BufferErrors(err) => {
                writeln!(f, "{err:?}")
            }
        }
    }
}

impl Display for PnmDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for PnmDecodeErrors {}

impl From<BufferErrors> for PnmDecodeErrors {
    fn from(err: BufferErrors) -> Self {
        PnmDecodeErrors::BufferErrors(err)
    }
}

/// An instance of a plain text Netpbm decoder
///
/// The decoder reads exactly one variant, given at construction.
/// Headers are line oriented, the magic on the first line, `width height`
/// on the second and, for P2 and P3, the maximum value on the third.
/// Pixel tokens may be separated by any amount of whitespace.
pub struct PnmDecoder<'a> {
    width:           usize,
    height:          usize,
    max_value:       usize,
    decoded_headers: bool,
    data:            &'a [u8],
    position:        usize,
    version:         PnmVersions,
    options:         DecoderOptions
}

impl<'a> PnmDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Arguments
    /// - data: Plain text Netpbm contents
    /// - version: The variant `data` must be in
    ///
    /// # Example
    /// ```
    /// use pnmchain_ppm::{PnmDecoder, PnmVersions};
    /// let mut decoder = PnmDecoder::new(b"NOT VALID PPM", PnmVersions::P3);
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8], version: PnmVersions) -> PnmDecoder<'a> {
        PnmDecoder::new_with_options(DecoderOptions::default(), data, version)
    }

    /// Create a new decoder with the specified options
    pub fn new_with_options(
        options: DecoderOptions, data: &'a [u8], version: PnmVersions
    ) -> PnmDecoder<'a> {
        PnmDecoder {
            width: 0,
            height: 0,
            max_value: usize::from(version.colorspace().max_value()),
            decoded_headers: false,
            data,
            position: 0,
            version,
            options
        }
    }

    /// Read headers and store them in internal state
    ///
    /// Calling this more than once is a no-op
    pub fn read_headers(&mut self) -> Result<(), PnmDecodeErrors> {
        if self.decoded_headers {
            return Ok(());
        }
        let magic = trim_ascii(self.next_line());

        if magic != self.version.magic().as_bytes() {
            return Err(PnmDecodeErrors::HeaderMismatch(
                self.version,
                String::from_utf8_lossy(magic).to_string()
            ));
        }

        let dimensions = self.next_line();
        let mut tokens = split_tokens(dimensions);

        let (width, height) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(width), Some(height), None) => (width, height),
            _ => {
                let msg = format!(
                    "Expected `width height` on the second line but found `{}`",
                    String::from_utf8_lossy(trim_ascii(dimensions))
                );
                return Err(PnmDecodeErrors::MalformedHeader(msg));
            }
        };
        self.width = parse_dimension(width, "width")?;
        self.height = parse_dimension(height, "height")?;

        if self.width > self.options.get_max_width() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.get_max_width(),
                self.width
            ));
        }
        if self.height > self.options.get_max_height() {
            return Err(PnmDecodeErrors::LargeDimensions(
                self.options.get_max_height(),
                self.height
            ));
        }
        info!("Width: {}, height: {}", self.width, self.height);

        if self.version.has_max_value() {
            let line = trim_ascii(self.next_line());

            self.max_value = match parse_integer(line) {
                Some(value) if (1..=MAX_DECLARED_VALUE).contains(&value) => value,
                _ => {
                    let msg = format!(
                        "Expected a maximum value between 1 and {MAX_DECLARED_VALUE} but found `{}`",
                        String::from_utf8_lossy(line)
                    );
                    return Err(PnmDecodeErrors::MalformedHeader(msg));
                }
            };
            info!("Max value: {}", self.max_value);

            if self.max_value != 255 && !self.options.get_rescale_max_value() {
                warn!(
                    "Declared maximum value {} is not honored, samples are read as 0..=255",
                    self.max_value
                );
            }
        }
        info!("Colorspace: {:?}", self.version.colorspace());

        self.decoded_headers = true;

        Ok(())
    }

    /// Return the image colorspace or none if
    /// headers aren't decoded
    pub const fn get_colorspace(&self) -> Option<ColorSpace> {
        if self.decoded_headers {
            Some(self.version.colorspace())
        } else {
            None
        }
    }

    /// Return image dimensions or none if headers aren't decoded
    pub const fn get_dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            Some((self.width, self.height))
        } else {
            None
        }
    }

    /// Return the maximum value declared in the header, or none if headers
    /// aren't decoded.
    ///
    /// P1 files have no such line, for them this is always 1
    pub const fn get_max_value(&self) -> Option<usize> {
        if self.decoded_headers {
            Some(self.max_value)
        } else {
            None
        }
    }

    /// Decode the file returning a pixel buffer
    ///
    /// Samples are read in row-major, channel interleaved order
    pub fn decode(&mut self) -> Result<PixelBuffer, PnmDecodeErrors> {
        self.read_headers()?;

        let colorspace = self.version.colorspace();
        let components = colorspace.num_components();

        let expected = expected_length(self.width, self.height, colorspace)
            .ok_or(PnmDecodeErrors::LargeDimensions(usize::MAX, self.width))?;

        let rescale = self.options.get_rescale_max_value()
            && self.version.has_max_value()
            && self.max_value != 255;

        let limit = if rescale {
            self.max_value
        } else {
            usize::from(colorspace.max_value())
        };

        let data = self.data;
        let remaining = data.len().saturating_sub(self.position);
        // every sample takes at least a digit and a separator
        let mut samples = Vec::with_capacity(expected.min(remaining / 2 + 1));
        let mut found = 0_usize;

        for token in split_tokens(&data[self.position..]) {
            let value = parse_integer(token).ok_or_else(|| {
                let msg = format!(
                    "Token `{}` at sample {found} is not an integer",
                    String::from_utf8_lossy(token)
                );
                PnmDecodeErrors::MalformedPixelData(msg)
            })?;

            if value > limit {
                let msg =
                    format!("Sample {value} at position {found} is larger than the maximum {limit}");
                return Err(PnmDecodeErrors::MalformedPixelData(msg));
            }
            if samples.len() < expected {
                let sample = if rescale {
                    rescale_sample(value, self.max_value)
                } else {
                    value as u8
                };
                samples.push(sample);
            }
            found += 1;
        }

        if found % components != 0 {
            let msg = format!("Found {found} samples which is not a multiple of {components}");
            return Err(PnmDecodeErrors::MalformedPixelData(msg));
        }
        if found != expected {
            if self.options.get_strict_mode() || found < expected {
                return Err(PnmDecodeErrors::PixelCountMismatch(expected, found));
            }
            warn!(
                "Ignoring {} samples past the declared {}x{} image",
                found - expected,
                self.width,
                self.height
            );
        }
        self.position = self.data.len();

        Ok(PixelBuffer::new(self.width, self.height, colorspace, samples)?)
    }

    /// Return the next line without its terminator and move past it
    fn next_line(&mut self) -> &'a [u8] {
        let data = self.data;
        let rest = &data[self.position..];

        match rest.iter().position(|x| *x == b'\n') {
            Some(end) => {
                self.position += end + 1;
                &rest[..end]
            }
            None => {
                self.position = self.data.len();
                rest
            }
        }
    }
}

/// Decode `data` as the given variant using default options
///
/// # Example
/// ```
/// use pnmchain_ppm::{decode, PnmDecodeErrors, PnmVersions};
///
/// let result = decode(b"P3\n1 1\n255\n1 2 3\n", PnmVersions::P2);
/// assert!(matches!(result, Err(PnmDecodeErrors::HeaderMismatch(PnmVersions::P2, _))));
/// ```
pub fn decode(data: &[u8], version: PnmVersions) -> Result<PixelBuffer, PnmDecodeErrors> {
    PnmDecoder::new(data, version).decode()
}

/// Decode `data` as the given variant using the given options
pub fn decode_with_options(
    data: &[u8], version: PnmVersions, options: DecoderOptions
) -> Result<PixelBuffer, PnmDecodeErrors> {
    PnmDecoder::new_with_options(options, data, version).decode()
}

fn parse_dimension(token: &[u8], name: &str) -> Result<usize, PnmDecodeErrors> {
    match parse_integer(token) {
        Some(value) if value > 0 => Ok(value),
        _ => {
            let msg = format!(
                "Expected a positive {name} but found `{}`",
                String::from_utf8_lossy(token)
            );
            Err(PnmDecodeErrors::MalformedHeader(msg))
        }
    }
}

/// Parse an unsigned decimal integer, returns none on an empty token,
/// a non digit byte or overflow
fn parse_integer(token: &[u8]) -> Option<usize> {
    if token.is_empty() {
        return None;
    }
    let mut value = 0_usize;

    for byte in token {
        if !byte.is_ascii_digit() {
            return None;
        }
        value = value
            .checked_mul(10)?
            .checked_add(usize::from(byte - b'0'))?;
    }
    Some(value)
}

/// Map `value` in `0..=max` onto `0..=255`, rounding to nearest
fn rescale_sample(value: usize, max: usize) -> u8 {
    ((value * 255 + max / 2) / max) as u8
}

fn split_tokens(data: &[u8]) -> impl Iterator<Item = &[u8]> {
    data.split(|x| x.is_ascii_whitespace())
        .filter(|x| !x.is_empty())
}

fn trim_ascii(mut data: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = data {
        if first.is_ascii_whitespace() {
            data = rest;
        } else {
            break;
        }
    }
    while let [rest @ .., last] = data {
        if last.is_ascii_whitespace() {
            data = rest;
        } else {
            break;
        }
    }
    data
}
