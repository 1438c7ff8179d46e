/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decoder options
//!
//! All decoders in the chain read the same options, this allows one
//! options struct to be configured once and handed to every stage.

/// Decoder options
///
/// To change an option, chain the setters on a default instance
///
/// ```
/// use pnmchain_core::options::DecoderOptions;
///
/// let options = DecoderOptions::default()
///     .set_max_width(1024)
///     .set_strict_mode(false);
///
/// assert_eq!(options.get_max_width(), 1024);
/// assert!(!options.get_strict_mode());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    max_width:         usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    max_height:        usize,
    /// Whether the number of pixel tokens must match the header
    /// dimensions exactly.
    ///
    /// When false, surplus tokens are dropped with a warning.
    /// A shortfall is an error in both modes.
    ///
    /// - Default value: true
    strict_mode:       bool,
    /// Whether samples should be rescaled from the declared maximum value
    /// to the 0..=255 range.
    ///
    /// When false the declared maximum value is only checked for presence
    /// and samples are taken as is.
    ///
    /// - Default value: false
    rescale_max_value: bool
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:         1 << 14,
            max_height:        1 << 14,
            strict_mode:       true,
            rescale_max_value: false
        }
    }
}

impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn get_max_height(&self) -> usize {
        self.max_height
    }

    /// Return true if pixel counts must match the header exactly
    pub const fn get_strict_mode(&self) -> bool {
        self.strict_mode
    }

    /// Return true if samples are rescaled against the declared maximum value
    pub const fn get_rescale_max_value(&self) -> bool {
        self.rescale_max_value
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    /// Set whether the decoder should reject pixel data whose
    /// token count differs from the header
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.strict_mode = yes;
        self
    }

    /// Set whether samples are rescaled from the declared maximum
    /// value to 0..=255
    pub fn set_rescale_max_value(mut self, yes: bool) -> Self {
        self.rescale_max_value = yes;
        self
    }
}
