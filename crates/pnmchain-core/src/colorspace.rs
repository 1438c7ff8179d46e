/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image Colorspace information

/// All colorspaces a pixel buffer can be in
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    /// Red, Green, Blue
    RGB,
    /// Grayscale colorspace, 0 is black and 255 is white
    Luma,
    /// One bit per pixel stored in a byte.
    ///
    /// Follows the PBM ink convention, `1` marks a foreground (black)
    /// pixel and `0` a background (white) one.
    Bilevel
}

impl ColorSpace {
    /// Number of color channels present for a certain colorspace
    ///
    /// E.g. RGB returns 3 since it contains R,G and B colors to make up a pixel
    pub const fn num_components(&self) -> usize {
        match self {
            Self::RGB => 3,
            Self::Luma | Self::Bilevel => 1
        }
    }

    /// Largest value a sample in this colorspace may hold
    pub const fn max_value(&self) -> u8 {
        match self {
            Self::RGB | Self::Luma => 255,
            Self::Bilevel => 1
        }
    }

    /// Whether pixels carry a single intensity channel
    pub const fn is_grayscale(&self) -> bool {
        matches!(self, Self::Luma | Self::Bilevel)
    }
}
