/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::{Rng, WyRand};
use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;

/// A buffer filled with noise, same seed gives the same image
pub fn random_buffer(width: usize, height: usize, colorspace: ColorSpace, seed: u64) -> PixelBuffer {
    let mut rng = WyRand::new_seed(seed);
    let max = colorspace.max_value();

    let samples = (0..width * height * colorspace.num_components())
        .map(|_| rng.generate_range(0..=max))
        .collect();

    PixelBuffer::new(width, height, colorspace, samples).unwrap()
}
