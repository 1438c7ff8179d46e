/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Binarize a single channel using the PBM ink convention
///
/// Samples darker than `threshold` become `1` (ink), everything else
/// becomes `0`. A threshold of 0 therefore yields all zeroes and a threshold
/// of 256 yields all ones.
#[rustfmt::skip]
pub fn threshold_to_bits(in_channel: &[u8], out: &mut [u8], threshold: u16)
{
    for (x, bit) in in_channel.iter().zip(out.iter_mut())
    {
        *bit = u8::from(u16::from(*x) < threshold);
    }
}
