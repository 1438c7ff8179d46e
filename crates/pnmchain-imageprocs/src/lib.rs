/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image processing kernels for `pnmchain`
//!
//! The kernels work on plain slices of 8 bit samples and know nothing about
//! buffers or colorspaces, `pnmchain` wraps them into operations that check
//! their inputs.
//!
//! # Example
//! - Convert two RGB pixels to grayscale then binarize them
//! ```
//! use pnmchain_imageprocs::grayscale::rgb_to_grayscale;
//! use pnmchain_imageprocs::threshold::threshold_to_bits;
//!
//! let rgb = [255, 0, 0, 255, 255, 255];
//! let mut gray = [0; 2];
//! let mut bits = [0; 2];
//!
//! rgb_to_grayscale(&rgb, &mut gray);
//! threshold_to_bits(&gray, &mut bits, 128);
//!
//! assert_eq!(gray, [76, 255]);
//! assert_eq!(bits, [1, 0]);
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::needless_return,
    clippy::similar_names,
    clippy::inline_always,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod grayscale;
pub mod threshold;
