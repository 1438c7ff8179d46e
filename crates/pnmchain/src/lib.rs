/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Convert images through plain text Netpbm stages
//!
//! An RGB pixel buffer is pushed through the chain
//!
//! ```text
//! RGB -> P3 text -> RGB -> grayscale -> P2 text -> grayscale -> bits -> P1 text
//! ```
//!
//! Every stage goes through the text codec and back, so each intermediate
//! text is exactly what gets stored on disk.
//!
//! # Example
//! ```
//! use pnmchain::workflow::{run, ChainOptions};
//! use pnmchain_core::buffer::PixelBuffer;
//! use pnmchain_core::colorspace::ColorSpace;
//!
//! let image = PixelBuffer::new(2, 1, ColorSpace::RGB, vec![255, 0, 0, 255, 255, 255]).unwrap();
//! let outputs = run(image, &ChainOptions::default()).unwrap();
//!
//! assert_eq!(outputs.grayscale.samples(), &[76, 255]);
//! assert_eq!(outputs.binary.samples(), &[1, 0]);
//! assert_eq!(outputs.pbm, "P1\n2 1\n1 0\n");
//! ```
pub mod errors;
pub mod impls;
pub mod traits;
pub mod workflow;
