/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all pnmchain libraries
//!
//! This crate provides the types shared by the codec,
//! the image processing kernels and the conversion workflow
//!
//! It currently contains
//!
//! - An immutable pixel buffer holding 8 bit samples in row-major order
//! - Colorspace information describing channel layout and sample range
//! - Decoder options shared by the Netpbm text decoders
//!
//! # Features
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
pub mod buffer;
pub mod colorspace;
pub mod options;
pub mod serde;
