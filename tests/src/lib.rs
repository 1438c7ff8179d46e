/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use pnmchain::errors::{ChainErrors, ImageOperationsErrors};
use pnmchain_ppm::{PnmDecodeErrors, PnmEncodeErrors, PnmVersions};
use serde::de::DeserializeOwned;
use serde::Deserialize;

mod chain;
mod decode;

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsonFormat {
    P1,
    P2,
    P3
}

impl JsonFormat {
    pub fn to_version(self) -> PnmVersions {
        match self {
            Self::P1 => PnmVersions::P1,
            Self::P2 => PnmVersions::P2,
            Self::P3 => PnmVersions::P3
        }
    }
}

/// Path of a fixture file in `tests/`
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

pub fn load_fixtures<T: DeserializeOwned>(name: &str) -> Vec<T> {
    let json_file = read(fixture_path(name)).unwrap();

    serde_json::from_slice(&json_file).unwrap()
}

/// Name of the variant a fixture expects, without its payload
pub fn decode_error_name(err: &PnmDecodeErrors) -> &'static str {
    match err {
        PnmDecodeErrors::HeaderMismatch(..) => "HeaderMismatch",
        PnmDecodeErrors::MalformedHeader(_) => "MalformedHeader",
        PnmDecodeErrors::MalformedPixelData(_) => "MalformedPixelData",
        PnmDecodeErrors::PixelCountMismatch(..) => "PixelCountMismatch",
        PnmDecodeErrors::LargeDimensions(..) => "LargeDimensions",
        PnmDecodeErrors::BufferErrors(_) => "BufferErrors"
    }
}

pub fn chain_error_name(err: &ChainErrors) -> &'static str {
    match err {
        ChainErrors::DecodeErrors(err) => decode_error_name(err),
        ChainErrors::EncodeErrors(PnmEncodeErrors::FormatMismatch(..)) => "FormatMismatch",
        ChainErrors::EncodeErrors(PnmEncodeErrors::IOErrors(_)) => "IOErrors",
        ChainErrors::OperationsError(ImageOperationsErrors::ChannelCountMismatch(..)) => {
            "ChannelCountMismatch"
        }
        ChainErrors::OperationsError(ImageOperationsErrors::InvalidThreshold(_)) => {
            "InvalidThreshold"
        }
        ChainErrors::OperationsError(ImageOperationsErrors::BufferErrors(_))
        | ChainErrors::BufferErrors(_) => "BufferErrors",
        ChainErrors::IoErrors(_) => "IoErrors",
        ChainErrors::RasterErrors(_) => "RasterErrors",
        ChainErrors::NoSourceImage => "NoSourceImage",
        ChainErrors::GenericString(_) | ChainErrors::GenericStr(_) => "Generic"
    }
}
