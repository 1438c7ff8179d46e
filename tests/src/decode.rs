/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnmchain_core::options::DecoderOptions;
use pnmchain_ppm::{decode_with_options, encode_to_string};
use serde::Deserialize;

use crate::{decode_error_name, load_fixtures, JsonFormat};

#[derive(Clone, Deserialize, Debug)]
pub struct ExpectedBuffer {
    pub width:   usize,
    pub height:  usize,
    pub samples: Vec<u8>
}

#[derive(Clone, Deserialize, Debug)]
pub struct DecodeEntry {
    pub name:     String,
    pub format:   JsonFormat,
    pub text:     String,
    #[serde(default = "strict_default")]
    pub strict:   bool,
    #[serde(default)]
    pub rescale:  bool,
    pub expected: Option<ExpectedBuffer>,
    pub error:    Option<String>,
    pub comment:  Option<String>
}

fn strict_default() -> bool {
    true
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_decode_fixtures() {
    let entries: Vec<DecodeEntry> = load_fixtures("decode.json");

    let mut failures = Vec::new();

    for entry in &entries {
        let version = entry.format.to_version();
        let options = DecoderOptions::default()
            .set_strict_mode(entry.strict)
            .set_rescale_max_value(entry.rescale);

        let result = decode_with_options(entry.text.as_bytes(), version, options);

        match (&result, &entry.expected, &entry.error) {
            (Ok(buffer), Some(expected), None) => {
                if buffer.dimensions() != (expected.width, expected.height)
                    || buffer.samples() != expected.samples.as_slice()
                    || buffer.colorspace() != version.colorspace()
                {
                    failures.push(format!(
                        "{}: expected {:?} but decoded {:?} {:?}",
                        entry.name,
                        expected,
                        buffer,
                        buffer.samples()
                    ));
                }
            }
            (Err(err), None, Some(expected)) => {
                if decode_error_name(err) != expected {
                    failures.push(format!(
                        "{}: expected {} but found {:?}",
                        entry.name, expected, err
                    ));
                }
            }
            _ => failures.push(format!("{}: unexpected result {:?}", entry.name, result))
        }
    }
    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("{}\n", failure);
        }
        panic!("{} of {} decode fixtures failed", failures.len(), entries.len());
    }
}

/// Every successfully decoded fixture encodes back to text that
/// decodes to the same buffer
#[test]
fn test_decoded_fixtures_survive_reencoding() {
    let entries: Vec<DecodeEntry> = load_fixtures("decode.json");

    for entry in entries.iter().filter(|x| x.expected.is_some()) {
        let version = entry.format.to_version();
        let options = DecoderOptions::default()
            .set_strict_mode(entry.strict)
            .set_rescale_max_value(entry.rescale);

        let buffer = decode_with_options(entry.text.as_bytes(), version, options).unwrap();
        let text = encode_to_string(&buffer, version).unwrap();
        let again = decode_with_options(text.as_bytes(), version, DecoderOptions::default());

        assert_eq!(again.unwrap(), buffer, "{}", entry.name);
        assert_eq!(buffer.colorspace(), version.colorspace());
    }
}
