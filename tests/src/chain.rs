/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use pnmchain::workflow::{run, ChainOptions};
use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;
use serde::Deserialize;

use crate::{chain_error_name, load_fixtures};

#[derive(Clone, Deserialize, Debug)]
pub struct ChainEntry {
    pub name:      String,
    pub width:     usize,
    pub height:    usize,
    pub pixels:    Vec<u8>,
    pub threshold: i32,
    pub ppm:       Option<String>,
    pub pgm:       Option<String>,
    pub pbm:       Option<String>,
    pub error:     Option<String>,
    pub comment:   Option<String>
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_chain_fixtures() {
    let entries: Vec<ChainEntry> = load_fixtures("chain.json");

    let mut failures = Vec::new();

    for entry in &entries {
        let source =
            PixelBuffer::new(entry.width, entry.height, ColorSpace::RGB, entry.pixels.clone())
                .unwrap();
        let options = ChainOptions::default().set_threshold(entry.threshold);

        match (run(source, &options), &entry.error) {
            (Ok(outputs), None) => {
                let found = [&outputs.ppm, &outputs.pgm, &outputs.pbm];
                let expected = [&entry.ppm, &entry.pgm, &entry.pbm];

                for (found, expected) in found.iter().zip(expected) {
                    if Some(*found) != expected.as_ref() {
                        failures.push(format!(
                            "{}: expected {:?} but found {:?}",
                            entry.name, expected, found
                        ));
                    }
                }
                if outputs.binary.dimensions() != (entry.width, entry.height) {
                    failures.push(format!("{}: binary stage changed dimensions", entry.name));
                }
            }
            (Err(err), Some(expected)) => {
                if chain_error_name(&err) != expected {
                    failures.push(format!(
                        "{}: expected {} but found {:?}",
                        entry.name, expected, err
                    ));
                }
            }
            (Ok(_), Some(expected)) => {
                failures.push(format!("{}: expected {} but chain succeeded", entry.name, expected))
            }
            (Err(err), None) => failures.push(format!("{}: unexpected error {:?}", entry.name, err))
        }
    }
    if !failures.is_empty() {
        for failure in &failures {
            eprintln!("{}\n", failure);
        }
        panic!("{} of {} chain fixtures failed", failures.len(), entries.len());
    }
}
