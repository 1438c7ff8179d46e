/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use pnmchain::workflow::ChainOutputs;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Summary of a single run, printed with `--report`
pub struct RunReport<'a> {
    input:     &'a Path,
    threshold: i32,
    outputs:   &'a ChainOutputs,
    files:     &'a [PathBuf]
}

impl<'a> RunReport<'a> {
    pub fn new(
        input: &'a Path, threshold: i32, outputs: &'a ChainOutputs, files: &'a [PathBuf]
    ) -> RunReport<'a> {
        RunReport {
            input,
            threshold,
            outputs,
            files
        }
    }
}

impl<'a> Serialize for RunReport<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let files: Vec<String> = self
            .files
            .iter()
            .map(|x| x.to_string_lossy().to_string())
            .collect();

        let mut state = serializer.serialize_struct("RunReport", 9)?;

        state.serialize_field("file", &self.input.to_string_lossy())?;
        state.serialize_field("threshold", &self.threshold)?;
        state.serialize_field("original", &self.outputs.original)?;
        state.serialize_field("grayscale", &self.outputs.grayscale)?;
        state.serialize_field("binary", &self.outputs.binary)?;
        state.serialize_field("ppm_bytes", &self.outputs.ppm.len())?;
        state.serialize_field("pgm_bytes", &self.outputs.pgm.len())?;
        state.serialize_field("pbm_bytes", &self.outputs.pbm.len())?;
        state.serialize_field("written", &files)?;

        state.end()
    }
}
