/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::cell::RefCell;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;

use clap::ArgMatches;
use log::{debug, info};
use pnmchain::errors::ChainErrors;
use pnmchain::workflow::{ChainWorkFlow, Stage};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{PendingFiles, PnmFileSink, RasterExportSink, RasterFile};
use crate::serde::RunReport;
use crate::show_gui::{open_in_default_app, side_by_side};

/// Where the stages of a single input end up
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    pub ppm:           PathBuf,
    pub pgm:           PathBuf,
    pub pbm:           PathBuf,
    pub gray_raster:   PathBuf,
    pub binary_raster: PathBuf
}

impl OutputPaths {
    /// Derive output names from `input`, writing into `out_dir` when given
    /// or next to the input otherwise
    pub fn new(input: &Path, out_dir: Option<&Path>) -> Result<OutputPaths, ChainErrors> {
        let stem = input
            .file_stem()
            .and_then(OsStr::to_str)
            .ok_or_else(|| ChainErrors::GenericString(format!("Path {input:?} has no file name")))?;

        let dir = match out_dir {
            Some(dir) => dir.to_path_buf(),
            None => input.parent().map(Path::to_path_buf).unwrap_or_default()
        };

        Ok(OutputPaths {
            ppm:           dir.join(format!("{stem}.ppm")),
            pgm:           dir.join(format!("{stem}_gray.ppm")),
            pbm:           dir.join(format!("{stem}_binary.ppm")),
            gray_raster:   dir.join(format!("{stem}_gray.png")),
            binary_raster: dir.join(format!("{stem}_binary.png"))
        })
    }

    /// Path holding the Netpbm text of `stage`
    pub fn text_path(&self, stage: Stage) -> &Path {
        match stage {
            Stage::Color => &self.ppm,
            Stage::Grayscale => &self.pgm,
            Stage::Binary => &self.pbm
        }
    }

    /// Path of the raster export of `stage`, the color stage has none
    pub fn raster_path(&self, stage: Stage) -> Option<&Path> {
        match stage {
            Stage::Color => None,
            Stage::Grayscale => Some(&self.gray_raster),
            Stage::Binary => Some(&self.binary_raster)
        }
    }

    pub fn all(&self) -> [&Path; 5] {
        [
            &self.ppm,
            &self.pgm,
            &self.pbm,
            &self.gray_raster,
            &self.binary_raster
        ]
    }
}

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), ChainErrors> {
    info!("Creating workflows from input");

    let inputs = args
        .get_raw("in")
        .ok_or(ChainErrors::GenericStr("No input files given"))?;

    for in_file in inputs {
        let start = Instant::now();
        let in_path = Path::new(in_file);
        let paths = OutputPaths::new(in_path, cmd_opts.out_dir.as_deref())?;

        verify_file_paths(in_path, cmd_opts.out_dir.as_deref(), &paths)?;
        debug!("Output paths: {:?}", paths);

        let pending = Rc::new(RefCell::new(PendingFiles::new()));

        let mut workflow = ChainWorkFlow::new(
            RasterFile::new(in_path.to_path_buf()),
            cmd_opts.chain_options
        );
        workflow
            .chain_sink(Box::new(PnmFileSink::new(paths.clone(), pending.clone())))
            .chain_sink(Box::new(RasterExportSink::new(paths.clone(), pending.clone())));

        // staged files are removed when `pending` drops on error
        workflow.advance_to_end()?;

        let outputs = workflow
            .into_outputs()
            .ok_or(ChainErrors::GenericStr("Workflow finished without outputs"))?;

        let written = pending.borrow_mut().commit()?;

        info!(
            "Finished {:?} in {} ms",
            in_path,
            start.elapsed().as_millis()
        );

        if cmd_opts.report {
            let report = RunReport::new(
                in_path,
                cmd_opts.chain_options.get_threshold(),
                &outputs,
                &written
            );
            let json = serde_json::to_string_pretty(&report)
                .map_err(|x| ChainErrors::GenericString(x.to_string()))?;

            println!("{json}");
        }
        if cmd_opts.view {
            let strip = side_by_side(&[&outputs.original, &outputs.grayscale, &outputs.binary])?;
            open_in_default_app(&strip)?;
        }
    }

    Ok(())
}

fn verify_file_paths(
    input: &Path, out_dir: Option<&Path>, paths: &OutputPaths
) -> Result<(), ChainErrors> {
    if !input.exists() {
        return Err(ChainErrors::GenericString(format!(
            "Path {:?}, does not exist",
            input
        )));
    }

    if !input.is_file() {
        return Err(ChainErrors::GenericString(format!(
            "Path {:?} is not a file",
            input
        )));
    }

    if let Some(dir) = out_dir {
        if !dir.is_dir() {
            return Err(ChainErrors::GenericString(format!(
                "Output directory {:?} does not exist",
                dir
            )));
        }
    }

    for out_path in paths.all() {
        if same_file(input, out_path) {
            return Err(ChainErrors::GenericString(format!(
                "Cannot use {:?} as both input and output",
                input
            )));
        }
        if out_path.exists() {
            info!("Overwriting path {:?} ", out_path);
        }
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b
    }
}
