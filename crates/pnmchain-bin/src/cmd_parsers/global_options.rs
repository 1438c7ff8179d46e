/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use pnmchain::workflow::ChainOptions;

use crate::cmd_parsers::get_chain_options;

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub out_dir:       Option<PathBuf>,
    pub view:          bool,
    pub report:        bool,
    pub chain_options: ChainOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            out_dir:       None,
            view:          false,
            report:        false,
            chain_options: ChainOptions::default()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.value_source("out-dir") == Some(ValueSource::CommandLine) {
        cmd_options.out_dir = options.get_one::<PathBuf>("out-dir").cloned();
        info!("Writing stages to {:?}", cmd_options.out_dir);
    }
    if options.get_flag("view") {
        info!("Stages will be shown in the default viewer");
        cmd_options.view = true;
    }
    if options.get_flag("report") {
        cmd_options.report = true;
    }
    cmd_options.chain_options = get_chain_options(options);

    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not set up logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
