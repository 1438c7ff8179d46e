/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{LENIENT_HELP, RESCALE_HELP, THRESHOLD_HELP, VIEW_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pnmchain")
        .about("Convert an image through plain text PPM, PGM and PBM stages")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out-dir")
            .short('o')
            .long("out-dir")
            .help("Directory to write the stages to, defaults to the input's directory")
            .value_parser(value_parser!(std::path::PathBuf)))
        .arg(Arg::new("threshold")
            .long("threshold")
            .help_heading("OPERATIONS")
            .help("Binarization threshold, samples below it become ink")
            .long_help(THRESHOLD_HELP)
            .value_parser(value_parser!(i32))
            .default_value("128"))
        .arg(Arg::new("view")
            .long("view")
            .action(ArgAction::SetTrue)
            .help("Show the stages side by side in the default image viewer")
            .long_help(VIEW_HELP))
        .arg(Arg::new("report")
            .long("report")
            .action(ArgAction::SetTrue)
            .help("Print a JSON summary of every run to standard output"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the stages and timings"))
        .arg(Arg::new("lenient")
            .long("lenient")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Drop surplus pixel values instead of failing")
            .long_help(LENIENT_HELP))
        .arg(Arg::new("rescale")
            .long("rescale")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Rescale samples by the header's maximum value")
            .long_help(RESCALE_HELP))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Maximum width of a stage, larger ones are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Maximum height of a stage, larger ones are rejected")
            .value_parser(value_parser!(usize))
            .default_value("16384"))
}
