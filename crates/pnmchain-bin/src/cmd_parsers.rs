/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::debug;
use pnmchain::workflow::ChainOptions;
use pnmchain_core::options::DecoderOptions;

pub mod global_options;

pub fn get_decoder_options(options: &ArgMatches) -> DecoderOptions {
    let max_width = options.get_one::<usize>("max-width").copied();
    let max_height = options.get_one::<usize>("max-height").copied();
    let defaults = DecoderOptions::default();

    let decoder_options = defaults
        .set_max_width(max_width.unwrap_or(defaults.get_max_width()))
        .set_max_height(max_height.unwrap_or(defaults.get_max_height()))
        .set_strict_mode(!options.get_flag("lenient"))
        .set_rescale_max_value(options.get_flag("rescale"));

    debug!("Decoder options: {:?}", decoder_options);

    decoder_options
}

pub fn get_chain_options(options: &ArgMatches) -> ChainOptions {
    let mut chain_options =
        ChainOptions::default().set_decoder_options(get_decoder_options(options));

    if let Some(threshold) = options.get_one::<i32>("threshold") {
        chain_options = chain_options.set_threshold(*threshold);
    }
    debug!("Threshold: {}", chain_options.get_threshold());

    chain_options
}
