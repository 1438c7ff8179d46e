/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::env::temp_dir;
use std::process::Command;
use std::time::UNIX_EPOCH;

use log::{info, trace};
use pnmchain::errors::ChainErrors;
use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;

use crate::file_io::{save_raster, to_display_luma};

/// White space between two stages
const GUTTER: usize = 16;

/// Place buffers next to each other in a single RGB strip
///
/// Single channel buffers are expanded to gray RGB, bilevel ink is black.
/// Shorter buffers are padded with white at the bottom.
pub fn side_by_side(stages: &[&PixelBuffer]) -> Result<PixelBuffer, ChainErrors> {
    if stages.is_empty() {
        return Err(ChainErrors::GenericStr("No stages to show"));
    }
    let height = stages.iter().map(|x| x.height()).max().unwrap_or(1);
    let width = stages.iter().map(|x| x.width()).sum::<usize>() + GUTTER * (stages.len() - 1);
    let stride = width * 3;

    let mut out = vec![255_u8; stride * height];
    let mut x_offset = 0;

    for stage in stages {
        let start = x_offset * 3;
        let row_bytes = stage.width() * 3;

        match to_display_luma(stage) {
            None => {
                for (in_row, out_row) in stage.rows().zip(out.chunks_exact_mut(stride)) {
                    out_row[start..start + row_bytes].copy_from_slice(in_row);
                }
            }
            Some(luma) => {
                for (in_row, out_row) in luma
                    .chunks_exact(stage.width())
                    .zip(out.chunks_exact_mut(stride))
                {
                    for (value, pixel) in in_row
                        .iter()
                        .zip(out_row[start..start + row_bytes].chunks_exact_mut(3))
                    {
                        pixel.fill(*value);
                    }
                }
            }
        }
        x_offset += stage.width() + GUTTER;
    }
    Ok(PixelBuffer::new(width, height, ColorSpace::RGB, out)?)
}

/// Write a buffer as a temporary PNG and open it in the default viewer
pub fn open_in_default_app(image: &PixelBuffer) -> Result<(), ChainErrors> {
    let secs = std::time::SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|x| x.as_secs())
        .unwrap_or_default();

    let mut path = temp_dir();
    path.push(format!("pnmchain-{secs}.png"));

    save_raster(image, &path)?;
    trace!("Wrote preview to {:?}", path);

    match viewer_command() {
        Some(mut command) => {
            command.arg(&path).spawn()?;
            info!("Opened {:?} in the default viewer", path);
        }
        None => info!("No default viewer known for this platform, preview is at {:?}", path)
    }
    Ok(())
}

#[cfg(target_os = "linux")]
fn viewer_command() -> Option<Command> {
    Some(Command::new("xdg-open"))
}

#[cfg(target_os = "macos")]
fn viewer_command() -> Option<Command> {
    Some(Command::new("open"))
}

#[cfg(target_os = "windows")]
fn viewer_command() -> Option<Command> {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", ""]);
    Some(command)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn viewer_command() -> Option<Command> {
    None
}

#[cfg(test)]
mod tests {
    use pnmchain_core::buffer::PixelBuffer;
    use pnmchain_core::colorspace::ColorSpace;

    use crate::show_gui::{side_by_side, GUTTER};

    #[test]
    fn strip_layout() {
        let rgb = PixelBuffer::new(1, 1, ColorSpace::RGB, vec![10, 20, 30]).unwrap();
        let gray = PixelBuffer::new(1, 1, ColorSpace::Luma, vec![40]).unwrap();
        let bits = PixelBuffer::new(1, 1, ColorSpace::Bilevel, vec![1]).unwrap();

        let strip = side_by_side(&[&rgb, &gray, &bits]).unwrap();
        let samples = strip.samples();

        assert_eq!(strip.dimensions(), (3 + 2 * GUTTER, 1));
        assert_eq!(strip.colorspace(), ColorSpace::RGB);

        assert_eq!(&samples[0..3], &[10, 20, 30]);
        // gutter is white
        assert_eq!(&samples[3..6], &[255, 255, 255]);

        let gray_at = (1 + GUTTER) * 3;
        assert_eq!(&samples[gray_at..gray_at + 3], &[40, 40, 40]);

        let bits_at = (2 + 2 * GUTTER) * 3;
        assert_eq!(&samples[bits_at..bits_at + 3], &[0, 0, 0]);
    }

    #[test]
    fn short_stages_are_padded() {
        let tall = PixelBuffer::new(1, 2, ColorSpace::Luma, vec![0, 0]).unwrap();
        let short = PixelBuffer::new(1, 1, ColorSpace::Luma, vec![0]).unwrap();

        let strip = side_by_side(&[&tall, &short]).unwrap();
        let stride = strip.row_stride();
        let last = &strip.samples()[stride..];

        assert_eq!(&last[last.len() - 3..], &[255, 255, 255]);
    }

    #[test]
    fn nothing_to_show() {
        assert!(side_by_side(&[]).is_err());
    }
}
