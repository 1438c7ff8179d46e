/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, info, warn};
use pnmchain::errors::ChainErrors;
use pnmchain::traits::{IntoPixelBuffer, StageSink};
use pnmchain::workflow::Stage;
use pnmchain_core::buffer::PixelBuffer;
use pnmchain_core::colorspace::ColorSpace;
use zune_core::bit_depth::BitDepth;
use zune_image::core_filters::colorspace::ColorspaceConv;
use zune_image::core_filters::depth::Depth;
use zune_image::errors::ImageErrors;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::workflow::OutputPaths;

fn raster_error(err: ImageErrors) -> ChainErrors {
    ChainErrors::RasterErrors(format!("{err:?}"))
}

/// A raster image on disk, decoded by zune-image
pub struct RasterFile {
    file_path: PathBuf
}

impl RasterFile {
    pub fn new(file_path: PathBuf) -> RasterFile {
        RasterFile { file_path }
    }
}

impl IntoPixelBuffer for RasterFile {
    fn into_buffer(self) -> Result<PixelBuffer, ChainErrors> {
        let mut image = Image::open(&self.file_path).map_err(raster_error)?;

        if image.colorspace() != zune_core::colorspace::ColorSpace::RGB {
            debug!("Converting {:?} to RGB", image.colorspace());
            ColorspaceConv::new(zune_core::colorspace::ColorSpace::RGB)
                .execute(&mut image)
                .map_err(raster_error)?;
        }
        if image.depth() != BitDepth::Eight {
            debug!("Converting {:?} to eight bits", image.depth());
            Depth::new(BitDepth::Eight)
                .execute(&mut image)
                .map_err(raster_error)?;
        }
        let (width, height) = image.dimensions();
        let mut frames = image.flatten_to_u8();

        if frames.len() > 1 {
            warn!("Image has {} frames, only the first is used", frames.len());
        }
        if frames.is_empty() {
            return Err(ChainErrors::RasterErrors(format!(
                "No frames found in {:?}",
                self.file_path
            )));
        }
        let pixels = frames.swap_remove(0);

        Ok(PixelBuffer::new(width, height, ColorSpace::RGB, pixels)?)
    }
}

/// Samples of a single channel buffer as eight bit grayscale
///
/// Bilevel ink (1) becomes black, paper (0) becomes white.
///
/// Returns `None` for buffers with more than one channel.
pub fn to_display_luma(buffer: &PixelBuffer) -> Option<Vec<u8>> {
    match buffer.colorspace() {
        ColorSpace::Bilevel => Some(
            buffer
                .samples()
                .iter()
                .map(|bit| if *bit == 1 { 0 } else { 255 })
                .collect()
        ),
        colorspace if colorspace.is_grayscale() => Some(buffer.samples().to_vec()),
        _ => None
    }
}

/// Encode a buffer with zune-image, the format comes from the extension of `path`
pub fn save_raster(buffer: &PixelBuffer, path: &Path) -> Result<(), ChainErrors> {
    let (width, height) = buffer.dimensions();

    let image = match to_display_luma(buffer) {
        Some(luma) => Image::from_u8(&luma, width, height, zune_core::colorspace::ColorSpace::Luma),
        None => Image::from_u8(
            buffer.samples(),
            width,
            height,
            zune_core::colorspace::ColorSpace::RGB
        )
    };
    image.save(path).map_err(raster_error)
}

/// Temporary sibling of `path`, the extension is kept so encoders
/// can still pick the format from it.
pub fn temp_sibling(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|x| x.to_string_lossy().to_string())
        .unwrap_or_default();

    path.with_file_name(format!(".tmp-{name}"))
}

/// Files written to temporary siblings, renamed into place on commit
///
/// Anything not committed is removed when this is dropped.
#[derive(Default, Debug)]
pub struct PendingFiles {
    files: Vec<(PathBuf, PathBuf)>
}

impl PendingFiles {
    pub fn new() -> PendingFiles {
        PendingFiles::default()
    }

    /// Write `target` through `write`, which receives the temporary path
    pub fn stage<F>(&mut self, target: &Path, write: F) -> Result<(), ChainErrors>
    where
        F: FnOnce(&Path) -> Result<(), ChainErrors>
    {
        let temp = temp_sibling(target);

        if let Err(err) = write(&temp) {
            let _ = fs::remove_file(&temp);
            return Err(err);
        }
        debug!("Staged {:?} as {:?}", target, temp);
        self.files.push((temp, target.to_path_buf()));

        Ok(())
    }

    /// Move every staged file into place, returns the final paths
    pub fn commit(&mut self) -> Result<Vec<PathBuf>, ChainErrors> {
        let mut written = Vec::with_capacity(self.files.len());

        for (temp, target) in self.files.drain(..) {
            if let Err(err) = fs::rename(&temp, &target) {
                let _ = fs::remove_file(&temp);
                return Err(ChainErrors::GenericString(format!(
                    "Could not move {temp:?} to {target:?}: {err}"
                )));
            }
            info!("Wrote {:?}", target);
            written.push(target);
        }
        Ok(written)
    }

    /// Remove every staged file
    pub fn discard(&mut self) {
        for (temp, _) in self.files.drain(..) {
            if fs::remove_file(&temp).is_ok() {
                debug!("Removed {:?}", temp);
            }
        }
    }
}

impl Drop for PendingFiles {
    fn drop(&mut self) {
        self.discard();
    }
}

/// Writes the Netpbm text of every stage
pub struct PnmFileSink {
    paths:   OutputPaths,
    pending: Rc<RefCell<PendingFiles>>
}

impl PnmFileSink {
    pub fn new(paths: OutputPaths, pending: Rc<RefCell<PendingFiles>>) -> PnmFileSink {
        PnmFileSink { paths, pending }
    }
}

impl StageSink for PnmFileSink {
    fn get_name(&self) -> &'static str {
        "Netpbm writer"
    }

    fn consume(&mut self, stage: Stage, _: &PixelBuffer, text: &str) -> Result<(), ChainErrors> {
        let path = self.paths.text_path(stage);

        self.pending
            .borrow_mut()
            .stage(path, |temp| Ok(fs::write(temp, text)?))
    }
}

/// Exports the grayscale and binary stages as raster images
pub struct RasterExportSink {
    paths:   OutputPaths,
    pending: Rc<RefCell<PendingFiles>>
}

impl RasterExportSink {
    pub fn new(paths: OutputPaths, pending: Rc<RefCell<PendingFiles>>) -> RasterExportSink {
        RasterExportSink { paths, pending }
    }
}

impl StageSink for RasterExportSink {
    fn get_name(&self) -> &'static str {
        "Raster exporter"
    }

    fn consume(&mut self, stage: Stage, buffer: &PixelBuffer, _: &str) -> Result<(), ChainErrors> {
        match self.paths.raster_path(stage) {
            Some(path) => self
                .pending
                .borrow_mut()
                .stage(path, |temp| save_raster(buffer, temp)),
            None => Ok(())
        }
    }
}
