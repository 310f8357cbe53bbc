//! Animated GIF export.
//!
//! This module provides [`ExportOptions`] for configuring the output file
//! and [`export_gif`] / [`encode_gif_to_memory`] for serializing a frame
//! sequence as a single multi-frame GIF. Frames are flattened onto an
//! opaque white background and re-quantized per frame before encoding —
//! GIF has no per-pixel alpha, and compositing shifts the color
//! distribution away from the cached palettes.
//!
//! # Example
//!
//! ```no_run
//! use gifstitch::{CombineOptions, ExportOptions, StitchError, export_gif, load_sequence};
//!
//! let options = CombineOptions::new();
//! let cache = load_sequence("gifs", &options)?;
//!
//! export_gif(
//!     cache.playback(options.mode, options.repeat),
//!     "combined.gif",
//!     &options.export_options(),
//! )?;
//! # Ok::<(), StitchError>(())
//! ```

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use gif::{DisposalMethod, Encoder, Frame, Repeat};

use crate::cache::NormalizedFrame;
use crate::error::StitchError;
use crate::palette::{flatten_onto_white, index_frame};

/// How the previous frame's pixels are treated before the next one renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameDisposal {
    /// Decoder's choice.
    Any,
    /// Leave the previous frame in place.
    Keep,
    /// Clear to the background color between frames. This is the default.
    #[default]
    Background,
    /// Restore whatever preceded the previous frame.
    Previous,
}

impl FrameDisposal {
    fn to_gif(self) -> DisposalMethod {
        match self {
            FrameDisposal::Any => DisposalMethod::Any,
            FrameDisposal::Keep => DisposalMethod::Keep,
            FrameDisposal::Background => DisposalMethod::Background,
            FrameDisposal::Previous => DisposalMethod::Previous,
        }
    }
}

/// Configuration for animated GIF export.
///
/// Controls frame timing, repeat behaviour, disposal, and palette
/// compression.
#[derive(Debug, Clone)]
#[must_use]
pub struct ExportOptions {
    /// Delay between frames in hundredths of a second (default: 10 = 100 ms).
    pub frame_delay: u16,
    /// How many times the animation should repeat. `None` means loop
    /// forever.
    pub repeat: Option<u16>,
    /// Disposal policy written on every frame.
    pub disposal: FrameDisposal,
    /// When `true` (default), per-frame palettes are trimmed to the colors
    /// actually used, shrinking the color table and the LZW code size.
    pub compress: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            frame_delay: 10,
            repeat: None,
            disposal: FrameDisposal::Background,
            compress: true,
        }
    }
}

impl ExportOptions {
    /// Create a new [`ExportOptions`] with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delay between frames in hundredths of a second.
    ///
    /// For example, `10` = 100 ms between frames ≈ 10 fps.
    pub fn with_frame_delay(mut self, delay: u16) -> Self {
        self.frame_delay = delay;
        self
    }

    /// Set the repeat count. `None` means loop forever.
    pub fn with_repeat(mut self, repeat: Option<u16>) -> Self {
        self.repeat = repeat;
        self
    }

    /// Set the per-frame disposal policy.
    pub fn with_disposal(mut self, disposal: FrameDisposal) -> Self {
        self.disposal = disposal;
        self
    }

    /// Toggle palette trimming.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}

/// Write `frames` to `path` as one multi-frame animated GIF.
///
/// The first frame is the base; the rest are appended in order. Every
/// frame is composited over opaque white, quantized to its own adaptive
/// palette, and written with the configured delay and disposal. The file's
/// loop count comes from [`ExportOptions::repeat`].
///
/// # Errors
///
/// Returns [`StitchError::EmptySequence`] when `frames` is empty (checked
/// before any I/O), and [`StitchError::Write`] when the file cannot be
/// created or written — surfaced verbatim, never retried.
pub fn export_gif<'a, I, P>(frames: I, path: P, options: &ExportOptions) -> Result<(), StitchError>
where
    I: IntoIterator<Item = &'a NormalizedFrame>,
    P: AsRef<Path>,
{
    let frames: Vec<&NormalizedFrame> = frames.into_iter().collect();
    if frames.is_empty() {
        return Err(StitchError::EmptySequence);
    }

    let path = path.as_ref();
    let write_error = |reason: String| StitchError::Write {
        path: path.to_path_buf(),
        reason,
    };
    log::debug!(
        "Exporting {} frames to {:?} (delay={}, compress={})",
        frames.len(),
        path,
        options.frame_delay,
        options.compress,
    );

    let file = File::create(path).map_err(|error| write_error(error.to_string()))?;
    let mut writer = BufWriter::new(file);
    encode_into(&mut writer, &frames, options).map_err(|error| match error {
        // Encoder failures at this level are file-write failures.
        StitchError::Encode(reason) => write_error(reason),
        other => other,
    })?;
    writer
        .flush()
        .map_err(|error| write_error(error.to_string()))?;
    Ok(())
}

/// Encode `frames` as an animated GIF into memory.
///
/// Produces the same bytes [`export_gif`] would write to a file.
///
/// # Errors
///
/// Returns [`StitchError::EmptySequence`] when `frames` is empty, and
/// [`StitchError::Encode`] on encoder failure.
pub fn encode_gif_to_memory<'a, I>(
    frames: I,
    options: &ExportOptions,
) -> Result<Vec<u8>, StitchError>
where
    I: IntoIterator<Item = &'a NormalizedFrame>,
{
    let frames: Vec<&NormalizedFrame> = frames.into_iter().collect();
    if frames.is_empty() {
        return Err(StitchError::EmptySequence);
    }
    log::debug!("Encoding {} frames to GIF in memory", frames.len());

    let mut buffer = Vec::new();
    encode_into(&mut buffer, &frames, options)?;
    Ok(buffer)
}

/// Shared encoding path for file and in-memory export.
fn encode_into<W: Write>(
    writer: W,
    frames: &[&NormalizedFrame],
    options: &ExportOptions,
) -> Result<(), StitchError> {
    let encode_error = |error: gif::EncodingError| StitchError::Encode(error.to_string());

    let width = frames[0].width();
    let height = frames[0].height();
    if width > u32::from(u16::MAX) || height > u32::from(u16::MAX) {
        return Err(StitchError::Encode(format!(
            "canvas {width}x{height} exceeds the GIF limit of 65535",
        )));
    }
    let (width, height) = (width as u16, height as u16);

    let mut encoder = Encoder::new(writer, width, height, &[]).map_err(encode_error)?;
    let repeat = match options.repeat {
        None => Repeat::Infinite,
        Some(count) => Repeat::Finite(count),
    };
    encoder.set_repeat(repeat).map_err(encode_error)?;

    for frame in frames {
        let flattened = flatten_onto_white(frame.image());
        let indexed = index_frame(&flattened, options.compress);

        let gif_frame = Frame {
            width,
            height,
            buffer: Cow::Owned(indexed.indices),
            palette: Some(indexed.palette),
            delay: options.frame_delay,
            dispose: options.disposal.to_gif(),
            ..Frame::default()
        };
        encoder.write_frame(&gif_frame).map_err(encode_error)?;
    }

    Ok(())
}
