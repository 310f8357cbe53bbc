//! Per-mode storage for normalized frames.
//!
//! A [`ModeCache`] holds the transformed frame sequences for all three
//! [`ResizeMode`]s, built in one pass over the raw frame stream. Switching
//! modes is a bucket lookup — nothing is recomputed.

use image::RgbaImage;

use crate::configuration::TargetSize;
use crate::transform::ResizeMode;

/// One frame after geometric normalization and palette reduction.
///
/// Dimensions always equal the [`TargetSize`] in effect when the owning
/// [`ModeCache`] was loaded, and the pixel data uses at most 128 distinct
/// colors. Transparent pixels occur only in frames produced under
/// [`ResizeMode::Fit`].
#[derive(Debug, Clone)]
pub struct NormalizedFrame {
    image: RgbaImage,
}

impl NormalizedFrame {
    pub(crate) fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    /// The underlying RGBA pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// The transformed frame sequences for all three resize modes.
///
/// All buckets are populated together from the same raw frame stream, so
/// they always have identical length and per-index correspondence to the
/// same decoded source frame.
///
/// A value of this type is complete by construction — it is only ever
/// handed out by a finished load. The "still loading" window is observable
/// on [`SequenceLoader::is_loading`](crate::SequenceLoader::is_loading)
/// instead; each new load replaces the previous cache wholesale.
#[derive(Debug, Clone)]
pub struct ModeCache {
    fit: Vec<NormalizedFrame>,
    fill: Vec<NormalizedFrame>,
    stretch: Vec<NormalizedFrame>,
    target: TargetSize,
}

impl ModeCache {
    pub(crate) fn new(target: TargetSize) -> Self {
        Self {
            fit: Vec::new(),
            fill: Vec::new(),
            stretch: Vec::new(),
            target,
        }
    }

    pub(crate) fn push(&mut self, mode: ResizeMode, frame: NormalizedFrame) {
        match mode {
            ResizeMode::Fit => self.fit.push(frame),
            ResizeMode::Fill => self.fill.push(frame),
            ResizeMode::Stretch => self.stretch.push(frame),
        }
    }

    /// The normalized frames for `mode`, one entry per decoded source frame.
    pub fn frames(&self, mode: ResizeMode) -> &[NormalizedFrame] {
        match mode {
            ResizeMode::Fit => &self.fit,
            ResizeMode::Fill => &self.fill,
            ResizeMode::Stretch => &self.stretch,
        }
    }

    /// Number of decoded source frames. Identical across modes.
    pub fn frame_count(&self) -> usize {
        self.fill.len()
    }

    /// `true` if no frames were cached.
    pub fn is_empty(&self) -> bool {
        self.fill.is_empty()
    }

    /// The canvas size in effect when this cache was loaded.
    ///
    /// Changing the configured size later does not retroactively resize
    /// cached frames; that takes a reload.
    pub fn target(&self) -> TargetSize {
        self.target
    }

    /// The effective playback sequence for `mode`: every cached frame
    /// repeated `repeat` consecutive times.
    ///
    /// Repeat expansion happens here, at selection time, so the cache stays
    /// one entry per decoded frame regardless of the repeat setting.
    pub fn playback(&self, mode: ResizeMode, repeat: u32) -> Vec<&NormalizedFrame> {
        let repeat = repeat.max(1) as usize;
        let bucket = self.frames(mode);
        let mut sequence = Vec::with_capacity(bucket.len() * repeat);
        for frame in bucket {
            for _ in 0..repeat {
                sequence.push(frame);
            }
        }
        sequence
    }

    /// Length of the playback sequence without materializing it.
    pub fn playback_len(&self, repeat: u32) -> usize {
        self.frame_count() * repeat.max(1) as usize
    }
}
