//! Timer-driven preview cursor.
//!
//! [`PreviewDriver`] is deliberately passive: it owns nothing but the
//! playback position. The presentation layer calls
//! [`tick`](PreviewDriver::tick) from its own timer — e.g. every
//! [`FRAME_INTERVAL`](PreviewDriver::FRAME_INTERVAL) — and draws whatever
//! frame comes back, yielding control between ticks instead of busy-looping.
//! Because every tick re-reads the requested mode bucket, a mode or repeat
//! change takes effect on the very next tick.

use std::time::Duration;

use crate::cache::{ModeCache, NormalizedFrame};
use crate::transform::ResizeMode;

/// Cycles through the effective playback sequence of a [`ModeCache`].
#[derive(Debug, Default)]
pub struct PreviewDriver {
    position: usize,
}

impl PreviewDriver {
    /// Suggested tick cadence, matching the default exported per-frame
    /// duration.
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

    /// Create a driver positioned at the first frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewind to the first frame.
    ///
    /// Call this when a new cache replaces the old one.
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Return the frame to display now and advance the cursor.
    ///
    /// The mode bucket is re-read on every call, so the caller may change
    /// `mode` or `repeat` freely between ticks. If the sequence length
    /// shrank under the cursor it wraps instead of indexing out of bounds.
    /// An empty cache yields `None` and rewinds.
    pub fn tick<'cache>(
        &mut self,
        cache: &'cache ModeCache,
        mode: ResizeMode,
        repeat: u32,
    ) -> Option<&'cache NormalizedFrame> {
        let length = cache.playback_len(repeat);
        if length == 0 {
            self.position = 0;
            return None;
        }

        let position = self.position % length;
        // Playback slot → cached frame: each decoded frame occupies
        // `repeat` consecutive slots.
        let frame = &cache.frames(mode)[position / repeat.max(1) as usize];
        self.position = (position + 1) % length;
        Some(frame)
    }
}
