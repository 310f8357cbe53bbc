//! Session configuration.
//!
//! [`CombineOptions`] carries the user-tunable settings for one
//! load/preview/export session — target canvas, resize mode, per-frame
//! repeat, compression toggle — plus optional progress callbacks and a
//! cancellation token, without polluting every function signature.
//!
//! # Example
//!
//! ```
//! use gifstitch::{CombineOptions, ResizeMode, StitchError, TargetSize};
//!
//! let options = CombineOptions::new()
//!     .with_mode(ResizeMode::Fit)
//!     .with_target_size(TargetSize::new(320, 240)?)
//!     .with_repeat(2);
//! assert_eq!(options.repeat, 2);
//! # Ok::<(), StitchError>(())
//! ```

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::sync::Arc;

use crate::error::StitchError;
use crate::export::ExportOptions;
use crate::progress::{CancellationToken, NoOpProgress, ProgressCallback};
use crate::transform::ResizeMode;

/// The canvas every source frame is normalized to.
///
/// Both dimensions must be positive; [`TargetSize::new`] enforces this at
/// the configuration boundary so the transform never sees a degenerate
/// canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

impl TargetSize {
    /// Create a validated target size.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::InvalidDimensions`] if either dimension is
    /// zero.
    pub fn new(width: u32, height: u32) -> Result<Self, StitchError> {
        if width == 0 || height == 0 {
            return Err(StitchError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    /// Re-check the dimensions; fields are public so a value may have been
    /// built without going through [`TargetSize::new`].
    pub(crate) fn validate(self) -> Result<Self, StitchError> {
        Self::new(self.width, self.height)
    }
}

impl Default for TargetSize {
    /// The default 640×640 canvas.
    fn default() -> Self {
        Self {
            width: 640,
            height: 640,
        }
    }
}

/// Configuration for one combine session.
///
/// All fields have sensible defaults — a default-constructed value matches
/// the behaviour an interactive shell starts with: 640×640 canvas,
/// [`ResizeMode::Fill`], each frame shown once, compression on.
#[derive(Clone)]
pub struct CombineOptions {
    /// Canvas size all frames are normalized to.
    pub target: TargetSize,
    /// Geometric policy reconciling source aspect ratios with the canvas.
    pub mode: ResizeMode,
    /// How many consecutive playback slots each decoded frame occupies.
    /// Always at least 1.
    pub repeat: u32,
    /// When `true` (the default), exported frames carry trimmed per-frame
    /// palettes for a smaller file.
    pub compression: bool,
    /// Progress callback. Defaults to a no-op.
    pub(crate) progress: Arc<dyn ProgressCallback>,
    /// Cancellation token. `None` means never cancelled.
    pub(crate) cancellation: Option<CancellationToken>,
    /// How often the progress callback fires (every N items).
    pub(crate) batch_size: u64,
}

impl Debug for CombineOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("CombineOptions")
            .field("target", &self.target)
            .field("mode", &self.mode)
            .field("repeat", &self.repeat)
            .field("compression", &self.compression)
            .field("has_cancellation", &self.cancellation.is_some())
            .field("batch_size", &self.batch_size)
            .finish()
    }
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl CombineOptions {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self {
            target: TargetSize::default(),
            mode: ResizeMode::default(),
            repeat: 1,
            compression: true,
            progress: Arc::new(NoOpProgress),
            cancellation: None,
            batch_size: 1,
        }
    }

    /// Set the target canvas size.
    #[must_use]
    pub fn with_target_size(mut self, target: TargetSize) -> Self {
        self.target = target;
        self
    }

    /// Set the resize mode used when selecting frames for preview/export.
    ///
    /// All three modes are cached on load, so this can change freely
    /// between loads without triggering any recomputation.
    #[must_use]
    pub fn with_mode(mut self, mode: ResizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set how many consecutive playback slots each decoded frame occupies.
    ///
    /// Clamped to a minimum of 1.
    #[must_use]
    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat.max(1);
        self
    }

    /// Toggle export compression (trimmed per-frame palettes).
    #[must_use]
    pub fn with_compression(mut self, compression: bool) -> Self {
        self.compression = compression;
        self
    }

    /// Attach a progress callback.
    ///
    /// The callback is invoked every
    /// [`batch_size`](CombineOptions::with_batch_size) items during a load
    /// or probe.
    #[must_use]
    pub fn with_progress(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress = callback;
        self
    }

    /// Attach a cancellation token.
    ///
    /// When the token is cancelled, a running load stops and returns
    /// [`StitchError::Cancelled`].
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Set how often the progress callback fires.
    ///
    /// A value of 1 means every item; 10 means every 10th item.
    /// Clamped to a minimum of 1.
    #[must_use]
    pub fn with_batch_size(mut self, size: u64) -> Self {
        self.batch_size = size.max(1);
        self
    }

    /// Build the matching [`ExportOptions`], wiring the compression toggle
    /// through to the encoder.
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions::new().with_compression(self.compression)
    }

    /// Returns `true` if cancellation has been requested.
    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(|token| token.is_cancelled())
    }
}
