//! # gifstitch
//!
//! Combine folders of animated GIFs into a single normalized GIF.
//!
//! `gifstitch` scans a folder for GIF files, decodes every frame of every
//! file in filename order, normalizes each frame to a common canvas under
//! all three resize policies at once (fit, fill, stretch), and writes the
//! selected sequence back out as one looping multi-frame GIF. It is the
//! engine behind an interactive combiner shell: the shell supplies the
//! folder, mode, canvas size, and repeat count, and consumes the frames
//! this crate produces.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gifstitch::{CombineOptions, ResizeMode, export_gif, load_sequence};
//!
//! let options = CombineOptions::new().with_mode(ResizeMode::Fit);
//! let cache = load_sequence("gifs", &options)?;
//!
//! export_gif(
//!     cache.playback(options.mode, options.repeat),
//!     "combined.gif",
//!     &options.export_options(),
//! )?;
//! # Ok::<(), gifstitch::StitchError>(())
//! ```
//!
//! ### Background Loading
//!
//! Decoding and transforming every frame three ways is long-running, so an
//! interactive shell runs it off its event loop and polls for the result:
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use gifstitch::{CombineOptions, PreviewDriver, ResizeMode, SequenceLoader};
//!
//! let mut loader = SequenceLoader::new();
//! loader.begin("gifs", CombineOptions::new());
//!
//! let mut preview = PreviewDriver::new();
//! let cache = loop {
//!     // In a real shell this check lives in an event-loop timer.
//!     if let Some(result) = loader.poll() {
//!         break result.expect("load failed");
//!     }
//!     std::thread::sleep(Duration::from_millis(100));
//! };
//!
//! // Every tick re-reads the requested mode, so switching is free.
//! let frame = preview.tick(&cache, ResizeMode::Fill, 1);
//! ```
//!
//! ## Features
//!
//! - **Triple-mode caching** — every decoded frame is normalized once per
//!   resize mode during the load, so mode switches never recompute
//! - **Bounded palettes** — cached frames hold at most 128 colors; export
//!   re-quantizes per frame after alpha flattening
//! - **Deterministic output** — sorted file order and deterministic
//!   quantization make repeated runs byte-identical
//! - **Background loads** — worker-thread loading with a poll-based
//!   handoff and stale-load suppression
//! - **Folder probing** — per-file frame counts and dimensions without a
//!   full load
//! - **Progress & cancellation** — cooperative callbacks and
//!   `CancellationToken` for long-running loads
//!
//! ### Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `async` | [`LoadFuture`] for async loading via Tokio |

pub mod cache;
pub mod configuration;
pub mod error;
pub mod export;
pub mod loader;
mod palette;
pub mod preview;
pub mod probe;
pub mod progress;
#[cfg(feature = "async")]
pub mod stream;
pub mod transform;

pub use cache::{ModeCache, NormalizedFrame};
pub use configuration::{CombineOptions, TargetSize};
pub use error::StitchError;
pub use export::{ExportOptions, FrameDisposal, encode_gif_to_memory, export_gif};
pub use loader::{SequenceLoader, load_sequence};
pub use preview::PreviewDriver;
pub use probe::{FolderSummary, SourceSummary, probe_folder, probe_folder_with_options};
pub use progress::{CancellationToken, OperationType, ProgressCallback, ProgressInfo};
#[cfg(feature = "async")]
pub use stream::{LoadFuture, load_sequence_async};
pub use transform::{ResizeMode, normalize_frame};
