//! Lightweight folder inspection.
//!
//! [`probe_folder`] walks the same sorted file set as a load, but only
//! decodes — no transforms, no caching — and reports per-file frame counts
//! and dimensions. Useful for a shell's "N files, M frames" display before
//! committing to a full load.
//!
//! # Example
//!
//! ```no_run
//! use gifstitch::{StitchError, probe_folder};
//!
//! let summary = probe_folder("gifs")?;
//! for file in &summary.files {
//!     println!(
//!         "{:?}: {} frames at {}x{}",
//!         file.path, file.frame_count, file.width, file.height,
//!     );
//! }
//! println!("{} frames total", summary.total_frames());
//! # Ok::<(), StitchError>(())
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use image::AnimationDecoder;
use image::codecs::gif::GifDecoder;

use crate::configuration::CombineOptions;
use crate::error::StitchError;
use crate::loader::scan_folder;
use crate::progress::{OperationType, ProgressTracker};

/// Decode summary for one source file.
#[derive(Debug, Clone)]
pub struct SourceSummary {
    /// Path of the file.
    pub path: PathBuf,
    /// Number of frames the file contributes to a load.
    pub frame_count: u64,
    /// Width of the file's first frame in pixels.
    pub width: u32,
    /// Height of the file's first frame in pixels.
    pub height: u32,
}

/// Summary of every GIF in a source folder, in load order.
#[derive(Debug, Clone)]
pub struct FolderSummary {
    /// The folder that was probed.
    pub folder: PathBuf,
    /// Per-file summaries, sorted by filename exactly like the loader
    /// processes them.
    pub files: Vec<SourceSummary>,
}

impl FolderSummary {
    /// Total decoded frame count across all files — the per-mode cache
    /// length a load of this folder would produce.
    pub fn total_frames(&self) -> u64 {
        self.files.iter().map(|file| file.frame_count).sum()
    }
}

/// Probe `folder` without building a cache.
///
/// # Errors
///
/// The same scanning and decoding failures as a load:
/// [`StitchError::NoSourceFiles`] and [`StitchError::Decode`].
pub fn probe_folder(folder: impl AsRef<Path>) -> Result<FolderSummary, StitchError> {
    probe_folder_with_options(folder, &CombineOptions::default())
}

/// Probe `folder` with progress and cancellation support.
///
/// Like [`probe_folder`] but reports one progress item per file through the
/// options' callback and honours its cancellation token.
pub fn probe_folder_with_options(
    folder: impl AsRef<Path>,
    options: &CombineOptions,
) -> Result<FolderSummary, StitchError> {
    let folder = folder.as_ref();
    let files = scan_folder(folder)?;
    log::debug!("Probing {} GIF files in {:?}", files.len(), folder);

    let mut tracker = ProgressTracker::new(
        options.progress.clone(),
        OperationType::FolderProbe,
        Some(files.len() as u64),
        options.batch_size,
    );

    let mut summaries = Vec::with_capacity(files.len());
    for path in files {
        if options.is_cancelled() {
            return Err(StitchError::Cancelled);
        }

        let decode_error = |reason: String| StitchError::Decode {
            path: path.clone(),
            reason,
        };
        let file = File::open(&path).map_err(|error| decode_error(error.to_string()))?;
        let decoder = GifDecoder::new(BufReader::new(file))
            .map_err(|error| decode_error(error.to_string()))?;

        let mut frame_count = 0u64;
        let mut dimensions = (0u32, 0u32);
        for frame in decoder.into_frames() {
            let frame = frame.map_err(|error| decode_error(error.to_string()))?;
            if frame_count == 0 {
                dimensions = frame.buffer().dimensions();
            }
            frame_count += 1;
        }

        tracker.advance(Some(&path));
        summaries.push(SourceSummary {
            path,
            frame_count,
            width: dimensions.0,
            height: dimensions.1,
        });
    }

    tracker.finish();
    Ok(FolderSummary {
        folder: folder.to_path_buf(),
        files: summaries,
    })
}
