//! Folder scanning, GIF decoding, and the triple-mode cache build.
//!
//! [`load_sequence`] is the blocking pipeline: scan → decode → transform
//! once per mode → cache. [`SequenceLoader`] runs that pipeline on a worker
//! thread and hands the finished [`ModeCache`] back through a channel, so
//! an interactive shell stays responsive while frames are crunched.
//!
//! # Example
//!
//! ```no_run
//! use gifstitch::{CombineOptions, StitchError, load_sequence};
//!
//! let options = CombineOptions::new();
//! let cache = load_sequence("gifs", &options)?;
//! println!("cached {} frames per mode", cache.frame_count());
//! # Ok::<(), StitchError>(())
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use image::AnimationDecoder;
use image::RgbaImage;
use image::codecs::gif::GifDecoder;

use crate::cache::ModeCache;
use crate::configuration::CombineOptions;
use crate::error::StitchError;
use crate::progress::{OperationType, ProgressTracker};
use crate::transform::{ResizeMode, normalize_frame};

/// Case-insensitive extension of source files.
const SOURCE_EXTENSION: &str = "gif";

/// Enumerate the GIF files in `folder`, sorted by filename.
///
/// Non-matching entries are ignored, not errored. Lexicographic order makes
/// repeated loads of an unchanged folder produce identical output.
pub(crate) fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>, StitchError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let path = entry?.path();
        let matches = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case(SOURCE_EXTENSION));
        if matches && path.is_file() {
            files.push(path);
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(StitchError::NoSourceFiles {
            path: folder.to_path_buf(),
        });
    }
    Ok(files)
}

/// Decode every frame of one GIF file into RGBA buffers, in sequence order.
///
/// Animated GIFs do not announce a frame count, so this walks the frame
/// stream until it is exhausted.
fn decode_frames(path: &Path) -> Result<Vec<RgbaImage>, StitchError> {
    let decode_error = |reason: String| StitchError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|error| decode_error(error.to_string()))?;
    let decoder =
        GifDecoder::new(BufReader::new(file)).map_err(|error| decode_error(error.to_string()))?;

    let mut frames = Vec::new();
    for frame in decoder.into_frames() {
        let frame = frame.map_err(|error| decode_error(error.to_string()))?;
        frames.push(frame.into_buffer());
    }
    Ok(frames)
}

/// Run the full load pipeline on the calling thread.
///
/// Scans `folder`, decodes every frame of every GIF in filename order, and
/// normalizes each decoded frame once per [`ResizeMode`] — tripling the
/// transform work up front so that later mode switches are free bucket
/// lookups.
///
/// # Errors
///
/// Returns [`StitchError::NoSourceFiles`] if the folder holds no GIFs,
/// [`StitchError::Decode`] if any file fails to decode (the whole load is
/// abandoned — a half-filled cache would break bucket parity),
/// [`StitchError::InvalidDimensions`] for a zero-sized target canvas, and
/// [`StitchError::Cancelled`] if the configured token fires mid-load.
pub fn load_sequence(
    folder: impl AsRef<Path>,
    options: &CombineOptions,
) -> Result<ModeCache, StitchError> {
    let folder = folder.as_ref();
    let target = options.target.validate()?;
    let files = scan_folder(folder)?;
    log::debug!(
        "Loading {} GIF files from {:?} (target={}x{})",
        files.len(),
        folder,
        target.width,
        target.height,
    );

    let mut cache = ModeCache::new(target);
    let mut tracker = ProgressTracker::new(
        options.progress.clone(),
        OperationType::SequenceLoad,
        None,
        options.batch_size,
    );

    for path in &files {
        log::debug!("Decoding {:?}", path);
        for raw in decode_frames(path)? {
            if options.is_cancelled() {
                return Err(StitchError::Cancelled);
            }
            for mode in ResizeMode::ALL {
                cache.push(mode, normalize_frame(&raw, mode, target)?);
            }
            tracker.advance(Some(path));
        }
    }

    tracker.finish();
    log::debug!("Cached {} frames per mode", cache.frame_count());
    Ok(cache)
}

/// Background driver for [`load_sequence`].
///
/// [`begin`](SequenceLoader::begin) spawns a worker thread and replaces the
/// completion channel of any load still in flight, so a superseded load's
/// result is never observed: the cache always belongs to the most recently
/// requested load. The primary context polls
/// [`poll`](SequenceLoader::poll) at a bounded interval (an event-loop
/// timer is fine) and receives the finished cache — or the load's error —
/// exactly once.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
///
/// use gifstitch::{CombineOptions, SequenceLoader};
///
/// let mut loader = SequenceLoader::new();
/// loader.begin("gifs", CombineOptions::new());
///
/// let cache = loop {
///     if let Some(result) = loader.poll() {
///         break result.expect("load failed");
///     }
///     std::thread::sleep(Duration::from_millis(100));
/// };
/// assert!(!cache.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct SequenceLoader {
    receiver: Option<Receiver<Result<ModeCache, StitchError>>>,
    generation: u64,
}

impl SequenceLoader {
    /// Create an idle loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading `folder` on a worker thread.
    ///
    /// Any load already in flight is superseded immediately: its channel is
    /// dropped here, so its eventual completion is discarded unobserved.
    pub fn begin(&mut self, folder: impl Into<PathBuf>, options: CombineOptions) {
        let folder = folder.into();
        self.generation += 1;
        let generation = self.generation;
        let (sender, receiver) = mpsc::channel();
        self.receiver = Some(receiver);

        thread::spawn(move || {
            let result = load_sequence(&folder, &options);
            // The send fails only when a newer load has replaced the
            // receiver; the stale result must not be observed anyway.
            if sender.send(result).is_err() {
                log::debug!("Load generation {generation} superseded; result discarded");
            }
        });
    }

    /// Non-blocking check for a completed load.
    ///
    /// Returns `None` while the most recent load is still running, or when
    /// no load is pending. Each completed load is yielded exactly once.
    pub fn poll(&mut self) -> Option<Result<ModeCache, StitchError>> {
        let outcome = match self.receiver.as_ref()?.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => return None,
            // Worker gone without sending: treat like a cancelled load.
            Err(TryRecvError::Disconnected) => Some(Err(StitchError::Cancelled)),
        };
        self.receiver = None;
        outcome
    }

    /// Block until the most recent load finishes.
    ///
    /// Intended for non-interactive callers and tests; interactive shells
    /// should [`poll`](SequenceLoader::poll) from their event loop instead.
    pub fn wait(&mut self) -> Option<Result<ModeCache, StitchError>> {
        let receiver = self.receiver.take()?;
        match receiver.recv() {
            Ok(result) => Some(result),
            Err(_) => Some(Err(StitchError::Cancelled)),
        }
    }

    /// `true` while a load is in flight and its cache is not yet available.
    ///
    /// Consumers must not keep using a previously obtained cache once a
    /// newer load has been requested; the new result replaces it wholesale.
    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }
}
