//! Async loading for Tokio callers.
//!
//! This module provides [`LoadFuture`] for running the load pipeline
//! without blocking the async runtime. The decode and triple-mode
//! transform work happens via `tokio::task::spawn_blocking` on a dedicated
//! blocking thread — CPU-heavy image work must not tie up the Tokio
//! runtime's cooperative task budget.
//!
//! # Example
//!
//! ```no_run
//! use gifstitch::{CombineOptions, StitchError, load_sequence_async};
//!
//! # async fn example() -> Result<(), StitchError> {
//! let cache = load_sequence_async("gifs", CombineOptions::new()).await?;
//! println!("cached {} frames per mode", cache.frame_count());
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::task::JoinHandle;

use crate::cache::ModeCache;
use crate::configuration::CombineOptions;
use crate::error::StitchError;
use crate::loader::load_sequence;

/// A future that resolves to the [`ModeCache`] of a background load.
///
/// Created via [`load_sequence_async`]. The actual work runs on a blocking
/// thread; polling this future drives it to completion. Dropping the
/// future detaches the task — pair the options with a
/// [`CancellationToken`](crate::CancellationToken) to stop the work early.
pub struct LoadFuture {
    handle: JoinHandle<Result<ModeCache, StitchError>>,
}

impl Future for LoadFuture {
    type Output = Result<ModeCache, StitchError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.handle)
            .poll(cx)
            .map(|result| result.unwrap_or_else(|_| Err(StitchError::Cancelled)))
    }
}

/// Start loading `folder` on a Tokio blocking thread.
///
/// Must be called from within a Tokio runtime.
pub fn load_sequence_async(folder: impl Into<PathBuf>, options: CombineOptions) -> LoadFuture {
    let folder = folder.into();
    let handle = tokio::task::spawn_blocking(move || load_sequence(&folder, &options));
    LoadFuture { handle }
}
