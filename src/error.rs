//! Error types for the `gifstitch` crate.
//!
//! This module defines [`StitchError`], the unified error type returned by all
//! fallible operations in the crate. Variants carry enough context to present
//! a meaningful message to the user, including file paths and upstream error
//! messages.

use std::{io::Error as IoError, path::PathBuf};

use thiserror::Error;

/// The unified error type for all `gifstitch` operations.
///
/// Every public method that can fail returns `Result<T, StitchError>`.
/// Variants carry enough context to diagnose the problem without needing
/// additional logging at the call site.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StitchError {
    /// The source folder contains no GIF files.
    ///
    /// Not fatal — the caller decides how to report it. No cache is produced.
    #[error("No GIF files found in {path}")]
    NoSourceFiles {
        /// The folder that was scanned.
        path: PathBuf,
    },

    /// A source file could not be opened or decoded as a GIF.
    ///
    /// The whole load is aborted: a partially populated cache would break
    /// the per-mode length invariant.
    #[error("Failed to decode {path}: {reason}")]
    Decode {
        /// Path of the offending file.
        path: PathBuf,
        /// Underlying reason the decode failed.
        reason: String,
    },

    /// Export was requested with no frames available.
    #[error("No frames available to export; load a folder first")]
    EmptySequence,

    /// The target canvas has a zero width or height.
    #[error("Invalid target dimensions {width}x{height}: both must be positive")]
    InvalidDimensions {
        /// Requested canvas width.
        width: u32,
        /// Requested canvas height.
        height: u32,
    },

    /// Writing the output file failed.
    ///
    /// Surfaced verbatim, never retried — re-invoking the export is the
    /// expected recovery path.
    #[error("Failed to write {path}: {reason}")]
    Write {
        /// The output path that could not be written.
        path: PathBuf,
        /// Underlying reason the write failed.
        reason: String,
    },

    /// GIF encoding failed independent of any output file.
    #[error("GIF encoding error: {0}")]
    Encode(String),

    /// An I/O error occurred while scanning the source folder.
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// The operation was cancelled via a
    /// [`CancellationToken`](crate::CancellationToken).
    #[error("Operation cancelled")]
    Cancelled,
}
