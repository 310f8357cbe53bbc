//! Error handling integration tests.
//!
//! These tests verify that meaningful errors are returned for the various
//! failure conditions a shell has to present to the user.

mod common;

use common::{RED, write_solid_gif};
use gifstitch::{
    CombineOptions, ExportOptions, NormalizedFrame, StitchError, TargetSize, export_gif,
    load_sequence,
};

#[test]
fn no_source_files_mentions_the_folder() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_sequence(dir.path(), &CombineOptions::new()).unwrap_err();

    let message = error.to_string();
    assert!(
        message.contains("No GIF files found"),
        "unexpected message: {message}",
    );
    assert!(
        message.contains(&dir.path().display().to_string()),
        "message should name the folder: {message}",
    );
}

#[test]
fn decode_error_mentions_the_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.gif"), b"this is not a gif").unwrap();

    let error = load_sequence(dir.path(), &CombineOptions::new()).unwrap_err();
    let message = error.to_string();
    assert!(
        message.contains("Failed to decode"),
        "unexpected message: {message}",
    );
    assert!(
        message.contains("broken.gif"),
        "message should name the file: {message}",
    );
}

#[test]
fn empty_sequence_points_the_user_at_loading() {
    let dir = tempfile::tempdir().unwrap();
    let error = export_gif(
        std::iter::empty::<&NormalizedFrame>(),
        dir.path().join("out.gif"),
        &ExportOptions::new(),
    )
    .unwrap_err();

    let message = error.to_string();
    assert!(
        message.contains("load a folder first"),
        "unexpected message: {message}",
    );
}

#[test]
fn invalid_dimensions_name_the_offending_size() {
    let error = TargetSize::new(0, 640).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("0x640"), "unexpected message: {message}");
}

#[test]
fn write_error_mentions_the_path() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_gif(&dir.path().join("a.gif"), 8, 8, &[RED]);
    let options = CombineOptions::new().with_target_size(TargetSize::new(16, 16).unwrap());
    let cache = load_sequence(dir.path(), &options).unwrap();

    let missing = dir.path().join("no_such_dir").join("out.gif");
    let error = export_gif(
        cache.playback(options.mode, options.repeat),
        &missing,
        &options.export_options(),
    )
    .unwrap_err();

    let message = error.to_string();
    assert!(
        message.contains("Failed to write"),
        "unexpected message: {message}",
    );
    assert!(
        message.contains("out.gif"),
        "message should name the path: {message}",
    );
}

#[test]
fn cancelled_is_reported_plainly() {
    assert_eq!(StitchError::Cancelled.to_string(), "Operation cancelled");
}
