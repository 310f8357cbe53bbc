//! Folder probe tests.

mod common;

use std::sync::{Arc, Mutex};

use common::{BLUE, GREEN, RED, write_solid_gif};
use gifstitch::{
    CancellationToken, CombineOptions, OperationType, ProgressCallback, ProgressInfo, StitchError,
    probe_folder, probe_folder_with_options,
};

#[test]
fn probe_reports_files_and_frames_in_order() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_gif(&dir.path().join("b.gif"), 8, 8, &[BLUE, RED, GREEN]);
    write_solid_gif(&dir.path().join("a.gif"), 12, 6, &[RED, GREEN]);

    let summary = probe_folder(dir.path()).unwrap();
    assert_eq!(summary.folder, dir.path());
    assert_eq!(summary.files.len(), 2);
    assert_eq!(summary.total_frames(), 5);

    let first = &summary.files[0];
    assert!(first.path.ends_with("a.gif"));
    assert_eq!(first.frame_count, 2);
    assert_eq!((first.width, first.height), (12, 6));

    let second = &summary.files[1];
    assert!(second.path.ends_with("b.gif"));
    assert_eq!(second.frame_count, 3);
    assert_eq!((second.width, second.height), (8, 8));
}

#[test]
fn probe_empty_folder_yields_no_source_files() {
    let dir = tempfile::tempdir().unwrap();
    let result = probe_folder(dir.path());
    assert!(matches!(result, Err(StitchError::NoSourceFiles { .. })));
}

#[test]
fn probe_surfaces_decode_failures() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bad.gif"), b"garbage").unwrap();

    let result = probe_folder(dir.path());
    assert!(matches!(result, Err(StitchError::Decode { .. })));
}

#[derive(Default)]
struct Recording {
    infos: Mutex<Vec<ProgressInfo>>,
}

impl ProgressCallback for Recording {
    fn on_progress(&self, info: &ProgressInfo) {
        self.infos.lock().unwrap().push(info.clone());
    }
}

#[test]
fn probe_reports_per_file_progress() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_gif(&dir.path().join("a.gif"), 8, 8, &[RED]);
    write_solid_gif(&dir.path().join("b.gif"), 8, 8, &[BLUE]);

    let recording = Arc::new(Recording::default());
    let options = CombineOptions::new().with_progress(recording.clone());
    probe_folder_with_options(dir.path(), &options).unwrap();

    let infos = recording.infos.lock().unwrap();
    assert!(!infos.is_empty());
    assert!(
        infos
            .iter()
            .all(|info| info.operation == OperationType::FolderProbe),
    );
    // File counts are known up front, so probes can report percentages.
    assert_eq!(infos.last().unwrap().total, Some(2));
    assert_eq!(infos.last().unwrap().current, 2);
    assert!(infos.last().unwrap().percentage.unwrap() > 99.0);
}

#[test]
fn cancelled_token_stops_the_probe() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_gif(&dir.path().join("a.gif"), 8, 8, &[RED]);

    let token = CancellationToken::new();
    token.cancel();
    let options = CombineOptions::new().with_cancellation(token);

    let result = probe_folder_with_options(dir.path(), &options);
    assert!(matches!(result, Err(StitchError::Cancelled)));
}
