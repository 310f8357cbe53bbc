//! ModeCache playback and repeat-expansion tests.

mod common;

use common::{BLUE, RED, assert_close, write_solid_gif};
use gifstitch::{CombineOptions, ResizeMode, TargetSize, load_sequence};

fn two_frame_cache() -> gifstitch::ModeCache {
    let dir = tempfile::tempdir().unwrap();
    write_solid_gif(&dir.path().join("a.gif"), 16, 16, &[RED, BLUE]);
    let options = CombineOptions::new().with_target_size(TargetSize::new(16, 16).unwrap());
    load_sequence(dir.path(), &options).unwrap()
}

#[test]
fn playback_expands_each_frame_repeat_times() {
    let cache = two_frame_cache();
    let sequence = cache.playback(ResizeMode::Fill, 3);
    assert_eq!(sequence.len(), 6);

    // Pattern: r r r b b b — each decoded frame holds its slot run.
    for frame in &sequence[..3] {
        assert_close(frame.image().get_pixel(8, 8).0, [255, 0, 0, 255], 1);
    }
    for frame in &sequence[3..] {
        assert_close(frame.image().get_pixel(8, 8).0, [0, 0, 255, 255], 1);
    }
}

#[test]
fn playback_len_matches_materialized_sequence() {
    let cache = two_frame_cache();
    for repeat in [1, 2, 5] {
        assert_eq!(
            cache.playback_len(repeat),
            cache.playback(ResizeMode::Fit, repeat).len(),
        );
    }
}

#[test]
fn zero_repeat_is_clamped_to_one() {
    let cache = two_frame_cache();
    assert_eq!(cache.playback(ResizeMode::Fill, 0).len(), 2);
    assert_eq!(cache.playback_len(0), 2);
}

#[test]
fn repeat_does_not_grow_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    write_solid_gif(&dir.path().join("a.gif"), 16, 16, &[RED, BLUE]);

    // Repeat is a selection-time setting; the cache holds one entry per
    // decoded frame no matter what the options say.
    let options = CombineOptions::new()
        .with_target_size(TargetSize::new(16, 16).unwrap())
        .with_repeat(5);
    let cache = load_sequence(dir.path(), &options).unwrap();

    assert_eq!(cache.frame_count(), 2);
    assert_eq!(cache.playback(options.mode, options.repeat).len(), 10);
}

#[test]
fn cache_records_load_time_target() {
    let cache = two_frame_cache();
    assert_eq!(cache.target(), TargetSize::new(16, 16).unwrap());
}

#[test]
fn buckets_differ_by_mode_for_non_square_sources() {
    let dir = tempfile::tempdir().unwrap();
    // Portrait source: fit pads the sides, fill covers the canvas.
    write_solid_gif(&dir.path().join("a.gif"), 8, 16, &[RED]);
    let options = CombineOptions::new().with_target_size(TargetSize::new(32, 32).unwrap());
    let cache = load_sequence(dir.path(), &options).unwrap();

    let fit = &cache.frames(ResizeMode::Fit)[0];
    let fill = &cache.frames(ResizeMode::Fill)[0];

    assert_eq!(fit.image().get_pixel(0, 16).0[3], 0, "fit pads the sides");
    assert_eq!(fill.image().get_pixel(0, 16).0[3], 255, "fill covers fully");
}
