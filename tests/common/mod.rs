//! Shared fixture helpers.
//!
//! Tests synthesize exact-palette GIFs into temporary directories instead of
//! shipping binary fixtures. The `gif` crate writes indexed frames directly,
//! so fixture colors survive decoding bit-for-bit.

#![allow(dead_code)]

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use gif::{Encoder, Frame, Repeat};
use image::{AnimationDecoder, RgbaImage, codecs::gif::GifDecoder};

/// Solid fixture colors as RGB triples.
pub const RED: [u8; 3] = [255, 0, 0];
pub const GREEN: [u8; 3] = [0, 255, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Write an animated GIF whose frames are each a solid color.
pub fn write_solid_gif(path: &Path, width: u16, height: u16, colors: &[[u8; 3]]) {
    let palette: Vec<u8> = colors.iter().flatten().copied().collect();
    let file = File::create(path).expect("Failed to create fixture");
    let mut encoder =
        Encoder::new(file, width, height, &palette).expect("Failed to create encoder");
    encoder
        .set_repeat(Repeat::Infinite)
        .expect("Failed to set repeat");

    for index in 0..colors.len() {
        let frame = Frame {
            width,
            height,
            buffer: vec![index as u8; usize::from(width) * usize::from(height)].into(),
            ..Frame::default()
        };
        encoder.write_frame(&frame).expect("Failed to write frame");
    }
}

/// Decode every frame of a GIF back into RGBA buffers.
pub fn decode_rgba(path: &Path) -> Vec<RgbaImage> {
    let file = File::open(path).expect("Failed to open gif");
    let decoder = GifDecoder::new(BufReader::new(file)).expect("Failed to decode gif");
    decoder
        .into_frames()
        .map(|frame| frame.expect("Failed to decode frame").into_buffer())
        .collect()
}

/// Assert two RGBA values match within a small resampling tolerance.
pub fn assert_close(actual: [u8; 4], expected: [u8; 4], tolerance: u8) {
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert!(
            a.abs_diff(*e) <= tolerance,
            "channel out of tolerance: {actual:?} vs {expected:?}",
        );
    }
}

/// Count distinct RGBA values in a frame.
pub fn distinct_colors(image: &RgbaImage) -> usize {
    image
        .pixels()
        .map(|pixel| pixel.0)
        .collect::<HashSet<_>>()
        .len()
}
