//! Adaptive palette quantization and alpha flattening.
//!
//! Both the cache path (bounded RGBA palette, transparency preserved) and
//! the export path (opaque frames, per-frame color tables) go through
//! NeuQuant — the same quantizer the `gif` crate uses for its own
//! RGBA-to-palette conversion.

use std::collections::{HashMap, HashSet};

use color_quant::NeuQuant;
use image::{Rgba, RgbaImage};

/// NeuQuant sampling factor: 1 is slowest/best, 30 fastest. 10 matches the
/// `gif` crate's default encoding speed.
const SAMPLE_FACTOR: i32 = 10;

/// Export palette size when trimming is off.
pub(crate) const FULL_PALETTE_COLORS: usize = 256;

/// Reduce `image` to at most `colors` distinct RGBA values in place.
///
/// Quantization happens in RGBA space, so fully transparent padding
/// survives as its own palette entry. Frames already within the bound are
/// left untouched, which keeps flat synthetic art pixel-exact.
pub(crate) fn quantize_in_place(image: &mut RgbaImage, colors: usize) {
    if distinct_within(image, colors) {
        return;
    }

    let quantizer = NeuQuant::new(SAMPLE_FACTOR, colors, image.as_raw());
    let map = quantizer.color_map_rgba();
    for pixel in image.pixels_mut() {
        let base = quantizer.index_of(&pixel.0) * 4;
        pixel.0 = [map[base], map[base + 1], map[base + 2], map[base + 3]];
    }
}

/// `true` if the image has no more than `limit` distinct RGBA values.
fn distinct_within(image: &RgbaImage, limit: usize) -> bool {
    let mut seen = HashSet::new();
    for pixel in image.pixels() {
        seen.insert(pixel.0);
        if seen.len() > limit {
            return false;
        }
    }
    true
}

/// Composite `image` over an opaque white background.
///
/// Standard alpha compositing per channel: `out = bg·(1−α) + fg·α`.
pub(crate) fn flatten_onto_white(image: &RgbaImage) -> RgbaImage {
    let mut flat = RgbaImage::new(image.width(), image.height());
    for (source, target) in image.pixels().zip(flat.pixels_mut()) {
        let Rgba([red, green, blue, alpha]) = *source;
        let alpha = u32::from(alpha);
        let blend =
            |channel: u8| ((255 * (255 - alpha) + u32::from(channel) * alpha + 127) / 255) as u8;
        *target = Rgba([blend(red), blend(green), blend(blue), 255]);
    }
    flat
}

/// An opaque frame reduced to a GIF color table plus per-pixel indices.
pub(crate) struct IndexedFrame {
    /// RGB palette triples, at most 256 entries.
    pub(crate) palette: Vec<u8>,
    /// One palette index per pixel, row-major.
    pub(crate) indices: Vec<u8>,
}

/// Quantize an opaque RGBA frame to an indexed palette.
///
/// With `trim` set, the palette holds exactly the colors the frame uses
/// (sorted, for output determinism) whenever they fit in a color table;
/// otherwise the frame gets a full-size adaptive NeuQuant palette. Smaller
/// tables shrink both the palette block and the LZW minimum code size.
pub(crate) fn index_frame(image: &RgbaImage, trim: bool) -> IndexedFrame {
    if trim {
        if let Some(indexed) = index_exact(image) {
            return indexed;
        }
    }

    let quantizer = NeuQuant::new(SAMPLE_FACTOR, FULL_PALETTE_COLORS, image.as_raw());
    let palette = quantizer.color_map_rgb();
    let indices = image
        .pixels()
        .map(|pixel| quantizer.index_of(&pixel.0) as u8)
        .collect();
    IndexedFrame { palette, indices }
}

/// Build an exact palette when the frame's distinct colors fit a color
/// table. Returns `None` for frames with more than 256 distinct colors.
fn index_exact(image: &RgbaImage) -> Option<IndexedFrame> {
    let mut distinct: Vec<[u8; 3]> = Vec::new();
    let mut seen = HashSet::new();
    for pixel in image.pixels() {
        let rgb = [pixel.0[0], pixel.0[1], pixel.0[2]];
        if seen.insert(rgb) {
            if distinct.len() == FULL_PALETTE_COLORS {
                return None;
            }
            distinct.push(rgb);
        }
    }

    distinct.sort_unstable();
    let lookup: HashMap<[u8; 3], u8> = distinct
        .iter()
        .enumerate()
        .map(|(index, color)| (*color, index as u8))
        .collect();

    let palette = distinct.iter().flatten().copied().collect();
    let indices = image
        .pixels()
        .map(|pixel| lookup[&[pixel.0[0], pixel.0[1], pixel.0[2]]])
        .collect();
    Some(IndexedFrame { palette, indices })
}
