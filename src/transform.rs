//! Frame normalization: geometry plus palette reduction.
//!
//! [`normalize_frame`] converts one decoded source frame into a
//! [`NormalizedFrame`] matching the target canvas under one of three
//! policies, then bounds its palette so downstream GIF encoding never sees
//! an unbounded color set. The function is pure — identical inputs always
//! produce identical output.

use image::{Rgba, RgbaImage, imageops, imageops::FilterType};

use crate::cache::NormalizedFrame;
use crate::configuration::TargetSize;
use crate::error::StitchError;
use crate::palette;

/// Geometric policy reconciling a source frame's aspect ratio with the
/// target canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResizeMode {
    /// Pad to a square with transparent borders, then scale.
    /// Aspect ratio preserved, nothing cropped.
    Fit,
    /// Center-crop the longer axis to a square, then scale.
    /// Full bleed; content outside the square is discarded.
    #[default]
    Fill,
    /// Scale both axes independently to the target.
    /// Aspect ratio not preserved.
    Stretch,
}

impl ResizeMode {
    /// All modes, in the order the loader populates cache buckets.
    pub const ALL: [ResizeMode; 3] = [ResizeMode::Fit, ResizeMode::Fill, ResizeMode::Stretch];
}

/// Maximum distinct colors in a normalized (cached) frame.
pub(crate) const CACHE_PALETTE_COLORS: usize = 128;

/// Normalize one raw RGBA frame to the target canvas under the given mode.
///
/// The result has exactly `target.width × target.height` pixels and at most
/// 128 distinct colors. Only [`ResizeMode::Fit`] can introduce transparent
/// pixels (its padding); the other modes keep the source coverage.
///
/// # Errors
///
/// Returns [`StitchError::InvalidDimensions`] if the target has a zero
/// dimension.
///
/// # Example
///
/// ```
/// use image::RgbaImage;
///
/// use gifstitch::{ResizeMode, StitchError, TargetSize, normalize_frame};
///
/// let source = RgbaImage::from_pixel(100, 200, image::Rgba([10, 200, 40, 255]));
/// let frame = normalize_frame(&source, ResizeMode::Fill, TargetSize::new(640, 640)?)?;
/// assert_eq!((frame.width(), frame.height()), (640, 640));
/// # Ok::<(), StitchError>(())
/// ```
pub fn normalize_frame(
    frame: &RgbaImage,
    mode: ResizeMode,
    target: TargetSize,
) -> Result<NormalizedFrame, StitchError> {
    let target = target.validate()?;
    let (width, height) = frame.dimensions();

    let mut scaled = match mode {
        ResizeMode::Fit => {
            let side = width.max(height);
            let mut canvas = RgbaImage::from_pixel(side, side, Rgba([0, 0, 0, 0]));
            imageops::overlay(
                &mut canvas,
                frame,
                i64::from((side - width) / 2),
                i64::from((side - height) / 2),
            );
            imageops::resize(&canvas, target.width, target.height, FilterType::Lanczos3)
        }
        ResizeMode::Fill => {
            let square = if width > height {
                let delta = (width - height) / 2;
                imageops::crop_imm(frame, delta, 0, height, height).to_image()
            } else if height > width {
                let delta = (height - width) / 2;
                imageops::crop_imm(frame, 0, delta, width, width).to_image()
            } else {
                frame.clone()
            };
            imageops::resize(&square, target.width, target.height, FilterType::Lanczos3)
        }
        ResizeMode::Stretch => {
            imageops::resize(frame, target.width, target.height, FilterType::Lanczos3)
        }
    };

    palette::quantize_in_place(&mut scaled, CACHE_PALETTE_COLORS);
    Ok(NormalizedFrame::new(scaled))
}
