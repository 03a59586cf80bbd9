//! Frame transforms: color-space conversion for the playback exercise and
//! the grayscale/half-size/mirror effects applied while transcoding.

use anyhow::Result;
use opencv::core::{self, Size};
use opencv::imgproc;
use opencv::prelude::*;

use vision_lab::media::{ColorMode, Effect};

/// The `cvt_color` code for a mode, or None when the frame is shown as-is.
pub fn conversion_code(mode: ColorMode) -> Option<i32> {
    match mode {
        ColorMode::Bgr => None,
        ColorMode::Grayscale => Some(imgproc::COLOR_BGR2GRAY),
        ColorMode::Hsv => Some(imgproc::COLOR_BGR2HSV),
        ColorMode::Lab => Some(imgproc::COLOR_BGR2Lab),
        ColorMode::YCrCb => Some(imgproc::COLOR_BGR2YCrCb),
    }
}

/// Converts a BGR frame into the requested mode.
pub fn convert_mode(mode: ColorMode, frame: &Mat) -> Result<Mat> {
    match conversion_code(mode) {
        None => Ok(frame.try_clone()?),
        Some(code) => {
            let mut out = Mat::default();
            imgproc::cvt_color(frame, &mut out, code, 0)?;
            Ok(out)
        }
    }
}

pub fn resize_to(frame: &Mat, width: i32, height: i32) -> Result<Mat> {
    let mut out = Mat::default();
    imgproc::resize(
        frame,
        &mut out,
        Size::new(width, height),
        0.0,
        0.0,
        imgproc::INTER_LINEAR,
    )?;
    Ok(out)
}

/// Applies one transcode effect to a BGR frame.
pub fn apply(effect: Effect, frame: &Mat) -> Result<Mat> {
    match effect {
        Effect::Grayscale => convert_mode(ColorMode::Grayscale, frame),
        Effect::HalfSize => {
            let size = frame.size()?;
            resize_to(frame, size.width / 2, size.height / 2)
        }
        Effect::MirrorX => {
            let mut out = Mat::default();
            core::flip(frame, &mut out, 1)?;
            Ok(out)
        }
    }
}
