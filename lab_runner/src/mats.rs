//! Small Mat helpers: human-readable type names for the diagnostics the
//! image exercises print, and conversion of the generated spectrum card
//! into a displayable Mat.

use anyhow::Result;
use opencv::core::{self, Scalar, Vec3b};
use opencv::imgproc;
use opencv::prelude::*;

use vision_lab::spectrum::SpectrumCard;

/// `CV_8UC3`-style name for a Mat's element type.
pub fn type_name(mat: &Mat) -> String {
    let depth = match mat.depth() {
        core::CV_8U => "CV_8U",
        core::CV_8S => "CV_8S",
        core::CV_16U => "CV_16U",
        core::CV_16S => "CV_16S",
        core::CV_32S => "CV_32S",
        core::CV_32F => "CV_32F",
        core::CV_64F => "CV_64F",
        _ => "CV_?",
    };
    format!("{}C{}", depth, mat.channels())
}

/// `HxWxC` shape string for the load diagnostics.
pub fn shape(mat: &Mat) -> Result<String> {
    let size = mat.size()?;
    Ok(format!("{}x{}x{}", size.height, size.width, mat.channels()))
}

/// Wraps the spectrum card's HSV buffer in a Mat and converts it to BGR
/// for display and saving.
pub fn spectrum_to_bgr(card: &SpectrumCard) -> Result<Mat> {
    let (width, height) = (card.width() as i32, card.height() as i32);
    let mut hsv = Mat::new_rows_cols_with_default(height, width, core::CV_8UC3, Scalar::all(0.0))?;
    for y in 0..height {
        for x in 0..width {
            let p = card.pixel(x as u32, y as u32);
            *hsv.at_2d_mut::<Vec3b>(y, x)? = Vec3b::from(p);
        }
    }
    let mut bgr = Mat::default();
    imgproc::cvt_color(&hsv, &mut bgr, imgproc::COLOR_HSV2BGR, 0)?;
    Ok(bgr)
}
