//! Overlays drawn onto frames before display: the centered crosshair, HUD
//! text lines, the recording indicator, and the playback frame counter.

use anyhow::Result;
use opencv::core::{Point, Rect, Scalar, Size};
use opencv::imgproc;
use opencv::prelude::*;

/// BGR red.
pub fn red() -> Scalar {
    Scalar::new(0.0, 0.0, 255.0, 0.0)
}

/// BGR green, used for status text.
pub fn green() -> Scalar {
    Scalar::new(0.0, 255.0, 0.0, 0.0)
}

pub fn white() -> Scalar {
    Scalar::new(255.0, 255.0, 255.0, 0.0)
}

/// Crosshair bar geometry: a 60x180 vertical bar crossed by a 180x60
/// horizontal bar, both outlined 3 px thick.
pub const CROSS_BAR_SHORT: i32 = 60;
pub const CROSS_BAR_LONG: i32 = 180;
pub const CROSS_THICKNESS: i32 = 3;

fn centered_rect(center: Point, width: i32, height: i32) -> Rect {
    Rect::new(center.x - width / 2, center.y - height / 2, width, height)
}

/// Draws the red crosshair centered on the frame.
pub fn crosshair(frame: &mut Mat) -> Result<()> {
    let size = frame.size()?;
    let center = Point::new(size.width / 2, size.height / 2);
    for rect in [
        centered_rect(center, CROSS_BAR_SHORT, CROSS_BAR_LONG),
        centered_rect(center, CROSS_BAR_LONG, CROSS_BAR_SHORT),
    ] {
        imgproc::rectangle(frame, rect, red(), CROSS_THICKNESS, imgproc::LINE_8, 0)?;
    }
    Ok(())
}

/// One line of HUD text at the given origin.
pub fn hud_text(
    frame: &mut Mat,
    text: &str,
    origin: Point,
    color: Scalar,
    scale: f64,
    thickness: i32,
) -> Result<()> {
    imgproc::put_text(
        frame,
        text,
        origin,
        imgproc::FONT_HERSHEY_SIMPLEX,
        scale,
        color,
        thickness,
        imgproc::LINE_8,
        false,
    )?;
    Ok(())
}

/// Filled red dot plus a `REC | Frames: N` readout while recording.
pub fn rec_indicator(frame: &mut Mat, frames_written: u64) -> Result<()> {
    imgproc::circle(frame, Point::new(30, 30), 15, red(), -1, imgproc::LINE_8, 0)?;
    hud_text(
        frame,
        &format!("REC | Frames: {frames_written}"),
        Point::new(60, 40),
        red(),
        0.7,
        2,
    )
}

/// `Frame: current/total` counter for playback.
pub fn frame_counter(frame: &mut Mat, current: i64, total: i64) -> Result<()> {
    hud_text(
        frame,
        &format!("Frame: {current}/{total}"),
        Point::new(10, 30),
        green(),
        0.7,
        2,
    )
}

/// Bottom-of-frame control reminder line.
pub fn footer_text(frame: &mut Mat, text: &str, frame_size: Size) -> Result<()> {
    hud_text(
        frame,
        text,
        Point::new(10, frame_size.height - 20),
        white(),
        0.6,
        1,
    )
}
