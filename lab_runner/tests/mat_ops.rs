//! Mat-level checks for the runner's transforms and overlays. No windows,
//! cameras, or codecs involved, so these run headless.

use lab_runner::{draw, effects, mats};
use opencv::core::{self, Mat, Scalar, Vec3b};
use opencv::prelude::*;

use vision_lab::media::{ColorMode, Effect};
use vision_lab::spectrum::{SPECTRUM_HEIGHT, SPECTRUM_WIDTH, SpectrumCard};

fn black_bgr(width: i32, height: i32) -> Mat {
    Mat::new_rows_cols_with_default(height, width, core::CV_8UC3, Scalar::all(0.0)).unwrap()
}

#[test]
fn half_size_halves_both_axes() {
    let frame = black_bgr(640, 480);
    let out = effects::apply(Effect::HalfSize, &frame).unwrap();
    let size = out.size().unwrap();
    assert_eq!((size.width, size.height), (320, 240));
    assert_eq!(out.channels(), 3);
}

#[test]
fn grayscale_is_single_channel() {
    let frame = black_bgr(64, 48);
    let out = effects::apply(Effect::Grayscale, &frame).unwrap();
    let size = out.size().unwrap();
    assert_eq!((size.width, size.height), (64, 48));
    assert_eq!(out.channels(), 1);
}

#[test]
fn mirror_swaps_columns() {
    let mut frame = black_bgr(32, 16);
    *frame.at_2d_mut::<Vec3b>(7, 5).unwrap() = Vec3b::from([10, 20, 30]);
    let out = effects::apply(Effect::MirrorX, &frame).unwrap();
    assert_eq!(*out.at_2d::<Vec3b>(7, 32 - 1 - 5).unwrap(), Vec3b::from([10, 20, 30]));
    assert_eq!(*out.at_2d::<Vec3b>(7, 5).unwrap(), Vec3b::from([0, 0, 0]));
}

#[test]
fn color_modes_preserve_dimensions() {
    let frame = black_bgr(80, 60);
    for mode in ColorMode::ALL {
        let out = effects::convert_mode(mode, &frame).unwrap();
        let size = out.size().unwrap();
        assert_eq!((size.width, size.height), (80, 60), "mode {:?}", mode);
        let expected_channels = if mode == ColorMode::Grayscale { 1 } else { 3 };
        assert_eq!(out.channels(), expected_channels, "mode {:?}", mode);
    }
}

#[test]
fn crosshair_lands_on_the_bar_outlines() {
    let mut frame = black_bgr(640, 480);
    draw::crosshair(&mut frame).unwrap();

    // Left edge of the vertical bar at mid height is part of the outline.
    let on_edge = *frame.at_2d::<Vec3b>(240, 320 - draw::CROSS_BAR_SHORT / 2).unwrap();
    assert_eq!(on_edge, Vec3b::from([0, 0, 255]));

    // The bars are outlined, not filled: the exact center stays black.
    assert_eq!(*frame.at_2d::<Vec3b>(240, 320).unwrap(), Vec3b::from([0, 0, 0]));
    // Far corner is untouched.
    assert_eq!(*frame.at_2d::<Vec3b>(0, 0).unwrap(), Vec3b::from([0, 0, 0]));
}

#[test]
fn spectrum_mat_matches_the_card() {
    let card = SpectrumCard::generate();
    let bgr = mats::spectrum_to_bgr(&card).unwrap();
    let size = bgr.size().unwrap();
    assert_eq!(size.width, SPECTRUM_WIDTH as i32);
    assert_eq!(size.height, SPECTRUM_HEIGHT as i32);
    assert_eq!(bgr.channels(), 3);

    // Hue 0 at full saturation/value converts to pure red (BGR order).
    assert_eq!(*bgr.at_2d::<Vec3b>(0, 0).unwrap(), Vec3b::from([0, 0, 255]));
    // The bottom row is nearly black regardless of hue.
    let bottom = *bgr.at_2d::<Vec3b>(SPECTRUM_HEIGHT as i32 - 1, 0).unwrap();
    assert!(bottom[0] < 3 && bottom[1] < 3 && bottom[2] < 3);
}

#[test]
fn mat_descriptions() {
    let frame = black_bgr(12, 8);
    assert_eq!(mats::type_name(&frame), "CV_8UC3");
    assert_eq!(mats::shape(&frame).unwrap(), "8x12x3");

    let gray = effects::apply(Effect::Grayscale, &frame).unwrap();
    assert_eq!(mats::type_name(&gray), "CV_8UC1");
}
