//! Exercise 5: the HSV color model.
//!
//! Shows the test image in BGR and raw HSV side by side, splits the HSV
//! planes and prints their statistics in a 2x2 window grid, then renders
//! the generated spectrum card, labels it, and saves it to `output/`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use opencv::core::{self, Mat, Point, Vector};
use opencv::prelude::*;
use opencv::{highgui, imgcodecs};

use lab_runner::{display, draw, effects, mats};
use vision_lab::media::ColorMode;
use vision_lab::spectrum::SpectrumCard;
use vision_lab::{report, workspace};

#[derive(Parser, Debug)]
#[command(about = "BGR vs HSV comparison, channel statistics, spectrum card")]
struct Args {
    /// Image to convert.
    #[arg(long, default_value = "images/test_image.png")]
    image: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let result = run(&args);
    if let Err(err) = &result {
        println!("{}", report::fail(format!("exercise aborted: {err:#}")));
    }
    let _ = display::destroy_all();
    result
}

fn run(args: &Args) -> Result<()> {
    println!("{}", report::banner("EXERCISE 5: The HSV image format"));
    workspace::ensure_output_dir()?;

    if args.image.exists() {
        let bgr = imgcodecs::imread(&args.image.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
        if bgr.empty() {
            println!("{}", report::fail("could not decode the test image"));
        } else {
            compare_bgr_hsv(&bgr)?;
            split_hsv_channels(&bgr)?;
        }
    } else {
        println!(
            "{}",
            report::warn(format!("{} not found, skipping the image passes", args.image.display()))
        );
    }

    spectrum_card()?;
    println!("\n{}", report::check("HSV exercise finished"));
    Ok(())
}

/// The raw HSV planes rendered as BGR look wrong on purpose: that mismatch
/// is the point of the comparison.
fn compare_bgr_hsv(bgr: &Mat) -> Result<()> {
    println!("\n{}", report::banner("PASS 1: BGR vs HSV"));
    println!("{}", report::bullet("Shape", mats::shape(bgr)?));
    println!("{}", report::bullet("Element type", mats::type_name(bgr)));

    let hsv = effects::convert_mode(ColorMode::Hsv, bgr)?;

    display::window("Original (BGR)", highgui::WINDOW_NORMAL)?;
    display::window("HSV Format", highgui::WINDOW_NORMAL)?;
    display::move_window("Original (BGR)", 100, 100)?;
    display::move_window("HSV Format", 750, 100)?;
    display::show("Original (BGR)", bgr)?;
    display::show("HSV Format", &hsv)?;

    println!("{}", report::check("press any key to continue..."));
    display::wait_any_key()?;
    display::destroy_all()?;
    Ok(())
}

fn channel_stats(plane: &Mat) -> Result<(f64, f64, f64)> {
    let mut min = 0.0;
    let mut max = 0.0;
    core::min_max_loc(plane, Some(&mut min), Some(&mut max), None, None, &core::no_array())?;
    let mean = core::mean(plane, &core::no_array())?;
    Ok((min, max, mean[0]))
}

fn split_hsv_channels(bgr: &Mat) -> Result<()> {
    println!("\n{}", report::banner("PASS 2: HSV channels"));

    let hsv = effects::convert_mode(ColorMode::Hsv, bgr)?;
    let mut planes: Vector<Mat> = Vector::new();
    core::split(&hsv, &mut planes)?;

    println!("\nPer-channel statistics:");
    for (label, plane) in ["H (Hue)", "S (Saturation)", "V (Value)"].iter().zip(planes.iter()) {
        let (min, max, mean) = channel_stats(&plane)?;
        println!("{}", report::field(label, format!("min={min:.0}, max={max:.0}, mean={mean:.1}")));
    }

    let windows = [
        ("Original", 50, 50),
        ("H - Hue", 650, 50),
        ("S - Saturation", 50, 500),
        ("V - Value", 650, 500),
    ];
    for (name, x, y) in windows {
        display::window(name, highgui::WINDOW_NORMAL)?;
        display::move_window(name, x, y)?;
    }
    display::show("Original", bgr)?;
    display::show("H - Hue", &planes.get(0)?)?;
    display::show("S - Saturation", &planes.get(1)?)?;
    display::show("V - Value", &planes.get(2)?)?;

    println!("{}", report::check("press any key to continue..."));
    display::wait_any_key()?;
    display::destroy_all()?;
    Ok(())
}

fn spectrum_card() -> Result<()> {
    println!("\n{}", report::banner("PASS 3: HSV spectrum card"));

    let card = SpectrumCard::generate();
    let mut labeled = mats::spectrum_to_bgr(&card)?;

    draw::hud_text(&mut labeled, "HSV Color Space", Point::new(10, 30), draw::white(), 1.0, 2)?;
    draw::hud_text(
        &mut labeled,
        "Hue ->",
        Point::new(10, card.height() as i32 - 20),
        draw::white(),
        0.7,
        2,
    )?;
    draw::hud_text(&mut labeled, "Value", Point::new(10, 60), draw::white(), 0.7, 2)?;

    display::window("HSV Color Space", highgui::WINDOW_NORMAL)?;
    display::show("HSV Color Space", &labeled)?;

    let output = workspace::output_path("hsv_spectrum.png");
    imgcodecs::imwrite(&output.to_string_lossy(), &labeled, &Vector::new())?;

    // Unlabeled rendition through the pure-Rust conversion, for comparing
    // the binding's HSV mapping against ours.
    let reference = workspace::output_path("hsv_spectrum_reference.png");
    card.save_png(&reference)?;

    println!("{}", report::bullet("X axis", format!("Hue (0-{})", vision_lab::spectrum::MAX_HUE)));
    println!("{}", report::bullet("Y axis", "Value (255-0)"));
    println!("{}", report::bullet("Saturation", "255 (constant)"));
    println!("{}", report::check(format!("saved: {}", output.display())));
    println!("{}", report::check(format!("saved: {}", reference.display())));
    println!("{}", report::check("press any key..."));
    display::wait_any_key()?;
    display::destroy_all()?;
    Ok(())
}
