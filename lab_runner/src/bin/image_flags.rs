//! Exercise 2: image loading flags, window flags, and raster formats.
//!
//! Three passes over the same test image: decode it under each `IMREAD_*`
//! flag and report the resulting shape, show it under each `WINDOW_*` flag,
//! then reload it from .png/.jpg/.bmp files comparing file size against
//! decoded resolution.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use opencv::{highgui, imgcodecs, prelude::*};

use lab_runner::{display, mats};
use vision_lab::{report, workspace};

#[derive(Parser, Debug)]
#[command(about = "Image loading flags, window flags, and raster formats")]
struct Args {
    /// Test image to load. The format pass always reads
    /// images/test_image.{png,jpg,bmp} from the fixed layout.
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
    println!("{}", report::banner("EXERCISE 2: Image display"));
    imread_flags(&args.image)?;
    window_flags(&args.image)?;
    image_formats()?;
    println!("{}", report::check("image display exercise finished"));
    Ok(())
}

fn imread_flags(path: &Path) -> Result<()> {
    println!("\n{}", report::banner("PASS 1: imread flags"));
    if !path.exists() {
        println!("{}", report::warn(format!("{} not found, skipping", path.display())));
        println!("{}", report::warn("create images/ and add test_image.png"));
        return Ok(());
    }

    let flags = [
        ("IMREAD_COLOR", imgcodecs::IMREAD_COLOR),
        ("IMREAD_GRAYSCALE", imgcodecs::IMREAD_GRAYSCALE),
        ("IMREAD_UNCHANGED", imgcodecs::IMREAD_UNCHANGED),
    ];

    for (name, flag) in flags {
        println!("\nLoading with flag: {name}");
        let img = imgcodecs::imread(&path.to_string_lossy(), flag)?;
        if img.empty() {
            println!("{}", report::fail("decode failed"));
            continue;
        }
        println!("{}", report::check(format!("shape: {}", mats::shape(&img)?)));
        println!("{}", report::check(format!("element type: {}", mats::type_name(&img))));

        let window_name = format!("imread: {name}");
        display::show(&window_name, &img)?;
        println!("{}", report::check("press any key to continue..."));
        display::wait_any_key()?;
        display::destroy_window(&window_name)?;
    }
    Ok(())
}

fn window_flags(path: &Path) -> Result<()> {
    println!("\n{}", report::banner("PASS 2: namedWindow flags"));
    if !path.exists() {
        println!("{}", report::warn(format!("{} not found, skipping", path.display())));
        return Ok(());
    }
    let img = imgcodecs::imread(&path.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
    if img.empty() {
        println!("{}", report::fail("decode failed"));
        return Ok(());
    }

    let flags = [
        ("WINDOW_NORMAL", highgui::WINDOW_NORMAL, "resizable with the mouse"),
        ("WINDOW_AUTOSIZE", highgui::WINDOW_AUTOSIZE, "sized to the image, fixed"),
        ("WINDOW_FULLSCREEN", highgui::WINDOW_FULLSCREEN, "fullscreen"),
    ];

    for (name, flag, what) in flags {
        println!("\nWindow with flag: {name} ({what})");
        let window_name = format!("Window: {name}");
        display::window(&window_name, flag)?;
        display::show(&window_name, &img)?;
        println!("{}", report::check("press any key to continue..."));
        display::wait_any_key()?;
        display::destroy_window(&window_name)?;
    }
    Ok(())
}

fn image_formats() -> Result<()> {
    println!("\n{}", report::banner("PASS 3: image formats"));

    for ext in ["png", "jpg", "bmp"] {
        let path = workspace::image_with_extension(ext);
        println!("\nLoading format: .{}", ext.to_uppercase());
        if !path.exists() {
            println!("{}", report::warn(format!("{} not found, skipping", path.display())));
            continue;
        }

        let img = imgcodecs::imread(&path.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
        if img.empty() {
            println!("{}", report::fail("decode failed"));
            continue;
        }

        let size = img.size()?;
        let bytes = workspace::file_size(&path)?;
        println!("{}", report::check(format!("file size: {}", report::human_size(bytes))));
        println!("{}", report::check(format!("resolution: {}x{}", size.width, size.height)));
        println!("{}", report::check(format!("channels: {}", img.channels())));

        let window_name = format!("Format: .{}", ext.to_uppercase());
        display::window(&window_name, highgui::WINDOW_NORMAL)?;
        display::show(&window_name, &img)?;
        println!("{}", report::check("press any key to continue..."));
        display::wait_any_key()?;
        display::destroy_window(&window_name)?;
    }
    Ok(())
}
