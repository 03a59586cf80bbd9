//! Exercise 6: camera preview with a red crosshair.
//!
//! Streams the webcam with a centered crosshair and an instruction HUD;
//! Space saves a numbered snapshot, Esc exits. `--image` draws the same
//! crosshair on a still image instead, for machines without a camera.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use opencv::core::{Point, Vector};
use opencv::prelude::*;
use opencv::{highgui, imgcodecs};

use lab_runner::{capture, display, draw};
use vision_lab::keys::Key;
use vision_lab::session::SnapshotCounter;
use vision_lab::{report, workspace};

#[derive(Parser, Debug)]
#[command(about = "Camera preview with a centered crosshair and snapshots")]
struct Args {
    /// Camera index to open.
    #[arg(long, default_value_t = 0)]
    camera: i32,
    /// Draw the crosshair on this still image instead of opening a camera.
    #[arg(long)]
    image: Option<PathBuf>,
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
    println!("{}", report::banner("EXERCISE 6: Camera image with a red crosshair"));
    workspace::ensure_output_dir()?;
    match &args.image {
        Some(path) => still_image(path),
        None => camera_loop(args.camera),
    }
}

fn camera_loop(index: i32) -> Result<()> {
    let mut cap = capture::open_camera(index)?;
    capture::request_resolution(&mut cap, 640.0, 480.0)?;
    let meta = capture::meta(&cap)?;

    println!("\nCamera initialized");
    println!("{}", report::bullet("Resolution", format!("{}x{}", meta.width, meta.height)));
    println!("\nControls:");
    println!("{}", report::bullet("SPACE", "take a snapshot"));
    println!("{}", report::bullet("ESC", "exit"));

    let window_name = "Camera with Cross";
    display::window(window_name, highgui::WINDOW_NORMAL)?;

    let mut snapshots = SnapshotCounter::new();
    let mut frame = Mat::default();
    loop {
        if !capture::read_frame(&mut cap, &mut frame)? {
            println!("{}", report::fail("could not grab a frame"));
            break;
        }

        let mut annotated = frame.try_clone()?;
        draw::crosshair(&mut annotated)?;
        draw::hud_text(
            &mut annotated,
            "SPACE - snapshot, ESC - exit",
            Point::new(10, 30),
            draw::green(),
            0.7,
            2,
        )?;
        display::show(window_name, &annotated)?;

        match display::poll_key(1)? {
            Key::Esc => {
                println!("\nleaving the preview");
                break;
            }
            Key::Space => {
                let path = workspace::output_path(&snapshots.next_filename());
                imgcodecs::imwrite(&path.to_string_lossy(), &annotated, &Vector::new())?;
                println!("{}", report::check(format!("snapshot saved: {}", path.display())));
            }
            _ => {}
        }
    }

    println!("\n{}", report::bullet("Snapshots taken", snapshots.count()));
    Ok(())
}

/// Fallback for machines without a camera.
fn still_image(path: &Path) -> Result<()> {
    println!("\n{}", report::banner("Still-image fallback"));
    if !path.exists() {
        println!("{}", report::warn(format!("{} not found", path.display())));
        return Ok(());
    }

    let mut img = imgcodecs::imread(&path.to_string_lossy(), imgcodecs::IMREAD_COLOR)?;
    if img.empty() {
        println!("{}", report::fail("could not decode the image"));
        return Ok(());
    }

    draw::crosshair(&mut img)?;

    let output = workspace::output_path("image_with_cross.png");
    imgcodecs::imwrite(&output.to_string_lossy(), &img, &Vector::new())?;

    display::window("Image with Cross", highgui::WINDOW_NORMAL)?;
    display::show("Image with Cross", &img)?;
    println!("{}", report::check(format!("saved: {}", output.display())));
    println!("{}", report::check("press any key..."));
    display::wait_any_key()?;
    Ok(())
}
