//! Exercise 3: video playback and capture introspection.
//!
//! Four passes over the same file: looped playback at native size, replays
//! at three scale presets, replays under each color mode, and a
//! get/set property demo that seeks to the middle frame and back.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use opencv::highgui;
use opencv::prelude::*;

use lab_runner::{capture, display, effects};
use vision_lab::media::{ColorMode, SCALE_PRESETS, VideoMeta};
use vision_lab::report;

#[derive(Parser, Debug)]
#[command(about = "Video playback, scaling, color modes, and capture properties")]
struct Args {
    /// Video file to play.
    #[arg(long, default_value = "videos/test_video.mp4")]
    video: PathBuf,
    /// Frames shown per scale/color replay before moving on.
    #[arg(long, default_value_t = 90)]
    frame_cap: u32,
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
    println!("{}", report::banner("EXERCISE 3: Working with video"));
    if !args.video.exists() {
        println!(
            "{}",
            report::warn(format!("{} not found; place a test video in videos/", args.video.display()))
        );
        return Ok(());
    }

    let mut cap = capture::open_file(&args.video)?;
    let meta = print_video_info(&cap)?;

    play_original(&mut cap, &meta)?;
    play_scaled(&mut cap, &meta, args.frame_cap)?;
    play_color_modes(&mut cap, &meta, args.frame_cap)?;
    probe_properties(&mut cap, &meta)?;

    println!("\n{}", report::check("video exercise finished"));
    Ok(())
}

fn print_video_info(cap: &opencv::videoio::VideoCapture) -> Result<VideoMeta> {
    let meta = capture::meta(cap)?;
    println!("\nVideo info:");
    for line in meta.summary() {
        println!("{line}");
    }
    println!("{}", report::bullet("Backend", capture::backend_name(cap)?));
    Ok(meta)
}

/// Plays at native size, restarting at EOF, until Esc.
fn play_original(cap: &mut opencv::videoio::VideoCapture, meta: &VideoMeta) -> Result<()> {
    println!("\n{}", report::banner("PASS 1: original playback"));
    println!("Playing... (Esc to stop)");

    let window_name = "Original Video";
    display::window(window_name, highgui::WINDOW_NORMAL)?;

    let mut frame = Mat::default();
    loop {
        if !capture::read_frame(cap, &mut frame)? {
            println!("end of stream, restarting...");
            capture::seek_frame(cap, 0)?;
            continue;
        }
        display::show(window_name, &frame)?;
        if display::poll_key(meta.frame_delay_ms())?.is_quit() {
            break;
        }
    }
    display::destroy_window(window_name)?;
    Ok(())
}

fn play_scaled(
    cap: &mut opencv::videoio::VideoCapture,
    meta: &VideoMeta,
    frame_cap: u32,
) -> Result<()> {
    println!("\n{}", report::banner("PASS 2: scaled playback"));

    for preset in SCALE_PRESETS {
        let (width, height) = preset.scaled_dims(meta.width, meta.height);
        println!("\nScale: {}", preset.label);
        println!("{}", report::bullet("New resolution", format!("{width}x{height}")));
        println!("Playing... (Esc to skip)");

        let window_name = format!("Resized Video - {}", preset.label);
        display::window(&window_name, highgui::WINDOW_NORMAL)?;
        capture::seek_frame(cap, 0)?;

        let mut frame = Mat::default();
        for _ in 0..frame_cap {
            if !capture::read_frame(cap, &mut frame)? {
                break;
            }
            let resized = effects::resize_to(&frame, width, height)?;
            display::show(&window_name, &resized)?;
            if display::poll_key(meta.frame_delay_ms())?.is_quit() {
                break;
            }
        }
        display::destroy_window(&window_name)?;
    }
    Ok(())
}

fn play_color_modes(
    cap: &mut opencv::videoio::VideoCapture,
    meta: &VideoMeta,
    frame_cap: u32,
) -> Result<()> {
    println!("\n{}", report::banner("PASS 3: color modes"));

    for mode in ColorMode::ALL {
        println!("\nMode: {}", mode.label());
        println!("Playing... (Esc to skip)");

        let window_name = format!("Color Mode: {}", mode.label());
        display::window(&window_name, highgui::WINDOW_NORMAL)?;
        capture::seek_frame(cap, 0)?;

        let mut frame = Mat::default();
        for _ in 0..frame_cap {
            if !capture::read_frame(cap, &mut frame)? {
                break;
            }
            let converted = effects::convert_mode(mode, &frame)?;
            display::show(&window_name, &converted)?;
            if display::poll_key(meta.frame_delay_ms())?.is_quit() {
                break;
            }
        }
        display::destroy_window(&window_name)?;
    }
    Ok(())
}

fn probe_properties(cap: &mut opencv::videoio::VideoCapture, meta: &VideoMeta) -> Result<()> {
    println!("\n{}", report::banner("PASS 4: VideoCapture get/set"));

    println!("\nGET properties:");
    println!("{}", report::thin_rule());
    for (name, value) in capture::property_table(cap)? {
        println!("{}", report::field(name, value));
    }

    println!("\nSET properties:");
    println!("{}", report::thin_rule());
    let middle = meta.frame_count / 2;
    println!("\nSeeking to frame {middle} (middle of the stream)...");
    capture::seek_frame(cap, middle)?;

    let mut frame = Mat::default();
    if capture::read_frame(cap, &mut frame)? {
        display::show("Middle Frame", &frame)?;
        println!("{}", report::check(format!("position now: frame {}", capture::position(cap)?)));
        println!("{}", report::check("press any key..."));
        display::wait_any_key()?;
        display::destroy_window("Middle Frame")?;
    }

    println!("\nSeeking back to the start...");
    capture::seek_frame(cap, 0)?;
    println!("{}", report::check(format!("position now: frame {}", capture::position(cap)?)));
    Ok(())
}
