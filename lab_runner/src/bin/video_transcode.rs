//! Exercise 4: reading a video back out through `VideoWriter`.
//!
//! Four passes: a full XVID copy with progress reporting, a codec matrix
//! writing a short clip per codec, an effects pass (grayscale, half-size,
//! mirror), and a side-by-side replay of the original next to its copy.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use opencv::core::Size;
use opencv::highgui;
use opencv::prelude::*;

use lab_runner::{capture, display, effects};
use vision_lab::media::{CODEC_MATRIX, Effect, RECORDING_CODEC, VideoMeta};
use vision_lab::{report, workspace};

#[derive(Parser, Debug)]
#[command(about = "Video transcoding: plain copy, codec matrix, effects, comparison")]
struct Args {
    /// Source video.
    #[arg(long, default_value = "videos/test_video.mp4")]
    video: PathBuf,
    /// Frames written per codec/effect clip.
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
    println!("{}", report::banner("EXERCISE 4: Writing video to a file"));
    if !args.video.exists() {
        println!("{}", report::warn(format!("{} not found, nothing to do", args.video.display())));
        return Ok(());
    }
    workspace::ensure_output_dir()?;

    let mut cap = capture::open_file(&args.video)?;
    let meta = capture::meta(&cap)?;
    println!("\nSource video:");
    for line in meta.summary() {
        println!("{line}");
    }

    let copy_path = copy_basic(&mut cap, &meta)?;
    codec_matrix(&mut cap, &meta, args.frame_cap)?;
    effects_pass(&mut cap, &meta, args.frame_cap)?;
    compare_side_by_side(&args.video, &copy_path, &meta)?;

    println!("\n{}", report::check("transcode exercise finished"));
    println!("all output saved under {}/", workspace::OUTPUT_DIR);
    Ok(())
}

/// Frame-for-frame copy into `output/copied_video.avi`.
fn copy_basic(cap: &mut opencv::videoio::VideoCapture, meta: &VideoMeta) -> Result<PathBuf> {
    println!("\n{}", report::banner("PASS 1: plain copy"));
    let output = workspace::output_path("copied_video.avi");
    println!("{}", report::bullet("Output file", output.display()));

    capture::seek_frame(cap, 0)?;
    let mut writer = capture::open_writer(
        &output,
        &RECORDING_CODEC,
        meta.fps,
        Size::new(meta.width, meta.height),
        true,
    )?;

    let mut frame = Mat::default();
    let mut written: u64 = 0;
    while capture::read_frame(cap, &mut frame)? {
        writer.write(&frame)?;
        written += 1;
        if written % 30 == 0 {
            println!("{}", report::progress(written, meta.frame_count.max(0) as u64));
        }
    }
    writer.release()?;

    let bytes = workspace::file_size(&output)?;
    println!("{}", report::check(format!("frames written: {written}")));
    println!("{}", report::check(format!("file size: {}", report::human_size(bytes))));
    Ok(output)
}

/// Writes a short clip per codec tag and reports which backends accepted it.
fn codec_matrix(
    cap: &mut opencv::videoio::VideoCapture,
    meta: &VideoMeta,
    frame_cap: u32,
) -> Result<()> {
    println!("\n{}", report::banner("PASS 2: codec matrix"));

    for codec in &CODEC_MATRIX {
        println!("\nCodec: {}", codec.description);
        let output = workspace::output_path(&codec.output_name());
        capture::seek_frame(cap, 0)?;

        let writer = capture::open_writer(
            &output,
            codec,
            meta.fps,
            Size::new(meta.width, meta.height),
            true,
        );
        let mut writer = match writer {
            Ok(w) => w,
            Err(err) => {
                println!("{}", report::warn(format!("codec {} unavailable: {err:#}", codec.tag())));
                continue;
            }
        };

        let mut frame = Mat::default();
        let mut written: u64 = 0;
        for _ in 0..frame_cap {
            if !capture::read_frame(cap, &mut frame)? {
                break;
            }
            writer.write(&frame)?;
            written += 1;
        }
        writer.release()?;

        if written > 0 && output.exists() {
            let bytes = workspace::file_size(&output)?;
            println!("{}", report::check(format!("file: {}", output.display())));
            println!("{}", report::check(format!("frames: {written}")));
            println!("{}", report::check(format!("size: {}", report::human_size(bytes))));
        } else {
            println!("{}", report::fail("output missing or empty"));
        }
    }
    Ok(())
}

/// Copies a short clip per effect, sizing the writer to the effect's output.
fn effects_pass(
    cap: &mut opencv::videoio::VideoCapture,
    meta: &VideoMeta,
    frame_cap: u32,
) -> Result<()> {
    println!("\n{}", report::banner("PASS 3: copy with effects"));

    for effect in Effect::ALL {
        println!("\nEffect: {}", effect.label());
        let output = workspace::output_path(&format!("video_{}.avi", effect.slug()));
        capture::seek_frame(cap, 0)?;

        let (out_w, out_h) = effect.output_dims(meta.width, meta.height);
        let mut writer = capture::open_writer(
            &output,
            &RECORDING_CODEC,
            meta.fps,
            Size::new(out_w, out_h),
            effect.is_color(),
        )?;

        let mut frame = Mat::default();
        let mut written: u64 = 0;
        for _ in 0..frame_cap {
            if !capture::read_frame(cap, &mut frame)? {
                break;
            }
            let processed = effects::apply(effect, &frame)?;
            writer.write(&processed)?;
            written += 1;
        }
        writer.release()?;

        let bytes = workspace::file_size(&output)?;
        println!("{}", report::check(format!("file: {}", output.display())));
        println!("{}", report::check(format!("frames: {written}")));
        println!("{}", report::check(format!("size: {}", report::human_size(bytes))));
    }
    Ok(())
}

/// Plays the source and the copy in two windows placed next to each other.
fn compare_side_by_side(
    original: &std::path::Path,
    copy: &std::path::Path,
    meta: &VideoMeta,
) -> Result<()> {
    println!("\n{}", report::banner("PASS 4: original vs copy"));
    if !copy.exists() {
        println!("{}", report::warn("copy not found; run pass 1 first"));
        return Ok(());
    }

    println!("{}", report::bullet("Original", report::human_size(workspace::file_size(original)?)));
    println!("{}", report::bullet("Copy", report::human_size(workspace::file_size(copy)?)));

    let mut cap_orig = capture::open_file(original)?;
    let mut cap_copy = capture::open_file(copy)?;

    display::window("Original", highgui::WINDOW_NORMAL)?;
    display::window("Copy", highgui::WINDOW_NORMAL)?;
    display::move_window("Original", 100, 100)?;
    display::move_window("Copy", 750, 100)?;

    println!("\nPlaying... (Esc to stop)");
    let mut frame_orig = Mat::default();
    let mut frame_copy = Mat::default();
    let mut shown: u64 = 0;
    loop {
        if !capture::read_frame(&mut cap_orig, &mut frame_orig)?
            || !capture::read_frame(&mut cap_copy, &mut frame_copy)?
        {
            println!("end of stream");
            break;
        }
        display::show("Original", &frame_orig)?;
        display::show("Copy", &frame_copy)?;
        shown += 1;
        if display::poll_key(meta.frame_delay_ms())?.is_quit() {
            break;
        }
    }
    println!("{}", report::check(format!("frames shown: {shown}")));
    Ok(())
}
