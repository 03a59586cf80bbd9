//! Exercise 7: recording the webcam to a file.
//!
//! The preview runs continuously; `r` toggles whether frames are appended
//! to a timestamped XVID file, Esc exits. An empty recording is deleted.
//! Afterwards the recording is played back with a frame-counter overlay.

use std::path::Path;

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use opencv::core::{Point, Size};
use opencv::highgui;
use opencv::prelude::*;

use lab_runner::{capture, display, draw};
use vision_lab::keys::Key;
use vision_lab::media::RECORDING_CODEC;
use vision_lab::session::RecordingSession;
use vision_lab::{report, workspace};

/// The writer runs at a fixed rate; camera-reported fps is too jittery to
/// trust for the container header.
const RECORD_FPS: f64 = 20.0;

#[derive(Parser, Debug)]
#[command(about = "Webcam recording with a toggle, then playback of the result")]
struct Args {
    /// Camera index to open.
    #[arg(long, default_value_t = 0)]
    camera: i32,
    /// Skip the playback step after recording.
    #[arg(long, default_value_t = false)]
    no_playback: bool,
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
    println!("{}", report::banner("EXERCISE 7: Recording video from the webcam"));
    workspace::ensure_output_dir()?;

    let recorded = record(args.camera)?;
    if let Some(path) = recorded {
        if !args.no_playback {
            playback(&path)?;
        }
    } else {
        println!("\nnothing was recorded");
    }
    Ok(())
}

fn record(index: i32) -> Result<Option<std::path::PathBuf>> {
    let mut cap = capture::open_camera(index)?;
    capture::request_resolution(&mut cap, 640.0, 480.0)?;
    let meta = capture::meta(&cap)?;

    println!("\nCamera parameters:");
    println!("{}", report::bullet("Resolution", format!("{}x{}", meta.width, meta.height)));
    println!("{}", report::bullet("FPS", RECORD_FPS));

    let output = workspace::timestamped_recording();
    let mut writer = capture::open_writer(
        &output,
        &RECORDING_CODEC,
        RECORD_FPS,
        Size::new(meta.width, meta.height),
        true,
    )?;
    println!("\n{}", report::bullet("Recording into", output.display()));
    println!("\nControls:");
    println!("{}", report::bullet("R", "start/stop recording"));
    println!("{}", report::bullet("ESC", "exit"));

    let window_name = "Webcam Recording";
    display::window(window_name, highgui::WINDOW_NORMAL)?;

    let mut session = RecordingSession::new();
    let mut frame = Mat::default();
    loop {
        if !capture::read_frame(&mut cap, &mut frame)? {
            println!("{}", report::fail("could not grab a frame"));
            break;
        }

        if session.is_recording() {
            writer.write(&frame)?;
            session.frame_written();
        }

        let mut hud = frame.try_clone()?;
        if session.is_recording() {
            draw::rec_indicator(&mut hud, session.frames_written())?;
        } else {
            draw::hud_text(
                &mut hud,
                "Press R to start recording",
                Point::new(10, 30),
                draw::green(),
                0.7,
                2,
            )?;
        }
        draw::footer_text(&mut hud, "R - record, ESC - exit", hud.size()?)?;
        display::show(window_name, &hud)?;

        match display::poll_key(1)? {
            Key::Esc => {
                println!("\nleaving the recorder");
                break;
            }
            Key::RecordToggle => {
                let now = Local::now().format("%H:%M:%S");
                if session.toggle() {
                    println!("[{now}] recording started...");
                } else {
                    println!(
                        "[{now}] recording stopped, frames written: {}",
                        session.frames_written()
                    );
                }
            }
            _ => {}
        }
    }

    writer.release()?;
    cap.release()?;

    if session.produced_output() && output.exists() {
        let bytes = workspace::file_size(&output)?;
        println!("\nRecording finished:");
        println!("{}", report::bullet("File", output.display()));
        println!("{}", report::bullet("Frames", session.frames_written()));
        println!("{}", report::bullet("Size", report::human_size(bytes)));
        println!(
            "{}",
            report::bullet("Duration", format!("{:.1} s", session.duration_secs(RECORD_FPS)))
        );
        Ok(Some(output))
    } else {
        // A writer that never saw a frame still leaves a stub file behind.
        if output.exists() {
            std::fs::remove_file(&output)?;
        }
        Ok(None)
    }
}

/// Replays the recording with a frame counter, looping until Esc.
fn playback(path: &Path) -> Result<()> {
    println!("\n{}", report::banner("Playing back the recording"));

    let mut cap = capture::open_file(path)?;
    let meta = capture::meta(&cap)?;
    for line in meta.summary() {
        println!("{line}");
    }
    println!("\nPlaying... (Esc to stop)");

    let window_name = "Playback";
    display::window(window_name, highgui::WINDOW_NORMAL)?;

    let mut frame = Mat::default();
    let mut current: i64 = 0;
    loop {
        if !capture::read_frame(&mut cap, &mut frame)? {
            println!("end of recording, restarting...");
            capture::seek_frame(&mut cap, 0)?;
            current = 0;
            continue;
        }
        current += 1;
        draw::frame_counter(&mut frame, current, meta.frame_count)?;
        display::show(window_name, &frame)?;
        if display::poll_key(meta.frame_delay_ms())?.is_quit() {
            println!("playback stopped");
            break;
        }
    }
    Ok(())
}
