//! Opening and probing capture sources and writers.

use std::path::Path;

use anyhow::{Context, Result, bail};
use opencv::core::Size;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture, VideoWriter};

use vision_lab::media::{Codec, VideoMeta};

/// Properties dumped by the capture-introspection exercise, in print order.
pub const PROBE_PROPS: [(&str, i32); 8] = [
    ("CAP_PROP_FRAME_WIDTH", videoio::CAP_PROP_FRAME_WIDTH),
    ("CAP_PROP_FRAME_HEIGHT", videoio::CAP_PROP_FRAME_HEIGHT),
    ("CAP_PROP_FPS", videoio::CAP_PROP_FPS),
    ("CAP_PROP_FRAME_COUNT", videoio::CAP_PROP_FRAME_COUNT),
    ("CAP_PROP_BRIGHTNESS", videoio::CAP_PROP_BRIGHTNESS),
    ("CAP_PROP_CONTRAST", videoio::CAP_PROP_CONTRAST),
    ("CAP_PROP_SATURATION", videoio::CAP_PROP_SATURATION),
    ("CAP_PROP_HUE", videoio::CAP_PROP_HUE),
];

/// Opens a video file, failing if the container could not be read.
pub fn open_file(path: &Path) -> Result<VideoCapture> {
    let path_str = path.to_string_lossy();
    let cap = VideoCapture::from_file(&path_str, videoio::CAP_ANY)
        .with_context(|| format!("opening {path_str}"))?;
    if !cap.is_opened()? {
        bail!("could not open video file {path_str}");
    }
    Ok(cap)
}

/// Opens a camera by index through the default backend.
pub fn open_camera(index: i32) -> Result<VideoCapture> {
    let cap = VideoCapture::new(index, videoio::CAP_ANY)
        .with_context(|| format!("opening camera {index}"))?;
    if !cap.is_opened()? {
        bail!(
            "could not open camera {index}; make sure it is connected and not in use by another application"
        );
    }
    Ok(cap)
}

/// Asks the device for a capture resolution. Drivers are free to ignore the
/// request, so callers should re-read the metadata afterwards.
pub fn request_resolution(cap: &mut VideoCapture, width: f64, height: f64) -> Result<()> {
    cap.set(videoio::CAP_PROP_FRAME_WIDTH, width)?;
    cap.set(videoio::CAP_PROP_FRAME_HEIGHT, height)?;
    Ok(())
}

/// Probes the standard metadata of an opened source.
pub fn meta(cap: &VideoCapture) -> Result<VideoMeta> {
    Ok(VideoMeta {
        width: cap.get(videoio::CAP_PROP_FRAME_WIDTH)? as i32,
        height: cap.get(videoio::CAP_PROP_FRAME_HEIGHT)? as i32,
        fps: cap.get(videoio::CAP_PROP_FPS)?,
        frame_count: cap.get(videoio::CAP_PROP_FRAME_COUNT)? as i64,
    })
}

pub fn backend_name(cap: &VideoCapture) -> Result<String> {
    Ok(cap.get_backend_name()?)
}

/// Repositions the read head to an absolute frame index.
pub fn seek_frame(cap: &mut VideoCapture, frame: i64) -> Result<()> {
    cap.set(videoio::CAP_PROP_POS_FRAMES, frame as f64)?;
    Ok(())
}

pub fn position(cap: &VideoCapture) -> Result<i64> {
    Ok(cap.get(videoio::CAP_PROP_POS_FRAMES)? as i64)
}

/// Reads the next frame into `frame`. Returns false at end of stream or on
/// an empty grab.
pub fn read_frame(cap: &mut VideoCapture, frame: &mut Mat) -> Result<bool> {
    Ok(cap.read(frame)? && !frame.empty())
}

/// The property table as (name, value) rows.
pub fn property_table(cap: &VideoCapture) -> Result<Vec<(&'static str, f64)>> {
    PROBE_PROPS
        .iter()
        .map(|&(name, id)| Ok((name, cap.get(id)?)))
        .collect()
}

/// Opens a writer for the given codec, failing if the backend rejects it.
pub fn open_writer(
    path: &Path,
    codec: &Codec,
    fps: f64,
    size: Size,
    is_color: bool,
) -> Result<VideoWriter> {
    let (a, b, c, d) = codec.fourcc_chars();
    let fourcc = VideoWriter::fourcc(a, b, c, d)?;
    let path_str = path.to_string_lossy();
    let writer = VideoWriter::new(&path_str, fourcc, fps, size, is_color)
        .with_context(|| format!("creating writer {path_str}"))?;
    if !writer.is_opened()? {
        bail!("could not initialize codec {} for {path_str}", codec.tag());
    }
    Ok(writer)
}
