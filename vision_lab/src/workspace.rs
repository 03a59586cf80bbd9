//! The fixed on-disk layout the exercises run against: `images/` and
//! `videos/` for input assets, `output/` for everything they produce.

use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub const IMAGE_DIR: &str = "images";
pub const VIDEO_DIR: &str = "videos";
pub const OUTPUT_DIR: &str = "output";

/// The test image most exercises load.
pub fn default_image() -> PathBuf {
    Path::new(IMAGE_DIR).join("test_image.png")
}

/// The same test image under a different extension, for the format demo.
pub fn image_with_extension(ext: &str) -> PathBuf {
    Path::new(IMAGE_DIR).join(format!("test_image.{ext}"))
}

/// The test video the playback and transcode exercises read.
pub fn default_video() -> PathBuf {
    Path::new(VIDEO_DIR).join("test_video.mp4")
}

/// Creates `output/` if needed and returns it.
pub fn ensure_output_dir() -> io::Result<PathBuf> {
    let dir = PathBuf::from(OUTPUT_DIR);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn output_path(name: &str) -> PathBuf {
    Path::new(OUTPUT_DIR).join(name)
}

/// `webcam_recording_YYYYMMDD_HHMMSS.avi` for the given moment.
pub fn recording_filename(at: DateTime<Local>) -> String {
    format!("webcam_recording_{}.avi", at.format("%Y%m%d_%H%M%S"))
}

/// Timestamped recording path under `output/` for right now.
pub fn timestamped_recording() -> PathBuf {
    output_path(&recording_filename(Local::now()))
}

/// Size of a produced artifact, for the closing reports.
pub fn file_size(path: &Path) -> io::Result<u64> {
    Ok(std::fs::metadata(path)?.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn asset_paths_use_the_fixed_layout() {
        assert_eq!(default_image(), Path::new("images/test_image.png"));
        assert_eq!(image_with_extension("bmp"), Path::new("images/test_image.bmp"));
        assert_eq!(default_video(), Path::new("videos/test_video.mp4"));
        assert_eq!(output_path("hsv_spectrum.png"), Path::new("output/hsv_spectrum.png"));
    }

    #[test]
    fn recording_name_embeds_the_timestamp() {
        let at = Local.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap();
        assert_eq!(recording_filename(at), "webcam_recording_20260314_092653.avi");
    }

    #[test]
    fn output_dir_is_created_on_demand() {
        // Run from a scratch directory so the repo root stays clean.
        let scratch = std::env::temp_dir().join("vision_lab_workspace_test");
        std::fs::create_dir_all(&scratch).unwrap();
        let old = std::env::current_dir().unwrap();
        std::env::set_current_dir(&scratch).unwrap();
        let dir = ensure_output_dir().unwrap();
        assert!(dir.is_dir());
        std::env::set_current_dir(old).unwrap();
        let _ = std::fs::remove_dir_all(&scratch);
    }
}
