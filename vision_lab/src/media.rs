//! Descriptors for the media the exercises open and produce: probed video
//! metadata, the codec matrix for the transcode exercise, color-mode and
//! scale presets for playback, and the frame effects applied while copying.

use crate::report;

/// Fallback inter-frame delay when a container reports no usable fps.
const DEFAULT_FRAME_DELAY_MS: i32 = 30;

/// Properties probed from an opened capture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoMeta {
    pub width: i32,
    pub height: i32,
    pub fps: f64,
    pub frame_count: i64,
}

impl VideoMeta {
    pub fn duration_secs(&self) -> f64 {
        if self.fps.is_finite() && self.fps > 0.0 {
            self.frame_count as f64 / self.fps
        } else {
            0.0
        }
    }

    /// Poll delay that plays the stream back at its native rate.
    pub fn frame_delay_ms(&self) -> i32 {
        if self.fps.is_finite() && self.fps > 0.0 {
            (1000.0 / self.fps) as i32
        } else {
            DEFAULT_FRAME_DELAY_MS
        }
    }

    /// The bullet block every video exercise prints after opening a source.
    pub fn summary(&self) -> Vec<String> {
        vec![
            report::bullet("Resolution", format!("{}x{}", self.width, self.height)),
            report::bullet("FPS", format!("{:.2}", self.fps)),
            report::bullet("Frame count", self.frame_count),
            report::bullet("Duration", format!("{:.2} s", self.duration_secs())),
        ]
    }
}

/// One entry of the codec matrix: a four-character tag plus the container
/// extension it is written into.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    pub fourcc: [u8; 4],
    pub extension: &'static str,
    pub description: &'static str,
}

impl Codec {
    pub fn tag(&self) -> String {
        self.fourcc.iter().map(|&b| b as char).collect()
    }

    /// The four chars in `VideoWriter::fourcc` argument order.
    pub fn fourcc_chars(&self) -> (char, char, char, char) {
        (
            self.fourcc[0] as char,
            self.fourcc[1] as char,
            self.fourcc[2] as char,
            self.fourcc[3] as char,
        )
    }

    pub fn output_name(&self) -> String {
        format!("video_{}.{}", self.tag(), self.extension)
    }
}

/// Codecs exercised by the transcode run. X264 is deliberately absent; avc1
/// is the tag that works across the stock Windows/Linux FFmpeg backends.
pub const CODEC_MATRIX: [Codec; 4] = [
    Codec {
        fourcc: *b"XVID",
        extension: "avi",
        description: "XVID - DivX MPEG-4 (recommended)",
    },
    Codec {
        fourcc: *b"MJPG",
        extension: "avi",
        description: "MJPEG - Motion JPEG (large output)",
    },
    Codec {
        fourcc: *b"mp4v",
        extension: "mp4",
        description: "MP4V - MPEG-4 (standard)",
    },
    Codec {
        fourcc: *b"avc1",
        extension: "mp4",
        description: "AVC1 - H.264 (compatibility tag)",
    },
];

/// The default codec for plain copies and camera recordings.
pub const RECORDING_CODEC: Codec = CODEC_MATRIX[0];

/// Color spaces the playback exercise cycles through. The matching OpenCV
/// conversion codes live in the runner; this side only knows the labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Bgr,
    Grayscale,
    Hsv,
    Lab,
    YCrCb,
}

impl ColorMode {
    pub const ALL: [ColorMode; 5] = [
        ColorMode::Bgr,
        ColorMode::Grayscale,
        ColorMode::Hsv,
        ColorMode::Lab,
        ColorMode::YCrCb,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ColorMode::Bgr => "BGR (original)",
            ColorMode::Grayscale => "Grayscale",
            ColorMode::Hsv => "HSV",
            ColorMode::Lab => "LAB",
            ColorMode::YCrCb => "YCrCb",
        }
    }
}

/// A resize preset for the scaled-playback exercise.
#[derive(Debug, Clone, Copy)]
pub struct ScalePreset {
    pub factor: f64,
    pub label: &'static str,
}

pub const SCALE_PRESETS: [ScalePreset; 3] = [
    ScalePreset { factor: 0.5, label: "50% size" },
    ScalePreset { factor: 1.5, label: "150% size" },
    ScalePreset { factor: 2.0, label: "200% size" },
];

impl ScalePreset {
    pub fn scaled_dims(&self, width: i32, height: i32) -> (i32, i32) {
        (
            (width as f64 * self.factor) as i32,
            (height as f64 * self.factor) as i32,
        )
    }
}

/// Frame transforms applied during the effects transcode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Grayscale,
    HalfSize,
    MirrorX,
}

impl Effect {
    pub const ALL: [Effect; 3] = [Effect::Grayscale, Effect::HalfSize, Effect::MirrorX];

    /// Short name used in output filenames.
    pub fn slug(self) -> &'static str {
        match self {
            Effect::Grayscale => "grayscale",
            Effect::HalfSize => "resized",
            Effect::MirrorX => "flipped",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Effect::Grayscale => "Grayscale copy",
            Effect::HalfSize => "Downscaled to 50%",
            Effect::MirrorX => "Mirrored horizontally",
        }
    }

    /// Dimensions the writer must be opened with for a source of `w x h`.
    pub fn output_dims(self, width: i32, height: i32) -> (i32, i32) {
        match self {
            Effect::HalfSize => (width / 2, height / 2),
            _ => (width, height),
        }
    }

    /// Grayscale frames are single channel, so the writer is opened mono.
    pub fn is_color(self) -> bool {
        !matches!(self, Effect::Grayscale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_and_delay_follow_fps() {
        let meta = VideoMeta { width: 1280, height: 720, fps: 25.0, frame_count: 250 };
        assert_eq!(meta.duration_secs(), 10.0);
        assert_eq!(meta.frame_delay_ms(), 40);
    }

    #[test]
    fn zero_fps_falls_back() {
        let meta = VideoMeta { width: 640, height: 480, fps: 0.0, frame_count: 100 };
        assert_eq!(meta.duration_secs(), 0.0);
        assert_eq!(meta.frame_delay_ms(), DEFAULT_FRAME_DELAY_MS);
        let meta = VideoMeta { fps: f64::NAN, ..meta };
        assert_eq!(meta.frame_delay_ms(), DEFAULT_FRAME_DELAY_MS);
    }

    #[test]
    fn codec_tags_round_trip() {
        let xvid = &CODEC_MATRIX[0];
        assert_eq!(xvid.tag(), "XVID");
        assert_eq!(xvid.fourcc_chars(), ('X', 'V', 'I', 'D'));
        assert_eq!(xvid.output_name(), "video_XVID.avi");
        let mp4v = &CODEC_MATRIX[2];
        assert_eq!(mp4v.output_name(), "video_mp4v.mp4");
    }

    #[test]
    fn scale_presets_scale_both_axes() {
        let (w, h) = SCALE_PRESETS[0].scaled_dims(640, 480);
        assert_eq!((w, h), (320, 240));
        let (w, h) = SCALE_PRESETS[2].scaled_dims(640, 480);
        assert_eq!((w, h), (1280, 960));
    }

    #[test]
    fn effect_writer_parameters() {
        assert_eq!(Effect::HalfSize.output_dims(640, 480), (320, 240));
        assert_eq!(Effect::MirrorX.output_dims(640, 480), (640, 480));
        assert!(!Effect::Grayscale.is_color());
        assert!(Effect::MirrorX.is_color());
        assert_eq!(Effect::Grayscale.slug(), "grayscale");
    }
}
