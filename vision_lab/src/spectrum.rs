// THEORY:
// The spectrum card is the one piece of image data the exercises generate
// rather than load: a 360x256 test image sweeping hue left-to-right and
// value top-to-bottom at full saturation. Filling it pixel by pixel makes the
// HSV layout tangible in a way a loaded photo never is: the x axis IS the
// hue channel, the y axis IS the value channel.
//
// The buffer is kept in OpenCV's HSV convention (hue 0..=179, everything
// 8-bit, packed H,S,V per pixel) so the runner can wrap it in a Mat and feed
// it straight to cvt_color. For the OpenCV-free path there is a small
// hsv-to-rgb conversion here, used by `save_png` and by the tests.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::ImageEncoder;
use image::codecs::png::PngEncoder;

pub const SPECTRUM_WIDTH: u32 = 360;
pub const SPECTRUM_HEIGHT: u32 = 256;

/// Hue is stored halved so the full circle fits in 8 bits.
pub const MAX_HUE: u32 = 179;

/// The generated HSV test card.
pub struct SpectrumCard {
    width: u32,
    height: u32,
    /// Packed H,S,V bytes, row major.
    hsv: Vec<u8>,
}

impl SpectrumCard {
    /// Fills the card: hue rises with x, value falls with y, saturation
    /// pinned at 255.
    pub fn generate() -> Self {
        let (width, height) = (SPECTRUM_WIDTH, SPECTRUM_HEIGHT);
        let mut hsv = vec![0u8; (width * height * 3) as usize];
        for y in 0..height {
            for x in 0..width {
                let h = (x * MAX_HUE / width) as u8;
                let s = 255u8;
                let v = (255 - y * 255 / height) as u8;
                let i = ((y * width + x) * 3) as usize;
                hsv[i] = h;
                hsv[i + 1] = s;
                hsv[i + 2] = v;
            }
        }
        Self { width, height, hsv }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw packed buffer, ready to back a 3-channel 8-bit Mat.
    pub fn hsv_bytes(&self) -> &[u8] {
        &self.hsv
    }

    /// The H,S,V triple at a pixel.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = ((y * self.width + x) * 3) as usize;
        [self.hsv[i], self.hsv[i + 1], self.hsv[i + 2]]
    }

    /// Renders the card to packed RGB without going through OpenCV.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.hsv
            .chunks_exact(3)
            .flat_map(|p| hsv_to_rgb(p[0], p[1], p[2]))
            .collect()
    }

    /// Encodes the RGB rendition as a PNG file.
    pub fn save_png(&self, path: &Path) -> Result<(), image::ImageError> {
        let output = BufWriter::new(File::create(path)?);
        let encoder = PngEncoder::new(output);
        encoder.write_image(
            &self.to_rgb(),
            self.width,
            self.height,
            image::ExtendedColorType::Rgb8,
        )?;
        Ok(())
    }
}

/// 8-bit HSV (hue 0..=179) to 8-bit RGB.
pub fn hsv_to_rgb(h: u8, s: u8, v: u8) -> [u8; 3] {
    let h = f32::from(h) * 2.0; // back to degrees
    let s = f32::from(s) / 255.0;
    let v = f32::from(v) / 255.0;

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h as u32 {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_has_expected_shape() {
        let card = SpectrumCard::generate();
        assert_eq!(card.width(), SPECTRUM_WIDTH);
        assert_eq!(card.height(), SPECTRUM_HEIGHT);
        assert_eq!(
            card.hsv_bytes().len(),
            (SPECTRUM_WIDTH * SPECTRUM_HEIGHT * 3) as usize
        );
    }

    #[test]
    fn corners_follow_the_gradient() {
        let card = SpectrumCard::generate();
        // Top-left: hue 0, full value -> pure red.
        assert_eq!(card.pixel(0, 0), [0, 255, 255]);
        // Bottom row has the lowest value in the card.
        let bottom = card.pixel(0, SPECTRUM_HEIGHT - 1);
        assert!(bottom[2] < 2);
        // Rightmost column carries the highest stored hue.
        let right = card.pixel(SPECTRUM_WIDTH - 1, 0);
        assert_eq!(u32::from(right[0]), (SPECTRUM_WIDTH - 1) * MAX_HUE / SPECTRUM_WIDTH);
    }

    #[test]
    fn hue_rises_left_to_right_and_value_falls_top_to_bottom() {
        let card = SpectrumCard::generate();
        let y = SPECTRUM_HEIGHT / 2;
        for x in 1..SPECTRUM_WIDTH {
            assert!(card.pixel(x, y)[0] >= card.pixel(x - 1, y)[0]);
            assert_eq!(card.pixel(x, y)[1], 255);
        }
        let x = SPECTRUM_WIDTH / 2;
        for y in 1..SPECTRUM_HEIGHT {
            assert!(card.pixel(x, y)[2] <= card.pixel(x, y - 1)[2]);
        }
    }

    #[test]
    fn rgb_primaries_from_hsv() {
        assert_eq!(hsv_to_rgb(0, 255, 255), [255, 0, 0]);
        assert_eq!(hsv_to_rgb(60, 255, 255), [0, 255, 0]);
        assert_eq!(hsv_to_rgb(120, 255, 255), [0, 0, 255]);
        assert_eq!(hsv_to_rgb(0, 0, 0), [0, 0, 0]);
        assert_eq!(hsv_to_rgb(90, 0, 255), [255, 255, 255]);
    }

    #[test]
    fn png_save_round_trips() {
        let card = SpectrumCard::generate();
        let dir = std::env::temp_dir();
        let path = dir.join("spectrum_card_test.png");
        card.save_png(&path).expect("Error saving spectrum card.");
        let decoded = image::open(&path).expect("Error reopening spectrum card.");
        assert_eq!(decoded.width(), SPECTRUM_WIDTH);
        assert_eq!(decoded.height(), SPECTRUM_HEIGHT);
        let _ = std::fs::remove_file(&path);
    }
}
