//! Window and keyboard plumbing over `highgui`.

use anyhow::Result;
use opencv::highgui;
use opencv::prelude::*;

use vision_lab::keys::Key;

/// Creates a named window with one of the `highgui::WINDOW_*` flags.
pub fn window(name: &str, flags: i32) -> Result<()> {
    highgui::named_window(name, flags)?;
    Ok(())
}

pub fn show(name: &str, frame: &Mat) -> Result<()> {
    highgui::imshow(name, frame)?;
    Ok(())
}

pub fn move_window(name: &str, x: i32, y: i32) -> Result<()> {
    highgui::move_window(name, x, y)?;
    Ok(())
}

/// Polls the keyboard for `delay_ms` (which is also what paces playback)
/// and classifies the result.
pub fn poll_key(delay_ms: i32) -> Result<Key> {
    Ok(Key::from_code(highgui::wait_key(delay_ms)?))
}

/// Blocks until any key is pressed.
pub fn wait_any_key() -> Result<()> {
    highgui::wait_key(0)?;
    Ok(())
}

pub fn destroy_window(name: &str) -> Result<()> {
    highgui::destroy_window(name)?;
    Ok(())
}

/// Unconditional teardown; every binary calls this on its way out.
pub fn destroy_all() -> Result<()> {
    highgui::destroy_all_windows()?;
    Ok(())
}
