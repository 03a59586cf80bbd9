//! OpenCV plumbing shared by the exercise binaries: capture/writer setup,
//! window management, overlay drawing, frame effects, and small Mat helpers.
//! Everything here is device- and display-free to construct; only the
//! functions that name a window or a camera index touch the outside world.

pub mod capture;
pub mod display;
pub mod draw;
pub mod effects;
pub mod mats;
