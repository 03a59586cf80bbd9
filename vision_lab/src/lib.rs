// THEORY:
// This crate is the OpenCV-free half of the exercise series. Every piece of
// behavior that does not need the native library lives here so it can be unit
// tested without a camera, a display, or a linked OpenCV installation: the
// console report formatting the exercises print, the key-code dispatch their
// interactive loops run on, the descriptors for codecs/color modes/scale
// presets, the HSV spectrum test card, and the tiny bits of session state
// (recording toggle, snapshot counter) the camera exercises carry.
//
// The sibling `lab_runner` crate wires these modules to the actual OpenCV
// calls and owns everything that touches a device, a window, or a file
// written through the binding.

pub mod keys;
pub mod media;
pub mod report;
pub mod session;
pub mod spectrum;
pub mod workspace;
