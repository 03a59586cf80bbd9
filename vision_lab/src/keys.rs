//! Key dispatch for the interactive loops.
//!
//! `highgui::wait_key` reports -1 when no key is pressed, and some backends
//! carry modifier bits above the low byte, so every poll result goes through
//! `Key::from_code` before the loops act on it.

/// The keys the exercises actually react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// No key pressed during the poll window.
    None,
    /// Esc: leave the current loop.
    Esc,
    /// Space: take a snapshot.
    Space,
    /// `r` or `R`: toggle recording.
    RecordToggle,
    /// Anything else, low byte only.
    Other(u8),
}

impl Key {
    pub fn from_code(code: i32) -> Self {
        if code < 0 {
            return Key::None;
        }
        match (code & 0xff) as u8 {
            27 => Key::Esc,
            32 => Key::Space,
            b'r' | b'R' => Key::RecordToggle,
            // Some GTK builds report 255 on an empty queue instead of -1.
            255 => Key::None,
            other => Key::Other(other),
        }
    }

    /// True for any actual keypress, regardless of which key.
    pub fn pressed(self) -> bool {
        !matches!(self, Key::None)
    }

    pub fn is_quit(self) -> bool {
        matches!(self, Key::Esc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_poll_is_none() {
        assert_eq!(Key::from_code(-1), Key::None);
        assert_eq!(Key::from_code(255), Key::None);
        assert!(!Key::from_code(-1).pressed());
    }

    #[test]
    fn low_byte_is_masked() {
        // Esc with modifier bits set above the low byte.
        assert_eq!(Key::from_code(0x10001b), Key::Esc);
    }

    #[test]
    fn control_keys_classify() {
        assert!(Key::from_code(27).is_quit());
        assert_eq!(Key::from_code(32), Key::Space);
        assert_eq!(Key::from_code(i32::from(b'r')), Key::RecordToggle);
        assert_eq!(Key::from_code(i32::from(b'R')), Key::RecordToggle);
        assert_eq!(Key::from_code(i32::from(b'q')), Key::Other(b'q'));
    }
}
