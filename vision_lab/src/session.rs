//! State carried across frames by the camera exercises: the recording
//! toggle with its frame counter, and the numbered snapshot counter.

/// Whether frames are currently being appended to the output writer, plus
/// how many have been written so far.
#[derive(Debug, Default)]
pub struct RecordingSession {
    recording: bool,
    frames_written: u64,
}

impl RecordingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    /// Flips the recording state and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }

    /// Call once per frame appended to the writer.
    pub fn frame_written(&mut self) {
        self.frames_written += 1;
    }

    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// True once at least one frame made it to the writer; an untouched
    /// output file is deleted instead of kept.
    pub fn produced_output(&self) -> bool {
        self.frames_written > 0
    }

    /// Recorded duration at the writer's fixed frame rate.
    pub fn duration_secs(&self, fps: f64) -> f64 {
        if fps > 0.0 {
            self.frames_written as f64 / fps
        } else {
            0.0
        }
    }
}

/// Hands out `camera_snapshot_N.png` names, numbered from 1.
#[derive(Debug, Default)]
pub struct SnapshotCounter {
    taken: u32,
}

impl SnapshotCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_filename(&mut self) -> String {
        self.taken += 1;
        format!("camera_snapshot_{}.png", self.taken)
    }

    pub fn count(&self) -> u32 {
        self.taken
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_and_counts_only_while_on() {
        let mut session = RecordingSession::new();
        assert!(!session.is_recording());
        assert!(session.toggle());
        session.frame_written();
        session.frame_written();
        assert!(!session.toggle());
        assert!(session.toggle());
        session.frame_written();
        assert_eq!(session.frames_written(), 3);
        assert!(session.produced_output());
    }

    #[test]
    fn empty_session_produced_nothing() {
        let session = RecordingSession::new();
        assert!(!session.produced_output());
        assert_eq!(session.duration_secs(20.0), 0.0);
    }

    #[test]
    fn duration_uses_writer_fps() {
        let mut session = RecordingSession::new();
        session.toggle();
        for _ in 0..40 {
            session.frame_written();
        }
        assert_eq!(session.duration_secs(20.0), 2.0);
        assert_eq!(session.duration_secs(0.0), 0.0);
    }

    #[test]
    fn snapshots_number_from_one() {
        let mut counter = SnapshotCounter::new();
        assert_eq!(counter.next_filename(), "camera_snapshot_1.png");
        assert_eq!(counter.next_filename(), "camera_snapshot_2.png");
        assert_eq!(counter.count(), 2);
    }
}
