//! Test doubles for the view and stream traits

use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::{CameraControls, StreamHandle};
use crate::render::{BreakdownLine, ResultView};

/// Stream whose tracks record whether they were stopped.
/// Clones share the same tracks, so a clone can watch a stream handed away.
#[derive(Clone)]
pub struct FakeStream {
    tracks: Rc<RefCell<Vec<bool>>>,
}

impl FakeStream {
    pub fn with_tracks(count: usize) -> Self {
        Self {
            tracks: Rc::new(RefCell::new(vec![false; count])),
        }
    }

    pub fn all_stopped(&self) -> bool {
        self.tracks.borrow().iter().all(|&stopped| stopped)
    }
}

impl StreamHandle for FakeStream {
    fn stop_tracks(&self) -> usize {
        let mut tracks = self.tracks.borrow_mut();
        tracks.iter_mut().for_each(|stopped| *stopped = true);
        tracks.len()
    }
}

#[derive(Default)]
pub struct RecordingControls {
    pub capture_enabled: Option<bool>,
    pub toggle_label: String,
    pub status: String,
    pub attached: bool,
    pub attach_calls: usize,
}

impl CameraControls<FakeStream> for RecordingControls {
    fn set_capture_enabled(&mut self, enabled: bool) {
        self.capture_enabled = Some(enabled);
    }

    fn set_toggle_label(&mut self, label: &str) {
        self.toggle_label = label.to_string();
    }

    fn show_camera_status(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn attach_stream(&mut self, stream: Option<&FakeStream>) {
        self.attached = stream.is_some();
        if stream.is_some() {
            self.attach_calls += 1;
        }
    }
}

#[derive(Default)]
pub struct RecordingView {
    pub status: String,
    pub busy: bool,
    pub badge: String,
    pub breakdown: Vec<String>,
    pub preview: Option<String>,
    pub preview_visible: bool,
}

impl ResultView for RecordingView {
    fn show_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.busy = false;
    }

    fn show_busy(&mut self, text: &str) {
        self.status = text.to_string();
        self.busy = true;
    }

    fn show_badge(&mut self, emoji: &str, label: &str) {
        self.badge = format!("{} {}", emoji, label);
    }

    fn clear_badge(&mut self) {
        self.badge.clear();
    }

    fn show_breakdown(&mut self, lines: &[BreakdownLine]) {
        self.breakdown = lines.iter().map(ToString::to_string).collect();
    }

    fn clear_breakdown(&mut self) {
        self.breakdown.clear();
    }

    fn show_preview(&mut self, src: &str) {
        self.preview = Some(src.to_string());
        self.preview_visible = true;
    }
}
