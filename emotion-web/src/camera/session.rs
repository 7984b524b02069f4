//! Camera session - owns the live stream handle and drives the controls
//!
//! The session never talks to the platform itself. Acquisition happens in
//! `dom::media`; the outcome is handed to `acquired` or `denied`, and every
//! transition is pushed to a `CameraControls` implementation.

use super::state::CameraState;
use crate::error::ClientError;

/// A live media stream whose tracks can be stopped
pub trait StreamHandle {
    /// Stop every track; returns how many were stopped
    fn stop_tracks(&self) -> usize;
}

/// Controls the camera lifecycle updates
pub trait CameraControls<S> {
    fn set_capture_enabled(&mut self, enabled: bool);
    /// Relabel the toggle (it stays visible in every state)
    fn set_toggle_label(&mut self, label: &str);
    fn show_camera_status(&mut self, text: &str);
    /// Bind the stream to the video surface, or detach with `None`
    fn attach_stream(&mut self, stream: Option<&S>);
}

/// What a toggle click should do given the current session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Enable,
    Disable,
}

/// Result of handing a freshly acquired stream to the session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acquisition {
    Attached,
    /// A stream was already held; the new one was stopped and dropped
    Surplus { stopped_tracks: usize },
}

/// The page's single camera session
pub struct CameraSession<S> {
    stream: Option<S>,
    state: CameraState,
}

impl<S> Default for CameraSession<S> {
    fn default() -> Self {
        Self {
            stream: None,
            state: CameraState::Off,
        }
    }
}

impl<S: StreamHandle> CameraSession<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some()
    }

    /// The live stream, or `CameraOff` when there is none
    pub fn require_stream(&self) -> Result<&S, ClientError> {
        self.stream.as_ref().ok_or(ClientError::CameraOff)
    }

    pub fn toggle_action(&self) -> ToggleAction {
        if self.stream.is_some() {
            ToggleAction::Disable
        } else {
            ToggleAction::Enable
        }
    }

    /// Initial control setup: capture disabled, toggle offers "on"
    pub fn reset_controls<C: CameraControls<S> + ?Sized>(&self, controls: &mut C) {
        controls.set_capture_enabled(self.state.capture_enabled());
        controls.set_toggle_label(self.state.toggle_label());
    }

    pub fn acquired<C: CameraControls<S> + ?Sized>(
        &mut self,
        stream: S,
        controls: &mut C,
    ) -> Acquisition {
        if self.stream.is_some() {
            let stopped_tracks = stream.stop_tracks();
            return Acquisition::Surplus { stopped_tracks };
        }

        controls.attach_stream(Some(&stream));
        self.stream = Some(stream);
        self.transition(CameraState::On, controls);
        Acquisition::Attached
    }

    /// Permission denied or no device
    pub fn denied<C: CameraControls<S> + ?Sized>(&mut self, controls: &mut C) {
        // A held stream stays usable if a later request fails
        if self.stream.is_some() {
            return;
        }
        self.transition(CameraState::Blocked, controls);
    }

    /// Stop all tracks and detach; returns how many tracks were stopped.
    /// Safe without a stream: the controls are still reset to Off.
    pub fn disable<C: CameraControls<S> + ?Sized>(&mut self, controls: &mut C) -> usize {
        let stopped = self
            .stream
            .take()
            .map(|stream| stream.stop_tracks())
            .unwrap_or(0);
        controls.attach_stream(None);
        self.transition(CameraState::Off, controls);
        stopped
    }

    fn transition<C: CameraControls<S> + ?Sized>(&mut self, next: CameraState, controls: &mut C) {
        self.state = next;
        controls.set_capture_enabled(next.capture_enabled());
        controls.set_toggle_label(next.toggle_label());
        controls.show_camera_status(next.status_text());
    }
}
