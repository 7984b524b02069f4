//! Camera states and the control texts each one presents

use crate::messages;

/// Three-state camera lifecycle
///
/// Off -> On (enable ok), Off -> Blocked (enable failed),
/// On -> Off (disable), Blocked -> On (enable ok)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraState {
    #[default]
    Off,
    On,
    Blocked,
}

impl CameraState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CameraState::Off => "off",
            CameraState::On => "on",
            CameraState::Blocked => "blocked",
        }
    }

    /// Snapshot is only possible with a live stream
    pub fn capture_enabled(&self) -> bool {
        matches!(self, CameraState::On)
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            CameraState::Off => messages::TOGGLE_TURN_ON,
            CameraState::On => messages::TOGGLE_TURN_OFF,
            CameraState::Blocked => messages::TOGGLE_BLOCKED,
        }
    }

    pub fn status_text(&self) -> &'static str {
        match self {
            CameraState::Off => messages::CAMERA_OFF,
            CameraState::On => messages::CAMERA_READY,
            CameraState::Blocked => messages::CAMERA_DENIED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_on_enables_capture() {
        assert!(CameraState::On.capture_enabled());
        assert!(!CameraState::Off.capture_enabled());
        assert!(!CameraState::Blocked.capture_enabled());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CameraState::default(), CameraState::Off);
        assert_eq!(CameraState::Off.toggle_label(), "Turn Camera On");
        assert_eq!(CameraState::On.toggle_label(), "Turn Camera Off");
        assert_eq!(CameraState::Blocked.toggle_label(), "Camera Blocked");
    }
}
