//! Snapshot precondition

use crate::camera::{CameraSession, StreamHandle};
use crate::render::ResultView;

/// True when a live stream is available. Otherwise writes the camera-off
/// status and the caller must not capture or send anything.
pub fn ensure_camera<S, V>(camera: &CameraSession<S>, view: &mut V) -> bool
where
    S: StreamHandle,
    V: ResultView + ?Sized,
{
    match camera.require_stream() {
        Ok(_) => true,
        Err(err) => {
            view.show_status(&err.to_string());
            false
        }
    }
}
