//! Camera module - live stream lifecycle (Off / On / Blocked)
//!
//! Re-exports only. All logic in submodules.

mod session;
mod state;

pub use session::{Acquisition, CameraControls, CameraSession, StreamHandle, ToggleAction};
pub use state::CameraState;
