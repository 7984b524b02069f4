//! DOM module - page elements, media APIs and the DOM-backed views
//!
//! Re-exports only. All logic in submodules.

mod elements;
mod media;
mod view;

pub use elements::PageElements;
pub use media::{capture_frame, play, request_camera, snapshot_form};
pub use view::DomView;
